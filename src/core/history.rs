//! Transition history kept by a state host.
//!
//! History is append-only. It may be bounded, in which case the oldest
//! entries are evicted first while sequence numbers keep counting.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// Record of a single state transition.
///
/// # Example
///
/// ```rust
/// use signalbox::core::StateTransition;
/// use signalbox::TrafficLight;
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: TrafficLight::Red,
///     to: TrafficLight::Green,
///     timestamp: Utc::now(),
///     sequence: 1,
/// };
/// assert_eq!(transition.sequence, 1);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state being transitioned from
    pub from: S,
    /// The state being transitioned to
    pub to: S,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
    /// 1-based position of this transition in the host's lifetime
    pub sequence: u64,
}

/// Ordered history of state transitions.
///
/// # Example
///
/// ```rust
/// use signalbox::core::StateHistory;
/// use signalbox::TrafficLight;
///
/// let mut history = StateHistory::new();
/// history.record(TrafficLight::Red, TrafficLight::Green);
/// history.record(TrafficLight::Green, TrafficLight::Orange);
///
/// let path = history.path();
/// assert_eq!(path.len(), 3); // Red -> Green -> Orange
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "", from = "RawHistory<S>")]
pub struct StateHistory<S: State> {
    transitions: VecDeque<StateTransition<S>>,
    limit: Option<usize>,
    recorded: u64,
}

/// Wire shape of a history before its limit and counter are enforced.
#[derive(Deserialize)]
#[serde(bound = "")]
struct RawHistory<S: State> {
    transitions: VecDeque<StateTransition<S>>,
    limit: Option<usize>,
    recorded: u64,
}

impl<S: State> From<RawHistory<S>> for StateHistory<S> {
    fn from(raw: RawHistory<S>) -> Self {
        let RawHistory {
            mut transitions,
            limit,
            recorded,
        } = raw;
        let last_sequence = transitions.back().map_or(0, |t| t.sequence);
        let recorded = recorded
            .max(last_sequence)
            .max(transitions.len() as u64);

        if let Some(limit) = limit {
            while transitions.len() > limit {
                transitions.pop_front();
            }
        }

        Self {
            transitions,
            limit,
            recorded,
        }
    }
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create a new, unbounded history.
    pub fn new() -> Self {
        Self {
            transitions: VecDeque::new(),
            limit: None,
            recorded: 0,
        }
    }

    /// Create a history that retains at most `limit` transitions.
    ///
    /// A limit of zero keeps counting transitions but stores none.
    ///
    /// ```rust
    /// use signalbox::core::StateHistory;
    /// use signalbox::TrafficLight;
    ///
    /// let mut history = StateHistory::bounded(1);
    /// history.record(TrafficLight::Red, TrafficLight::Green);
    /// history.record(TrafficLight::Green, TrafficLight::Orange);
    ///
    /// assert_eq!(history.len(), 1);
    /// assert_eq!(history.total_recorded(), 2);
    /// ```
    pub fn bounded(limit: usize) -> Self {
        Self {
            transitions: VecDeque::with_capacity(limit),
            limit: Some(limit),
            recorded: 0,
        }
    }

    /// Record a transition stamped with the current time.
    ///
    /// Returns the sequence number assigned to it.
    pub fn record(&mut self, from: S, to: S) -> u64 {
        self.recorded += 1;
        let transition = StateTransition {
            from,
            to,
            timestamp: Utc::now(),
            sequence: self.recorded,
        };

        match self.limit {
            Some(0) => {}
            Some(limit) => {
                while self.transitions.len() >= limit {
                    self.transitions.pop_front();
                }
                self.transitions.push_back(transition);
            }
            None => self.transitions.push_back(transition),
        }

        self.recorded
    }

    /// Path of states traversed by the retained transitions.
    ///
    /// Returns the `from` state of the oldest retained transition, then
    /// the `to` state of each transition.
    pub fn path(&self) -> Vec<&S> {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(first) = self.transitions.front() {
            path.push(&first.from);
        }
        path.extend(self.transitions.iter().map(|t| &t.to));
        path
    }

    /// Time between the oldest and newest retained transitions.
    ///
    /// Returns `None` if nothing is retained.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.transitions.front()?, self.transitions.back()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    /// Retained transitions, oldest first.
    pub fn transitions(&self) -> impl Iterator<Item = &StateTransition<S>> {
        self.transitions.iter()
    }

    /// Most recent transition, if any is retained.
    pub fn last(&self) -> Option<&StateTransition<S>> {
        self.transitions.back()
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    /// Transitions recorded over the history's lifetime, evicted ones included.
    pub fn total_recorded(&self) -> u64 {
        self.recorded
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }
}
