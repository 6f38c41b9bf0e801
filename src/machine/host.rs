//! Host that owns the active state and delegates transitions to it.

use crate::core::{State, StateHistory};
use crate::machine::error::StateError;
use serde::{Deserialize, Serialize};

/// Settings for a state host.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostConfig {
    /// Maximum number of transitions kept in history. `None` keeps all.
    #[serde(default)]
    pub history_limit: Option<usize>,
}

/// Owns exactly one active state once initialized.
///
/// The host never decides the next state itself: `transition` asks the
/// active state for its successor and replaces it wholesale.
///
/// # Example
///
/// ```rust
/// use signalbox::{StateHost, TrafficLight};
///
/// let mut host = StateHost::new();
/// host.set_state(TrafficLight::Red);
///
/// host.transition().unwrap();
/// assert_eq!(host.report().unwrap(), "Green Light");
/// ```
#[derive(Clone, Debug)]
pub struct StateHost<S: State> {
    current: Option<S>,
    history: StateHistory<S>,
}

impl<S: State> Default for StateHost<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHost<S> {
    /// Create a host with no state and unbounded history.
    pub fn new() -> Self {
        Self::with_config(HostConfig::default())
    }

    /// Create a host with no state using the given settings.
    pub fn with_config(config: HostConfig) -> Self {
        let history = match config.history_limit {
            Some(limit) => StateHistory::bounded(limit),
            None => StateHistory::new(),
        };
        Self {
            current: None,
            history,
        }
    }

    /// Create a host already holding `initial`.
    pub fn with_state(initial: S) -> Self {
        let mut host = Self::new();
        host.set_state(initial);
        host
    }

    /// Assign the active state. Not recorded as a transition.
    pub fn set_state(&mut self, state: S) {
        tracing::debug!(state = state.name(), "state assigned");
        self.current = Some(state);
    }

    /// Move to the successor of the active state and return it.
    pub fn transition(&mut self) -> Result<&S, StateError> {
        let from = self.current.take().ok_or(StateError::UninitializedState)?;
        let to = from.next();
        tracing::debug!(from = from.name(), to = to.name(), "transition");
        self.history.record(from, to.clone());
        Ok(&*self.current.insert(to))
    }

    /// Display label of the active state.
    pub fn report(&self) -> Result<&str, StateError> {
        self.current
            .as_ref()
            .map(|state| state.label())
            .ok_or(StateError::UninitializedState)
    }

    /// Perform `steps` transitions, collecting the label reported after each.
    pub fn advance(&mut self, steps: usize) -> Result<Vec<String>, StateError> {
        let mut labels = Vec::with_capacity(steps);
        for _ in 0..steps {
            labels.push(self.transition()?.label().to_string());
        }
        Ok(labels)
    }

    pub fn current(&self) -> Option<&S> {
        self.current.as_ref()
    }

    pub fn is_initialized(&self) -> bool {
        self.current.is_some()
    }

    pub fn history(&self) -> &StateHistory<S> {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traffic::TrafficLight;

    #[test]
    fn report_before_set_is_uninitialized() {
        let host: StateHost<TrafficLight> = StateHost::new();
        assert_eq!(host.report(), Err(StateError::UninitializedState));
        assert!(!host.is_initialized());
    }

    #[test]
    fn transition_before_set_is_uninitialized() {
        let mut host: StateHost<TrafficLight> = StateHost::new();
        assert_eq!(host.transition(), Err(StateError::UninitializedState));
        assert!(host.current().is_none());
        assert!(host.history().is_empty());
    }

    #[test]
    fn advance_before_set_is_uninitialized() {
        let mut host: StateHost<TrafficLight> = StateHost::new();
        assert_eq!(host.advance(2), Err(StateError::UninitializedState));
    }

    #[test]
    fn report_has_no_side_effects() {
        let host = StateHost::with_state(TrafficLight::Orange);
        assert_eq!(host.report(), Ok("Orange Light"));
        assert_eq!(host.report(), Ok("Orange Light"));
        assert!(host.history().is_empty());
    }

    #[test]
    fn transition_delegates_to_state() {
        let mut host = StateHost::with_state(TrafficLight::Red);
        assert_eq!(host.transition(), Ok(&TrafficLight::Green));
        assert_eq!(host.transition(), Ok(&TrafficLight::Orange));
        assert_eq!(host.transition(), Ok(&TrafficLight::Red));
        assert_eq!(host.current(), Some(&TrafficLight::Red));
    }

    #[test]
    fn set_state_replaces_without_recording() {
        let mut host = StateHost::with_state(TrafficLight::Red);
        host.set_state(TrafficLight::Orange);

        assert_eq!(host.current(), Some(&TrafficLight::Orange));
        assert!(host.history().is_empty());
    }

    #[test]
    fn advance_reports_each_step() {
        let mut host = StateHost::with_state(TrafficLight::Red);
        let labels = host.advance(4).unwrap();

        assert_eq!(
            labels,
            vec!["Green Light", "Orange Light", "Red Light", "Green Light"]
        );
        assert_eq!(host.history().len(), 4);
    }

    #[test]
    fn history_follows_transitions() {
        let mut host = StateHost::with_state(TrafficLight::Green);
        host.advance(2).unwrap();

        let path = host.history().path();
        assert_eq!(
            path,
            vec![&TrafficLight::Green, &TrafficLight::Orange, &TrafficLight::Red]
        );
    }

    #[test]
    fn config_bounds_history() {
        let mut host = StateHost::with_config(HostConfig {
            history_limit: Some(2),
        });
        host.set_state(TrafficLight::Red);
        host.advance(5).unwrap();

        assert_eq!(host.history().len(), 2);
        assert_eq!(host.history().total_recorded(), 5);
    }

    #[test]
    fn config_deserializes_with_defaults() {
        let config: HostConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, HostConfig::default());

        let config: HostConfig = serde_json::from_str(r#"{"history_limit":8}"#).unwrap();
        assert_eq!(config.history_limit, Some(8));
    }
}
