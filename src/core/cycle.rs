//! Pure helpers for walking a state cycle without a host.

use super::state::State;

/// States reached by applying `next` `steps` times, start excluded.
///
/// ```rust
/// use signalbox::core::walk;
/// use signalbox::TrafficLight;
///
/// let states = walk(&TrafficLight::Red, 3);
/// assert_eq!(
///     states,
///     vec![TrafficLight::Green, TrafficLight::Orange, TrafficLight::Red]
/// );
/// ```
pub fn walk<S: State>(start: &S, steps: usize) -> Vec<S> {
    let mut states = Vec::with_capacity(steps);
    let mut current = start.clone();
    for _ in 0..steps {
        current = current.next();
        states.push(current.clone());
    }
    states
}

/// Number of `next` applications needed to come back to `start`.
///
/// Returns `None` if `start` is not reached again within `max` steps,
/// which happens when `start` lies on a tail leading into a smaller loop.
pub fn cycle_len<S: State>(start: &S, max: usize) -> Option<usize> {
    let mut current = start.clone();
    for steps in 1..=max {
        current = current.next();
        if current == *start {
            return Some(steps);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum Lane {
        Left,
        Middle,
        Right,
    }

    impl State for Lane {
        fn name(&self) -> &str {
            match self {
                Self::Left => "Left",
                Self::Middle => "Middle",
                Self::Right => "Right",
            }
        }

        fn next(&self) -> Self {
            match self {
                Self::Left => Self::Middle,
                Self::Middle => Self::Right,
                Self::Right => Self::Left,
            }
        }
    }

    // Boot leads into a two-state loop and is never revisited.
    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum Daemon {
        Boot,
        Idle,
        Busy,
    }

    impl State for Daemon {
        fn name(&self) -> &str {
            match self {
                Self::Boot => "Boot",
                Self::Idle => "Idle",
                Self::Busy => "Busy",
            }
        }

        fn next(&self) -> Self {
            match self {
                Self::Boot | Self::Busy => Self::Idle,
                Self::Idle => Self::Busy,
            }
        }
    }

    #[test]
    fn walk_zero_steps_is_empty() {
        assert!(walk(&Lane::Left, 0).is_empty());
    }

    #[test]
    fn walk_wraps_around() {
        let states = walk(&Lane::Middle, 4);
        assert_eq!(
            states,
            vec![Lane::Right, Lane::Left, Lane::Middle, Lane::Right]
        );
    }

    #[test]
    fn cycle_len_counts_variants_in_loop() {
        assert_eq!(cycle_len(&Lane::Left, 10), Some(3));
        assert_eq!(cycle_len(&Lane::Right, 10), Some(3));
        assert_eq!(cycle_len(&Daemon::Idle, 10), Some(2));
    }

    #[test]
    fn cycle_len_respects_max() {
        assert_eq!(cycle_len(&Lane::Left, 2), None);
    }

    #[test]
    fn cycle_len_is_none_for_tail_states() {
        assert_eq!(cycle_len(&Daemon::Boot, 10), None);
    }
}
