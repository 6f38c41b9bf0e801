//! Core State trait for cyclic state machine states.
//!
//! Every state knows two things about itself: how to display itself and
//! which state follows it. Both are pure, so a state value never changes
//! after it is created.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for states in a closed, cyclic state machine.
///
/// All methods are pure - no side effects. The successor of a state is a
/// constant of the variant, which makes the transition table total: there
/// is no state without a successor and no error case.
///
/// # Required Traits
///
/// - `Clone`: the host hands out copies for history tracking
/// - `PartialEq`: states must be comparable for cycle checks
/// - `Debug`: states must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: history is serializable
///
/// # Example
///
/// ```rust
/// use signalbox::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Shift {
///     Morning,
///     Evening,
///     Night,
/// }
///
/// impl State for Shift {
///     fn name(&self) -> &str {
///         match self {
///             Self::Morning => "Morning",
///             Self::Evening => "Evening",
///             Self::Night => "Night",
///         }
///     }
///
///     fn next(&self) -> Self {
///         match self {
///             Self::Morning => Self::Evening,
///             Self::Evening => Self::Night,
///             Self::Night => Self::Morning,
///         }
///     }
/// }
///
/// assert_eq!(Shift::Night.next(), Shift::Morning);
/// assert_eq!(Shift::Night.label(), "Night");
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Short identifier used in logs.
    fn name(&self) -> &str;

    /// Human readable label returned by `StateHost::report`.
    ///
    /// Default implementation returns `name()`.
    fn label(&self) -> &str {
        self.name()
    }

    /// The state that follows this one.
    fn next(&self) -> Self;
}
