//! State host: the stateful shell around the pure state cycle.
//!
//! The host holds the active state, asks it for its successor on every
//! transition and records what happened in a `StateHistory`.

mod error;
mod host;

pub use error::StateError;
pub use host::{HostConfig, StateHost};
