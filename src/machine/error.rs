//! Errors raised by a state host.

use thiserror::Error;

/// Errors that can occur when driving a state host.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StateError {
    #[error("No state has been set. Call .set_state(state) before driving the host")]
    UninitializedState,
}
