//! Core state types and logic.
//!
//! This module contains the pure part of the state machine:
//! - State definitions via the `State` trait
//! - Cycle helpers that walk successors without a host
//! - Transition history tracking

mod cycle;
mod history;
mod state;

pub use cycle::{cycle_len, walk};
pub use history::{StateHistory, StateTransition};
pub use state::State;
