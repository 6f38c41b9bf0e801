//! Signalbox: a closed-cycle state host and an ordered observer registry
//!
//! The crate holds two independent pieces that each carry lifecycle and
//! ordering rules:
//!
//! - **State cycle**: a closed set of states where every state knows its
//!   successor. A `StateHost` owns the active state and delegates each
//!   transition to it.
//! - **Observer registry**: a `Subject` notifies its observers of every
//!   published event, synchronously and in subscription order.
//!
//! Neither piece depends on the other.
//!
//! # Core Concepts
//!
//! - **State**: Type-safe state representation via the `State` trait
//! - **History**: Record of the transitions a host went through
//! - **Subject**: Ordered observer list with snapshot-at-publish semantics
//!
//! # Example
//!
//! ```rust
//! use signalbox::{StateError, StateHost, TrafficLight};
//!
//! let mut light: StateHost<TrafficLight> = StateHost::new();
//! assert_eq!(light.report(), Err(StateError::UninitializedState));
//!
//! light.set_state(TrafficLight::Red);
//! let labels = light.advance(3).unwrap();
//! assert_eq!(labels, ["Green Light", "Orange Light", "Red Light"]);
//! ```

pub mod core;
pub mod machine;
mod macros;
pub mod observer;
pub mod traffic;

// Re-export commonly used types
pub use crate::core::{State, StateHistory, StateTransition};
pub use machine::{HostConfig, StateError, StateHost};
pub use observer::{DeliveryPolicy, Observer, PublishError, Subject, SubscriptionId};
pub use traffic::TrafficLight;
