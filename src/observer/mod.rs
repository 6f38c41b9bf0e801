//! Subject/observer registry.
//!
//! A `Subject` keeps observers in subscription order and hands every
//! published event to each of them synchronously.
//!
//! # Failure handling
//!
//! Failures are accumulated rather than short-circuited by default: one
//! broken observer never hides an event from the others. Every failure of a
//! publish is collected and returned together in a `PublishError`.
//!
//! ```rust
//! use signalbox::observer::{ObserverError, Subject};
//!
//! let subject: Subject<u8> = Subject::new();
//! subject.subscribe_fn("grumpy", |_| Err(ObserverError::Rejected("no".into())));
//! subject.subscribe_fn("happy", |_| Ok(()));
//!
//! let err = subject.publish(&1).unwrap_err();
//! assert_eq!(err.delivered, 1);
//! assert_eq!(err.failures.len(), 1);
//! ```

mod error;
mod handler;
mod policy;
mod subject;

pub use error::{ObserverError, ObserverFailure, PublishError};
pub use handler::{FnObserver, Observer};
pub use policy::DeliveryPolicy;
pub use subject::{Subject, SubscriptionId};
