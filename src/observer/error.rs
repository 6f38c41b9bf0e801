//! Observer failures and publish reports.

use crate::observer::subject::SubscriptionId;
use thiserror::Error;

/// Error an observer returns from `receive`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ObserverError {
    #[error("Event rejected: {0}")]
    Rejected(String),

    #[error("Observer '{observer}' is unavailable")]
    Unavailable { observer: String },
}

/// One failed delivery during a publish.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Observer '{observer}' (subscription {subscription}) failed: {source}")]
pub struct ObserverFailure {
    pub subscription: SubscriptionId,
    pub observer: String,
    pub source: ObserverError,
}

/// Aggregate report of a publish in which at least one observer failed.
///
/// Failures are listed in subscription order.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{count} observer(s) failed during publish ({delivered} delivered)", count = .failures.len())]
pub struct PublishError {
    /// Observers that received the event without error
    pub delivered: usize,
    pub failures: Vec<ObserverFailure>,
}

impl PublishError {
    /// Subscriptions whose observer failed, in subscription order.
    pub fn failed_subscriptions(&self) -> impl Iterator<Item = SubscriptionId> + '_ {
        self.failures.iter().map(|failure| failure.subscription)
    }
}
