//! What a subject does when an observer fails.

use serde::{Deserialize, Serialize};

/// Strategy for handling observer failures during publish
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryPolicy {
    /// Keep notifying the remaining observers and report every failure at the end
    #[default]
    Isolate,

    /// Stop at the first failure, skipping the remaining observers
    FailFast,
}
