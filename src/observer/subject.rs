//! Ordered observer registry.

use crate::observer::error::{ObserverError, ObserverFailure, PublishError};
use crate::observer::handler::{FnObserver, Observer};
use crate::observer::policy::DeliveryPolicy;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use uuid::Uuid;

/// Handle returned by `subscribe`, used to unsubscribe later.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubscriptionId(Uuid);

impl SubscriptionId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

struct Subscription<E> {
    id: SubscriptionId,
    observer: Arc<dyn Observer<E>>,
}

impl<E> Clone for Subscription<E> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            observer: Arc::clone(&self.observer),
        }
    }
}

/// Owns an ordered list of observers and notifies them of events.
///
/// Publishing works on a snapshot of the list taken when `publish` starts.
/// The lock is released before any observer runs, so an observer may
/// subscribe or unsubscribe (itself included) while being notified; the
/// change applies from the next publish on.
///
/// # Example
///
/// ```rust
/// use signalbox::observer::{FnObserver, Subject};
/// use std::sync::Arc;
///
/// let subject: Subject<&str> = Subject::new();
/// let id = subject.subscribe(Arc::new(FnObserver::new("log", |event: &&str| {
///     println!("saw {event}");
///     Ok(())
/// })));
///
/// assert_eq!(subject.publish(&"x").unwrap(), 1);
/// assert!(subject.unsubscribe(id));
/// assert_eq!(subject.publish(&"y").unwrap(), 0);
/// ```
pub struct Subject<E> {
    subscriptions: Mutex<Vec<Subscription<E>>>,
    policy: DeliveryPolicy,
}

impl<E> Default for Subject<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for Subject<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subject")
            .field("subscribers", &self.len())
            .field("policy", &self.policy)
            .finish()
    }
}

impl<E> Subject<E> {
    /// Create an empty subject that isolates observer failures.
    pub fn new() -> Self {
        Self::with_policy(DeliveryPolicy::default())
    }

    pub fn with_policy(policy: DeliveryPolicy) -> Self {
        Self {
            subscriptions: Mutex::new(Vec::new()),
            policy,
        }
    }

    pub fn policy(&self) -> DeliveryPolicy {
        self.policy
    }

    // The list is never left half-updated, so a poisoned lock is still usable.
    fn subscriptions(&self) -> MutexGuard<'_, Vec<Subscription<E>>> {
        self.subscriptions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Append an observer. The same observer may be subscribed more than
    /// once and is then notified once per subscription.
    pub fn subscribe(&self, observer: Arc<dyn Observer<E>>) -> SubscriptionId {
        let id = SubscriptionId::new();
        tracing::debug!(subscription = %id, observer = observer.name(), "subscribe");
        self.subscriptions().push(Subscription { id, observer });
        id
    }

    /// Subscribe a closure under the given name.
    pub fn subscribe_fn<F>(&self, name: impl Into<String>, callback: F) -> SubscriptionId
    where
        F: Fn(&E) -> Result<(), ObserverError> + Send + Sync + 'static,
        E: 'static,
    {
        self.subscribe(Arc::new(FnObserver::new(name, callback)))
    }

    /// Remove a subscription. Returns `false` if it was not present.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscriptions = self.subscriptions();
        let Some(index) = subscriptions.iter().position(|s| s.id == id) else {
            tracing::debug!(subscription = %id, "unsubscribe of unknown subscription ignored");
            return false;
        };
        subscriptions.remove(index);
        tracing::debug!(subscription = %id, "unsubscribe");
        true
    }

    /// Remove the first subscription of this exact observer instance.
    ///
    /// Observers are matched by allocation, not by value. Returns `false`
    /// if the observer is not subscribed.
    pub fn unsubscribe_observer<O>(&self, observer: &Arc<O>) -> bool
    where
        O: Observer<E> + ?Sized,
    {
        let target = Arc::as_ptr(observer).cast::<()>();
        let mut subscriptions = self.subscriptions();
        let Some(index) = subscriptions
            .iter()
            .position(|s| Arc::as_ptr(&s.observer).cast::<()>() == target)
        else {
            return false;
        };
        let removed = subscriptions.remove(index);
        tracing::debug!(subscription = %removed.id, "unsubscribe");
        true
    }

    pub fn contains(&self, id: SubscriptionId) -> bool {
        self.subscriptions().iter().any(|s| s.id == id)
    }

    pub fn len(&self) -> usize {
        self.subscriptions().len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscriptions().is_empty()
    }

    /// Drop every subscription.
    pub fn clear(&self) {
        self.subscriptions().clear();
    }

    /// Notify every current subscriber of `event`, in subscription order.
    ///
    /// Returns the number of observers that received the event. Under
    /// `DeliveryPolicy::Isolate` a failing observer does not stop delivery
    /// and all failures are returned together once every observer has run.
    /// Under `DeliveryPolicy::FailFast` the first failure is returned and
    /// the remaining observers are skipped.
    pub fn publish(&self, event: &E) -> Result<usize, PublishError> {
        let snapshot: Vec<Subscription<E>> = self.subscriptions().clone();
        if snapshot.is_empty() {
            tracing::debug!("publish with no subscribers");
            return Ok(0);
        }

        let mut delivered = 0;
        let mut outcomes: Vec<Validation<(), NonEmptyVec<ObserverFailure>>> =
            Vec::with_capacity(snapshot.len());

        for subscription in &snapshot {
            let outcome = match subscription.observer.receive(event) {
                Ok(()) => {
                    tracing::trace!(subscription = %subscription.id, "delivered");
                    delivered += 1;
                    Validation::success(())
                }
                Err(source) => {
                    let failure = ObserverFailure {
                        subscription: subscription.id,
                        observer: subscription.observer.name().to_string(),
                        source,
                    };
                    tracing::warn!(error = %failure, "observer failed");
                    if self.policy == DeliveryPolicy::FailFast {
                        return Err(PublishError {
                            delivered,
                            failures: vec![failure],
                        });
                    }
                    Validation::fail(failure)
                }
            };
            outcomes.push(outcome);
        }

        tracing::debug!(subscribers = snapshot.len(), delivered, "publish");

        match Validation::all_vec(outcomes) {
            Validation::Success(_) => Ok(delivered),
            Validation::Failure(failures) => Err(PublishError {
                delivered,
                failures: failures.iter().cloned().collect(),
            }),
        }
    }
}
