//! The observer capability and a closure adapter for it.

use crate::observer::error::ObserverError;

/// Something that wants to hear about events of type `E`.
///
/// # Example
///
/// ```rust
/// use signalbox::observer::{Observer, ObserverError};
///
/// struct Inbox;
///
/// impl Observer<String> for Inbox {
///     fn name(&self) -> &str {
///         "inbox"
///     }
///
///     fn receive(&self, event: &String) -> Result<(), ObserverError> {
///         if event.is_empty() {
///             return Err(ObserverError::Rejected("empty event".to_string()));
///         }
///         Ok(())
///     }
/// }
///
/// assert!(Inbox.receive(&"hello".to_string()).is_ok());
/// ```
pub trait Observer<E>: Send + Sync {
    /// Name used when reporting a failed delivery.
    ///
    /// Default implementation returns the implementing type's name.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// Handle one event.
    fn receive(&self, event: &E) -> Result<(), ObserverError>;
}

/// Observer backed by a closure.
///
/// ```rust
/// use signalbox::observer::{FnObserver, Observer};
///
/// let printer = FnObserver::new("printer", |event: &u32| {
///     println!("got {event}");
///     Ok(())
/// });
///
/// assert_eq!(printer.name(), "printer");
/// assert!(printer.receive(&7).is_ok());
/// ```
pub struct FnObserver<F> {
    name: String,
    callback: F,
}

impl<F> FnObserver<F> {
    pub fn new(name: impl Into<String>, callback: F) -> Self {
        Self {
            name: name.into(),
            callback,
        }
    }
}

impl<E, F> Observer<E> for FnObserver<F>
where
    F: Fn(&E) -> Result<(), ObserverError> + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn receive(&self, event: &E) -> Result<(), ObserverError> {
        (self.callback)(event)
    }
}
