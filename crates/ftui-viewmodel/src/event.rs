#![forbid(unsafe_code)]

//! Property change events and the multicast listener list.
//!
//! # Design
//!
//! [`PropertyChanged<S>`] is an ordered list of [`PropertyChangedHandler<S>`]
//! stored behind `Rc<RefCell<..>>`. Sharing the list lets a
//! [`SuspendPropertyChanged`] guard re-register its listener without
//! borrowing the subject, so the subject stays mutable while a listener is
//! suspended.
//!
//! Handlers compare by identity of the wrapped callback: cloning a handler
//! yields the *same* listener, wrapping the same closure twice yields two
//! different listeners.
//!
//! # Invariants
//!
//! 1. Listeners are invoked in registration order.
//! 2. No de-duplication: a handler registered twice is invoked twice.
//! 3. [`raise`](PropertyChanged::raise) works on a snapshot, so listeners may
//!    subscribe or unsubscribe during delivery; the change applies to the
//!    next notification.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use tracing::{debug, trace};

use crate::suspend::SuspendPropertyChanged;

/// Payload of a property change notification: the property name only.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PropertyChangedEventArgs {
    property_name: String,
}

impl PropertyChangedEventArgs {
    /// Create event args for the named property.
    #[must_use]
    pub fn new(property_name: impl Into<String>) -> Self {
        Self {
            property_name: property_name.into(),
        }
    }

    /// Name of the property that changed.
    #[must_use]
    pub fn property_name(&self) -> &str {
        &self.property_name
    }
}

impl fmt::Display for PropertyChangedEventArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.property_name)
    }
}

type Callback<S> = Rc<dyn Fn(&S, &PropertyChangedEventArgs)>;

/// A listener callback for subjects of type `S`.
///
/// Cheap to clone; clones are the same listener for
/// [`unsubscribe`](PropertyChanged::unsubscribe) and
/// [`suspend`](PropertyChanged::suspend).
pub struct PropertyChangedHandler<S> {
    callback: Callback<S>,
}

impl<S> PropertyChangedHandler<S> {
    /// Wrap a callback as a new, distinct listener.
    #[must_use]
    pub fn new(callback: impl Fn(&S, &PropertyChangedEventArgs) + 'static) -> Self {
        Self {
            callback: Rc::new(callback),
        }
    }

    /// Invoke the callback.
    pub fn call(&self, sender: &S, args: &PropertyChangedEventArgs) {
        (self.callback)(sender, args);
    }
}

impl<S> Clone for PropertyChangedHandler<S> {
    fn clone(&self) -> Self {
        Self {
            callback: Rc::clone(&self.callback),
        }
    }
}

impl<S> PartialEq for PropertyChangedHandler<S> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.callback, &other.callback)
    }
}

impl<S> Eq for PropertyChangedHandler<S> {}

impl<S> fmt::Debug for PropertyChangedHandler<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyChangedHandler")
            .field("callback", &Rc::as_ptr(&self.callback).cast::<()>())
            .finish()
    }
}

pub(crate) type HandlerList<S> = RefCell<Vec<PropertyChangedHandler<S>>>;

/// Ordered multicast list of property change listeners.
pub struct PropertyChanged<S> {
    handlers: Rc<HandlerList<S>>,
}

impl<S> Default for PropertyChanged<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> fmt::Debug for PropertyChanged<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyChanged")
            .field("listener_count", &self.len())
            .finish()
    }
}

impl<S> PropertyChanged<S> {
    /// Create an empty listener list.
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Append a listener. The same listener may be added more than once.
    pub fn subscribe(&self, handler: PropertyChangedHandler<S>) {
        self.handlers.borrow_mut().push(handler);
    }

    /// Remove the most recently added registration of `handler`.
    ///
    /// Returns `false` if the handler was not registered.
    pub fn unsubscribe(&self, handler: &PropertyChangedHandler<S>) -> bool {
        let mut handlers = self.handlers.borrow_mut();
        match handlers.iter().rposition(|h| h == handler) {
            Some(index) => {
                handlers.remove(index);
                true
            }
            None => false,
        }
    }

    /// Detach the first registration of `handler` until the returned guard
    /// is released.
    ///
    /// Suspending a handler that is not registered is allowed; releasing the
    /// guard still appends it.
    #[must_use = "dropping the guard immediately resumes the listener"]
    pub fn suspend(&self, handler: &PropertyChangedHandler<S>) -> SuspendPropertyChanged
    where
        S: 'static,
    {
        let removed = {
            let mut handlers = self.handlers.borrow_mut();
            match handlers.iter().position(|h| h == handler) {
                Some(index) => {
                    handlers.remove(index);
                    true
                }
                None => false,
            }
        };
        debug!(removed, "property change listener suspended");

        let list: Weak<HandlerList<S>> = Rc::downgrade(&self.handlers);
        let handler = handler.clone();
        SuspendPropertyChanged::new(move || match list.upgrade() {
            Some(handlers) => {
                handlers.borrow_mut().push(handler.clone());
                debug!("property change listener resumed");
            }
            None => trace!("resume skipped: subject already dropped"),
        })
    }

    /// Invoke every registered listener with `(sender, args)`.
    pub fn raise(&self, sender: &S, args: &PropertyChangedEventArgs) {
        let snapshot: Vec<PropertyChangedHandler<S>> = self.handlers.borrow().clone();
        trace!(
            property = args.property_name(),
            listeners = snapshot.len(),
            "property changed"
        );
        for handler in &snapshot {
            handler.call(sender, args);
        }
    }

    /// Number of registrations (duplicates counted).
    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.borrow().len()
    }

    /// `true` when nothing is listening.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.borrow().is_empty()
    }

    /// `true` if `handler` is registered at least once.
    #[must_use]
    pub fn contains(&self, handler: &PropertyChangedHandler<S>) -> bool {
        self.handlers.borrow().iter().any(|h| h == handler)
    }
}
