#![forbid(unsafe_code)]

//! The [`ObservableObject`] trait: change-notifying property setters.
//!
//! Implementors own their property slots as ordinary fields and a
//! [`PropertyChanged`] list. Setters route writes through
//! [`ObservableObject::set`], which compares, stores and notifies:
//!
//! ```text
//! set(slot, value, "X", ["B"])
//!   slot == value ? ──yes──► return false (no notification)
//!        │ no
//!        ▼
//!   *slot = value
//!   on_property_changed("X")
//!   on_property_changed("B")
//!   return true
//! ```
//!
//! # Overriding `on_property_changed`
//!
//! The default implementation calls [`raise_property_changed`]. An override
//! that adds side effects must still call it, otherwise listeners silently
//! stop receiving notifications.

use tracing::trace;

use crate::event::{PropertyChanged, PropertyChangedEventArgs, PropertyChangedHandler};
use crate::slot::SlotEq;
use crate::suspend::SuspendPropertyChanged;

/// Explicit "no additional properties" argument for [`ObservableObject::set`].
pub const NO_ADDITIONAL_PROPERTIES: Option<[&str; 0]> = None;

/// Deliver a change notification for `property_name` to every listener
/// currently registered on `subject`.
pub fn raise_property_changed<S: ObservableObject>(subject: &S, property_name: &str) {
    let args = PropertyChangedEventArgs::new(property_name);
    subject.property_changed().raise(subject, &args);
}

/// A view-model whose property writes notify registered listeners.
///
/// # Example
///
/// ```
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use ftui_viewmodel::{ObservableObject, PropertyChanged, PropertyChangedHandler};
///
/// #[derive(Default)]
/// struct Counter {
///     value: i32,
///     changed: PropertyChanged<Self>,
/// }
///
/// impl ObservableObject for Counter {
///     fn property_changed(&self) -> &PropertyChanged<Self> {
///         &self.changed
///     }
/// }
///
/// impl Counter {
///     fn set_value(&mut self, value: i32) {
///         self.set(|s| &mut s.value, value, "Value", Some(["Label"]));
///     }
/// }
///
/// let seen = Rc::new(RefCell::new(Vec::new()));
/// let sink = Rc::clone(&seen);
/// let mut counter = Counter::default();
/// counter.subscribe(PropertyChangedHandler::new(move |_, e| {
///     sink.borrow_mut().push(e.property_name().to_owned());
/// }));
///
/// counter.set_value(0);
/// counter.set_value(1);
/// assert_eq!(*seen.borrow(), vec!["Value", "Label"]);
/// ```
pub trait ObservableObject: Sized {
    /// The listener list owned by this object.
    fn property_changed(&self) -> &PropertyChanged<Self>;

    /// Hook invoked once per notification.
    ///
    /// Overrides must call [`raise_property_changed`].
    fn on_property_changed(&mut self, property_name: &str) {
        raise_property_changed(self, property_name);
    }

    /// Store `new_value` into the slot selected by `slot` and notify
    /// `property_name` if the value changed.
    ///
    /// Returns `true` when the slot was overwritten.
    fn set_property<T: SlotEq>(
        &mut self,
        property_name: &str,
        slot: impl FnOnce(&mut Self) -> &mut T,
        new_value: T,
    ) -> bool {
        let storage = slot(&mut *self);
        if storage.slot_eq(&new_value) {
            trace!(property = property_name, "set skipped: value unchanged");
            return false;
        }
        *storage = new_value;
        self.on_property_changed(property_name);
        true
    }

    /// Like [`set_property`](Self::set_property), and on change also notify
    /// each name in `additional_property_names`, in order.
    ///
    /// `None` notifies nothing extra. Nothing at all is notified when the
    /// value is unchanged.
    fn set<T, I>(
        &mut self,
        slot: impl FnOnce(&mut Self) -> &mut T,
        new_value: T,
        property_name: &str,
        additional_property_names: Option<I>,
    ) -> bool
    where
        T: SlotEq,
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        if !self.set_property(property_name, slot, new_value) {
            return false;
        }
        for name in additional_property_names.into_iter().flatten() {
            self.on_property_changed(name.as_ref());
        }
        true
    }

    /// Register a listener. Duplicates are allowed.
    fn subscribe(&self, handler: PropertyChangedHandler<Self>) {
        self.property_changed().subscribe(handler);
    }

    /// Remove the most recent registration of `handler`.
    fn unsubscribe(&self, handler: &PropertyChangedHandler<Self>) -> bool {
        self.property_changed().unsubscribe(handler)
    }

    /// Detach `handler` until the returned guard is released or dropped.
    fn suspend_property_changed(
        &self,
        handler: &PropertyChangedHandler<Self>,
    ) -> SuspendPropertyChanged
    where
        Self: 'static,
    {
        self.property_changed().suspend(handler)
    }

    /// Run `f` with `handler` detached; it is re-attached afterwards, also
    /// when `f` panics.
    fn suspended<R>(
        &mut self,
        handler: &PropertyChangedHandler<Self>,
        f: impl FnOnce(&mut Self) -> R,
    ) -> R
    where
        Self: 'static,
    {
        let _guard = self.suspend_property_changed(handler);
        f(self)
    }
}
