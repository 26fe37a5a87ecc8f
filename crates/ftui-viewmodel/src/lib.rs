#![forbid(unsafe_code)]

//! View-model primitives: property change notification for FrankenTUI.
//!
//! # Role in FrankenTUI
//! `ftui-viewmodel` is the binding layer between application state and the
//! widgets that display it. A view-model implements [`ObservableObject`],
//! routes its setters through [`ObservableObject::set`], and widgets listen
//! for the names of properties that changed.
//!
//! # Primary responsibilities
//! - **ObservableObject**: compare-then-store setters that notify listeners.
//! - **PropertyChanged**: ordered multicast list of listener callbacks.
//! - **SuspendPropertyChanged**: RAII guard that detaches one listener while
//!   a batch of mutations runs.
//! - **SlotEq**: change detection; value equality for plain data, identity
//!   for shared pointers.
//!
//! # Invariants
//!
//! 1. Setting a property to a value that [`SlotEq`] considers equal emits
//!    nothing.
//! 2. On change, the primary property is notified first, then each
//!    additional property in the order given.
//! 3. Listeners are invoked in registration order.
//! 4. A released suspension guard re-appends its listener at the end of
//!    the list.
//!
//! Everything is single-threaded (`Rc`/`RefCell`); none of the types are
//! `Send`.

pub mod event;
pub mod object;
pub mod slot;
pub mod suspend;

#[cfg(feature = "tracing-json")]
pub mod logging;

pub use event::{PropertyChanged, PropertyChangedEventArgs, PropertyChangedHandler};
pub use object::{NO_ADDITIONAL_PROPERTIES, ObservableObject, raise_property_changed};
pub use slot::{ByValue, SlotEq};
pub use suspend::SuspendPropertyChanged;
