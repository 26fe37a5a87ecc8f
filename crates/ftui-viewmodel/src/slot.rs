#![forbid(unsafe_code)]

//! Change detection for property slots.
//!
//! A *slot* is the backing field of one observable property. Before a
//! setter overwrites a slot it asks [`SlotEq::slot_eq`] whether the candidate
//! value is actually different; only a difference produces a notification.
//!
//! # Rules
//!
//! | Slot type                         | Equal when                         |
//! |-----------------------------------|------------------------------------|
//! | `Option<T>`                       | both `None`, or inner values equal |
//! | value types (`i32`, `String`, ..) | `a == b`                           |
//! | `f32`, `f64`                      | `a == b`, or both NaN              |
//! | `Vec<T>`, `[T; N]`, tuples, `Box` | element-wise `slot_eq`             |
//! | [`ByValue<T>`]                    | `a == b` for any `PartialEq` type  |
//! | `Rc<T>`, `Arc<T>`, `&T`           | same allocation (`ptr_eq`)         |
//!
//! Shared pointers are compared by identity, not content: replacing an
//! `Rc<str>` with a freshly allocated `Rc<str>` holding the same text counts
//! as a change. Callers that want content comparison store an owned value
//! (`String`) instead.
//!
//! Types defined in the caller's crate opt in with
//! [`value_slot!`](crate::value_slot). Foreign types (other crates' structs,
//! `HashMap`, ..) go through the [`ByValue`] wrapper instead, since the
//! orphan rule forbids implementing [`SlotEq`] for them downstream.

use std::ops::{Deref, DerefMut};
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

/// Equality used by [`ObservableObject::set`](crate::ObservableObject::set)
/// to decide whether a slot changed.
pub trait SlotEq {
    /// Returns `true` when replacing `self` with `other` is not a change.
    fn slot_eq(&self, other: &Self) -> bool;
}

/// Implement [`SlotEq`] with value equality (`PartialEq`) for one or more
/// types.
///
/// Only usable on types defined in the invoking crate. Wrap foreign types in
/// [`ByValue`](crate::ByValue) instead.
///
/// ```
/// use ftui_viewmodel::{SlotEq, value_slot};
///
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// value_slot!(Point);
///
/// assert!(Point { x: 1, y: 2 }.slot_eq(&Point { x: 1, y: 2 }));
/// ```
#[macro_export]
macro_rules! value_slot {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::SlotEq for $ty {
                #[inline]
                fn slot_eq(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )+
    };
}

value_slot!(
    (),
    bool,
    char,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    String,
    Duration,
);

macro_rules! float_slot {
    ($($ty:ty),+) => {
        $(
            impl SlotEq for $ty {
                #[inline]
                fn slot_eq(&self, other: &Self) -> bool {
                    self == other || (self.is_nan() && other.is_nan())
                }
            }
        )+
    };
}

float_slot!(f32, f64);

impl SlotEq for str {
    #[inline]
    fn slot_eq(&self, other: &Self) -> bool {
        self == other
    }
}

impl<T: SlotEq> SlotEq for [T] {
    fn slot_eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other).all(|(a, b)| a.slot_eq(b))
    }
}

impl<T: SlotEq, const N: usize> SlotEq for [T; N] {
    #[inline]
    fn slot_eq(&self, other: &Self) -> bool {
        self[..].slot_eq(&other[..])
    }
}

impl<T: SlotEq> SlotEq for Vec<T> {
    #[inline]
    fn slot_eq(&self, other: &Self) -> bool {
        self[..].slot_eq(&other[..])
    }
}

impl<T: SlotEq + ?Sized> SlotEq for Box<T> {
    #[inline]
    fn slot_eq(&self, other: &Self) -> bool {
        (**self).slot_eq(&**other)
    }
}

macro_rules! tuple_slot {
    ($(($($name:ident : $idx:tt),+)),+ $(,)?) => {
        $(
            impl<$($name: SlotEq),+> SlotEq for ($($name,)+) {
                #[inline]
                fn slot_eq(&self, other: &Self) -> bool {
                    $(self.$idx.slot_eq(&other.$idx))&&+
                }
            }
        )+
    };
}

tuple_slot!(
    (A: 0),
    (A: 0, B: 1),
    (A: 0, B: 1, C: 2),
    (A: 0, B: 1, C: 2, D: 3),
    (A: 0, B: 1, C: 2, D: 3, E: 4),
    (A: 0, B: 1, C: 2, D: 3, E: 4, F: 5),
);

/// Value-equality wrapper for slot types this crate has no [`SlotEq`] impl
/// for, such as structs from other crates or `HashMap`.
///
/// ```
/// use std::collections::BTreeMap;
/// use ftui_viewmodel::{ByValue, SlotEq};
///
/// let a = ByValue(BTreeMap::from([("w", 80)]));
/// let b = ByValue(BTreeMap::from([("w", 80)]));
/// assert!(a.slot_eq(&b));
/// assert_eq!(a["w"], 80);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ByValue<T>(pub T);

impl<T> ByValue<T> {
    /// Unwrap the inner value.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: PartialEq> SlotEq for ByValue<T> {
    #[inline]
    fn slot_eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> From<T> for ByValue<T> {
    fn from(value: T) -> Self {
        Self(value)
    }
}

impl<T> Deref for ByValue<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> DerefMut for ByValue<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.0
    }
}

impl<T: SlotEq> SlotEq for Option<T> {
    #[inline]
    fn slot_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (None, None) => true,
            (Some(a), Some(b)) => a.slot_eq(b),
            _ => false,
        }
    }
}

impl<T: ?Sized> SlotEq for Rc<T> {
    #[inline]
    fn slot_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(self, other)
    }
}

impl<T: ?Sized> SlotEq for Arc<T> {
    #[inline]
    fn slot_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(self, other)
    }
}

impl<T: ?Sized> SlotEq for &T {
    #[inline]
    fn slot_eq(&self, other: &Self) -> bool {
        std::ptr::eq(*self, *other)
    }
}
