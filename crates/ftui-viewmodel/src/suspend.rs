#![forbid(unsafe_code)]

//! Scoped suspension of a single property change listener.
//!
//! [`SuspendPropertyChanged`] owns a resume action. Releasing the guard runs
//! it; the action re-appends the suspended listener to the END of the list,
//! so its position relative to other listeners may change.
//!
//! # Release semantics
//!
//! - [`release`](SuspendPropertyChanged::release) runs the resume action on
//!   every call. Calling it twice registers the listener twice.
//! - `Drop` runs the resume action once, unless `release` was called before.
//!   This covers early returns and panic unwinding inside the suspended
//!   block.

use std::cell::Cell;
use std::fmt;

/// Guard returned by [`PropertyChanged::suspend`](crate::PropertyChanged::suspend)
/// and [`ObservableObject::suspend_property_changed`](crate::ObservableObject::suspend_property_changed).
#[must_use = "dropping the guard immediately resumes the listener"]
pub struct SuspendPropertyChanged {
    resume: Box<dyn Fn()>,
    releases: Cell<u32>,
}

impl SuspendPropertyChanged {
    pub(crate) fn new(resume: impl Fn() + 'static) -> Self {
        Self {
            resume: Box::new(resume),
            releases: Cell::new(0),
        }
    }

    /// Run the resume action now.
    ///
    /// Not guarded against repetition: each call re-registers the listener
    /// once more.
    pub fn release(&self) {
        self.releases.set(self.releases.get().saturating_add(1));
        (self.resume)();
    }

    /// How many times [`release`](Self::release) has been called.
    #[must_use]
    pub fn release_count(&self) -> u32 {
        self.releases.get()
    }
}

impl Drop for SuspendPropertyChanged {
    fn drop(&mut self) {
        if self.releases.get() == 0 {
            (self.resume)();
        }
    }
}

impl fmt::Debug for SuspendPropertyChanged {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SuspendPropertyChanged")
            .field("releases", &self.releases.get())
            .finish_non_exhaustive()
    }
}
