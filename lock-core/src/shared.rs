//! Holder for state shared between interrupt handlers.

use core::cell::RefCell;

use critical_section::Mutex;

/// A value set up once in `main` and then used from interrupt handlers.
///
/// Each [`with`](SharedLock::with) call runs inside one critical section, so
/// a handler sees every field as another handler left it, never half
/// updated.
pub struct SharedLock<C> {
    inner: Mutex<RefCell<Option<C>>>,
}

impl<C> SharedLock<C> {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(None)),
        }
    }

    /// Store the value. Call before unmasking the interrupts that use it.
    pub fn init(&self, value: C) {
        critical_section::with(|cs| {
            self.inner.borrow_ref_mut(cs).replace(value);
        });
    }

    /// Run `f` on the value. Returns `None` if [`init`](SharedLock::init)
    /// has not run yet, so an early interrupt is simply dropped.
    pub fn with<R>(&self, f: impl FnOnce(&mut C) -> R) -> Option<R> {
        critical_section::with(|cs| self.inner.borrow_ref_mut(cs).as_mut().map(f))
    }
}

impl<C> Default for SharedLock<C> {
    fn default() -> Self {
        Self::new()
    }
}
