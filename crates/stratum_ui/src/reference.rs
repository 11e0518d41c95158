//! Shared value cells bound to widgets.
//!
//! The application owns a [`Reference`]; widgets only hold a
//! [`WeakReference`] and never keep the value alive.

use std::sync::{Arc, Weak};

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Application-owned mutable value.
#[derive(Debug, Default)]
pub struct Reference<T> {
    inner: Arc<RwLock<T>>,
}

impl<T> Reference<T> {
    /// Creates a new cell.
    #[must_use]
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(RwLock::new(value)),
        }
    }

    /// Replaces the value.
    pub fn set(&self, value: T) {
        *self.inner.write() = value;
    }

    /// Read access.
    pub fn read(&self) -> RwLockReadGuard<'_, T> {
        self.inner.read()
    }

    /// Write access.
    pub fn write(&self) -> RwLockWriteGuard<'_, T> {
        self.inner.write()
    }

    /// Non-owning handle for widgets.
    #[must_use]
    pub fn downgrade(&self) -> WeakReference<T> {
        WeakReference {
            inner: Arc::downgrade(&self.inner),
        }
    }
}

impl<T: Copy> Reference<T> {
    /// Current value.
    #[must_use]
    pub fn get(&self) -> T {
        *self.inner.read()
    }
}

impl<T> Clone for Reference<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

/// Widget-side handle to a [`Reference`].
///
/// Reads return `None` and writes are dropped once the application
/// released every owning handle.
#[derive(Debug)]
pub struct WeakReference<T> {
    inner: Weak<RwLock<T>>,
}

impl<T> WeakReference<T> {
    /// Owning handle, if the cell is still alive.
    #[must_use]
    pub fn upgrade(&self) -> Option<Reference<T>> {
        self.inner.upgrade().map(|inner| Reference { inner })
    }

    /// Writes `value`. Returns false if the cell is gone.
    pub fn set(&self, value: T) -> bool {
        match self.inner.upgrade() {
            Some(cell) => {
                *cell.write() = value;
                true
            }
            None => false,
        }
    }

    /// Returns true while the owning side is alive.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.inner.strong_count() > 0
    }
}

impl<T: Copy> WeakReference<T> {
    /// Current value, if the cell is still alive.
    #[must_use]
    pub fn get(&self) -> Option<T> {
        self.inner.upgrade().map(|cell| *cell.read())
    }
}

impl<T> Clone for WeakReference<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Weak::clone(&self.inner),
        }
    }
}

impl<T> From<&Reference<T>> for WeakReference<T> {
    fn from(reference: &Reference<T>) -> Self {
        reference.downgrade()
    }
}
