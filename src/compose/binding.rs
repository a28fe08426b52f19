//! Binding<T>: caller-owned state cells wired into live fragments.
//!
//! Settings values (toggle states, slider positions, text) live in state the
//! caller owns. The core never persists or reads configuration storage; it
//! only threads these cells into fragments. Cloning a binding shares the
//! underlying cell, so every fragment produced for the same declaration
//! observes the same value.

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

/// A shared, caller-owned value cell.
///
/// Cheap to clone (an `Arc` bump); all clones read and write the same value.
pub struct Binding<T> {
    cell: Arc<RwLock<T>>,
}

impl<T> Binding<T> {
    /// Create a binding holding `initial`.
    pub fn new(initial: T) -> Self {
        Self {
            cell: Arc::new(RwLock::new(initial)),
        }
    }

    /// Replace the value.
    pub fn set(&self, value: T) {
        *self.cell.write() = value;
    }

    /// Mutate the value in place.
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        f(&mut self.cell.write());
    }

    /// Read the value through a closure, without cloning.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.cell.read())
    }

    /// Whether two bindings share the same underlying cell.
    pub fn shares_cell(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.cell, &other.cell)
    }
}

impl<T: Clone> Binding<T> {
    /// A clone of the current value.
    pub fn get(&self) -> T {
        self.cell.read().clone()
    }
}

impl<T> Clone for Binding<T> {
    fn clone(&self) -> Self {
        Self {
            cell: Arc::clone(&self.cell),
        }
    }
}

impl<T: Default> Default for Binding<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for Binding<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Binding").field(&*self.cell.read()).finish()
    }
}
