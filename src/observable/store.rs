//! Store - Mutable Observable Cell

use std::cell::RefCell;
use std::rc::Rc;

use super::{Dependency, Subscribers, Subscription};

struct StoreInner<T> {
    value: RefCell<T>,
    subscribers: Rc<Subscribers<T>>,
}

/// Mutable cell that notifies its subscribers on every write.
///
/// `Store` is a cheap handle: clones share the same value and subscribers.
pub struct Store<T> {
    inner: Rc<StoreInner<T>>,
}

impl<T: Clone + 'static> Store<T> {
    /// Create a new store holding `value`
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(StoreInner {
                value: RefCell::new(value),
                subscribers: Subscribers::new(),
            }),
        }
    }

    /// Get a clone of the current value
    pub fn get(&self) -> T {
        self.inner.value.borrow().clone()
    }

    /// Borrow the current value without cloning it
    pub fn with<U>(&self, f: impl FnOnce(&T) -> U) -> U {
        f(&self.inner.value.borrow())
    }

    /// Replace the value and notify subscribers
    pub fn set(&self, value: T) {
        *self.inner.value.borrow_mut() = value;
        self.notify();
    }

    /// Mutate the value in place and notify subscribers
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        f(&mut self.inner.value.borrow_mut());
        self.notify();
    }

    /// Call `f` with the new value after every write.
    ///
    /// The subscriber is not called with the current value at subscription time.
    pub fn subscribe(&self, f: impl Fn(&T) + 'static) -> Subscription {
        self.inner.subscribers.add(f)
    }

    /// Number of active subscribers
    #[cfg(test)]
    pub(crate) fn subscriber_count(&self) -> usize {
        self.inner.subscribers.len()
    }

    fn notify(&self) {
        // Notify with a snapshot so subscribers are free to write back into this store.
        let value = self.get();
        self.inner.subscribers.notify(&value);
    }
}

impl<T: Clone + 'static> Dependency for Store<T> {
    fn watch(&self, f: Box<dyn Fn()>) -> Subscription {
        self.subscribe(move |_| f())
    }
}

impl<T> Clone for Store<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Clone + Default + 'static> Default for Store<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Store<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Store").field(&self.inner.value.borrow()).finish()
    }
}
