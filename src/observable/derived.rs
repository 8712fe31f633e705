//! Derived - Read-only Computed View

use std::cell::RefCell;
use std::rc::Rc;

use super::{Dependency, Subscribers, Subscription};

struct DerivedInner<T> {
    value: RefCell<T>,
    compute: Box<dyn Fn() -> T>,
    subscribers: Rc<Subscribers<T>>,
}

impl<T: Clone + 'static> DerivedInner<T> {
    fn recompute(&self) {
        let next = (self.compute)();
        *self.value.borrow_mut() = next.clone();
        self.subscribers.notify(&next);
    }
}

/// Read-only view computed from one or more dependencies.
///
/// The value is computed once on creation and again, synchronously, every time
/// a dependency changes. The compute closure reads its inputs itself (usually by
/// capturing store handles), so it always sees the latest value of every input.
pub struct Derived<T> {
    inner: Rc<DerivedInner<T>>,
}

impl<T: Clone + 'static> Derived<T> {
    /// Create a view over `deps`, recomputed with `compute`
    pub fn new(deps: &[&dyn Dependency], compute: impl Fn() -> T + 'static) -> Self {
        let inner = Rc::new(DerivedInner {
            value: RefCell::new(compute()),
            compute: Box::new(compute),
            subscribers: Subscribers::new(),
        });

        for dep in deps {
            let weak = Rc::downgrade(&inner);
            dep.watch(Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.recompute();
                }
            }))
            .detach();
        }

        Self { inner }
    }

    /// Get a clone of the current value
    pub fn get(&self) -> T {
        self.inner.value.borrow().clone()
    }

    /// Borrow the current value without cloning it
    pub fn with<U>(&self, f: impl FnOnce(&T) -> U) -> U {
        f(&self.inner.value.borrow())
    }

    /// Call `f` with the new value after every recomputation
    pub fn subscribe(&self, f: impl Fn(&T) + 'static) -> Subscription {
        self.inner.subscribers.add(f)
    }
}

impl<T: Clone + 'static> Dependency for Derived<T> {
    fn watch(&self, f: Box<dyn Fn()>) -> Subscription {
        self.subscribe(move |_| f())
    }
}

impl<T> Clone for Derived<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Derived<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Derived").field(&self.inner.value.borrow()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observable::Store;

    #[test]
    fn recomputes_on_dependency_change() {
        let a = Store::new(2);
        let b = Store::new(3);

        let (ra, rb) = (a.clone(), b.clone());
        let product = Derived::new(&[&a, &b], move || ra.get() * rb.get());
        assert_eq!(product.get(), 6);

        a.set(5);
        assert_eq!(product.get(), 15);
        b.set(1);
        assert_eq!(product.get(), 5);
    }

    #[test]
    fn chained_views_settle_before_returning() {
        let base = Store::new(vec![3, 1, 2]);

        let src = base.clone();
        let doubled = Derived::new(&[&base], move || {
            src.with(|v| v.iter().map(|x| x * 2).collect::<Vec<_>>())
        });
        let src = doubled.clone();
        let total = Derived::new(&[&doubled], move || src.with(|v| v.iter().sum::<i32>()));

        base.update(|v| v.push(4));

        assert_eq!(doubled.get(), vec![6, 2, 4, 8]);
        assert_eq!(total.get(), 20);
    }

    #[test]
    fn view_notifies_its_own_subscribers() {
        let base = Store::new(1);
        let src = base.clone();
        let plus_one = Derived::new(&[&base], move || src.get() + 1);

        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let _sub = plus_one.subscribe(move |v| sink.borrow_mut().push(*v));

        base.set(10);
        assert_eq!(*seen.borrow(), vec![11]);
    }

    #[test]
    fn dropped_view_stops_recomputing() {
        let base = Store::new(1);
        let src = base.clone();
        let view = Derived::new(&[&base], move || src.get());
        drop(view);

        // The weak back-reference is gone; writing must not panic.
        base.set(2);
        assert_eq!(base.get(), 2);
    }
}
