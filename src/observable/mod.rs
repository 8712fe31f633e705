//! Observable Primitives
//!
//! A mutable [`Store`] that notifies subscribers on write, and a read-only
//! [`Derived`] view recomputed from one or more dependencies.
//!
//! ```text
//! Store::set → subscribers of the store → Derived::recompute → subscribers of the view
//! ```
//!
//! Everything is single-threaded (`Rc`/`RefCell`) and synchronous: by the time
//! `set` returns, every view depending on the store holds its new value.

mod derived;
mod store;
mod subscription;

pub use derived::Derived;
pub use store::Store;
pub use subscription::Subscription;

pub(crate) use subscription::Subscribers;

/// Something a [`Derived`] view can depend on.
pub trait Dependency {
    /// Call `f` after every change of this dependency.
    fn watch(&self, f: Box<dyn Fn()>) -> Subscription;
}
