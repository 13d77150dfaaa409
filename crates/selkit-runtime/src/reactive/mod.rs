#![forbid(unsafe_code)]

//! Change-tracking primitives for hosts that render select state.
//!
//! - [`Observable`]: a shared, version-tracked value with subscriber
//!   callbacks.
//! - [`Subscription`]: RAII guard that unsubscribes on drop.
//! - [`BindingScope`]: holds the subscriptions of one mounted select.
//!
//! # Architecture
//!
//! `Observable<T>` uses `Rc<RefCell<..>>` for single-threaded shared ownership.
//! Subscribers are stored as `Weak` callbacks and pruned lazily during
//! notification.
//!
//! # Invariants
//!
//! 1. Version increments exactly once per mutation that changes the value.
//! 2. Subscribers are notified in registration order.
//! 3. Setting a value equal to the current value is a no-op (no version bump,
//!    no notifications).
//! 4. Dropping a [`Subscription`] removes the callback before the next
//!    notification cycle.

pub mod binding;
pub mod observable;

pub use binding::BindingScope;
pub use observable::{Observable, Subscription};
