#![forbid(unsafe_code)]

//! Version-tracked shared values with change callbacks.

use std::any::Any;
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

type Callback<T> = dyn Fn(&T);

struct Inner<T> {
    value: T,
    version: u64,
    subscribers: Vec<Weak<Callback<T>>>,
}

/// A shared value that notifies subscribers when it changes.
///
/// Clones share the same underlying value.
pub struct Observable<T> {
    inner: Rc<RefCell<Inner<T>>>,
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Observable")
            .field("value", &inner.value)
            .field("version", &inner.version)
            .finish()
    }
}

impl<T: Default + Clone + PartialEq + 'static> Default for Observable<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone + PartialEq + 'static> Observable<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                value,
                version: 0,
                subscribers: Vec::new(),
            })),
        }
    }

    /// Clone of the current value.
    #[must_use]
    pub fn get(&self) -> T {
        self.inner.borrow().value.clone()
    }

    /// Read the current value without cloning.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.borrow().value)
    }

    /// Number of changes since creation.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.inner.borrow().version
    }

    /// Replace the value, notifying subscribers if it differs.
    pub fn set(&self, value: T) {
        let (snapshot, callbacks) = {
            let mut inner = self.inner.borrow_mut();
            if inner.value == value {
                return;
            }
            inner.value = value;
            inner.version += 1;
            inner.subscribers.retain(|weak| weak.strong_count() > 0);
            let callbacks: Vec<Rc<Callback<T>>> =
                inner.subscribers.iter().filter_map(Weak::upgrade).collect();
            (inner.value.clone(), callbacks)
        };
        // The borrow is released so callbacks may read or write this value.
        for callback in callbacks {
            callback(&snapshot);
        }
    }

    /// Modify the value in place; notifies only if the result differs.
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        let mut next = self.get();
        f(&mut next);
        self.set(next);
    }

    /// Call `callback` with each new value until the subscription drops.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe(&self, callback: impl Fn(&T) + 'static) -> Subscription {
        let callback: Rc<Callback<T>> = Rc::new(callback);
        self.inner
            .borrow_mut()
            .subscribers
            .push(Rc::downgrade(&callback));
        Subscription {
            _guard: Box::new(callback),
        }
    }

    /// Live subscriber count.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner
            .borrow()
            .subscribers
            .iter()
            .filter(|weak| weak.strong_count() > 0)
            .count()
    }
}

/// Keeps a subscriber callback alive.
pub struct Subscription {
    _guard: Box<dyn Any>,
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn set_bumps_version_and_notifies() {
        let options = Observable::new(Vec::<&str>::new());
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let _sub = options.subscribe(move |list| sink.borrow_mut().push(list.len()));

        options.set(vec!["apple"]);
        options.set(vec!["apple", "pear"]);
        assert_eq!(options.version(), 2);
        assert_eq!(*seen.borrow(), vec![1, 2]);
    }

    #[test]
    fn equal_set_is_a_no_op() {
        let loading = Observable::new(false);
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let _sub = loading.subscribe(move |_| counter.set(counter.get() + 1));

        loading.set(false);
        assert_eq!(loading.version(), 0);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn subscribers_run_in_registration_order() {
        let value = Observable::new(0);
        let order = Rc::new(RefCell::new(Vec::new()));
        let (a, b) = (Rc::clone(&order), Rc::clone(&order));
        let _first = value.subscribe(move |_| a.borrow_mut().push("first"));
        let _second = value.subscribe(move |_| b.borrow_mut().push("second"));

        value.set(1);
        assert_eq!(*order.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn dropped_subscription_stops_notifications() {
        let value = Observable::new(0);
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let sub = value.subscribe(move |_| counter.set(counter.get() + 1));
        assert_eq!(value.subscriber_count(), 1);

        value.set(1);
        drop(sub);
        value.set(2);
        assert_eq!(calls.get(), 1);
        assert_eq!(value.subscriber_count(), 0);
    }

    #[test]
    fn callbacks_may_read_the_source() {
        let value = Observable::new(1);
        let reader = value.clone();
        let seen = Rc::new(Cell::new(0));
        let sink = Rc::clone(&seen);
        let _sub = value.subscribe(move |_| sink.set(reader.get()));

        value.set(7);
        assert_eq!(seen.get(), 7);
    }

    #[test]
    fn update_modifies_in_place() {
        let list = Observable::new(vec![1, 2]);
        list.update(|v| v.push(3));
        assert_eq!(list.get(), vec![1, 2, 3]);
        list.update(|_| {});
        assert_eq!(list.version(), 1);
    }
}
