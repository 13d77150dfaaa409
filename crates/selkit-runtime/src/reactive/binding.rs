#![forbid(unsafe_code)]

//! Subscription lifetimes tied to a mounted select.
//!
//! A host usually keeps several subscriptions per select: the option list
//! of an [`AsyncOptions`](crate::AsyncOptions) feeding
//! `refresh_options`, a status line, a loading spinner. [`BindingScope`]
//! owns them together so unmounting the select is a single drop.
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! use selkit_runtime::reactive::{BindingScope, Observable};
//!
//! let loading = Observable::new(false);
//! let spinner = Rc::new(Cell::new(false));
//! let mut scope = BindingScope::new();
//! let shown = Rc::clone(&spinner);
//! scope.subscribe(&loading, move |on| shown.set(*on));
//!
//! loading.set(true);
//! assert!(spinner.get());
//!
//! drop(scope);
//! loading.set(false);
//! assert!(spinner.get());
//! ```

use std::fmt;

use super::observable::{Observable, Subscription};

/// Subscriptions held for one mounted select.
///
/// Dropping the scope releases every subscription it holds.
#[derive(Default)]
pub struct BindingScope {
    subscriptions: Vec<Subscription>,
}

impl BindingScope {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep `sub` alive for the lifetime of the scope.
    pub fn hold(&mut self, sub: Subscription) {
        self.subscriptions.push(sub);
    }

    /// Subscribe to `source` for the lifetime of the scope.
    pub fn subscribe<T: Clone + PartialEq + 'static>(
        &mut self,
        source: &Observable<T>,
        callback: impl Fn(&T) + 'static,
    ) -> &mut Self {
        let sub = source.subscribe(callback);
        self.subscriptions.push(sub);
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.subscriptions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }

    /// Release everything now; the scope stays usable.
    pub fn clear(&mut self) {
        self.subscriptions.clear();
    }
}

impl fmt::Debug for BindingScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BindingScope")
            .field("len", &self.subscriptions.len())
            .finish()
    }
}
