//! Throttled option loading from an async fetcher.
//!
//! [`AsyncOptions`] turns a stream of query texts into at most one fetch per
//! throttle window. The first text after a quiet period arms a timer; texts
//! arriving before it fires replace the pending one; when it fires the latest
//! text is fetched (trailing edge). Results land in [`AsyncOptions::options`]
//! and [`AsyncOptions::loading`], both [`Observable`], so the host can
//! subscribe and recompute its option list.
//!
//! Tasks are spawned with [`tokio::task::spawn_local`], so an `AsyncOptions`
//! must be driven from inside a [`tokio::task::LocalSet`] on a current-thread
//! runtime.
//!
//! # Invariants
//!
//! 1. Only the newest dispatched fetch may update `options`; superseded
//!    fetches are aborted and any late result is discarded.
//! 2. Repeating the last dispatched text schedules nothing.
//! 3. Before any fetch resolves, `options` is empty.
//!
//! # Failure Modes
//!
//! | Condition | Behavior |
//! |-----------|----------|
//! | Fetcher returns `Err` | Previous options kept, `loading` false, `warn!` logged |
//! | Fetcher never resolves | `loading` stays true until a newer fetch lands |
//! | `AsyncOptions` dropped | Timer and in-flight fetch aborted |

use std::cell::RefCell;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::reactive::{BindingScope, Observable};

/// Default throttle window.
pub const DEFAULT_THROTTLE: Duration = Duration::from_millis(250);

/// Coarse fetch state, for "Loading..." or "3 results" style status lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStatus {
    /// Nothing has been fetched yet.
    Idle,
    /// A query is waiting for its window or its fetch.
    Loading,
    /// The latest list has this many options.
    Ready(usize),
}

type FetchFuture<T> = Pin<Box<dyn Future<Output = Result<Vec<T>, String>>>>;
type Fetcher<T> = Box<dyn Fn(String) -> FetchFuture<T>>;

#[derive(Default)]
struct State {
    pending: Option<String>,
    last_dispatched: Option<String>,
    generation: u64,
    timer: Option<JoinHandle<()>>,
    fetch: Option<JoinHandle<()>>,
}

struct Inner<T> {
    fetcher: Fetcher<T>,
    throttle: Duration,
    options: Observable<Vec<T>>,
    loading: Observable<bool>,
    state: RefCell<State>,
}

/// Options fetched asynchronously for the current query text.
///
/// ```no_run
/// use selkit_runtime::AsyncOptions;
///
/// # async fn demo() {
/// let local = tokio::task::LocalSet::new();
/// local
///     .run_until(async {
///         let remote = AsyncOptions::new(|query: String| async move {
///             Ok::<_, std::io::Error>(vec![format!("{query}-1"), format!("{query}-2")])
///         });
///         remote.on_input("ap");
///         tokio::time::sleep(selkit_runtime::DEFAULT_THROTTLE * 2).await;
///         assert_eq!(remote.options().get(), vec!["ap-1", "ap-2"]);
///     })
///     .await;
/// # }
/// ```
pub struct AsyncOptions<T> {
    inner: Rc<Inner<T>>,
}

impl<T: Clone + PartialEq + 'static> AsyncOptions<T> {
    /// Wrap `fetcher` with the [`DEFAULT_THROTTLE`] window.
    pub fn new<F, Fut, E>(fetcher: F) -> Self
    where
        F: Fn(String) -> Fut + 'static,
        Fut: Future<Output = Result<Vec<T>, E>> + 'static,
        E: fmt::Display,
    {
        Self::with_throttle(fetcher, DEFAULT_THROTTLE)
    }

    pub fn with_throttle<F, Fut, E>(fetcher: F, throttle: Duration) -> Self
    where
        F: Fn(String) -> Fut + 'static,
        Fut: Future<Output = Result<Vec<T>, E>> + 'static,
        E: fmt::Display,
    {
        let fetcher: Fetcher<T> = Box::new(move |query: String| -> FetchFuture<T> {
            let fut = fetcher(query);
            Box::pin(async move { fut.await.map_err(|err| err.to_string()) })
        });
        Self {
            inner: Rc::new(Inner {
                fetcher,
                throttle,
                options: Observable::new(Vec::new()),
                loading: Observable::new(false),
                state: RefCell::new(State::default()),
            }),
        }
    }

    /// The latest successfully fetched list.
    #[must_use]
    pub fn options(&self) -> &Observable<Vec<T>> {
        &self.inner.options
    }

    /// True while a fetch for the current text is pending or in flight.
    #[must_use]
    pub fn loading(&self) -> &Observable<bool> {
        &self.inner.loading
    }

    #[must_use]
    pub fn throttle(&self) -> Duration {
        self.inner.throttle
    }

    /// Record a new query text.
    ///
    /// Must be called from within a [`tokio::task::LocalSet`].
    pub fn on_input(&self, text: impl Into<String>) {
        let text = text.into();
        {
            let mut state = self.inner.state.borrow_mut();
            if state.pending.is_none() && state.last_dispatched.as_deref() == Some(text.as_str())
            {
                return;
            }
            tracing::trace!(input = %text, "query queued");
            state.pending = Some(text);
            // Stored before `loading` notifies, so a subscriber queueing
            // another text joins this window instead of arming a second timer.
            if state.timer.is_none() {
                let inner = Rc::clone(&self.inner);
                state.timer = Some(tokio::task::spawn_local(async move {
                    tokio::time::sleep(inner.throttle).await;
                    Inner::dispatch(&inner);
                }));
            }
        }
        self.inner.loading.set(true);
    }

    /// Summary of the fetch state for status lines.
    #[must_use]
    pub fn status(&self) -> FetchStatus {
        self.inner.status()
    }

    /// Call `on_status` whenever [`status`](Self::status) may have changed,
    /// for as long as `scope` lives.
    pub fn watch_status(
        &self,
        scope: &mut BindingScope,
        on_status: impl Fn(FetchStatus) + 'static,
    ) {
        let on_status = Rc::new(on_status);
        let weak = Rc::downgrade(&self.inner);
        let notify = move || {
            if let Some(inner) = weak.upgrade() {
                on_status(inner.status());
            }
        };
        let on_loading = notify.clone();
        scope.subscribe(&self.inner.loading, move |_| on_loading());
        scope.subscribe(&self.inner.options, move |_| notify());
    }
}

impl<T: Clone + PartialEq + 'static> Inner<T> {
    fn status(&self) -> FetchStatus {
        if self.loading.get() {
            FetchStatus::Loading
        } else if self.state.borrow().last_dispatched.is_none() {
            FetchStatus::Idle
        } else {
            FetchStatus::Ready(self.options.with(Vec::len))
        }
    }

    fn dispatch(this: &Rc<Self>) {
        let (text, generation) = {
            let mut state = this.state.borrow_mut();
            state.timer = None;
            let Some(text) = state.pending.take() else {
                return;
            };
            if state.last_dispatched.as_deref() == Some(text.as_str()) {
                let idle = state.fetch.is_none();
                drop(state);
                if idle {
                    this.loading.set(false);
                }
                return;
            }
            state.last_dispatched = Some(text.clone());
            state.generation += 1;
            if let Some(stale) = state.fetch.take() {
                stale.abort();
            }
            (text, state.generation)
        };
        tracing::debug!(input = %text, generation, "fetching options");

        let fut = (this.fetcher)(text);
        let inner = Rc::clone(this);
        let fetch = tokio::task::spawn_local(async move {
            let result = fut.await;
            inner.complete(generation, result);
        });
        this.state.borrow_mut().fetch = Some(fetch);
    }

    fn complete(&self, generation: u64, result: Result<Vec<T>, String>) {
        {
            let mut state = self.state.borrow_mut();
            if state.generation != generation {
                tracing::trace!(generation, current = state.generation, "stale fetch ignored");
                return;
            }
            state.fetch = None;
        }
        match result {
            Ok(options) => {
                tracing::debug!(generation, count = options.len(), "options fetched");
                self.options.set(options);
            }
            Err(error) => {
                tracing::warn!(generation, %error, "option fetch failed; keeping previous options");
            }
        }
        let pending = self.state.borrow().pending.is_some();
        if !pending {
            self.loading.set(false);
        }
    }
}

impl<T> Drop for AsyncOptions<T> {
    fn drop(&mut self) {
        let mut state = self.inner.state.borrow_mut();
        if let Some(timer) = state.timer.take() {
            timer.abort();
        }
        if let Some(fetch) = state.fetch.take() {
            fetch.abort();
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for AsyncOptions<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.inner.state.borrow();
        f.debug_struct("AsyncOptions")
            .field("throttle", &self.inner.throttle)
            .field("pending", &state.pending)
            .field("last_dispatched", &state.last_dispatched)
            .field("generation", &state.generation)
            .finish_non_exhaustive()
    }
}
