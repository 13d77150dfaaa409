#![forbid(unsafe_code)]

//! Runtime support for selkit hosts.
//!
//! - [`reactive`]: observables and subscription scopes for pushing select
//!   state into a presentation layer.
//! - [`AsyncOptions`]: throttled option loading from an async fetcher, run on
//!   a current-thread Tokio runtime inside a `LocalSet`.

pub mod async_options;
pub mod reactive;

pub use async_options::{AsyncOptions, DEFAULT_THROTTLE, FetchStatus};
pub use reactive::{BindingScope, Observable, Subscription};
