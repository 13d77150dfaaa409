#![forbid(unsafe_code)]

//! Headless select and combobox engine.
//!
//! selkit is split into layers, each usable on its own:
//!
//! | Crate | Layer |
//! |-------|-------|
//! | [`fuzzy`] | Subsequence scoring, ranking, and highlight runs |
//! | [`options`] | Raw items to filtered, labelled, createable options |
//! | [`engine`] | Selection state: value, open state, focus, keys, surfaces |
//! | [`runtime`] | Observables and throttled async option loading |
//!
//! This crate glues them together ([`select_from_options`],
//! [`select_from_async`]) and adds declarative [`SelectSettings`].
//!
//! # Quick start
//!
//! ```
//! use selkit::prelude::*;
//!
//! let settings = SelectSettings { createable: true, ..SelectSettings::default() };
//! let options = settings
//!     .options_builder(vec!["Apple".to_owned(), "Banana".to_owned()])
//!     .build();
//! let mut select = settings.apply(select_from_options(options)).build()?;
//!
//! select.set_input_value("Apple ");
//! // Trailing whitespace does not produce a duplicate "Create Apple" entry.
//! assert_eq!(select.options().len(), 1);
//! # Ok::<(), SelectError>(())
//! ```
//!
//! # Logging
//!
//! All crates log through `tracing` and never install a subscriber.

pub mod prelude;
pub mod select;
pub mod settings;

pub use selkit_core as engine;
pub use selkit_fuzzy as fuzzy;
pub use selkit_options as options;
pub use selkit_runtime as runtime;

pub use select::{OptionSelect, select_from_async, select_from_options};
pub use settings::{FilterMode, SelectSettings, SettingsError};
