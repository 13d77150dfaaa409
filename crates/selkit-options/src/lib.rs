#![forbid(unsafe_code)]

//! Option derivation for select inputs.
//!
//! [`Options`] turns a raw option source (a fixed list or a provider keyed on
//! the typed text) into display-ready [`DerivedOption`] records for every
//! query:
//!
//! 1. Resolve raw candidates from the [`OptionSource`].
//! 2. Derive label, searchable text, and disabled flag for each candidate.
//! 3. Filter and rank against the trimmed input ([`Filterable`]).
//! 4. Append synthetic "Create ..." entries ([`Createable`]).
//!
//! # Invariants
//!
//! 1. `text` of every option comes from one extraction path: the configured
//!    `key`, the custom format's text mode, or [`SelectItem::text`].
//! 2. The input is trimmed once per query; the trimmed string drives
//!    filtering, ranking, the existence check, and created values alike.
//! 3. Created options are appended after the filtered list and are never
//!    disabled.
//! 4. Derivation is pure. Calling [`Options::options`] twice with the same
//!    input yields equal results (given pure host callbacks).
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | `key` + custom format | Mutually exclusive config | Warns, `key` wins |
//! | Item cannot be created from text | `FromInput` on e.g. `&'static str` | Warns, nothing created |
//! | Host callback panics | User code | Propagates |
//!
//! # Example
//!
//! ```
//! use selkit_options::{Createable, OptionsBuilder};
//!
//! let options = OptionsBuilder::new(vec!["Apple".to_owned(), "Banana".to_owned()])
//!     .createable(Createable::FromInput)
//!     .build();
//!
//! let found = options.options("ban");
//! assert_eq!(found.len(), 2);
//! assert_eq!(found[0].text, "Banana");
//! assert!(found[1].created);
//! assert_eq!(found[1].label.to_string(), "Create ban");
//!
//! // Whitespace alone never produces a duplicate create entry.
//! assert!(options.options("Apple ").iter().all(|o| !o.created));
//! ```

pub mod compare;
pub mod create;
pub mod engine;
pub mod filter;
pub mod format;
pub mod item;
pub mod label;

pub use compare::eq_ignoring_case;
pub use create::{Createable, Created};
pub use engine::{DerivedOption, OptionSource, Options, OptionsBuilder};
pub use filter::Filterable;
pub use format::{DisplayFormat, FnFormat, FormatKind, FormatMeta, KeyFormat, OptionFormat};
pub use item::SelectItem;
pub use label::Label;

/// Prefix given to the label of synthetic create entries.
pub const CREATE_PREFIX: &str = "Create ";
