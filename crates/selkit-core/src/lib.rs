#![forbid(unsafe_code)]

//! Headless selection state for select and combobox widgets.
//!
//! [`Select`] tracks what is selected, what the user typed, whether the list
//! is open, which option is focused, and which host surfaces belong to it.
//! Hosts translate their events into method calls ([`Select::handle_key`],
//! [`Select::focus_out`], [`Select::click`], ...) and render from
//! [`Select::snapshot`]. Nothing here draws anything.
//!
//! The engine is option-source agnostic: pass a static list or a function of
//! the query text. `selkit-options` provides a ready-made filtering source.

pub mod engine;
pub mod error;
pub mod key;
pub mod surface;
pub mod value;

pub use engine::{
    ClickOutcome, FocusOutcome, Select, SelectBuilder, SelectSnapshot, Source,
};
pub use error::SelectError;
pub use key::{KeyOutcome, SelectKey};
pub use surface::{SurfaceId, SurfaceRegistry, SurfaceRole};
pub use value::{Mode, SelectValue};
