//! Common imports.
//!
//! ```
//! use selkit::prelude::*;
//! ```

pub use selkit_core::{
    ClickOutcome, FocusOutcome, KeyOutcome, Mode, Select, SelectBuilder, SelectError, SelectKey,
    SelectSnapshot, SelectValue, Source, SurfaceId, SurfaceRole,
};
pub use selkit_fuzzy::{Fragment, FuzzyMatch, Ranked, highlight, rank, search};
pub use selkit_options::{
    Createable, Created, DerivedOption, Filterable, FnFormat, KeyFormat, Label, OptionFormat,
    OptionSource, Options, OptionsBuilder, SelectItem,
};
pub use selkit_runtime::{AsyncOptions, BindingScope, FetchStatus, Observable, Subscription};

pub use crate::select::{OptionSelect, follow_async, select_from_async, select_from_options};
pub use crate::settings::{FilterMode, SelectSettings, SettingsError};
