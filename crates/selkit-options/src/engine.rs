//! The derivation pipeline: source → derived → filtered → created.

use std::fmt;

use selkit_fuzzy::Fragment;

use crate::CREATE_PREFIX;
use crate::compare::eq_ignoring_case;
use crate::create::Createable;
use crate::filter::{self, Filterable};
use crate::format::{DisplayFormat, FnFormat, FormatKind, FormatMeta, KeyFormat, OptionFormat};
use crate::item::SelectItem;
use crate::label::Label;

/// A display-ready option for one query.
///
/// Derived options are rebuilt on every query and never cached by the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedOption<T> {
    /// The raw value this option selects.
    pub value: T,
    /// Label for the option list (may carry highlight runs and a prefix).
    pub label: Label,
    /// Searchable text, from the canonical extraction path.
    pub text: String,
    /// Whether the option can be picked.
    pub disabled: bool,
    /// Whether this is a synthetic create entry.
    pub created: bool,
}

/// Where raw options come from.
pub enum OptionSource<T> {
    /// A fixed collection, ignoring the typed text.
    Static(Vec<T>),
    /// A provider called with the (untrimmed) typed text.
    Dynamic(Box<dyn Fn(&str) -> Vec<T>>),
}

impl<T> OptionSource<T> {
    pub fn dynamic(provider: impl Fn(&str) -> Vec<T> + 'static) -> Self {
        Self::Dynamic(Box::new(provider))
    }

    #[must_use]
    pub const fn is_dynamic(&self) -> bool {
        matches!(self, Self::Dynamic(_))
    }
}

impl<T: Clone> OptionSource<T> {
    fn resolve(&self, input: &str) -> Vec<T> {
        match self {
            Self::Static(values) => values.clone(),
            Self::Dynamic(provider) => provider(input),
        }
    }
}

impl<T> From<Vec<T>> for OptionSource<T> {
    fn from(values: Vec<T>) -> Self {
        Self::Static(values)
    }
}

impl<T: fmt::Debug> fmt::Debug for OptionSource<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static(values) => f.debug_tuple("Static").field(values).finish(),
            Self::Dynamic(_) => f.write_str("Dynamic(..)"),
        }
    }
}

/// Builder for [`Options`].
///
/// ```
/// use selkit_options::{Filterable, OptionsBuilder};
///
/// let options = OptionsBuilder::new(vec![1_u32, 2, 12, 21])
///     .filterable(Filterable::Substring)
///     .disable(|n| *n > 20)
///     .build();
///
/// let found = options.options("2");
/// let texts: Vec<_> = found.iter().map(|o| o.text.as_str()).collect();
/// assert_eq!(texts, ["2", "12", "21"]);
/// assert!(found[2].disabled);
/// ```
pub struct OptionsBuilder<T> {
    source: OptionSource<T>,
    key: Option<String>,
    format: Option<Box<dyn OptionFormat<T>>>,
    filterable: Filterable<T>,
    createable: Createable<T>,
    disable: Option<Box<dyn Fn(&T) -> bool>>,
}

impl<T: SelectItem + 'static> OptionsBuilder<T> {
    pub fn new(source: impl Into<OptionSource<T>>) -> Self {
        Self {
            source: source.into(),
            key: None,
            format: None,
            filterable: Filterable::default(),
            createable: Createable::default(),
            disable: None,
        }
    }

    /// Start from a provider keyed on the typed text.
    pub fn dynamic(provider: impl Fn(&str) -> Vec<T> + 'static) -> Self {
        Self::new(OptionSource::dynamic(provider))
    }

    /// Extract label and text from the named field of each value.
    ///
    /// Mutually exclusive with [`format`](Self::format); `key` wins.
    #[must_use]
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Custom rendering for value, label, and text.
    #[must_use]
    pub fn format(mut self, format: impl OptionFormat<T> + 'static) -> Self {
        self.format = Some(Box::new(format));
        self
    }

    /// Custom rendering from a single `(value, kind, meta)` closure.
    #[must_use]
    pub fn format_fn(
        self,
        format: impl Fn(&T, FormatKind, FormatMeta<'_>) -> Label + 'static,
    ) -> Self {
        self.format(FnFormat::new(format))
    }

    #[must_use]
    pub fn filterable(mut self, filterable: Filterable<T>) -> Self {
        self.filterable = filterable;
        self
    }

    #[must_use]
    pub fn createable(mut self, createable: Createable<T>) -> Self {
        self.createable = createable;
        self
    }

    /// Predicate marking values as not pickable.
    #[must_use]
    pub fn disable(mut self, disable: impl Fn(&T) -> bool + 'static) -> Self {
        self.disable = Some(Box::new(disable));
        self
    }

    #[must_use]
    pub fn build(self) -> Options<T> {
        let format: Box<dyn OptionFormat<T>> = match (&self.key, self.format) {
            (Some(key), Some(_)) => {
                tracing::warn!(
                    key = key.as_str(),
                    "both 'key' and a custom format were given; using 'key'"
                );
                Box::new(KeyFormat::new(key.clone()))
            }
            (Some(key), None) => Box::new(KeyFormat::new(key.clone())),
            (None, Some(format)) => format,
            (None, None) => Box::new(DisplayFormat),
        };

        Options {
            source: self.source,
            key: self.key,
            format,
            filterable: self.filterable,
            createable: self.createable,
            disable: self.disable,
        }
    }
}

/// Derives display-ready options for any typed text.
pub struct Options<T> {
    source: OptionSource<T>,
    key: Option<String>,
    format: Box<dyn OptionFormat<T>>,
    filterable: Filterable<T>,
    createable: Createable<T>,
    disable: Option<Box<dyn Fn(&T) -> bool>>,
}

impl<T: SelectItem + 'static> Options<T> {
    /// Options for `input`.
    ///
    /// The provider of a dynamic source sees `input` as typed; filtering,
    /// the existence check, and created values all use `input.trim()`.
    #[must_use]
    pub fn options(&self, input: &str) -> Vec<DerivedOption<T>> {
        let trimmed = input.trim();
        let mut options: Vec<DerivedOption<T>> = self
            .source
            .resolve(input)
            .into_iter()
            .map(|value| self.derive(value))
            .collect();

        if !trimmed.is_empty() {
            options = self.filter(trimmed, options);
        }

        if !trimmed.is_empty() && self.createable.is_enabled() {
            let exists = options
                .iter()
                .any(|option| eq_ignoring_case(trimmed, &option.text));
            let created = self
                .createable
                .resolve(trimmed, exists, &options, self.key.as_deref());
            options.extend(created.into_iter().map(|value| self.derive_created(value)));
        }

        tracing::trace!(input, count = options.len(), "derived options");
        options
    }

    /// The value an option selects.
    #[must_use]
    pub fn option_to_value(&self, option: &DerivedOption<T>) -> T {
        option.value.clone()
    }

    #[must_use]
    pub fn is_option_disabled(&self, option: &DerivedOption<T>) -> bool {
        option.disabled
    }

    /// Option-list rendering of a derived option.
    #[must_use]
    pub fn format_option(&self, option: &DerivedOption<T>) -> Label {
        option.label.clone()
    }

    /// Selected-value rendering of a raw value.
    #[must_use]
    pub fn format_value(&self, value: &T) -> Label {
        self.format.value(value)
    }

    /// Searchable text of a raw value.
    #[must_use]
    pub fn text(&self, value: &T) -> String {
        self.format.text(value)
    }

    #[must_use]
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    #[must_use]
    pub const fn source(&self) -> &OptionSource<T> {
        &self.source
    }

    fn derive(&self, value: T) -> DerivedOption<T> {
        DerivedOption {
            label: self.format.label(&value, FormatMeta::default()),
            text: self.format.text(&value),
            disabled: self.disable.as_ref().is_some_and(|disable| disable(&value)),
            created: false,
            value,
        }
    }

    fn derive_created(&self, value: T) -> DerivedOption<T> {
        let meta = FormatMeta {
            highlight: None,
            prefix: Some(CREATE_PREFIX),
        };
        DerivedOption {
            label: self.format.label(&value, meta),
            text: self.format.text(&value),
            disabled: false,
            created: true,
            value,
        }
    }

    fn relabel(&self, option: DerivedOption<T>, spans: &[Fragment<String>]) -> DerivedOption<T> {
        let meta = FormatMeta {
            highlight: Some(spans),
            prefix: None,
        };
        DerivedOption {
            label: self.format.label(&option.value, meta),
            ..option
        }
    }

    fn filter(&self, trimmed: &str, options: Vec<DerivedOption<T>>) -> Vec<DerivedOption<T>> {
        match &self.filterable {
            Filterable::Off => options,
            Filterable::Fuzzy => filter::fuzzy(trimmed, options)
                .into_iter()
                .map(|(option, spans)| self.relabel(option, &spans))
                .collect(),
            Filterable::Substring => filter::substring(trimmed, options)
                .into_iter()
                .map(|(option, spans)| self.relabel(option, &spans))
                .collect(),
            Filterable::Custom(filter) => filter(trimmed, options),
        }
    }
}

impl<T> fmt::Debug for Options<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field("dynamic", &self.source.is_dynamic())
            .field("key", &self.key)
            .field("filterable", &self.filterable)
            .field("createable", &self.createable)
            .finish_non_exhaustive()
    }
}
