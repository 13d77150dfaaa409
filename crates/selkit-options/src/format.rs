//! Rendering raw values as labels and searchable text.

use selkit_fuzzy::Fragment;

use crate::item::SelectItem;
use crate::label::Label;

/// Which rendering of a value is requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatKind {
    /// The value as shown in the control once selected.
    Value,
    /// The value as shown in the option list.
    Label,
    /// Plain searchable text.
    Text,
}

/// Extra context for [`FormatKind::Label`] rendering.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormatMeta<'a> {
    /// Match highlight of the option's text for the current query.
    pub highlight: Option<&'a [Fragment<String>]>,
    /// Prefix to show before the label (e.g. `"Create "`).
    pub prefix: Option<&'a str>,
}

/// Renders raw values for the three [`FormatKind`]s.
pub trait OptionFormat<T> {
    /// Selected-value rendering.
    fn value(&self, item: &T) -> Label;

    /// Option-list rendering.
    fn label(&self, item: &T, meta: FormatMeta<'_>) -> Label;

    /// Searchable text. This is the canonical extraction path for filtering
    /// and the create-entry existence check.
    fn text(&self, item: &T) -> String;
}

/// Default label assembly: the highlight if there is one, else `text`.
#[must_use]
pub fn default_label(text: String, meta: FormatMeta<'_>) -> Label {
    let label = match meta.highlight {
        Some(fragments) => Label::highlighted(fragments.to_vec()),
        None => Label::plain(text),
    };
    match meta.prefix {
        Some(prefix) => label.with_prefix(prefix),
        None => label,
    }
}

/// Formats values through [`SelectItem::text`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DisplayFormat;

impl<T: SelectItem> OptionFormat<T> for DisplayFormat {
    fn value(&self, item: &T) -> Label {
        Label::plain(item.text())
    }

    fn label(&self, item: &T, meta: FormatMeta<'_>) -> Label {
        default_label(item.text(), meta)
    }

    fn text(&self, item: &T) -> String {
        item.text()
    }
}

/// Formats values through one named field ([`SelectItem::field`]).
///
/// Values without the field render as empty text.
#[derive(Debug, Clone)]
pub struct KeyFormat {
    key: String,
}

impl KeyFormat {
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl<T: SelectItem> OptionFormat<T> for KeyFormat {
    fn value(&self, item: &T) -> Label {
        Label::plain(self.text(item))
    }

    fn label(&self, item: &T, meta: FormatMeta<'_>) -> Label {
        default_label(self.text(item), meta)
    }

    fn text(&self, item: &T) -> String {
        item.field(&self.key).unwrap_or_default()
    }
}

/// Adapts a single `(value, kind, meta) -> Label` closure.
///
/// [`FormatKind::Text`] requests use the plain text of the returned label,
/// prefix included.
pub struct FnFormat<F>(pub F);

impl<F> FnFormat<F> {
    /// Wrap `format`, pinning its signature for closure inference.
    pub fn new<T>(format: F) -> Self
    where
        F: Fn(&T, FormatKind, FormatMeta<'_>) -> Label,
    {
        Self(format)
    }
}

impl<F> std::fmt::Debug for FnFormat<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnFormat").finish_non_exhaustive()
    }
}

impl<T, F> OptionFormat<T> for FnFormat<F>
where
    F: Fn(&T, FormatKind, FormatMeta<'_>) -> Label,
{
    fn value(&self, item: &T) -> Label {
        (self.0)(item, FormatKind::Value, FormatMeta::default())
    }

    fn label(&self, item: &T, meta: FormatMeta<'_>) -> Label {
        (self.0)(item, FormatKind::Label, meta)
    }

    fn text(&self, item: &T) -> String {
        (self.0)(item, FormatKind::Text, FormatMeta::default()).to_string()
    }
}
