//! Filtering derived options against typed text.

use std::fmt;

use selkit_fuzzy::{Fragment, highlight_spans, rank};

use crate::engine::DerivedOption;

/// Custom filter: receives the trimmed input and all derived candidates.
pub type FilterFn<T> = Box<dyn Fn(&str, Vec<DerivedOption<T>>) -> Vec<DerivedOption<T>>>;

/// How options are narrowed down as the user types.
///
/// Filters only run for non-empty trimmed input; an empty query always
/// passes every option through.
#[derive(Default)]
pub enum Filterable<T> {
    /// Every option passes for every input.
    Off,
    /// Rank by fuzzy score and highlight the matched characters.
    #[default]
    Fuzzy,
    /// Keep options whose text contains the input verbatim (case-sensitive),
    /// highlighting the first occurrence. Order is preserved.
    Substring,
    /// Full control over the candidate list.
    Custom(FilterFn<T>),
}

impl<T> Filterable<T> {
    /// Build a [`Filterable::Custom`] from a closure.
    pub fn custom(
        filter: impl Fn(&str, Vec<DerivedOption<T>>) -> Vec<DerivedOption<T>> + 'static,
    ) -> Self {
        Self::Custom(Box::new(filter))
    }

    /// Whether any filtering happens.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        !matches!(self, Self::Off)
    }
}

impl<T> fmt::Debug for Filterable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Off => f.write_str("Off"),
            Self::Fuzzy => f.write_str("Fuzzy"),
            Self::Substring => f.write_str("Substring"),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Fuzzy-rank `options` by their text, pairing each survivor with the
/// highlight of its text.
pub(crate) fn fuzzy<T>(
    query: &str,
    options: Vec<DerivedOption<T>>,
) -> Vec<(DerivedOption<T>, Vec<Fragment<String>>)> {
    rank(query, options, |option| option.text.as_str())
        .into_iter()
        .map(|ranked| {
            let spans = highlight_spans(&ranked.result);
            (ranked.item, spans)
        })
        .collect()
}

/// Keep options whose text contains `query`, pairing each with a
/// before/match/after highlight.
pub(crate) fn substring<T>(
    query: &str,
    options: Vec<DerivedOption<T>>,
) -> Vec<(DerivedOption<T>, Vec<Fragment<String>>)> {
    options
        .into_iter()
        .filter_map(|option| {
            let start = option.text.find(query)?;
            let end = start + query.len();
            let text = &option.text;
            let mut spans = Vec::with_capacity(3);
            if start > 0 {
                spans.push(Fragment::Literal(text[..start].to_owned()));
            }
            spans.push(Fragment::Matched(text[start..end].to_owned()));
            if end < text.len() {
                spans.push(Fragment::Literal(text[end..].to_owned()));
            }
            Some((option, spans))
        })
        .collect()
}
