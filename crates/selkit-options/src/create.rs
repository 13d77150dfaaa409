//! Synthetic "create" entries for typed text.

use std::fmt;

use crate::engine::DerivedOption;
use crate::item::SelectItem;

/// One or more values to offer as create entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Created<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> Created<T> {
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::One(value) => vec![value],
            Self::Many(values) => values,
        }
    }
}

impl<T> From<T> for Created<T> {
    fn from(value: T) -> Self {
        Self::One(value)
    }
}

/// Decides what to create: `(trimmed_input, exists, current_options)`.
pub type ConditionalFn<T> = Box<dyn Fn(&str, bool, &[DerivedOption<T>]) -> Option<Created<T>>>;

/// Whether and how typed text becomes a selectable new value.
///
/// Every variant is consulted only for non-empty trimmed input. `exists` is
/// true when some filtered option's text equals the input ignoring case and
/// accents.
#[derive(Default)]
pub enum Createable<T> {
    /// No create entries.
    #[default]
    Off,
    /// Build the value with [`SelectItem::from_input`] (honouring `key`)
    /// unless it already exists.
    FromInput,
    /// Build the value with a closure unless it already exists.
    Always(Box<dyn Fn(&str) -> T>),
    /// Let a closure decide, even when the value exists. Returning `None`
    /// adds nothing.
    Conditional(ConditionalFn<T>),
}

impl<T> Createable<T> {
    pub fn always(create: impl Fn(&str) -> T + 'static) -> Self {
        Self::Always(Box::new(create))
    }

    pub fn conditional(
        create: impl Fn(&str, bool, &[DerivedOption<T>]) -> Option<Created<T>> + 'static,
    ) -> Self {
        Self::Conditional(Box::new(create))
    }

    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        !matches!(self, Self::Off)
    }
}

impl<T: SelectItem> Createable<T> {
    /// Values to append for `input` (already trimmed and non-empty).
    pub(crate) fn resolve(
        &self,
        input: &str,
        exists: bool,
        options: &[DerivedOption<T>],
        key: Option<&str>,
    ) -> Vec<T> {
        match self {
            Self::Off => Vec::new(),
            Self::FromInput if exists => Vec::new(),
            Self::FromInput => match T::from_input(key, input) {
                Some(value) => vec![value],
                None => {
                    tracing::warn!(
                        input,
                        key,
                        item = std::any::type_name::<T>(),
                        "createable is enabled but the option type cannot be built from input"
                    );
                    Vec::new()
                }
            },
            Self::Always(_) if exists => Vec::new(),
            Self::Always(create) => vec![create(input)],
            Self::Conditional(create) => create(input, exists, options)
                .map(Created::into_vec)
                .unwrap_or_default(),
        }
    }
}

impl<T> fmt::Debug for Createable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Off => f.write_str("Off"),
            Self::FromInput => f.write_str("FromInput"),
            Self::Always(_) => f.write_str("Always(..)"),
            Self::Conditional(_) => f.write_str("Conditional(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    #[test]
    fn from_input_skips_existing() {
        let create = Createable::<String>::FromInput;
        assert_eq!(create.resolve("Fig", false, &[], None), vec!["Fig".to_owned()]);
        assert!(create.resolve("Fig", true, &[], None).is_empty());
    }

    #[test]
    fn always_only_runs_when_missing() {
        let create = Createable::always(|input: &str| input.to_uppercase());
        assert_eq!(create.resolve("fig", false, &[], None), vec!["FIG".to_owned()]);
        assert!(create.resolve("fig", true, &[], None).is_empty());
    }

    #[test]
    fn conditional_sees_exists_and_can_return_many() {
        let create = Createable::conditional(|input: &str, exists, _options: &[DerivedOption<String>]| {
            if exists {
                None
            } else {
                Some(Created::Many(vec![input.to_owned(), format!("{input}s")]))
            }
        });
        assert_eq!(
            create.resolve("fig", false, &[], None),
            vec!["fig".to_owned(), "figs".to_owned()]
        );
        assert!(create.resolve("fig", true, &[], None).is_empty());
    }

    #[test]
    fn created_from_single_value() {
        assert_eq!(Created::from(3).into_vec(), vec![3]);
    }

    #[traced_test]
    #[test]
    fn from_input_warns_for_uncreatable_types() {
        let create = Createable::<&'static str>::FromInput;
        assert!(create.resolve("Fig", false, &[], None).is_empty());
        assert!(logs_contain("cannot be built from input"));
    }
}
