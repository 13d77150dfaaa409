//! Selection modes and externally visible value shapes.

use std::fmt;

use crate::error::SelectError;

/// Whether a select holds one value or an ordered list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    #[default]
    Single,
    Multiple,
}

impl Mode {
    #[must_use]
    pub const fn is_multiple(self) -> bool {
        matches!(self, Self::Multiple)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single => f.write_str("single"),
            Self::Multiple => f.write_str("multiple"),
        }
    }
}

/// A selection as the host sees it.
///
/// Single selects surface a bare value or nothing; multiple selects surface
/// the values in pick order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectValue<V> {
    Single(Option<V>),
    Multiple(Vec<V>),
}

impl<V> SelectValue<V> {
    /// No selection in single mode.
    #[must_use]
    pub const fn none() -> Self {
        Self::Single(None)
    }

    #[must_use]
    pub const fn single(value: V) -> Self {
        Self::Single(Some(value))
    }

    #[must_use]
    pub const fn multiple(values: Vec<V>) -> Self {
        Self::Multiple(values)
    }

    /// The mode this shape belongs to.
    #[must_use]
    pub const fn mode(&self) -> Mode {
        match self {
            Self::Single(_) => Mode::Single,
            Self::Multiple(_) => Mode::Multiple,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Single(value) => value.is_none(),
            Self::Multiple(values) => values.is_empty(),
        }
    }

    /// The single value, if this is a non-empty single selection.
    #[must_use]
    pub const fn as_single(&self) -> Option<&V> {
        match self {
            Self::Single(value) => value.as_ref(),
            Self::Multiple(_) => None,
        }
    }

    /// The values of a multiple selection.
    #[must_use]
    pub fn as_multiple(&self) -> Option<&[V]> {
        match self {
            Self::Single(_) => None,
            Self::Multiple(values) => Some(values),
        }
    }

    /// Flatten into the internal list representation.
    #[must_use]
    pub fn into_vec(self) -> Vec<V> {
        match self {
            Self::Single(value) => value.into_iter().collect(),
            Self::Multiple(values) => values,
        }
    }
}

/// Check a value against `mode` and flatten it.
///
/// A single select accepts only [`SelectValue::Single`]; a multiple select
/// accepts only [`SelectValue::Multiple`].
pub(crate) fn normalize<V>(mode: Mode, value: SelectValue<V>) -> Result<Vec<V>, SelectError> {
    if value.mode() == mode {
        Ok(value.into_vec())
    } else {
        Err(SelectError::IncompatibleValue { mode })
    }
}

/// Rebuild the external shape from the internal list.
pub(crate) fn externalize<V: Clone>(mode: Mode, values: &[V]) -> SelectValue<V> {
    match mode {
        Mode::Single => SelectValue::Single(values.first().cloned()),
        Mode::Multiple => SelectValue::Multiple(values.to_vec()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_shapes_normalize() {
        assert_eq!(normalize(Mode::Single, SelectValue::single(1)), Ok(vec![1]));
        assert_eq!(normalize::<u8>(Mode::Single, SelectValue::none()), Ok(vec![]));
        assert_eq!(
            normalize(Mode::Multiple, SelectValue::multiple(vec![1, 2])),
            Ok(vec![1, 2])
        );
    }

    #[test]
    fn mismatched_shapes_fail_both_ways() {
        assert_eq!(
            normalize(Mode::Single, SelectValue::multiple(vec![1])),
            Err(SelectError::IncompatibleValue { mode: Mode::Single })
        );
        assert_eq!(
            normalize(Mode::Multiple, SelectValue::single(1)),
            Err(SelectError::IncompatibleValue {
                mode: Mode::Multiple
            })
        );
    }

    #[test]
    fn externalize_single_takes_first() {
        assert_eq!(externalize(Mode::Single, &[3, 4]), SelectValue::single(3));
        assert_eq!(externalize::<u8>(Mode::Single, &[]), SelectValue::none());
        assert_eq!(
            externalize(Mode::Multiple, &[3, 4]),
            SelectValue::multiple(vec![3, 4])
        );
    }

    #[test]
    fn accessors() {
        let single = SelectValue::single("a");
        assert_eq!(single.as_single(), Some(&"a"));
        assert_eq!(single.as_multiple(), None);
        assert!(!single.is_empty());
        assert!(SelectValue::<u8>::multiple(vec![]).is_empty());
    }
}
