//! Errors raised by the selection engine.

use crate::value::Mode;

/// Fatal configuration errors.
///
/// These indicate host programming mistakes and are never coerced away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SelectError {
    /// A value's shape does not match the select's mode: a list for a
    /// single select, or a bare value for a multiple select.
    #[error("incompatible value type for {mode} select")]
    IncompatibleValue { mode: Mode },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_names_the_mode() {
        let single = SelectError::IncompatibleValue { mode: Mode::Single };
        let multiple = SelectError::IncompatibleValue {
            mode: Mode::Multiple,
        };
        assert_eq!(single.to_string(), "incompatible value type for single select");
        assert_eq!(
            multiple.to_string(),
            "incompatible value type for multiple select"
        );
    }
}
