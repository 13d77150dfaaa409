//! Base-sensitivity string equality.
//!
//! Two strings are equal when they differ only in case or in combining
//! marks (accents): `"Apple" == "APPLE"`, `"café" == "Cafe"`. This is the
//! comparison used to decide whether typed text already exists among the
//! options.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

fn base_chars(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

/// Compare two strings ignoring case and accents.
#[must_use]
pub fn eq_ignoring_case(a: &str, b: &str) -> bool {
    base_chars(a).eq(base_chars(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ignores_case() {
        assert!(eq_ignoring_case("Apple", "aPPLE"));
    }

    #[test]
    fn ignores_accents() {
        assert!(eq_ignoring_case("café", "Cafe"));
        assert!(eq_ignoring_case("Ångström", "angstrom"));
    }

    #[test]
    fn whitespace_is_significant() {
        assert!(!eq_ignoring_case("Apple ", "Apple"));
    }

    #[test]
    fn different_letters_differ() {
        assert!(!eq_ignoring_case("Apple", "Apples"));
        assert!(!eq_ignoring_case("", "a"));
        assert!(eq_ignoring_case("", ""));
    }
}
