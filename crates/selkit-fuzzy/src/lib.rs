#![forbid(unsafe_code)]

//! Fuzzy matching for select option lists.
//!
//! The matcher walks the query left to right and greedily advances through
//! the target until each query character is found. There is no backtracking
//! and no optimal alignment: the first forward match wins. Scores reward
//! matches that start the string, start a word, or continue an unbroken run.
//!
//! - [`search`]: score one query against one target.
//! - [`rank`]: score a collection and order it best-first.
//! - [`highlight`]: split a matched target into literal and matched runs.
//!
//! # Example
//!
//! ```
//! use selkit_fuzzy::{highlight_spans, rank, search, Fragment};
//!
//! let result = search("pea", "pear");
//! assert_eq!(result.score, 12);
//!
//! let fruit = ["apple", "pear", "pineapple"];
//! let ranked = rank("pea", fruit, |item| *item);
//! assert_eq!(ranked[0].item, "pear");
//!
//! let spans = highlight_spans(&ranked[0].result);
//! assert_eq!(spans[0], Fragment::Matched("pea".to_owned()));
//! ```

pub mod highlight;
pub mod rank;
pub mod search;

pub use highlight::{Fragment, highlight, highlight_spans};
pub use rank::{Ranked, rank};
pub use search::{FuzzyMatch, MATCH, NO_MATCH, START, WORD_START, search};
