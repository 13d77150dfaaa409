//! Single query/target scoring.
//!
//! # Invariants
//!
//! 1. `score > 0` iff every query character occurs, in order, in the target
//!    (case-insensitive). The empty query never matches.
//! 2. `matches.len()` always equals `target.chars().count()`.
//! 3. A failed match has `score == 0` and an all-`false` mask.

/// Score of a failed match.
pub const NO_MATCH: u32 = 0;
/// Weight of a match after a broken streak.
pub const MATCH: u32 = 1;
/// Weight of a match that starts a word after a broken streak.
pub const WORD_START: u32 = 2;
/// Weight of the first character when it matches the start of the target.
pub const START: u32 = 3;

/// Result of scoring one query against one target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuzzyMatch {
    /// The original (unfolded) target string.
    pub target: String,
    /// Accumulated score; [`NO_MATCH`] if the query is not a subsequence.
    pub score: u32,
    /// Per-`char` mask over `target`: `true` where the character matched.
    pub matches: Vec<bool>,
}

impl FuzzyMatch {
    fn miss(target: &str, len: usize) -> Self {
        Self {
            target: target.to_owned(),
            score: NO_MATCH,
            matches: vec![false; len],
        }
    }

    /// Whether the query matched at all.
    #[must_use]
    pub fn is_match(&self) -> bool {
        self.score > NO_MATCH
    }

    /// Char indices of matched target characters, ascending.
    #[must_use]
    pub fn matched_indices(&self) -> Vec<usize> {
        self.matches
            .iter()
            .enumerate()
            .filter_map(|(i, &hit)| hit.then_some(i))
            .collect()
    }
}

/// Lowercase a single char without changing the char count.
///
/// Multi-char lowercase expansions keep only their first char so the match
/// mask stays aligned with `target.chars()`.
#[inline]
fn fold(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Score `query` against `target`.
///
/// `delta` starts at [`START`]. Each hit adds `delta` and then bumps it by
/// one; each skipped target character resets it to [`MATCH`]. A hit after a
/// reset that lands right after a space is promoted to [`WORD_START`].
#[must_use]
pub fn search(query: &str, target: &str) -> FuzzyMatch {
    let query: Vec<char> = query.chars().map(fold).collect();
    let folded: Vec<char> = target.chars().map(fold).collect();

    if query.is_empty() || query.len() > folded.len() {
        return FuzzyMatch::miss(target, folded.len());
    }

    let mut matches = vec![false; folded.len()];
    let mut score = NO_MATCH;
    let mut delta = START;
    let mut cursor = 0;

    for &wanted in &query {
        loop {
            let Some(&current) = folded.get(cursor) else {
                return FuzzyMatch::miss(target, folded.len());
            };

            if current == wanted {
                if delta == MATCH
                    && cursor > 0
                    && folded[cursor - 1] == ' '
                    && current != ' '
                {
                    delta = WORD_START;
                }
                matches[cursor] = true;
                score += delta;
                delta += 1;
                cursor += 1;
                break;
            }

            delta = MATCH;
            cursor += 1;
        }
    }

    FuzzyMatch {
        target: target.to_owned(),
        score,
        matches,
    }
}
