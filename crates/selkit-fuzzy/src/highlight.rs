//! Splitting a match into literal and highlighted runs.

use crate::search::FuzzyMatch;

/// One run of a highlighted target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment<W> {
    /// Unmatched text, passed through verbatim.
    Literal(String),
    /// A maximal run of matched characters, wrapped by the caller.
    Matched(W),
}

impl<W> Fragment<W> {
    /// Whether this run is a matched run.
    #[must_use]
    pub const fn is_matched(&self) -> bool {
        matches!(self, Self::Matched(_))
    }
}

impl Fragment<String> {
    /// The text of the run regardless of kind.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Literal(s) | Self::Matched(s) => s,
        }
    }
}

/// Partition `result.target` into alternating unmatched/matched runs.
///
/// Adjacent matched characters form a single run and `wrap` is called once
/// per run. Empty runs are never emitted, so a target that starts with a
/// match begins with a [`Fragment::Matched`].
pub fn highlight<W>(result: &FuzzyMatch, mut wrap: impl FnMut(&str) -> W) -> Vec<Fragment<W>> {
    let mut fragments = Vec::new();
    let mut run = String::new();
    let mut open = false;

    for (i, c) in result.target.chars().enumerate() {
        let matched = result.matches.get(i).copied().unwrap_or(false);
        if matched != open {
            flush(&mut fragments, &mut run, open, &mut wrap);
            open = matched;
        }
        run.push(c);
    }
    flush(&mut fragments, &mut run, open, &mut wrap);

    fragments
}

/// [`highlight`] with matched runs kept as plain strings.
#[must_use]
pub fn highlight_spans(result: &FuzzyMatch) -> Vec<Fragment<String>> {
    highlight(result, str::to_owned)
}

fn flush<W>(
    fragments: &mut Vec<Fragment<W>>,
    run: &mut String,
    matched: bool,
    wrap: &mut impl FnMut(&str) -> W,
) {
    if run.is_empty() {
        return;
    }
    if matched {
        fragments.push(Fragment::Matched(wrap(run.as_str())));
        run.clear();
    } else {
        fragments.push(Fragment::Literal(std::mem::take(run)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::search;

    fn render(fragments: &[Fragment<String>]) -> String {
        fragments
            .iter()
            .map(|f| match f {
                Fragment::Literal(s) => s.clone(),
                Fragment::Matched(s) => format!("<{s}>"),
            })
            .collect()
    }

    #[test]
    fn adjacent_matches_merge() {
        let spans = highlight_spans(&search("pea", "pear"));
        assert_eq!(
            spans,
            vec![
                Fragment::Matched("pea".to_owned()),
                Fragment::Literal("r".to_owned()),
            ]
        );
    }

    #[test]
    fn scattered_matches_alternate() {
        let spans = highlight_spans(&search("pea", "pineapple"));
        assert_eq!(render(&spans), "<p>in<ea>pple");
    }

    #[test]
    fn wrap_called_once_per_run() {
        let mut calls = 0;
        let fragments = highlight(&search("hw", "hello world"), |s| {
            calls += 1;
            s.to_uppercase()
        });
        assert_eq!(calls, 2);
        assert_eq!(fragments[0], Fragment::Matched("H".to_owned()));
        assert_eq!(fragments[1], Fragment::Literal("ello ".to_owned()));
        assert_eq!(fragments[2], Fragment::Matched("W".to_owned()));
    }

    #[test]
    fn failed_match_is_one_literal() {
        let spans = highlight_spans(&search("zz", "apple"));
        assert_eq!(spans, vec![Fragment::Literal("apple".to_owned())]);
        assert!(!spans[0].is_matched());
    }

    #[test]
    fn empty_target_has_no_fragments() {
        assert!(highlight_spans(&search("a", "")).is_empty());
    }

    #[test]
    fn keeps_original_case() {
        let spans = highlight_spans(&search("app", "Apple"));
        assert_eq!(render(&spans), "<App>le");
    }
}
