//! Ranking a collection against a query.

use crate::search::{FuzzyMatch, search};

/// One surviving item of [`rank`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ranked<T> {
    /// The ranked item.
    pub item: T,
    /// Position of the item in the input sequence.
    pub index: usize,
    /// The match against the item's extracted text.
    pub result: FuzzyMatch,
}

impl<T> Ranked<T> {
    /// Match score (always non-zero for ranked items).
    #[inline]
    #[must_use]
    pub fn score(&self) -> u32 {
        self.result.score
    }

    /// Per-char match mask over the extracted text.
    #[inline]
    #[must_use]
    pub fn matches(&self) -> &[bool] {
        &self.result.matches
    }
}

/// Score every item and return the matches best-first.
///
/// `key` extracts the searchable text of each item. Items scoring zero are
/// dropped. Equal scores keep input order. Each call allocates a fresh result;
/// nothing is cached between calls.
pub fn rank<T, K>(query: &str, items: impl IntoIterator<Item = T>, key: K) -> Vec<Ranked<T>>
where
    K: Fn(&T) -> &str,
{
    let mut ranked: Vec<Ranked<T>> = items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| {
            let result = search(query, key(&item));
            result.is_match().then_some(Ranked {
                item,
                index,
                result,
            })
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.result
            .score
            .cmp(&a.result.score)
            .then_with(|| a.index.cmp(&b.index))
    });
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ties_keep_input_order() {
        let ranked = rank("ban", ["banana", "bandana"], |s| *s);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].score(), ranked[1].score());
        assert_eq!(ranked[0].item, "banana");
        assert_eq!(ranked[0].index, 0);
        assert_eq!(ranked[1].item, "bandana");
    }

    #[test]
    fn higher_scores_first() {
        let ranked = rank("pea", ["pineapple", "pear"], |s| *s);
        let order: Vec<_> = ranked.iter().map(|r| r.item).collect();
        assert_eq!(order, vec!["pear", "pineapple"]);
        assert_eq!(ranked[0].index, 1);
    }

    #[test]
    fn non_matches_are_dropped() {
        let fruit = ["apple", "banana", "pear", "pineapple", "kiwi"];
        let ranked = rank("pea", fruit, |s| *s);
        let names: Vec<_> = ranked.iter().map(|r| r.item).collect();
        assert_eq!(names, vec!["pear", "pineapple"]);
    }

    #[test]
    fn keyed_extraction() {
        struct Fruit {
            name: String,
            id: u32,
        }
        let fruit = vec![
            Fruit {
                name: "Kiwi".into(),
                id: 1,
            },
            Fruit {
                name: "Kumquat".into(),
                id: 2,
            },
        ];
        let ranked = rank("kq", &fruit, |f| f.name.as_str());
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].item.id, 2);
    }

    #[test]
    fn empty_query_ranks_nothing() {
        assert!(rank("", ["a", "b"], |s| *s).is_empty());
    }
}
