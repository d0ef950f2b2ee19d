// Stopword set and the copy-on-write filter that publishes it.
//
// The current set sits behind an `ArcSwap`. Readers load it without taking a
// lock and never wait on a publish. A replacement set is built completely
// before it is swapped in with a single pointer store. The previous set is
// freed when its last snapshot drops.

use std::fmt::Display;
use std::sync::Arc;

use arc_swap::ArcSwap;
use hashbrown::HashSet;
use porter_core::StemError;

/// Immutable set of words that bypass stemming. Matching is exact: no case
/// folding and no trimming.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopwordSet {
    words: HashSet<Box<str>>,
}

impl StopwordSet {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a set from fallible entries.
    ///
    /// The first failing entry rejects the whole batch; its position is
    /// reported in the error.
    pub fn try_from_entries<I, S, E>(entries: I) -> Result<Self, StemError>
    where
        I: IntoIterator<Item = Result<S, E>>,
        S: Into<Box<str>>,
        E: Display,
    {
        let mut words = HashSet::new();
        for (index, entry) in entries.into_iter().enumerate() {
            match entry {
                Ok(word) => {
                    words.insert(word.into());
                }
                Err(e) => {
                    return Err(StemError::MalformedStopwordEntry {
                        index,
                        reason: e.to_string(),
                    });
                }
            }
        }
        Ok(Self { words })
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// All words, sorted.
    pub fn sorted(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.words.iter().map(|w| &**w).collect();
        words.sort_unstable();
        words
    }
}

impl<S: Into<Box<str>>> FromIterator<S> for StopwordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Shared, atomically replaceable stopword set.
#[derive(Debug)]
pub struct StopwordFilter {
    current: ArcSwap<StopwordSet>,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::with_set(StopwordSet::empty())
    }
}

impl StopwordFilter {
    /// Create a filter with an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_set(set: StopwordSet) -> Self {
        Self {
            current: ArcSwap::from_pointee(set),
        }
    }

    /// The set currently published. Stays valid across later replacements.
    pub fn snapshot(&self) -> Arc<StopwordSet> {
        self.current.load_full()
    }

    pub fn is_stopword(&self, word: &str) -> bool {
        self.current.load().contains(word)
    }

    pub fn len(&self) -> usize {
        self.current.load().len()
    }

    pub fn is_empty(&self) -> bool {
        self.current.load().is_empty()
    }

    /// Publish `set` and return the one it replaced.
    pub fn replace(&self, set: StopwordSet) -> Arc<StopwordSet> {
        self.current.swap(Arc::new(set))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_set_matches_nothing() {
        let set = StopwordSet::empty();
        assert!(set.is_empty());
        assert!(!set.contains("the"));
        assert!(!set.contains(""));
    }

    #[test]
    fn matching_is_exact() {
        let set: StopwordSet = ["the", "and"].into_iter().collect();
        assert!(set.contains("the"));
        assert!(!set.contains("The"));
        assert!(!set.contains(" the"));
        assert!(!set.contains("th"));
    }

    #[test]
    fn duplicates_collapse() {
        let set: StopwordSet = ["a", "b", "a"].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn sorted_dump() {
        let set: StopwordSet = ["of", "and", "the"].into_iter().collect();
        assert_eq!(set.sorted(), vec!["and", "of", "the"]);
    }

    #[test]
    fn try_from_entries_accepts_clean_batch() {
        let entries: Vec<Result<&str, String>> = vec![Ok("the"), Ok("of")];
        let set = StopwordSet::try_from_entries(entries).unwrap();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn try_from_entries_reports_first_bad_index() {
        let entries: Vec<Result<&str, &str>> =
            vec![Ok("the"), Err("not a string"), Err("also bad")];
        let err = StopwordSet::try_from_entries(entries).unwrap_err();
        assert_eq!(
            err,
            StemError::MalformedStopwordEntry {
                index: 1,
                reason: "not a string".to_string(),
            }
        );
    }

    #[test]
    fn filter_starts_empty() {
        let filter = StopwordFilter::new();
        assert!(filter.is_empty());
        assert!(!filter.is_stopword("the"));
    }

    #[test]
    fn replace_swaps_wholesale() {
        let filter = StopwordFilter::with_set(["the"].into_iter().collect());
        let old = filter.replace(["and"].into_iter().collect());
        assert!(old.contains("the"));
        assert!(!filter.is_stopword("the"));
        assert!(filter.is_stopword("and"));
        assert_eq!(filter.len(), 1);
    }

    #[test]
    fn snapshot_survives_replacement() {
        let filter = StopwordFilter::with_set(["the"].into_iter().collect());
        let snap = filter.snapshot();
        let old = filter.replace(StopwordSet::empty());
        assert!(snap.contains("the"));
        assert!(filter.is_empty());
        assert_eq!(Arc::strong_count(&snap), 2);
        drop(old);
        assert_eq!(Arc::strong_count(&snap), 1);
    }
}
