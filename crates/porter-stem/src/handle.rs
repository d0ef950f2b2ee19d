// PorterHandle: the stemmer plus the stopword bypass behind one API.
//
// The handle is shared by reference. Stemming takes `&self` and keeps all
// per-call state on the stack; the stopword set is swapped through the
// filter's own lock, so replacing it also takes `&self`. Only the default
// mode needs `&mut self`.

use std::fmt::Display;
use std::sync::Arc;

use porter_core::{MAX_WORD_CHARS, StemError, StemMode, StemmerOptions};
use tracing::{debug, trace, warn};

use crate::stemmer::{PorterStemmer, Stemmer};
use crate::stopwords::{StopwordFilter, StopwordSet};

/// Top-level handle owning the stemmer, its options and the stopword set.
#[derive(Debug, Default)]
pub struct PorterHandle {
    stemmer: PorterStemmer,
    stopwords: StopwordFilter,
    options: StemmerOptions,
}

impl PorterHandle {
    /// Create a handle in full mode with an empty stopword set.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: StemmerOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn options(&self) -> StemmerOptions {
        self.options
    }

    /// Mode used by [`stem`](Self::stem).
    pub fn set_mode(&mut self, mode: StemMode) {
        self.options.mode = mode;
    }

    // =========================================================================
    // Stemming
    // =========================================================================

    /// Stem `word` in the handle's default mode.
    pub fn stem(&self, word: &str) -> Result<String, StemError> {
        self.stem_with_mode(word, self.options.mode)
    }

    /// Stem `word` in an explicit mode.
    ///
    /// Over-long input is rejected before anything else. A stopword comes
    /// back unchanged in either mode.
    pub fn stem_with_mode(&self, word: &str, mode: StemMode) -> Result<String, StemError> {
        let mut chars: Vec<char> = word.chars().collect();
        if chars.len() > MAX_WORD_CHARS {
            return Err(StemError::InputTooLong {
                len: chars.len(),
                max: MAX_WORD_CHARS,
            });
        }
        if self.stopwords.is_stopword(word) {
            trace!(word, "stopword, not stemmed");
            return Ok(word.to_owned());
        }
        let len = self.stemmer.stem_in_place(&mut chars, mode);
        trace!(word, ?mode, len, "stemmed");
        Ok(chars[..len].iter().collect())
    }

    // =========================================================================
    // Stopwords
    // =========================================================================

    /// Replace the stopword set with `words`.
    pub fn set_stopwords<I, S>(&self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<Box<str>>,
    {
        self.publish(words.into_iter().collect());
    }

    /// Replace the stopword set from entries that may be malformed.
    ///
    /// Any bad entry rejects the batch and the previous set stays active.
    pub fn try_set_stopwords<I, S, E>(&self, entries: I) -> Result<(), StemError>
    where
        I: IntoIterator<Item = Result<S, E>>,
        S: Into<Box<str>>,
        E: Display,
    {
        match StopwordSet::try_from_entries(entries) {
            Ok(set) => {
                self.publish(set);
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "stopword batch rejected, keeping previous set");
                Err(e)
            }
        }
    }

    pub fn clear_stopwords(&self) {
        self.publish(StopwordSet::empty());
    }

    fn publish(&self, set: StopwordSet) {
        let count = set.len();
        let previous = self.stopwords.replace(set);
        debug!(count, previous = previous.len(), "stopword set replaced");
    }

    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.is_stopword(word)
    }

    pub fn stopword_count(&self) -> usize {
        self.stopwords.len()
    }

    /// Snapshot of the current stopword set.
    pub fn stopwords(&self) -> Arc<StopwordSet> {
        self.stopwords.snapshot()
    }

    /// Crate version string.
    pub fn version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_mode_is_full() {
        let handle = PorterHandle::new();
        assert_eq!(handle.options().mode, StemMode::Full);
        assert_eq!(handle.stem("generalizations").unwrap(), "gener");
    }

    #[test]
    fn set_mode_changes_default() {
        let mut handle = PorterHandle::new();
        handle.set_mode(StemMode::PluralsOnly);
        assert_eq!(handle.stem("generalizations").unwrap(), "generalization");
        assert_eq!(
            handle.stem_with_mode("generalizations", StemMode::Full).unwrap(),
            "gener"
        );
    }

    #[test]
    fn with_options() {
        let handle = PorterHandle::with_options(StemmerOptions::plurals_only());
        assert_eq!(handle.stem("ponies").unwrap(), "poni");
        assert_eq!(handle.stem("motoring").unwrap(), "motoring");
    }

    #[test]
    fn stopwords_bypass_both_modes() {
        let handle = PorterHandle::new();
        handle.set_stopwords(["running", "cats"]);
        for mode in [StemMode::Full, StemMode::PluralsOnly] {
            assert_eq!(handle.stem_with_mode("running", mode).unwrap(), "running");
            assert_eq!(handle.stem_with_mode("cats", mode).unwrap(), "cats");
        }
        assert_eq!(handle.stem("dogs").unwrap(), "dog");
    }

    #[test]
    fn stopword_match_is_exact() {
        let handle = PorterHandle::new();
        handle.set_stopwords(["cats"]);
        assert_eq!(handle.stem("Cats").unwrap(), "Cat");
    }

    #[test]
    fn set_stopwords_replaces_wholesale() {
        let handle = PorterHandle::new();
        handle.set_stopwords(["the", "of"]);
        assert_eq!(handle.stopword_count(), 2);
        handle.set_stopwords(["and"]);
        assert_eq!(handle.stopword_count(), 1);
        assert!(!handle.is_stopword("the"));
        assert!(handle.is_stopword("and"));
        handle.clear_stopwords();
        assert_eq!(handle.stopword_count(), 0);
    }

    #[test]
    fn rejected_batch_keeps_previous_set() {
        let handle = PorterHandle::new();
        handle.set_stopwords(["the"]);
        let batch: Vec<Result<&str, &str>> = vec![Ok("and"), Err("invalid UTF-8")];
        let err = handle.try_set_stopwords(batch).unwrap_err();
        assert!(matches!(err, StemError::MalformedStopwordEntry { index: 1, .. }));
        assert!(handle.is_stopword("the"));
        assert!(!handle.is_stopword("and"));
    }

    #[test]
    fn length_is_checked_before_stopwords() {
        let handle = PorterHandle::new();
        let long = "x".repeat(MAX_WORD_CHARS + 1);
        handle.set_stopwords([long.as_str()]);
        assert!(matches!(
            handle.stem(&long),
            Err(StemError::InputTooLong { .. })
        ));
    }

    #[test]
    fn snapshot_lists_words() {
        let handle = PorterHandle::new();
        handle.set_stopwords(["b", "a"]);
        assert_eq!(handle.stopwords().sorted(), vec!["a", "b"]);
    }

    #[test]
    fn version_is_set() {
        assert!(!PorterHandle::version().is_empty());
    }
}
