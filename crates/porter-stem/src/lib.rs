//! Porter suffix-stripping stemmer for English.
//!
//! - [`stemmer`] -- The rule engine: word buffer, suffix tables, steps
//! - [`stopwords`] -- Exact-match stopword set with copy-on-write replacement
//! - [`handle`] -- [`PorterHandle`], the stemmer plus its stopword bypass
//!
//! A process-wide handle backs the free functions [`stem`] and
//! [`set_stopwords`]; it starts with an empty stopword set.
//!
//! ```
//! use porter_stem::{PorterHandle, StemMode};
//!
//! let handle = PorterHandle::new();
//! assert_eq!(handle.stem("caresses").unwrap(), "caress");
//! assert_eq!(handle.stem_with_mode("motoring", StemMode::PluralsOnly).unwrap(), "motoring");
//! ```

pub mod handle;
pub mod stemmer;
pub mod stopwords;

use std::sync::LazyLock;

pub use handle::PorterHandle;
pub use porter_core::{MAX_WORD_CHARS, StemError, StemMode, StemmerOptions};
pub use stemmer::{PorterStemmer, Stemmer};
pub use stopwords::{StopwordFilter, StopwordSet};

static GLOBAL: LazyLock<PorterHandle> = LazyLock::new(PorterHandle::new);

/// The process-wide handle.
pub fn global() -> &'static PorterHandle {
    &GLOBAL
}

/// Stem `word` with the process-wide handle.
pub fn stem(word: &str, mode: StemMode) -> Result<String, StemError> {
    GLOBAL.stem_with_mode(word, mode)
}

/// Replace the process-wide stopword set.
pub fn set_stopwords<I, S>(words: I)
where
    I: IntoIterator<Item = S>,
    S: Into<Box<str>>,
{
    GLOBAL.set_stopwords(words);
}
