// Stemming modes, options and size limits

use serde::{Deserialize, Serialize};

/// Maximum number of characters in a word accepted by the stemmer.
///
/// Longer words are rejected with [`crate::StemError::InputTooLong`] instead
/// of being truncated.
pub const MAX_WORD_CHARS: usize = 254;

/// Words shorter than this are returned unchanged.
pub const MIN_STEMMED_WORD_CHARS: usize = 3;

/// Which rule steps run for a word.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StemMode {
    /// Step 1a through step 5.
    #[default]
    Full,
    /// Plural stripping (step 1a) followed by the final cleanup (step 5).
    PluralsOnly,
}

impl StemMode {
    /// Map the `plurals_only` flag used by the bindings to a mode.
    pub fn from_plurals_only(plurals_only: bool) -> Self {
        if plurals_only {
            StemMode::PluralsOnly
        } else {
            StemMode::Full
        }
    }

    pub fn is_plurals_only(self) -> bool {
        self == StemMode::PluralsOnly
    }
}

/// Per-handle stemming options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StemmerOptions {
    /// Mode used when the caller does not pass one explicitly.
    pub mode: StemMode,
}

impl StemmerOptions {
    pub fn plurals_only() -> Self {
        Self {
            mode: StemMode::PluralsOnly,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_mode_is_full() {
        assert_eq!(StemMode::default(), StemMode::Full);
        assert_eq!(StemmerOptions::default().mode, StemMode::Full);
    }

    #[test]
    fn plurals_only_flag() {
        assert_eq!(StemMode::from_plurals_only(true), StemMode::PluralsOnly);
        assert_eq!(StemMode::from_plurals_only(false), StemMode::Full);
        assert!(StemMode::PluralsOnly.is_plurals_only());
        assert!(!StemMode::Full.is_plurals_only());
    }

    #[test]
    fn options_deserialize_camel_case() {
        let opts: StemmerOptions = serde_json::from_str(r#"{"mode":"pluralsOnly"}"#).unwrap();
        assert_eq!(opts, StemmerOptions::plurals_only());
    }

    #[test]
    fn options_missing_fields_use_defaults() {
        let opts: StemmerOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(opts, StemmerOptions::default());
    }

    #[test]
    fn size_limits() {
        assert_eq!(MAX_WORD_CHARS, 254);
        assert_eq!(MIN_STEMMED_WORD_CHARS, 3);
    }
}
