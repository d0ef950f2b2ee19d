// The Porter stemmer: step 1a through step 5 in order, or only the plural
// steps in plurals-only mode.

use porter_core::enums::MIN_STEMMED_WORD_CHARS;
use porter_core::{MAX_WORD_CHARS, StemError, StemMode};

use super::Stemmer;
use super::buffer::WordBuffer;
use super::steps::{step1a, step1b, step1c, step2, step3, step4, step5};

/// Porter's algorithm with the `-bli` and `-logi` departures in step 2.
#[derive(Debug, Clone, Copy, Default)]
pub struct PorterStemmer;

impl PorterStemmer {
    pub fn new() -> Self {
        Self
    }

    /// Stem a word, rejecting input longer than [`MAX_WORD_CHARS`].
    pub fn stem_word(&self, word: &str, mode: StemMode) -> Result<String, StemError> {
        let mut chars: Vec<char> = word.chars().collect();
        if chars.len() > MAX_WORD_CHARS {
            return Err(StemError::InputTooLong {
                len: chars.len(),
                max: MAX_WORD_CHARS,
            });
        }
        let len = self.stem_in_place(&mut chars, mode);
        Ok(chars[..len].iter().collect())
    }
}

impl Stemmer for PorterStemmer {
    fn stem_in_place(&self, word: &mut [char], mode: StemMode) -> usize {
        if word.len() < MIN_STEMMED_WORD_CHARS {
            return word.len();
        }
        let mut buf = WordBuffer::new(word);
        step1a(&mut buf);
        match mode {
            StemMode::Full => {
                step1b(&mut buf);
                step1c(&mut buf);
                step2(&mut buf);
                step3(&mut buf);
                step4(&mut buf);
                step5(&mut buf);
            }
            StemMode::PluralsOnly => step5(&mut buf),
        }
        buf.len()
    }
}
