// Suffix-stripping engine.
//
// `buffer` holds the word and the measure/CVC primitives, `rules` the
// step 2-4 suffix tables, `steps` the five rule steps, and `porter` the
// orchestrator that runs them in order.

pub mod buffer;
mod porter;
pub mod rules;
pub mod steps;

pub use porter::PorterStemmer;

use porter_core::StemMode;

/// Trait for stemmers.
///
/// Implementations work on a `char` slice in place and report the new
/// length. The slice is never grown; everything past the returned length is
/// scratch.
pub trait Stemmer {
    /// Stem `word` in place and return the length of the stem.
    fn stem_in_place(&self, word: &mut [char], mode: StemMode) -> usize;

    /// Stem a copy of `word`.
    fn stem_chars(&self, word: &[char], mode: StemMode) -> Vec<char> {
        let mut buf = word.to_vec();
        let len = self.stem_in_place(&mut buf, mode);
        buf.truncate(len);
        buf
    }
}
