// Word buffer and the primitives every rule step is built from: consonant
// classification, measure, suffix matching and suffix rewriting.
//
// Positions are lengths rather than inclusive indices, so an empty stem is
// `split == 0` instead of an index of -1.

use porter_core::character::{SEMIVOWEL, closes_cvc, is_plain_vowel};

/// A word being stemmed, borrowed mutably for the length of one call.
///
/// Characters past `end` are scratch space: rewrites never grow the word past
/// its original length, so a replacement always fits in the slice.
pub struct WordBuffer<'a> {
    chars: &'a mut [char],
    /// Number of characters currently part of the word.
    end: usize,
    /// Length of the stem in front of the most recently matched suffix.
    split: usize,
}

impl<'a> WordBuffer<'a> {
    pub fn new(chars: &'a mut [char]) -> Self {
        let end = chars.len();
        Self {
            chars,
            end,
            split: end,
        }
    }

    /// Current word length.
    pub fn len(&self) -> usize {
        self.end
    }

    pub fn is_empty(&self) -> bool {
        self.end == 0
    }

    /// Length of the stem before the last matched suffix.
    pub fn split(&self) -> usize {
        self.split
    }

    /// The word as it currently stands.
    pub fn as_slice(&self) -> &[char] {
        &self.chars[..self.end]
    }

    /// Last character of the word.
    pub fn last(&self) -> Option<char> {
        self.end.checked_sub(1).map(|i| self.chars[i])
    }

    /// Character before the last one.
    pub fn penultimate(&self) -> Option<char> {
        self.end.checked_sub(2).map(|i| self.chars[i])
    }

    /// Character immediately in front of the last matched suffix.
    pub fn before_split(&self) -> Option<char> {
        self.split.checked_sub(1).map(|i| self.chars[i])
    }

    // -----------------------------------------------------------------------
    // Classification
    // -----------------------------------------------------------------------

    /// Check whether the character at `i` acts as a consonant.
    ///
    /// `a e i o u` are vowels. `y` is a consonant at the start of the word
    /// and otherwise takes the opposite class of the character before it
    /// (`toy` vs. `syzygy`). Everything else is a consonant.
    pub fn is_consonant(&self, i: usize) -> bool {
        match self.chars[i] {
            c if is_plain_vowel(c) => false,
            SEMIVOWEL => i == 0 || !self.is_consonant(i - 1),
            _ => true,
        }
    }

    /// Measure of the first `limit` characters.
    ///
    /// Reading the prefix as `[C](VC)^m[V]`, where `C` and `V` are maximal
    /// consonant and vowel runs, returns `m`:
    ///
    /// ```text
    /// tr, ee, tree, y, by           m = 0
    /// trouble, oats, trees, ivy     m = 1
    /// troubles, private, oaten      m = 2
    /// ```
    pub fn measure(&self, limit: usize) -> usize {
        let mut n = 0;
        let mut i = 0;
        while i < limit && self.is_consonant(i) {
            i += 1;
        }
        loop {
            while i < limit && !self.is_consonant(i) {
                i += 1;
            }
            if i == limit {
                return n;
            }
            while i < limit && self.is_consonant(i) {
                i += 1;
            }
            n += 1;
        }
    }

    /// Measure of the stem in front of the last matched suffix.
    pub fn stem_measure(&self) -> usize {
        self.measure(self.split)
    }

    /// Check whether the stem in front of the last matched suffix contains a
    /// vowel.
    pub fn vowel_in_stem(&self) -> bool {
        (0..self.split).any(|i| !self.is_consonant(i))
    }

    /// Check whether the word ends in two identical consonants.
    pub fn ends_with_double_consonant(&self) -> bool {
        if self.end < 2 {
            return false;
        }
        let last = self.end - 1;
        self.chars[last] == self.chars[last - 1] && self.is_consonant(last)
    }

    /// Check whether the first `len` characters end in consonant-vowel-
    /// consonant, with the final consonant not `w`, `x` or `y`.
    ///
    /// Used to restore an `e` on short words: `cav(e)`, `lov(e)`, `hop(e)`,
    /// `crim(e)`, but not `snow`, `box`, `tray`.
    pub fn is_cvc(&self, len: usize) -> bool {
        if len < 3 {
            return false;
        }
        let i = len - 1;
        self.is_consonant(i)
            && !self.is_consonant(i - 1)
            && self.is_consonant(i - 2)
            && closes_cvc(self.chars[i])
    }

    // -----------------------------------------------------------------------
    // Matching
    // -----------------------------------------------------------------------

    /// Check whether the word ends with `suffix`.
    ///
    /// On a match the split point moves to the start of the suffix. On a
    /// mismatch nothing changes. Suffixes are ASCII literals.
    pub fn ends(&mut self, suffix: &str) -> bool {
        let n = suffix.len();
        if n > self.end {
            return false;
        }
        let start = self.end - n;
        if !self.chars[start..self.end].iter().copied().eq(suffix.chars()) {
            return false;
        }
        self.split = start;
        true
    }

    // -----------------------------------------------------------------------
    // Rewriting
    // -----------------------------------------------------------------------

    /// Replace everything after the split point with `replacement`.
    pub fn set_to(&mut self, replacement: &str) {
        let n = replacement.len();
        debug_assert!(self.split + n <= self.chars.len());
        for (slot, c) in self.chars[self.split..].iter_mut().zip(replacement.chars()) {
            *slot = c;
        }
        self.end = self.split + n;
    }

    /// Replace the matched suffix only if the stem's measure exceeds
    /// `min_measure`. Returns whether the rewrite happened.
    pub fn replace_if_measured(&mut self, replacement: &str, min_measure: usize) -> bool {
        if self.stem_measure() > min_measure {
            self.set_to(replacement);
            true
        } else {
            false
        }
    }

    /// Cut the word back to the stem before the last matched suffix.
    pub fn truncate_to_split(&mut self) {
        self.end = self.split;
    }

    /// Drop `n` characters from the end of the word.
    pub fn drop_last(&mut self, n: usize) {
        self.end = self.end.saturating_sub(n);
    }

    /// Overwrite the final character.
    pub fn set_last(&mut self, c: char) {
        if let Some(i) = self.end.checked_sub(1) {
            self.chars[i] = c;
        }
    }

    /// Make the whole word the "stem" for subsequent measure checks.
    pub fn reset_split(&mut self) {
        self.split = self.end;
    }
}
