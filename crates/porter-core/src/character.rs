// Letter classes used by the suffix-stripping rules.
//
// The rules are defined over lower-case ASCII letters only. Anything outside
// that alphabet falls through to "consonant" in the buffer classifier, which
// keeps every check total.

/// Letters that are always vowels. `y` is decided by position and is handled
/// by the buffer classifier.
pub const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u'];

/// The letter whose class depends on the preceding character.
pub const SEMIVOWEL: char = 'y';

/// Final consonants that block the CVC pattern (`snow`, `box`, `tray`).
pub const CVC_BLOCKERS: &[char] = &['w', 'x', 'y'];

/// Doubled consonants kept intact when `-ed`/`-ing` is removed
/// (`milling`, `messing`, `buzzing`).
pub const KEPT_DOUBLES: &[char] = &['l', 's', 'z'];

/// Characters that must precede `-ion` for step 4 to remove it.
pub const ION_PRECEDERS: &[char] = &['s', 't'];

/// Check whether a character is one of the fixed vowels `a e i o u`.
pub fn is_plain_vowel(c: char) -> bool {
    VOWELS.contains(&c)
}

/// Check whether a final consonant may close a CVC pattern.
pub fn closes_cvc(c: char) -> bool {
    !CVC_BLOCKERS.contains(&c)
}

/// Check whether a doubled final consonant is undoubled after `-ed`/`-ing`.
pub fn undoubles(c: char) -> bool {
    !KEPT_DOUBLES.contains(&c)
}
