// The five rule steps. Each one inspects the end of the word and decides on
// its own whether to act; the orchestrator only fixes their order.

use porter_core::character::undoubles;

use super::buffer::WordBuffer;
use super::rules::{STEP2, STEP3, STEP4};

/// Step 1a: plurals.
///
/// ```text
/// caresses  ->  caress
/// ponies    ->  poni
/// ties      ->  ti
/// caress    ->  caress
/// cats      ->  cat
/// ```
pub fn step1a(buf: &mut WordBuffer<'_>) {
    if buf.last() != Some('s') {
        return;
    }
    if buf.ends("sses") {
        buf.drop_last(2);
    } else if buf.ends("ies") {
        buf.set_to("i");
    } else if buf.penultimate() != Some('s') {
        buf.drop_last(1);
    }
}

/// Step 1b: `-eed`, `-ed` and `-ing`.
///
/// ```text
/// feed      ->  feed
/// agreed    ->  agree
/// disabled  ->  disable
/// matting   ->  mat
/// mating    ->  mate
/// meeting   ->  meet
/// milling   ->  mill
/// messing   ->  mess
/// ```
pub fn step1b(buf: &mut WordBuffer<'_>) {
    if buf.ends("eed") {
        if buf.stem_measure() > 0 {
            buf.drop_last(1);
        }
        return;
    }
    if !(buf.ends("ed") || buf.ends("ing")) || !buf.vowel_in_stem() {
        return;
    }
    buf.truncate_to_split();
    if buf.ends("at") {
        buf.set_to("ate");
    } else if buf.ends("bl") {
        buf.set_to("ble");
    } else if buf.ends("iz") {
        buf.set_to("ize");
    } else if buf.ends_with_double_consonant() {
        if buf.last().is_some_and(undoubles) {
            buf.drop_last(1);
        }
    } else if buf.stem_measure() == 1 && buf.is_cvc(buf.len()) {
        // split == len here, so this appends
        buf.set_to("e");
    }
}

/// Step 1c: terminal `y` becomes `i` when the stem has another vowel.
pub fn step1c(buf: &mut WordBuffer<'_>) {
    if buf.ends("y") && buf.vowel_in_stem() {
        buf.set_last('i');
    }
}

/// Step 2: double suffixes to single ones, gated by `m > 0`.
pub fn step2(buf: &mut WordBuffer<'_>) {
    STEP2.apply(buf);
}

/// Step 3: `-ic-`, `-full`, `-ness`, gated by `m > 0`.
pub fn step3(buf: &mut WordBuffer<'_>) {
    STEP3.apply(buf);
}

/// Step 4: derivational suffixes, gated by `m > 1`.
pub fn step4(buf: &mut WordBuffer<'_>) {
    STEP4.apply(buf);
}

/// Step 5: drop a final `e` when `m >= 1` and the word before it is not CVC,
/// then reduce a final `ll` to `l` when `m > 1`.
pub fn step5(buf: &mut WordBuffer<'_>) {
    buf.reset_split();
    if buf.last() == Some('e') {
        let m = buf.stem_measure();
        if m >= 1 && !buf.is_cvc(buf.len() - 1) {
            buf.drop_last(1);
        }
    }
    // The split still covers a dropped `e`; a trailing vowel does not change
    // the measure.
    if buf.last() == Some('l') && buf.ends_with_double_consonant() && buf.stem_measure() > 1 {
        buf.drop_last(1);
    }
}
