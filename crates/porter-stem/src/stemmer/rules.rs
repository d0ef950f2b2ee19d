// Suffix tables for steps 2, 3 and 4.
//
// Each table is bucketed by one character of the current word. Inside a
// bucket the order matters: the first rule whose suffix and condition match
// decides the outcome for the whole step, even when its measure gate then
// fails.

use porter_core::character::ION_PRECEDERS;

use super::buffer::WordBuffer;

/// Structural condition checked after the literal suffix matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    Always,
    /// The character right in front of the suffix is one of these.
    PrecededBy(&'static [char]),
}

impl Condition {
    fn holds(self, buf: &WordBuffer<'_>) -> bool {
        match self {
            Condition::Always => true,
            Condition::PrecededBy(set) => buf.before_split().is_some_and(|c| set.contains(&c)),
        }
    }
}

/// One suffix rewrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuffixRule {
    pub suffix: &'static str,
    /// Empty when the suffix is removed outright.
    pub replacement: &'static str,
    pub condition: Condition,
}

const fn rule(suffix: &'static str, replacement: &'static str) -> SuffixRule {
    SuffixRule {
        suffix,
        replacement,
        condition: Condition::Always,
    }
}

const fn strip(suffix: &'static str) -> SuffixRule {
    rule(suffix, "")
}

/// Which character of the word selects the bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOn {
    Last,
    Penultimate,
}

/// Ordered rules of one step.
#[derive(Debug)]
pub struct RuleTable {
    pub dispatch: DispatchOn,
    /// A matched rule is applied only when the stem's measure exceeds this.
    pub min_measure: usize,
    pub buckets: &'static [(char, &'static [SuffixRule])],
}

impl RuleTable {
    /// Rules to try for the given dispatch character.
    pub fn bucket(&self, key: char) -> &'static [SuffixRule] {
        self.buckets
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, rules)| *rules)
            .unwrap_or(&[])
    }

    /// Find the first rule that matches the word, leaving the buffer's split
    /// point in front of its suffix.
    pub fn find_match(&self, buf: &mut WordBuffer<'_>) -> Option<&'static SuffixRule> {
        let key = match self.dispatch {
            DispatchOn::Last => buf.last(),
            DispatchOn::Penultimate => buf.penultimate(),
        }?;
        self.bucket(key)
            .iter()
            .find(|r| buf.ends(r.suffix) && r.condition.holds(buf))
    }

    /// Run the step: the first matching rule is applied if the measure gate
    /// allows it. Returns whether the word changed.
    pub fn apply(&self, buf: &mut WordBuffer<'_>) -> bool {
        match self.find_match(buf) {
            Some(r) => buf.replace_if_measured(r.replacement, self.min_measure),
            None => false,
        }
    }
}

/// Step 2: map double suffixes to single ones (`-ization` is `-ize` plus
/// `-ation`, so it maps to `-ize`).
pub static STEP2: RuleTable = RuleTable {
    dispatch: DispatchOn::Penultimate,
    min_measure: 0,
    buckets: &[
        ('a', &[rule("ational", "ate"), rule("tional", "tion")]),
        ('c', &[rule("enci", "ence"), rule("anci", "ance")]),
        ('e', &[rule("izer", "ize")]),
        (
            'l',
            &[
                rule("bli", "ble"),
                rule("alli", "al"),
                rule("entli", "ent"),
                rule("eli", "e"),
                rule("ousli", "ous"),
            ],
        ),
        (
            'o',
            &[
                rule("ization", "ize"),
                rule("ation", "ate"),
                rule("ator", "ate"),
            ],
        ),
        (
            's',
            &[
                rule("alism", "al"),
                rule("iveness", "ive"),
                rule("fulness", "ful"),
                rule("ousness", "ous"),
            ],
        ),
        (
            't',
            &[
                rule("aliti", "al"),
                rule("iviti", "ive"),
                rule("biliti", "ble"),
            ],
        ),
        ('g', &[rule("logi", "log")]),
    ],
};

/// Step 3: `-ic-`, `-full`, `-ness` and friends.
pub static STEP3: RuleTable = RuleTable {
    dispatch: DispatchOn::Last,
    min_measure: 0,
    buckets: &[
        (
            'e',
            &[rule("icate", "ic"), strip("ative"), rule("alize", "al")],
        ),
        ('i', &[rule("iciti", "ic")]),
        ('l', &[rule("ical", "ic"), strip("ful")]),
        ('s', &[strip("ness")]),
    ],
};

/// Step 4: remove `-ant`, `-ence` and the like in context `<c>vcvc<v>`.
pub static STEP4: RuleTable = RuleTable {
    dispatch: DispatchOn::Penultimate,
    min_measure: 1,
    buckets: &[
        ('a', &[strip("al")]),
        ('c', &[strip("ance"), strip("ence")]),
        ('e', &[strip("er")]),
        ('i', &[strip("ic")]),
        ('l', &[strip("able"), strip("ible")]),
        (
            'n',
            &[strip("ant"), strip("ement"), strip("ment"), strip("ent")],
        ),
        (
            'o',
            &[
                SuffixRule {
                    suffix: "ion",
                    replacement: "",
                    condition: Condition::PrecededBy(ION_PRECEDERS),
                },
                // also catches -ous once step 1a removed the s
                strip("ou"),
            ],
        ),
        ('s', &[strip("ism")]),
        ('t', &[strip("ate"), strip("iti")]),
        ('u', &[strip("ous")]),
        ('v', &[strip("ive")]),
        ('z', &[strip("ize")]),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(table: &RuleTable, word: &str) -> String {
        let mut w: Vec<char> = word.chars().collect();
        let mut buf = WordBuffer::new(&mut w);
        table.apply(&mut buf);
        buf.as_slice().iter().collect()
    }

    #[test]
    fn bucket_lookup() {
        assert_eq!(STEP2.bucket('a').len(), 2);
        assert_eq!(STEP2.bucket('l')[0].suffix, "bli");
        assert!(STEP2.bucket('x').is_empty());
        assert_eq!(STEP4.bucket('n').len(), 4);
    }

    #[test]
    fn suffixes_are_ascii_and_sit_in_their_bucket() {
        for table in [&STEP2, &STEP4] {
            for (key, rules) in table.buckets {
                for r in *rules {
                    assert!(r.suffix.is_ascii());
                    let penultimate = r.suffix.chars().rev().nth(1);
                    assert_eq!(penultimate, Some(*key), "{}", r.suffix);
                }
            }
        }
        for (key, rules) in STEP3.buckets {
            for r in *rules {
                assert_eq!(r.suffix.chars().last(), Some(*key), "{}", r.suffix);
            }
        }
    }

    #[test]
    fn replacements_never_lengthen() {
        for table in [&STEP2, &STEP3, &STEP4] {
            for (_, rules) in table.buckets {
                for r in *rules {
                    assert!(r.replacement.len() <= r.suffix.len(), "{}", r.suffix);
                }
            }
        }
    }

    #[test]
    fn step2_rewrites() {
        assert_eq!(apply(&STEP2, "relational"), "relate");
        assert_eq!(apply(&STEP2, "conditional"), "condition");
        assert_eq!(apply(&STEP2, "valenci"), "valence");
        assert_eq!(apply(&STEP2, "digitizer"), "digitize");
        assert_eq!(apply(&STEP2, "conformabli"), "conformable");
        assert_eq!(apply(&STEP2, "vietnamization"), "vietnamize");
        assert_eq!(apply(&STEP2, "sensibiliti"), "sensible");
        assert_eq!(apply(&STEP2, "archaeologi"), "archaeolog");
    }

    #[test]
    fn step2_measure_gate() {
        // m("r") == 0
        assert_eq!(apply(&STEP2, "rational"), "rational");
        // m("theo") == 0
        assert_eq!(apply(&STEP2, "theologi"), "theologi");
    }

    #[test]
    fn step2_first_match_shadows_later_rules() {
        // "ational" wins over "tional", and its failed gate does not fall
        // through to the shorter suffix.
        let mut w: Vec<char> = "rational".chars().collect();
        let mut buf = WordBuffer::new(&mut w);
        let hit = STEP2.find_match(&mut buf).map(|r| r.suffix);
        assert_eq!(hit, Some("ational"));
    }

    #[test]
    fn step3_rewrites() {
        assert_eq!(apply(&STEP3, "triplicate"), "triplic");
        assert_eq!(apply(&STEP3, "formative"), "form");
        assert_eq!(apply(&STEP3, "formalize"), "formal");
        assert_eq!(apply(&STEP3, "electriciti"), "electric");
        assert_eq!(apply(&STEP3, "electrical"), "electric");
        assert_eq!(apply(&STEP3, "hopeful"), "hope");
        assert_eq!(apply(&STEP3, "goodness"), "good");
    }

    #[test]
    fn step4_measure_gate() {
        // m("adjust") == 2
        assert_eq!(apply(&STEP4, "adjustment"), "adjust");
        // m("rev") == 1
        assert_eq!(apply(&STEP4, "reval"), "reval");
        // m("") == 0
        assert_eq!(apply(&STEP4, "ate"), "ate");
    }

    #[test]
    fn step4_ement_blocks_shorter_suffixes() {
        // "ement" matches first; m("repl") == 1 so nothing is removed even
        // though "ment" or "ent" would leave a longer stem.
        assert_eq!(apply(&STEP4, "replement"), "replement");
    }

    #[test]
    fn step4_ion_needs_s_or_t() {
        assert_eq!(apply(&STEP4, "adoption"), "adopt");
        assert_eq!(apply(&STEP4, "decision"), "decis");
        assert_eq!(apply(&STEP4, "communion"), "communion");
        // a bare "ion" has nothing in front of the suffix
        assert_eq!(apply(&STEP4, "ion"), "ion");
    }

    #[test]
    fn single_character_words_have_no_penultimate_bucket() {
        assert_eq!(apply(&STEP2, "i"), "i");
        assert_eq!(apply(&STEP4, "i"), "i");
    }
}
