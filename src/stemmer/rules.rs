//! Suffix rule tables for steps 2, 3 and 4.
//!
//! Each stage picks a short candidate list from a dispatch byte of the active
//! word and tries the candidates in order. The first suffix that matches
//! decides the stage, whether or not its measure condition then holds.

use serde::{Deserialize, Serialize};

/// Which rule set the pipeline runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Irregular table, `-ied` handling, the stricter terminal-`y` rule and
    /// the `-bli` / `-logi` forms of step 2.
    #[default]
    Extended,
    /// The rule set as first published.
    Classic,
}

impl Variant {
    /// Short identifier used in logs and CLI output.
    pub fn name(&self) -> &'static str {
        match self {
            Variant::Extended => "extended",
            Variant::Classic => "classic",
        }
    }
}

/// A literal suffix and what it is rewritten to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SuffixRule {
    pub suffix: &'static [u8],
    pub replacement: &'static [u8],
    /// Bytes one of which must directly precede the suffix. Empty means
    /// no condition.
    pub preceded_by: &'static [u8],
}

impl SuffixRule {
    const fn new(suffix: &'static [u8], replacement: &'static [u8]) -> Self {
        SuffixRule {
            suffix,
            replacement,
            preceded_by: b"",
        }
    }

    const fn remove(suffix: &'static [u8]) -> Self {
        Self::new(suffix, b"")
    }

    const fn remove_after(suffix: &'static [u8], preceded_by: &'static [u8]) -> Self {
        SuffixRule {
            suffix,
            replacement: b"",
            preceded_by,
        }
    }

    /// Whether `stem` (the bytes before the suffix) satisfies the
    /// preceding-byte condition.
    pub fn accepts_stem(&self, stem: &[u8]) -> bool {
        if self.preceded_by.is_empty() {
            return true;
        }
        stem.last().is_some_and(|b| self.preceded_by.contains(b))
    }
}

const STEP2_A: &[SuffixRule] = &[
    SuffixRule::new(b"ational", b"ate"),
    SuffixRule::new(b"tional", b"tion"),
];
const STEP2_C: &[SuffixRule] = &[
    SuffixRule::new(b"enci", b"ence"),
    SuffixRule::new(b"anci", b"ance"),
];
const STEP2_E: &[SuffixRule] = &[SuffixRule::new(b"izer", b"ize")];
const STEP2_L_EXTENDED: &[SuffixRule] = &[
    SuffixRule::new(b"bli", b"ble"),
    SuffixRule::new(b"alli", b"al"),
    SuffixRule::new(b"entli", b"ent"),
    SuffixRule::new(b"eli", b"e"),
    SuffixRule::new(b"ousli", b"ous"),
];
const STEP2_L_CLASSIC: &[SuffixRule] = &[
    SuffixRule::new(b"abli", b"able"),
    SuffixRule::new(b"alli", b"al"),
    SuffixRule::new(b"entli", b"ent"),
    SuffixRule::new(b"eli", b"e"),
    SuffixRule::new(b"ousli", b"ous"),
];
const STEP2_O: &[SuffixRule] = &[
    SuffixRule::new(b"ization", b"ize"),
    SuffixRule::new(b"ation", b"ate"),
    SuffixRule::new(b"ator", b"ate"),
];
const STEP2_S: &[SuffixRule] = &[
    SuffixRule::new(b"alism", b"al"),
    SuffixRule::new(b"iveness", b"ive"),
    SuffixRule::new(b"fulness", b"ful"),
    SuffixRule::new(b"ousness", b"ous"),
];
const STEP2_T: &[SuffixRule] = &[
    SuffixRule::new(b"aliti", b"al"),
    SuffixRule::new(b"iviti", b"ive"),
    SuffixRule::new(b"biliti", b"ble"),
];
const STEP2_G: &[SuffixRule] = &[SuffixRule::new(b"logi", b"log")];

/// Step 2 candidates, keyed by the second-to-last byte.
pub fn step2_rules(variant: Variant, key: u8) -> &'static [SuffixRule] {
    match (key, variant) {
        (b'a', _) => STEP2_A,
        (b'c', _) => STEP2_C,
        (b'e', _) => STEP2_E,
        (b'l', Variant::Extended) => STEP2_L_EXTENDED,
        (b'l', Variant::Classic) => STEP2_L_CLASSIC,
        (b'o', _) => STEP2_O,
        (b's', _) => STEP2_S,
        (b't', _) => STEP2_T,
        (b'g', Variant::Extended) => STEP2_G,
        _ => &[],
    }
}

const STEP3_E: &[SuffixRule] = &[
    SuffixRule::new(b"icate", b"ic"),
    SuffixRule::remove(b"ative"),
    SuffixRule::new(b"alize", b"al"),
];
const STEP3_I: &[SuffixRule] = &[SuffixRule::new(b"iciti", b"ic")];
const STEP3_L: &[SuffixRule] = &[SuffixRule::new(b"ical", b"ic"), SuffixRule::remove(b"ful")];
const STEP3_S: &[SuffixRule] = &[SuffixRule::remove(b"ness")];

/// Step 3 candidates, keyed by the last byte.
pub fn step3_rules(key: u8) -> &'static [SuffixRule] {
    match key {
        b'e' => STEP3_E,
        b'i' => STEP3_I,
        b'l' => STEP3_L,
        b's' => STEP3_S,
        _ => &[],
    }
}

const STEP4_A: &[SuffixRule] = &[SuffixRule::remove(b"al")];
const STEP4_C: &[SuffixRule] = &[SuffixRule::remove(b"ance"), SuffixRule::remove(b"ence")];
const STEP4_E: &[SuffixRule] = &[SuffixRule::remove(b"er")];
const STEP4_I: &[SuffixRule] = &[SuffixRule::remove(b"ic")];
const STEP4_L: &[SuffixRule] = &[SuffixRule::remove(b"able"), SuffixRule::remove(b"ible")];
const STEP4_N: &[SuffixRule] = &[
    SuffixRule::remove(b"ant"),
    SuffixRule::remove(b"ement"),
    SuffixRule::remove(b"ment"),
    SuffixRule::remove(b"ent"),
];
// `-ou` covers `-ous` once step 1 has left nothing after it.
const STEP4_O: &[SuffixRule] = &[
    SuffixRule::remove_after(b"ion", b"st"),
    SuffixRule::remove(b"ou"),
];
const STEP4_S: &[SuffixRule] = &[SuffixRule::remove(b"ism")];
const STEP4_T: &[SuffixRule] = &[SuffixRule::remove(b"ate"), SuffixRule::remove(b"iti")];
const STEP4_U: &[SuffixRule] = &[SuffixRule::remove(b"ous")];
const STEP4_V: &[SuffixRule] = &[SuffixRule::remove(b"ive")];
const STEP4_Z: &[SuffixRule] = &[SuffixRule::remove(b"ize")];

/// Step 4 candidates, keyed by the second-to-last byte.
pub fn step4_rules(key: u8) -> &'static [SuffixRule] {
    match key {
        b'a' => STEP4_A,
        b'c' => STEP4_C,
        b'e' => STEP4_E,
        b'i' => STEP4_I,
        b'l' => STEP4_L,
        b'n' => STEP4_N,
        b'o' => STEP4_O,
        b's' => STEP4_S,
        b't' => STEP4_T,
        b'u' => STEP4_U,
        b'v' => STEP4_V,
        b'z' => STEP4_Z,
        _ => &[],
    }
}
