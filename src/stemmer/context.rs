//! The stemming context: an owned working buffer and the rule pipeline.
//!
//! The active word is the whole of `buffer`; stages shrink it in place by
//! truncating and rewriting its tail. `boundary` is the length of the stem
//! in front of the most recently matched suffix, so after a successful
//! [`ends`](StemmerContext::ends) the matched suffix is `buffer[boundary..]`.

use std::ops::Range;
use std::sync::Arc;

use crate::config::{DEFAULT_CAPACITY_MARGIN, StemmerConfig};
use crate::error::{Result, StemmaError};
use crate::stemmer::classify::{has_vowel, is_consonant, is_cvc, is_double_consonant, measure};
use crate::stemmer::irregular::IrregularForms;
use crate::stemmer::rules::{SuffixRule, Variant, step2_rules, step3_rules, step4_rules};
use crate::stemmer::trace::{Outcome, Stage, StageOutput, StemTrace};
use crate::stemmer::validate_word;

/// Words of this length or shorter are returned unchanged.
const MAX_UNSTEMMED_LEN: usize = 2;

/// Reusable state for stemming one word at a time.
///
/// A context is cheap to keep around and is meant to be reused: its buffer
/// only ever grows, so after warming up no call allocates. The result of
/// [`stem`](Self::stem) borrows the context and is valid until the next call.
/// Contexts are not shared between threads; create one per worker.
#[derive(Debug, Clone)]
pub struct StemmerContext {
    buffer: Vec<u8>,
    boundary: usize,
    variant: Variant,
    capacity_margin: usize,
    min_capacity: usize,
    irregulars: Option<Arc<IrregularForms>>,
}

impl Default for StemmerContext {
    fn default() -> Self {
        Self::new()
    }
}

impl StemmerContext {
    /// Create a context with the extended rule set and the built-in
    /// irregular table. Does not allocate.
    pub fn new() -> Self {
        StemmerContext {
            buffer: Vec::new(),
            boundary: 0,
            variant: Variant::Extended,
            capacity_margin: DEFAULT_CAPACITY_MARGIN,
            min_capacity: 0,
            irregulars: Some(IrregularForms::builtin()),
        }
    }

    /// Create a context from a configuration, reserving
    /// `config.initial_capacity` bytes up front.
    pub fn with_config(config: &StemmerConfig) -> Result<Self> {
        let mut context = Self::with_irregulars(config, config.irregulars()?);
        context.buffer.try_reserve(config.initial_capacity)?;
        Ok(context)
    }

    /// Create a context that uses an already built irregular table.
    ///
    /// `config.irregular_forms` is not consulted; pass the table returned by
    /// [`StemmerConfig::irregulars`] to share one table among many contexts.
    /// Nothing is allocated until the first word is stemmed.
    pub fn with_irregulars(config: &StemmerConfig, irregulars: Option<Arc<IrregularForms>>) -> Self {
        StemmerContext {
            buffer: Vec::new(),
            boundary: 0,
            variant: config.variant,
            capacity_margin: config.capacity_margin,
            min_capacity: config.initial_capacity,
            irregulars,
        }
    }

    /// The rule set this context runs.
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Current buffer capacity in bytes.
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// The active word as left by the last call.
    pub fn active(&self) -> &[u8] {
        &self.buffer
    }

    /// Stem `word`, returning a view into the context's buffer.
    pub fn stem(&mut self, word: &[u8]) -> Result<&[u8]> {
        self.run(word, None)?;
        Ok(&self.buffer)
    }

    /// Stem `source[range]`.
    pub fn stem_range(&mut self, source: &[u8], range: Range<usize>) -> Result<&[u8]> {
        let word = source.get(range.clone()).ok_or_else(|| {
            StemmaError::invalid_input(format!(
                "range {}..{} is outside a source of {} bytes",
                range.start,
                range.end,
                source.len()
            ))
        })?;
        self.stem(word)
    }

    /// Stem a `&str` word.
    pub fn stem_str(&mut self, word: &str) -> Result<&str> {
        let stem = self.stem(word.as_bytes())?;
        std::str::from_utf8(stem).map_err(|e| StemmaError::other(format!("stem is not UTF-8: {e}")))
    }

    /// Stem `word` and record the active word after every stage.
    pub fn trace(&mut self, word: &str) -> Result<StemTrace> {
        let mut stages = Vec::with_capacity(Stage::ALL.len());
        let outcome = self.run(word.as_bytes(), Some(&mut stages))?;

        Ok(StemTrace {
            word: word.to_string(),
            outcome,
            stages,
            stem: String::from_utf8_lossy(&self.buffer).into_owned(),
        })
    }

    fn run(&mut self, word: &[u8], mut trace: Option<&mut Vec<StageOutput>>) -> Result<Outcome> {
        validate_word(word)?;
        self.load(word)?;

        if let Some(irregulars) = &self.irregulars {
            if let Some(stem) = irregulars.lookup(&self.buffer) {
                log::trace!("irregular form {:?} -> {stem:?}", String::from_utf8_lossy(word));
                self.buffer.clear();
                self.buffer.extend_from_slice(stem.as_bytes());
                return Ok(Outcome::Irregular);
            }
        }

        if self.buffer.len() <= MAX_UNSTEMMED_LEN {
            return Ok(Outcome::Short);
        }

        let steps: [(Stage, fn(&mut Self)); 6] = [
            (Stage::Step1ab, Self::step1ab),
            (Stage::Step1c, Self::step1c),
            (Stage::Step2, Self::step2),
            (Stage::Step3, Self::step3),
            (Stage::Step4, Self::step4),
            (Stage::Step5, Self::step5),
        ];
        for (stage, step) in steps {
            step(self);
            debug_assert!(!self.buffer.is_empty());
            if let Some(trace) = trace.as_mut() {
                trace.push(StageOutput {
                    stage,
                    word: String::from_utf8_lossy(&self.buffer).into_owned(),
                });
            }
        }

        Ok(Outcome::Pipeline)
    }

    /// Copy `word` into the buffer, growing it if needed. Capacity never
    /// shrinks.
    fn load(&mut self, word: &[u8]) -> Result<()> {
        self.buffer.clear();
        let wanted = word
            .len()
            .saturating_add(self.capacity_margin)
            .max(self.min_capacity);
        if self.buffer.capacity() < wanted {
            self.buffer.try_reserve(wanted)?;
            log::debug!("stemmer buffer grown to {} bytes", self.buffer.capacity());
        }
        self.buffer.extend_from_slice(word);
        self.boundary = 0;
        Ok(())
    }

    /// True if the active word ends with `suffix`; on a match `boundary` is
    /// set to the length of the stem in front of it.
    fn ends(&mut self, suffix: &[u8]) -> bool {
        if self.buffer.len() < suffix.len() || !self.buffer.ends_with(suffix) {
            return false;
        }
        self.boundary = self.buffer.len() - suffix.len();
        true
    }

    /// The bytes in front of the last matched suffix.
    fn stem_part(&self) -> &[u8] {
        &self.buffer[..self.boundary]
    }

    /// Replace everything after `boundary` with `replacement`.
    fn set_to(&mut self, replacement: &[u8]) {
        self.buffer.truncate(self.boundary);
        self.buffer.extend_from_slice(replacement);
    }

    fn shrink(&mut self, n: usize) {
        let len = self.buffer.len();
        self.buffer.truncate(len - n);
    }

    fn penultimate(&self) -> Option<u8> {
        let len = self.buffer.len();
        (len >= 2).then(|| self.buffer[len - 2])
    }

    /// Try `rules` in order; the first suffix that matches (and whose
    /// preceding-byte condition holds) is rewritten if the stem in front of
    /// it has a measure above `min_measure`, and the search stops.
    fn apply_first_match(&mut self, rules: &[SuffixRule], min_measure: usize) {
        for rule in rules {
            if self.ends(rule.suffix) && rule.accepts_stem(self.stem_part()) {
                if measure(self.stem_part()) > min_measure {
                    self.set_to(rule.replacement);
                }
                return;
            }
        }
    }

    /// Plurals and `-ed` / `-ing`.
    ///
    /// ```text
    /// caresses -> caress    cats     -> cat      feed     -> feed
    /// ponies   -> poni      agreed   -> agree    matting  -> mat
    /// ties     -> tie       disabled -> disable  mating   -> mate
    /// caress   -> caress    meetings -> meet     milling  -> mill
    /// ```
    fn step1ab(&mut self) {
        let extended = self.variant == Variant::Extended;

        if self.buffer.last() == Some(&b's') {
            if self.ends(b"sses") {
                self.shrink(2);
            } else if self.ends(b"ies") {
                // ties -> tie, but flies -> fli
                if extended && self.boundary == 1 {
                    self.shrink(1);
                } else {
                    self.shrink(2);
                }
            } else if self.buffer.len() > 1 && self.penultimate() != Some(b's') {
                self.shrink(1);
            }
        }

        if extended && self.ends(b"ied") {
            // died -> die, but spied -> spi
            if self.boundary == 1 {
                self.shrink(1);
            } else {
                self.shrink(2);
            }
        } else if self.ends(b"eed") {
            if measure(self.stem_part()) > 0 {
                self.shrink(1);
            }
        } else if (self.ends(b"ed") || self.ends(b"ing")) && has_vowel(self.stem_part()) {
            self.buffer.truncate(self.boundary);

            if self.ends(b"at") {
                self.set_to(b"ate");
            } else if self.ends(b"bl") {
                self.set_to(b"ble");
            } else if self.ends(b"iz") {
                self.set_to(b"ize");
            } else {
                let last = self.buffer.len() - 1;
                if is_double_consonant(&self.buffer, last) {
                    if !matches!(self.buffer[last], b'l' | b's' | b'z') {
                        self.buffer.truncate(last);
                    }
                } else if measure(&self.buffer) == 1 && is_cvc(&self.buffer, last) {
                    self.buffer.push(b'e');
                }
            }
        }
    }

    /// Terminal `y` to `i`.
    ///
    /// In the extended set this needs a consonant before the `y` and more
    /// than one letter in front of it, so `happy -> happi`, `spy -> spi` but
    /// `enjoy -> enjoy`, `by -> by`.
    fn step1c(&mut self) {
        if !self.ends(b"y") {
            return;
        }

        let turn = match self.variant {
            Variant::Extended => {
                self.boundary > 1 && is_consonant(&self.buffer, self.boundary - 1)
            }
            Variant::Classic => has_vowel(self.stem_part()),
        };
        if turn {
            let last = self.buffer.len() - 1;
            self.buffer[last] = b'i';
        }
    }

    /// Double suffixes to single ones, e.g. `-ization` to `-ize`.
    fn step2(&mut self) {
        let Some(key) = self.penultimate() else {
            return;
        };
        self.apply_first_match(step2_rules(self.variant, key), 0);
    }

    /// `-ic-`, `-ful`, `-ness` and friends.
    fn step3(&mut self) {
        let Some(&key) = self.buffer.last() else {
            return;
        };
        self.apply_first_match(step3_rules(key), 0);
    }

    /// Remove `-ant`, `-ence`, etc. from stems with measure above 1.
    fn step4(&mut self) {
        let Some(key) = self.penultimate() else {
            return;
        };
        self.apply_first_match(step4_rules(key), 1);
    }

    /// Drop a final `-e` and undouble a final `-ll` on long enough stems.
    fn step5(&mut self) {
        self.boundary = self.buffer.len();
        let m = measure(self.stem_part());

        if self.buffer.last() == Some(&b'e') {
            let len = self.buffer.len();
            let cvc_before = len >= 2 && is_cvc(&self.buffer, len - 2);
            if m > 1 || (m == 1 && !cvc_before) {
                self.buffer.pop();
            }
        }

        let len = self.buffer.len();
        if self.buffer.last() == Some(&b'l') && is_double_consonant(&self.buffer, len - 1) && m > 1 {
            self.buffer.pop();
        }
    }
}
