//! English suffix-stripping stemmer.
//!
//! The stemmer reduces a lowercase ASCII word to a root form so that
//! plurals, verb tenses and derivational suffixes of the same root collapse
//! together at index time. It applies a fixed sequence of rewrite stages to
//! a working buffer:
//!
//! 1. plurals and `-ed` / `-ing` (step 1a/1b), terminal `y` (step 1c)
//! 2. double suffixes to single ones: `-ational` → `-ate`, `-ization` → `-ize`
//! 3. `-icate` → `-ic`, `-ful` → "", `-ness` → ""
//! 4. removal of `-al`, `-ance`, `-ence`, `-er`, ... on long enough stems
//! 5. final `-e` and `-ll` cleanup
//!
//! A small table of irregular forms is consulted first and short-circuits the
//! stages entirely.
//!
//! # Examples
//!
//! ```
//! use stemma::stemmer::StemmerContext;
//!
//! let mut context = StemmerContext::new();
//!
//! assert_eq!(context.stem(b"caresses").unwrap(), b"caress");
//! assert_eq!(context.stem(b"generalizations").unwrap(), b"gener");
//! assert_eq!(context.stem(b"skies").unwrap(), b"sky");
//! ```
//!
//! Input must be non-empty lowercase ASCII letters; anything else is
//! rejected with [`StemmaError::InvalidInput`]. Splitting text into words and
//! normalizing case is the caller's job.

pub mod batch;
pub mod classify;
pub mod context;
pub mod irregular;
pub mod porter;
pub mod rules;
pub mod trace;

pub use batch::stem_batch;
pub use context::StemmerContext;
pub use irregular::{IrregularEntry, IrregularForms};
pub use porter::PorterStemmer;
pub use rules::Variant;
pub use trace::{Outcome, Stage, StageOutput, StemTrace};

use crate::error::{Result, StemmaError};

/// Trait for stemming algorithms.
pub trait Stemmer: Send + Sync {
    /// Stem a word to its root form.
    fn stem(&self, word: &str) -> Result<String>;

    /// Get the name of this stemmer.
    fn name(&self) -> &'static str;
}

/// Check that `word` is acceptable stemmer input.
pub fn validate_word(word: &[u8]) -> Result<()> {
    if word.is_empty() {
        return Err(StemmaError::invalid_input("empty word"));
    }
    if let Some(pos) = word.iter().position(|b| !b.is_ascii_lowercase()) {
        return Err(StemmaError::invalid_input(format!(
            "byte 0x{:02x} at position {pos} is not a lowercase ASCII letter",
            word[pos]
        )));
    }
    Ok(())
}

/// True if `word` would be accepted by [`validate_word`].
pub fn is_stemmable(word: &str) -> bool {
    !word.is_empty() && word.bytes().all(|b| b.is_ascii_lowercase())
}
