//! Shareable stemmer backed by a pool of contexts.
//!
//! # Examples
//!
//! ```
//! use stemma::stemmer::{PorterStemmer, Stemmer};
//!
//! let stemmer = PorterStemmer::new();
//!
//! assert_eq!(stemmer.stem("running").unwrap(), "run");
//! assert_eq!(stemmer.stem("flies").unwrap(), "fli");
//! assert_eq!(stemmer.stem("traditional").unwrap(), "tradit");
//! ```

use std::sync::Arc;

use parking_lot::Mutex;

use crate::config::StemmerConfig;
use crate::error::Result;
use crate::stemmer::Stemmer;
use crate::stemmer::context::StemmerContext;
use crate::stemmer::irregular::IrregularForms;

/// Upper bound on idle contexts kept for reuse.
const MAX_IDLE_CONTEXTS: usize = 32;

/// A [`Stemmer`] that can be shared across threads.
///
/// Each call checks a [`StemmerContext`] out of an internal pool, so
/// concurrent callers never share a buffer and a single-threaded caller
/// reuses one context for every word.
pub struct PorterStemmer {
    config: StemmerConfig,
    irregulars: Option<Arc<IrregularForms>>,
    pool: Mutex<Vec<StemmerContext>>,
}

impl std::fmt::Debug for PorterStemmer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PorterStemmer")
            .field("variant", &self.config.variant)
            .field("idle_contexts", &self.pool.lock().len())
            .finish()
    }
}

impl Default for PorterStemmer {
    fn default() -> Self {
        Self::new()
    }
}

impl PorterStemmer {
    /// Create a stemmer with the default configuration.
    pub fn new() -> Self {
        PorterStemmer {
            config: StemmerConfig::default(),
            irregulars: Some(IrregularForms::builtin()),
            pool: Mutex::new(Vec::new()),
        }
    }

    /// Create a stemmer from a configuration.
    pub fn with_config(config: StemmerConfig) -> Result<Self> {
        let irregulars = config.irregulars()?;
        Ok(PorterStemmer {
            config,
            irregulars,
            pool: Mutex::new(Vec::new()),
        })
    }

    /// The configuration in use.
    pub fn config(&self) -> &StemmerConfig {
        &self.config
    }

    /// Run `f` with a context checked out of the pool.
    pub fn with_context<R>(&self, f: impl FnOnce(&mut StemmerContext) -> R) -> R {
        let pooled = self.pool.lock().pop();
        let mut context = pooled.unwrap_or_else(|| {
            StemmerContext::with_irregulars(&self.config, self.irregulars.clone())
        });

        let result = f(&mut context);

        let mut pool = self.pool.lock();
        if pool.len() < MAX_IDLE_CONTEXTS {
            pool.push(context);
        }
        result
    }

    /// Stem every word of `words` with one context.
    pub fn stem_all<S: AsRef<str>>(&self, words: &[S]) -> Result<Vec<String>> {
        self.with_context(|context| {
            words
                .iter()
                .map(|word| context.stem_str(word.as_ref()).map(str::to_string))
                .collect()
        })
    }
}

impl Stemmer for PorterStemmer {
    fn stem(&self, word: &str) -> Result<String> {
        self.with_context(|context| context.stem_str(word).map(str::to_string))
    }

    fn name(&self) -> &'static str {
        "porter"
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;
    use crate::stemmer::Variant;

    #[test]
    fn test_porter_stemmer() {
        let stemmer = PorterStemmer::new();

        assert_eq!(stemmer.stem("running").unwrap(), "run");
        assert_eq!(stemmer.stem("flies").unwrap(), "fli");
        assert_eq!(stemmer.stem("died").unwrap(), "die");
        assert_eq!(stemmer.stem("agreed").unwrap(), "agre");
        assert_eq!(stemmer.stem("disabled").unwrap(), "disabl");
        assert_eq!(stemmer.stem("itemization").unwrap(), "item");
        assert_eq!(stemmer.stem("sensational").unwrap(), "sensat");
        assert_eq!(stemmer.stem("traditional").unwrap(), "tradit");
    }

    #[test]
    fn test_invalid_word() {
        let stemmer = PorterStemmer::new();
        assert!(stemmer.stem("Running").unwrap_err().is_invalid_input());
    }

    #[test]
    fn test_context_is_reused() {
        let stemmer = PorterStemmer::new();
        stemmer.stem("generalizations").unwrap();
        stemmer.stem("cats").unwrap();

        assert_eq!(stemmer.pool.lock().len(), 1);
    }

    #[test]
    fn test_stem_all() {
        let stemmer = PorterStemmer::new();
        let stems = stemmer.stem_all(&["cats", "ponies", "skies"]).unwrap();
        assert_eq!(stems, vec!["cat", "poni", "sky"]);

        assert!(stemmer.stem_all(&["cats", ""]).is_err());
    }

    #[test]
    fn test_classic_config() {
        let stemmer = PorterStemmer::with_config(StemmerConfig::classic()).unwrap();
        assert_eq!(stemmer.config().variant, Variant::Classic);
        assert_eq!(stemmer.stem("skies").unwrap(), "ski");
    }

    #[test]
    fn test_shared_across_threads() {
        let stemmer = Arc::new(PorterStemmer::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let stemmer = Arc::clone(&stemmer);
                thread::spawn(move || {
                    (0..200)
                        .map(|_| stemmer.stem("relational").unwrap())
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        for handle in handles {
            assert!(handle.join().unwrap().iter().all(|stem| stem == "relat"));
        }
    }

    #[test]
    fn test_stemmer_name() {
        assert_eq!(PorterStemmer::new().name(), "porter");
    }
}
