//! Stemming token filter.
//!
//! # Examples
//!
//! ```
//! use stemma::analysis::token::Token;
//! use stemma::analysis::token_filter::{Filter, StemFilter};
//!
//! let filter = StemFilter::new();
//! let tokens = vec![Token::new("running", 0), Token::new("ponies", 1)];
//! let stemmed: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(stemmed[0].text, "run");
//! assert_eq!(stemmed[1].text, "poni");
//! ```

use std::sync::Arc;

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;
use crate::stemmer::{PorterStemmer, Stemmer, is_stemmable};

/// Filter that replaces each token's text with its stem.
///
/// Stopped tokens are left alone. Tokens that are not plain lowercase ASCII
/// words (numbers, mixed case, non-ASCII) are passed through unchanged, since
/// normalizing them is the upstream tokenizer's job.
pub struct StemFilter {
    /// The stemmer to use.
    stemmer: Arc<dyn Stemmer>,
    /// Keep the pre-stemming text in `Token::original_text`.
    preserve_original: bool,
}

impl std::fmt::Debug for StemFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StemFilter")
            .field("stemmer", &self.stemmer.name())
            .field("preserve_original", &self.preserve_original)
            .finish()
    }
}

impl StemFilter {
    /// Create a new stem filter with the default stemmer.
    pub fn new() -> Self {
        StemFilter {
            stemmer: Arc::new(PorterStemmer::new()),
            preserve_original: false,
        }
    }

    /// Create a stem filter with a custom stemmer.
    pub fn with_stemmer(stemmer: Arc<dyn Stemmer>) -> Self {
        StemFilter {
            stemmer,
            preserve_original: false,
        }
    }

    /// Keep the original text of every stemmed token.
    pub fn preserve_original(mut self, preserve: bool) -> Self {
        self.preserve_original = preserve;
        self
    }
}

impl Default for StemFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for StemFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens = tokens
            .map(|token| {
                if token.is_stopped() {
                    return Ok(token);
                }
                if !is_stemmable(&token.text) {
                    log::warn!(
                        "not stemming token {:?} at position {}",
                        token.text,
                        token.position
                    );
                    return Ok(token);
                }

                let stemmed = self.stemmer.stem(&token.text)?;
                if self.preserve_original && stemmed != token.text {
                    let original = token.text.clone();
                    Ok(token.with_text(stemmed).with_original_text(original))
                } else {
                    Ok(token.with_text(stemmed))
                }
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "stem"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;
    use crate::config::StemmerConfig;

    #[test]
    fn test_stem_filter() {
        let filter = StemFilter::new();
        let tokens = vec![
            Token::new("running", 0),
            Token::new("flies", 1),
            Token::new("testing", 2).stop(),
        ];
        let token_stream = Box::new(tokens.into_iter());

        let result: Vec<Token> = filter.filter(token_stream).unwrap().collect();

        assert_eq!(result.len(), 3);
        assert_eq!(result[0].text, "run");
        assert_eq!(result[1].text, "fli");
        assert_eq!(result[2].text, "testing"); // Stopped tokens are not processed
        assert!(result[2].is_stopped());
    }

    #[test]
    fn test_passes_through_unstemmable_tokens() {
        let filter = StemFilter::new();
        let tokens = vec![
            Token::new("Running", 0),
            Token::new("2024", 1),
            Token::new("caf\u{e9}s", 2),
            Token::new("", 3),
        ];

        let result: Vec<Token> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();

        assert_eq!(result[0].text, "Running");
        assert_eq!(result[1].text, "2024");
        assert_eq!(result[2].text, "caf\u{e9}s");
        assert_eq!(result[3].text, "");
    }

    #[test]
    fn test_preserve_original() {
        let filter = StemFilter::new().preserve_original(true);
        let tokens = vec![Token::with_offsets("ponies", 0, 0, 6), Token::new("cat", 1)];

        let result: Vec<Token> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();

        assert_eq!(result[0].text, "poni");
        assert_eq!(result[0].original_text.as_deref(), Some("ponies"));
        assert_eq!(result[0].end_offset, 6);
        // Unchanged tokens carry no original text
        assert!(result[1].original_text.is_none());
    }

    #[test]
    fn test_custom_stemmer() {
        let stemmer = PorterStemmer::with_config(StemmerConfig::classic()).unwrap();
        let filter = StemFilter::with_stemmer(Arc::new(stemmer));
        let tokens = vec![Token::new("skies", 0)];

        let result: Vec<Token> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();
        assert_eq!(result[0].text, "ski");
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(StemFilter::new().name(), "stem");
    }
}
