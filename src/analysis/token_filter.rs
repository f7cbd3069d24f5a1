//! Token filters that transform token streams.
//!
//! A filter receives a stream of tokens and produces a new one. This crate
//! ships the stemming filter; other filters (lowercasing, stop words) live in
//! the indexing layer that feeds it:
//!
//! ```text
//! Tokenizer → Lowercase → Stop Words → Stem → Index
//! ```
//!
//! # Examples
//!
//! Implementing a custom filter:
//!
//! ```
//! use stemma::analysis::token::{Token, TokenStream};
//! use stemma::analysis::token_filter::Filter;
//! use stemma::error::Result;
//!
//! struct ReverseFilter;
//!
//! impl Filter for ReverseFilter {
//!     fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
//!         let reversed: Vec<Token> = tokens
//!             .map(|mut t| {
//!                 t.text = t.text.chars().rev().collect();
//!                 t
//!             })
//!             .collect();
//!         Ok(Box::new(reversed.into_iter()))
//!     }
//!
//!     fn name(&self) -> &'static str {
//!         "reverse"
//!     }
//! }
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform token streams.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod stem;

pub use stem::StemFilter;
