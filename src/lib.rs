//! # Stemma
//!
//! An English suffix-stripping stemmer for search indexing.
//!
//! ## Features
//!
//! - Porter-style rule pipeline with an extended and a classic rule set
//! - Irregular-form table consulted before the rules
//! - Reusable, allocation-aware stemming contexts
//! - Thread-safe pooled stemmer and parallel batch stemming
//! - Token filter for analysis pipelines
//!
//! ## Example
//!
//! ```
//! use stemma::prelude::*;
//!
//! let stemmer = PorterStemmer::new();
//! assert_eq!(stemmer.stem("relational").unwrap(), "relat");
//! assert_eq!(stemmer.stem("ponies").unwrap(), "poni");
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod stemmer;

pub mod prelude {
    pub use crate::analysis::token::Token;
    pub use crate::analysis::token_filter::{Filter, StemFilter};
    pub use crate::config::StemmerConfig;
    pub use crate::error::{Result, StemmaError};
    pub use crate::stemmer::{PorterStemmer, Stemmer, StemmerContext, Variant, stem_batch};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
