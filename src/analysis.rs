//! Token stream integration.
//!
//! Words reach the stemmer as tokens produced by an upstream tokenizer, and
//! leave it as stemmed tokens bound for an index. This module provides the
//! token type and the stemming filter for that pipeline.

pub mod token;
pub mod token_filter;
