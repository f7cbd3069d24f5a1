//! Parallel stemming of word lists.

use rayon::prelude::*;

use crate::config::StemmerConfig;
use crate::error::Result;
use crate::stemmer::context::StemmerContext;

/// Stem `words` in parallel, preserving order.
///
/// Each rayon worker builds its own [`StemmerContext`]; the irregular table
/// is built once and shared by all of them. Fails if any word is invalid.
pub fn stem_batch<S>(words: &[S], config: &StemmerConfig) -> Result<Vec<String>>
where
    S: AsRef<str> + Sync,
{
    let irregulars = config.irregulars()?;

    words
        .par_iter()
        .map_init(
            || StemmerContext::with_irregulars(config, irregulars.clone()),
            |context, word| context.stem_str(word.as_ref()).map(str::to_string),
        )
        .collect()
}
