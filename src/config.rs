//! Configuration for stemmer contexts.
//!
//! Settings are plain serde structs so they can be embedded in a larger
//! configuration or loaded from a JSON file.
//!
//! # Example
//!
//! ```
//! use stemma::config::StemmerConfig;
//! use stemma::stemmer::Variant;
//!
//! let config = StemmerConfig::from_json_str(r#"{
//!     "variant": "classic",
//!     "capacity_margin": 32
//! }"#).unwrap();
//!
//! assert_eq!(config.variant, Variant::Classic);
//! assert_eq!(config.initial_capacity, 0);
//! ```

use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{Result, StemmaError};
use crate::stemmer::irregular::{IrregularEntry, IrregularForms};
use crate::stemmer::rules::Variant;

/// Default head-room kept in a context buffer over the longest word seen.
pub const DEFAULT_CAPACITY_MARGIN: usize = 64;

/// Settings for a [`StemmerContext`](crate::stemmer::StemmerContext).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StemmerConfig {
    /// Rule set to run.
    pub variant: Variant,

    /// Bytes reserved when a context is created.
    pub initial_capacity: usize,

    /// Extra bytes reserved beyond the word length whenever the buffer grows.
    pub capacity_margin: usize,

    /// Additional irregular forms merged over the built-in table.
    /// Ignored by [`Variant::Classic`], which has no irregular table.
    pub irregular_forms: Vec<IrregularEntry>,
}

impl Default for StemmerConfig {
    fn default() -> Self {
        StemmerConfig {
            variant: Variant::Extended,
            initial_capacity: 0,
            capacity_margin: DEFAULT_CAPACITY_MARGIN,
            irregular_forms: Vec::new(),
        }
    }
}

impl StemmerConfig {
    /// Configuration for the classic rule set.
    pub fn classic() -> Self {
        StemmerConfig {
            variant: Variant::Classic,
            ..Default::default()
        }
    }

    /// Set the rule variant.
    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    /// Add an irregular entry.
    pub fn with_irregular(mut self, entry: IrregularEntry) -> Self {
        self.irregular_forms.push(entry);
        self
    }

    /// Parse a configuration from JSON.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: StemmerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("loading stemmer config from {}", path.display());
        let json = fs::read_to_string(path).map_err(|e| {
            StemmaError::invalid_config(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_json_str(&json)
    }

    /// Check the configuration for consistency.
    pub fn validate(&self) -> Result<()> {
        self.irregulars().map(|_| ())
    }

    /// The irregular table this configuration stems with.
    ///
    /// Returns the shared built-in table unless extra entries are configured,
    /// and `None` for the classic variant.
    pub fn irregulars(&self) -> Result<Option<Arc<IrregularForms>>> {
        match self.variant {
            Variant::Classic => {
                if !self.irregular_forms.is_empty() {
                    log::warn!(
                        "{} irregular entries ignored by the classic variant",
                        self.irregular_forms.len()
                    );
                }
                Ok(None)
            }
            Variant::Extended if self.irregular_forms.is_empty() => {
                Ok(Some(IrregularForms::builtin()))
            }
            Variant::Extended => {
                let forms = IrregularForms::builtin().extended_with(&self.irregular_forms)?;
                Ok(Some(Arc::new(forms)))
            }
        }
    }
}
