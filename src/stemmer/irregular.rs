//! Irregular forms that bypass the rule pipeline.
//!
//! The table is short but still reflects the errors actually reported
//! against the rule set over many years. Each entry maps a canonical stem
//! to the surface forms that must stem to it; a word that exactly equals a
//! registered surface form is returned as its canonical stem without
//! running any stage.

use std::sync::Arc;

use ahash::AHashMap;
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use crate::error::{Result, StemmaError};
use crate::stemmer::validate_word;

/// Built-in table as `(canonical stem, "/"-terminated surface forms)`.
pub const BUILTIN_IRREGULAR_FORMS: &[(&str, &str)] = &[
    ("sky", "sky/skies/"),
    ("die", "dying/"),
    ("lie", "lying/"),
    ("tie", "tying/"),
    ("news", "news/"),
    ("inning", "innings/inning/"),
    ("outing", "outings/outing/"),
    ("canning", "cannings/canning/"),
    ("howe", "howe/"),
];

lazy_static! {
    static ref BUILTIN: Arc<IrregularForms> = Arc::new(
        IrregularForms::from_table(BUILTIN_IRREGULAR_FORMS)
            .expect("Built-in irregular table should be valid")
    );
}

/// One canonical stem and its surface forms, as written in config files.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IrregularEntry {
    /// The stem every form maps to.
    pub stem: String,
    /// Surface forms that bypass the pipeline.
    pub forms: Vec<String>,
}

impl IrregularEntry {
    /// Create a new entry.
    pub fn new<S: Into<String>>(stem: S, forms: Vec<String>) -> Self {
        IrregularEntry {
            stem: stem.into(),
            forms,
        }
    }
}

/// Immutable lookup from surface form to canonical stem.
///
/// Keys are compared by exact bytes (and therefore exact length). The
/// structure is built once and shared by reference between contexts.
#[derive(Clone, Debug, Default)]
pub struct IrregularForms {
    forms: AHashMap<Box<[u8]>, Arc<str>>,
}

impl IrregularForms {
    /// Create an empty table.
    pub fn new() -> Self {
        IrregularForms {
            forms: AHashMap::new(),
        }
    }

    /// The process-wide built-in table.
    pub fn builtin() -> Arc<IrregularForms> {
        Arc::clone(&BUILTIN)
    }

    /// Build a table from `(stem, "form/form/.../")` pairs.
    pub fn from_table(table: &[(&str, &str)]) -> Result<Self> {
        let mut irregulars = IrregularForms::new();
        for (stem, forms) in table {
            let stem: Arc<str> = Arc::from(*stem);
            for form in forms.split('/').filter(|form| !form.is_empty()) {
                irregulars.insert(Arc::clone(&stem), form)?;
            }
        }
        Ok(irregulars)
    }

    /// Copy of this table with `entries` added on top.
    ///
    /// A form that is already registered is re-pointed at the new stem.
    pub fn extended_with(&self, entries: &[IrregularEntry]) -> Result<Self> {
        let mut irregulars = self.clone();
        for entry in entries {
            let stem: Arc<str> = Arc::from(entry.stem.as_str());
            for form in &entry.forms {
                irregulars.insert(Arc::clone(&stem), form)?;
            }
        }
        Ok(irregulars)
    }

    fn insert(&mut self, stem: Arc<str>, form: &str) -> Result<()> {
        validate_word(stem.as_bytes())
            .map_err(|e| StemmaError::invalid_config(format!("irregular stem {stem:?}: {e}")))?;
        validate_word(form.as_bytes())
            .map_err(|e| StemmaError::invalid_config(format!("irregular form {form:?}: {e}")))?;
        if stem.len() > form.len() {
            return Err(StemmaError::invalid_config(format!(
                "irregular stem {stem:?} is longer than its form {form:?}"
            )));
        }

        if let Some(previous) = self.forms.insert(form.as_bytes().into(), stem) {
            log::debug!("irregular form {form:?} re-mapped (was {previous:?})");
        }
        Ok(())
    }

    /// Canonical stem for `word`, if it is a registered surface form.
    pub fn lookup(&self, word: &[u8]) -> Option<&str> {
        self.forms.get(word).map(|stem| stem.as_ref())
    }

    /// Number of registered surface forms.
    pub fn len(&self) -> usize {
        self.forms.len()
    }

    /// True if no forms are registered.
    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }

    /// Entries grouped by stem, stems and forms in sorted order.
    pub fn entries(&self) -> Vec<IrregularEntry> {
        let mut grouped: AHashMap<&str, Vec<String>> = AHashMap::new();
        for (form, stem) in &self.forms {
            grouped
                .entry(stem.as_ref())
                .or_default()
                .push(String::from_utf8_lossy(form).into_owned());
        }

        let mut entries: Vec<IrregularEntry> = grouped
            .into_iter()
            .map(|(stem, mut forms)| {
                forms.sort();
                IrregularEntry::new(stem, forms)
            })
            .collect();
        entries.sort_by(|a, b| a.stem.cmp(&b.stem));
        entries
    }
}
