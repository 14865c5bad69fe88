//! Glossary Loading
//!
//! Loads the term-id → display-term mapping used for placeholder substitution.
//! The glossary is strictly optional input: a missing, unreadable, or malformed
//! source degrades to an empty mapping with a warning, never a fatal error.

use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// One glossary entry as stored in `glossary.json`
#[derive(Debug, Clone, Deserialize)]
pub struct GlossaryTerm {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub term: String,
}

#[derive(Debug, Deserialize)]
struct GlossaryFile {
    terms: Vec<GlossaryTerm>,
}

/// Read-only id → term mapping, passed explicitly into the normalizer.
#[derive(Debug, Clone, Default)]
pub struct Glossary {
    terms: HashMap<String, String>,
}

impl Glossary {
    /// Load the glossary from `path`, degrading to an empty mapping on any
    /// failure (absent file, unreadable file, missing `terms` list).
    pub fn load(path: &Path) -> Self {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(
                    "Glossary not loaded from {}: {}. Placeholders will not be replaced.",
                    path.display(),
                    e
                );
                return Self::default();
            }
        };

        match serde_json::from_str::<GlossaryFile>(&raw) {
            Ok(file) => {
                let glossary = Self::from_terms(file.terms);
                debug!("Loaded {} glossary terms", glossary.len());
                glossary
            }
            Err(e) => {
                warn!(
                    "Glossary at {} is malformed or missing a 'terms' list: {}. \
                     Placeholders will not be replaced.",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Build a glossary from a term list. Entries with an empty id are
    /// skipped; duplicate ids resolve last-write-wins.
    pub fn from_terms(terms: Vec<GlossaryTerm>) -> Self {
        let mut map = HashMap::new();
        for entry in terms {
            if entry.id.is_empty() {
                continue;
            }
            map.insert(entry.id, entry.term);
        }
        Self { terms: map }
    }

    pub fn lookup(&self, id: &str) -> Option<&str> {
        self.terms.get(id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}
