//! Build Pipeline
//!
//! Drives the whole run: load the glossary (degrading) and the required
//! content documents (fatal when missing), render each requested variant,
//! and write one whole-buffer output file per variant. Variants run
//! sequentially and share only the read-only content set.

use crate::assemble::render_document;
use crate::config::BuildConfig;
use crate::content::ContentSet;
use crate::error::BuildError;
use crate::glossary::Glossary;
use crate::variant::Variant;
use std::fs;
use std::path::PathBuf;
use tracing::info;

/// One written output file.
#[derive(Debug, Clone)]
pub struct BuildOutcome {
    pub variant: String,
    pub path: PathBuf,
    pub bytes: usize,
}

/// Run the pipeline for the given variants.
pub fn run_build(config: &BuildConfig, variants: &[Variant]) -> Result<Vec<BuildOutcome>, BuildError> {
    let glossary = Glossary::load(&config.content_dir.join("glossary.json"));
    let content = ContentSet::load(&config.content_dir)?;

    fs::create_dir_all(&config.output_dir).map_err(|e| BuildError::WriteOutput {
        path: config.output_dir.clone(),
        source: e,
    })?;

    let mut outcomes = Vec::with_capacity(variants.len());
    for variant in variants {
        let document = render_document(&content, &glossary, variant);
        let path = config.output_dir.join(&variant.output_file);
        fs::write(&path, &document).map_err(|e| BuildError::WriteOutput {
            path: path.clone(),
            source: e,
        })?;
        info!(
            variant = %variant.name,
            path = %path.display(),
            bytes = document.len(),
            "Variant written"
        );
        outcomes.push(BuildOutcome {
            variant: variant.name.clone(),
            path,
            bytes: document.len(),
        });
    }

    Ok(outcomes)
}
