//! Configuration System
//!
//! Build configuration with serde defaults, optionally loaded from a
//! `cvgen.toml` next to the content. Custom variants declared in the file
//! extend the built-in set; a custom variant with a built-in name replaces
//! the built-in.

use crate::error::BuildError;
use crate::logging::LoggingConfig;
use crate::variant::{builtin_variants, Variant};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "cvgen.toml";

/// Root build configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Directory holding the JSON content documents
    pub content_dir: PathBuf,

    /// Directory the generated `.typ` files are written to
    pub output_dir: PathBuf,

    /// Additional variants declared in the config file
    pub variants: Vec<Variant>,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("src/content"),
            output_dir: PathBuf::from("build"),
            variants: Vec::new(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Configuration validation errors
#[derive(Debug, Clone)]
pub enum ValidationError {
    Variant(String, String),
    System(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Variant(name, msg) => write!(f, "Variant '{}': {}", name, msg),
            ValidationError::System(msg) => write!(f, "System: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl BuildConfig {
    /// Load configuration from an explicit file path.
    pub fn load_from_file(path: &Path) -> Result<Self, BuildError> {
        let raw = fs::read_to_string(path).map_err(|e| {
            BuildError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let config: Self = toml::from_str(&raw).map_err(|e| {
            BuildError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })?;
        Ok(config)
    }

    /// Load configuration from `cvgen.toml` in `dir`, falling back to
    /// defaults when no file exists.
    pub fn load(dir: &Path) -> Result<Self, BuildError> {
        let path = dir.join(CONFIG_FILE_NAME);
        if path.exists() {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// The effective variant set: built-ins, with config-file variants
    /// appended or replacing built-ins of the same name.
    pub fn effective_variants(&self) -> Vec<Variant> {
        let mut variants = builtin_variants();
        for custom in &self.variants {
            if let Some(existing) = variants.iter_mut().find(|v| v.name == custom.name) {
                *existing = custom.clone();
            } else {
                variants.push(custom.clone());
            }
        }
        variants
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.content_dir.as_os_str().is_empty() {
            errors.push(ValidationError::System(
                "Content directory cannot be empty".to_string(),
            ));
        }
        if self.output_dir.as_os_str().is_empty() {
            errors.push(ValidationError::System(
                "Output directory cannot be empty".to_string(),
            ));
        }

        let variants = self.effective_variants();
        let mut outputs = HashMap::new();
        for variant in &variants {
            if variant.output_file.is_empty() {
                errors.push(ValidationError::Variant(
                    variant.name.clone(),
                    "Output file cannot be empty".to_string(),
                ));
            }
            if let Some(existing) = outputs.insert(&variant.output_file, &variant.name) {
                errors.push(ValidationError::Variant(
                    variant.name.clone(),
                    format!(
                        "Duplicate output file '{}' (also written by '{}')",
                        variant.output_file, existing
                    ),
                ));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
