//! Logging System
//!
//! Structured logging via the `tracing` crate: configurable level, text or
//! JSON format, and stdout/stderr/file destinations. The `CVGEN_LOG`
//! environment variable overrides the configured level filter.

use crate::error::BuildError;
use serde::Deserialize;
use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error, off
    pub level: String,

    /// Output format: json, text
    pub format: String,

    /// Output destination: stdout, stderr, file
    pub output: String,

    /// Log file path (when output is "file")
    pub file: PathBuf,

    /// Enable colored output (text format only)
    pub color: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "text".to_string(),
            output: "stderr".to_string(),
            file: PathBuf::from("cvgen.log"),
            color: true,
        }
    }
}

/// Initialize the logging system.
///
/// Priority order (highest to lowest): CLI arguments, the `CVGEN_LOG`
/// environment variable, the configuration file, defaults.
pub fn init_logging(config: Option<&LoggingConfig>) -> Result<(), BuildError> {
    let config = config.cloned().unwrap_or_default();

    if config.level == "off" {
        return Ok(());
    }

    let directive = std::env::var("CVGEN_LOG").unwrap_or_else(|_| config.level.clone());
    let filter = EnvFilter::try_new(&directive)
        .map_err(|e| BuildError::Config(format!("Invalid log filter '{}': {}", directive, e)))?;

    let writer = match config.output.as_str() {
        "stdout" => BoxMakeWriter::new(io::stdout),
        "file" => {
            if let Some(parent) = config.file.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent).map_err(|e| {
                        BuildError::Config(format!(
                            "Cannot create log directory {}: {}",
                            parent.display(),
                            e
                        ))
                    })?;
                }
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&config.file)
                .map_err(|e| {
                    BuildError::Config(format!(
                        "Cannot open log file {}: {}",
                        config.file.display(),
                        e
                    ))
                })?;
            BoxMakeWriter::new(Arc::new(file))
        }
        _ => BoxMakeWriter::new(io::stderr),
    };

    let base = Registry::default().with(filter);
    let result = if config.format == "json" {
        base.with(fmt::layer().json().with_writer(writer)).try_init()
    } else {
        base.with(
            fmt::layer()
                .with_ansi(config.color && config.output != "file")
                .with_writer(writer),
        )
        .try_init()
    };

    result.map_err(|e| BuildError::Config(format!("Failed to initialize logging: {}", e)))
}
