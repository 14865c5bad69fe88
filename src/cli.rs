//! CLI domain: clap definitions and command dispatch.
//! No rendering logic; commands delegate to the pipeline.

use crate::config::BuildConfig;
use crate::error::BuildError;
use crate::pipeline::run_build;
use crate::variant::Variant;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// cvgen - Generate Typst CV sources from JSON resume content
#[derive(Parser)]
#[command(name = "cvgen")]
#[command(about = "Generate Typst CV sources from structured JSON resume content")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Content directory containing the JSON documents
    #[arg(long)]
    pub content_dir: Option<PathBuf>,

    /// Output directory for generated .typ files
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Configuration file path (overrides default cvgen.toml discovery)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Raise the log level to debug
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate Typst output for one variant, or all variants
    Build {
        /// Variant name to build (default: all configured variants)
        #[arg(long)]
        variant: Option<String>,
    },
    /// List configured variants
    Variants,
}

/// Loaded configuration plus the effective variant set for one invocation.
pub struct RunContext {
    config: BuildConfig,
    variants: Vec<Variant>,
}

impl RunContext {
    pub fn new(cli: &Cli) -> Result<Self, BuildError> {
        let mut config = if let Some(ref path) = cli.config {
            BuildConfig::load_from_file(path)?
        } else {
            BuildConfig::load(&PathBuf::from("."))?
        };

        if let Some(ref dir) = cli.content_dir {
            config.content_dir = dir.clone();
        }
        if let Some(ref dir) = cli.output_dir {
            config.output_dir = dir.clone();
        }

        if let Err(errors) = config.validate() {
            let joined: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            return Err(BuildError::Config(joined.join("; ")));
        }

        let variants = config.effective_variants();
        Ok(Self { config, variants })
    }

    pub fn execute(&self, command: &Commands) -> Result<String, BuildError> {
        match command {
            Commands::Build { variant } => self.build(variant.as_deref()),
            Commands::Variants => Ok(self.list_variants()),
        }
    }

    fn build(&self, variant: Option<&str>) -> Result<String, BuildError> {
        let selected: Vec<Variant> = match variant {
            Some(name) => {
                let found = self
                    .variants
                    .iter()
                    .find(|v| v.name == name)
                    .ok_or_else(|| BuildError::UnknownVariant(name.to_string()))?;
                vec![found.clone()]
            }
            None => self.variants.clone(),
        };

        let outcomes = run_build(&self.config, &selected)?;
        let lines: Vec<String> = outcomes
            .iter()
            .map(|o| format!("Generated {} ({} bytes)", o.path.display(), o.bytes))
            .collect();
        Ok(lines.join("\n"))
    }

    fn list_variants(&self) -> String {
        let lines: Vec<String> = self
            .variants
            .iter()
            .map(|v| {
                format!(
                    "{}  ->  {}  (filter: {:?}, skills: {:?}, target: {:?})",
                    v.name, v.output_file, v.filter, v.skills, v.target
                )
            })
            .collect();
        lines.join("\n")
    }
}
