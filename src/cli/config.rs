//! TOML configuration file support.
//!
//! Settings for repeated conversions can live in a config file instead of
//! flags:
//!
//! ```toml
//! # lis2csv.toml
//! [conversion]
//! chunk_size = 8388608
//! skip_malformed = true
//! output_dir = "exports/csv"
//! ```
//!
//! Flags given on the command line take precedence.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Root configuration structure for lis2csv.toml files.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Conversion-specific settings.
    #[serde(default)]
    pub conversion: ConversionSettings,
}

/// Settings for the convert command.
#[derive(Debug, Default, Deserialize)]
pub struct ConversionSettings {
    /// Bytes read per chunk.
    pub chunk_size: Option<usize>,

    /// Skip malformed record lines instead of aborting.
    pub skip_malformed: Option<bool>,

    /// Directory for generated CSV files.
    pub output_dir: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML configuration")
    }
}
