//! Export file to CSV converter
//!
//! Drives the chunked reader, the extraction pipeline and the CSV sink for
//! one export file, reporting progress after every chunk.

use std::path::PathBuf;

use crate::chunked::{CancelFlag, ChunkError, DEFAULT_CHUNK_SIZE};
use crate::pipeline::{MalformedPolicy, PipelineError};
use crate::record::{RecordError, RecordType};

mod run;


/// Errors that can occur during conversion
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    /// The export file name does not identify a record type
    #[error("Record type error: {0}")]
    RecordError(#[from] RecordError),

    /// Error reading the source in chunks
    #[error("Read error: {0}")]
    ChunkError(#[from] ChunkError),

    /// Error turning record lines into CSV
    #[error("Extraction error: {0}")]
    PipelineError(#[from] PipelineError),

    /// I/O error during file operations
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The finished CSV could not be moved into place
    #[error("Failed to persist output file: {0}")]
    PersistError(#[from] tempfile::PersistError),
}

/// Configuration for a conversion run
#[derive(Debug, Clone)]
pub struct ConversionConfig {
    /// Bytes read per chunk
    pub chunk_size: usize,

    /// Handling of candidate lines that are not well-formed XML
    pub on_malformed: MalformedPolicy,

    /// Directory for generated CSV names when no output is given; created if missing
    pub output_dir: Option<PathBuf>,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            on_malformed: MalformedPolicy::Abort,
            output_dir: None,
        }
    }
}

/// Statistics from a conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionStats {
    /// Record type converted
    pub record_type: RecordType,
    /// Candidate record lines read
    pub records: u64,
    /// CSV data rows written
    pub rows: u64,
    /// Malformed lines dropped under [`MalformedPolicy::Skip`]
    pub skipped_lines: u64,
    /// Size of the source in bytes
    pub source_bytes: u64,
    /// Path of the written CSV, when converting a file
    pub output_path: Option<PathBuf>,
}

impl ConversionStats {
    fn new(record_type: RecordType, source_bytes: u64) -> Self {
        Self {
            record_type,
            records: 0,
            rows: 0,
            skipped_lines: 0,
            source_bytes,
            output_path: None,
        }
    }
}

/// Converter from record exports to CSV
pub struct RecordConverter {
    config: ConversionConfig,
    cancel: CancelFlag,
}

impl RecordConverter {
    /// Create a new converter with default configuration
    pub fn new() -> Self {
        Self::with_config(ConversionConfig::default())
    }

    /// Create a new converter with custom configuration
    pub fn with_config(config: ConversionConfig) -> Self {
        Self {
            config,
            cancel: CancelFlag::new(),
        }
    }

    /// Set chunk size
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.config.chunk_size = chunk_size;
        self
    }

    /// Set malformed-line policy
    pub fn with_malformed_policy(mut self, policy: MalformedPolicy) -> Self {
        self.config.on_malformed = policy;
        self
    }

    /// Set directory for generated CSV names
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.output_dir = Some(dir.into());
        self
    }

    /// Active configuration
    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }

    /// Flag that stops running conversions before their next chunk
    pub fn cancel_flag(&self) -> CancelFlag {
        self.cancel.clone()
    }
}

impl Default for RecordConverter {
    fn default() -> Self {
        Self::new()
    }
}
