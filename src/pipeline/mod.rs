//! # Extraction Pipeline
//!
//! Per candidate line: parse the line as a standalone XML fragment, collect
//! every element whose name equals the active record type's root tag, run
//! the matching extractor on each and encode the results as CSV rows.
//!
//! Lines that fail to parse are handled per [`MalformedPolicy`]. Raw XML
//! documents (interactive inspection) go through [`extract_document`], which
//! resolves the record type from the document's own root element.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::chunked::RawLine;
use crate::encoder::CsvEncoder;
use crate::extract::extract;
use crate::record::{FlatRecord, RecordType};
use crate::xml::{parse_fragment, Document};

pub use error::PipelineError;

mod error;
mod report;


/// What to do with a candidate line that is not well-formed XML
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MalformedPolicy {
    /// Stop the run with an error naming the line
    #[default]
    Abort,
    /// Drop the line, log a warning and keep going
    Skip,
}

/// CSV produced from a batch of lines
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extracted {
    /// Concatenated CSV rows, each terminated by `\n`
    pub csv: String,
    /// Number of rows in `csv`
    pub rows: u64,
    /// Lines dropped under [`MalformedPolicy::Skip`]
    pub skipped: u64,
}

/// Line-to-CSV stage for one record type
pub struct ExtractionPipeline {
    record_type: RecordType,
    policy: MalformedPolicy,
    encoder: CsvEncoder,
}

impl ExtractionPipeline {
    /// Create a pipeline for `record_type`
    pub fn new(record_type: RecordType, policy: MalformedPolicy) -> Self {
        Self {
            record_type,
            policy,
            encoder: CsvEncoder::new(),
        }
    }

    /// Active record type
    pub fn record_type(&self) -> RecordType {
        self.record_type
    }

    /// Active malformed-line policy
    pub fn policy(&self) -> MalformedPolicy {
        self.policy
    }

    /// CSV header line for the active record type
    pub fn header(&mut self) -> Result<String, PipelineError> {
        Ok(self.encoder.encode_header(self.record_type)?)
    }

    /// Encode every matching record in one line.
    ///
    /// Returns the concatenated rows and their count; a line holding no
    /// element of the active type yields an empty string.
    pub fn extract_line(&mut self, line: &RawLine) -> Result<(String, u64), PipelineError> {
        let document = parse_fragment(&line.text).map_err(|source| PipelineError::MalformedLine {
            line: line.number,
            source,
        })?;

        let mut csv = String::new();
        let mut rows = 0;
        for record in records_in(&document, self.record_type) {
            csv.push_str(&self.encoder.encode(&record)?);
            rows += 1;
        }

        if rows == 0 {
            debug!(
                "Line {} holds no {} records",
                line.number,
                self.record_type.root_tag()
            );
        }

        Ok((csv, rows))
    }

    /// Encode a batch of lines in order, applying the malformed-line policy
    pub fn process(&mut self, lines: &[RawLine]) -> Result<Extracted, PipelineError> {
        let mut out = Extracted::default();

        for line in lines {
            match self.extract_line(line) {
                Ok((csv, rows)) => {
                    out.csv.push_str(&csv);
                    out.rows += rows;
                }
                Err(PipelineError::MalformedLine { line, source })
                    if self.policy == MalformedPolicy::Skip =>
                {
                    warn!("Skipping malformed record on line {}: {}", line, source);
                    out.skipped += 1;
                }
                Err(e) => return Err(e),
            }
        }

        Ok(out)
    }
}

/// Extract every element of `record_type` in a parsed document, in document order
pub fn records_in(document: &Document, record_type: RecordType) -> Vec<FlatRecord> {
    document
        .elements_named(record_type.root_tag())
        .map(|element| extract(record_type, element))
        .collect()
}

/// Result of inspecting one raw XML document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Inspection {
    /// Type resolved from the root element, if recognised
    pub record_type: Option<RecordType>,
    /// Name of the first top-level element
    pub root_tag: Option<String>,
    /// Extracted records, in document order
    pub records: Vec<FlatRecord>,
}

impl Inspection {
    /// Whether the root element matched one of the known record types
    pub fn is_recognised(&self) -> bool {
        self.record_type.is_some()
    }
}

/// Parse a raw XML document and extract it using the type named by its root element.
///
/// An unrecognised root element is not an error: the inspection comes back
/// with no record type and no records.
pub fn extract_document(text: &str) -> Result<Inspection, PipelineError> {
    let document = parse_fragment(text)?;
    let root_tag = document.root().map(|root| root.name().to_string());

    let record_type = root_tag.as_deref().and_then(RecordType::from_root_tag);
    let Some(record_type) = record_type else {
        warn!(
            "Unrecognised root element {}",
            root_tag.as_deref().unwrap_or("(none)")
        );
        return Ok(Inspection {
            record_type: None,
            root_tag,
            records: Vec::new(),
        });
    };

    let records = records_in(&document, record_type);
    debug!("Extracted {} {} records", records.len(), record_type);

    Ok(Inspection {
        record_type: Some(record_type),
        root_tag,
        records,
    })
}
