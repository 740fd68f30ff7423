//! # lis2csv - IMS LIS Record Exports to CSV
//!
//! `lis2csv` turns large XML exports of IMS Learning Information Services
//! records into CSV, one row per record, without loading the export into
//! memory.
//!
//! ## Supported Records
//!
//! - **Person** (`PRSN`, `pms:personRecord`): identifiers, formatted and
//!   part names, contact details, demographics.
//! - **Group** (`GRP`, `gms:groupRecord`): group type, organisation and
//!   descriptions.
//! - **Membership** (`MEMB`, `mms:membershipRecord`): collection, member and
//!   role.
//! - **Course section** (`CSEC`, `cms:courseSectionRecord`): title, status,
//!   enrolment limits, session, time frame and location.
//!
//! Export files are recognised by name, e.g.
//! `GRP2024-01-01T00.00.00.000000Z_export.xml`, and hold one record element
//! per line inside an envelope.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//! use lis2csv::converter::RecordConverter;
//!
//! let converter = RecordConverter::new();
//! let stats = converter.convert_file(
//!     Path::new("GRP2024-01-01T00.00.00.000000Z.xml"),
//!     None,
//!     |progress| println!("{:.1}%", progress.percent),
//! )?;
//! println!("Wrote {} rows", stats.rows);
//! # Ok::<(), lis2csv::converter::ConversionError>(())
//! ```
//!
//! ## Inspecting a Single Record
//!
//! ```rust
//! use lis2csv::pipeline::extract_document;
//!
//! let inspection = extract_document(
//!     "<mms:membershipRecord><mms:sourcedId>M-1</mms:sourcedId></mms:membershipRecord>",
//! )?;
//! assert_eq!(inspection.records[0].get("sourceid"), Some("M-1"));
//! # Ok::<(), lis2csv::pipeline::PipelineError>(())
//! ```
//!
//! ## Pipeline
//!
//! ```text
//! export file ─▶ ChunkedReader ─▶ ExtractionPipeline ─▶ CsvSink ─▶ CSV
//!                (lines)          (parse, extract,      (header,
//!                                  encode)               rows)
//! ```

// Documentation lints
#![warn(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

pub mod chunked;
pub mod converter;
pub mod encoder;
pub mod extract;
pub mod pipeline;
pub mod record;
pub mod sink;
pub mod xml;

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::chunked::{CancelFlag, Chunk, ChunkError, ChunkedReader, RawLine, StreamState};
    pub use crate::converter::{ConversionConfig, ConversionError, ConversionStats, RecordConverter};
    pub use crate::encoder::CsvEncoder;
    pub use crate::extract::extract;
    pub use crate::pipeline::{
        extract_document, ExtractionPipeline, Inspection, MalformedPolicy, PipelineError,
    };
    pub use crate::record::{Column, FlatRecord, RecordError, RecordType};
    pub use crate::sink::{format_file_size, suggested_file_name, CsvSink, Progress};
    pub use crate::xml::{parse_fragment, Document, Element, XmlError};
}
