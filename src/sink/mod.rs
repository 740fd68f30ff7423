//! # Result Sink
//!
//! Ordered CSV accumulator for one conversion run. The header goes out when
//! the sink is created, then fragments are appended exactly in the order
//! they arrive. The sink also owns the progress arithmetic and the naming
//! of output artifacts.

use std::io::Write;

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::record::RecordType;


const MB: f64 = 1024.0 * 1024.0;

/// Progress snapshot reported after each chunk
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Progress {
    /// Record type being converted
    pub record_type: RecordType,
    /// Human-readable total size of the source
    pub source_size_label: String,
    /// Candidate record lines accepted so far
    pub records: u64,
    /// Bytes consumed so far
    pub bytes_read: u64,
    /// Total source size in bytes
    pub total_bytes: u64,
    /// Completion percentage in `[0, 100]`
    pub percent: f64,
}

/// Totals returned when a sink is finished
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SinkSummary {
    /// Data rows written, header excluded
    pub rows: u64,
    /// Bytes written, header included
    pub bytes_written: u64,
}

/// Writes a header followed by CSV fragments to any writer
pub struct CsvSink<W: Write> {
    writer: W,
    record_type: RecordType,
    source_bytes: u64,
    rows: u64,
    bytes_written: u64,
    last_percent: f64,
}

impl<W: Write> CsvSink<W> {
    /// Create a sink and write `header` immediately
    pub fn new(
        mut writer: W,
        record_type: RecordType,
        source_bytes: u64,
        header: &str,
    ) -> std::io::Result<Self> {
        writer.write_all(header.as_bytes())?;
        Ok(Self {
            writer,
            record_type,
            source_bytes,
            rows: 0,
            bytes_written: header.len() as u64,
            last_percent: 0.0,
        })
    }

    /// Append a fragment holding `rows` complete CSV rows
    pub fn write_fragment(&mut self, csv: &str, rows: u64) -> std::io::Result<()> {
        if !csv.is_empty() {
            self.writer.write_all(csv.as_bytes())?;
            self.bytes_written += csv.len() as u64;
        }
        self.rows += rows;
        Ok(())
    }

    /// Record type of this artifact
    pub fn record_type(&self) -> RecordType {
        self.record_type
    }

    /// Data rows written so far
    pub fn records(&self) -> u64 {
        self.rows
    }

    /// Total source size used for progress
    pub fn source_bytes(&self) -> u64 {
        self.source_bytes
    }

    /// Completion percentage after `bytes_read` source bytes.
    ///
    /// Clamped to `[0, 100]` and never lower than a previously returned value.
    /// An empty source counts as complete.
    pub fn progress_percent(&mut self, bytes_read: u64) -> f64 {
        let percent = if self.source_bytes == 0 {
            100.0
        } else {
            (bytes_read as f64 / self.source_bytes as f64 * 100.0).clamp(0.0, 100.0)
        };
        self.last_percent = self.last_percent.max(percent);
        self.last_percent
    }

    /// Build a progress snapshot
    pub fn progress(&mut self, records: u64, bytes_read: u64) -> Progress {
        let percent = self.progress_percent(bytes_read);
        Progress {
            record_type: self.record_type,
            source_size_label: format_file_size(self.source_bytes),
            records,
            bytes_read,
            total_bytes: self.source_bytes,
            percent,
        }
    }

    /// Flush and hand back the writer with the run totals
    pub fn finish(mut self) -> std::io::Result<(W, SinkSummary)> {
        self.writer.flush()?;
        let summary = SinkSummary {
            rows: self.rows,
            bytes_written: self.bytes_written,
        };
        Ok((self.writer, summary))
    }
}

/// Output file name for an artifact created at `timestamp`:
/// `{CODE}_Parsed_{YYYYMMDD}_{HHMMSS}.csv`
pub fn suggested_file_name(record_type: RecordType, timestamp: &DateTime<Local>) -> String {
    format!(
        "{}_Parsed_{}.csv",
        record_type.code(),
        timestamp.format("%Y%m%d_%H%M%S")
    )
}

/// Size label with two decimals, in MB below 1024 MB and GB above
pub fn format_file_size(bytes: u64) -> String {
    let mb = bytes as f64 / MB;
    if mb < 1024.0 {
        format!("{:.2} MB", mb)
    } else {
        format!("{:.2} GB", mb / 1024.0)
    }
}
