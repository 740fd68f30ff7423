use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use log::{debug, info, warn};
use tempfile::NamedTempFile;

use super::{ConversionError, ConversionStats, RecordConverter};
use crate::chunked::ChunkedReader;
use crate::pipeline::ExtractionPipeline;
use crate::record::RecordType;
use crate::sink::{suggested_file_name, CsvSink, Progress};

impl RecordConverter {
    /// Convert an export file to CSV.
    ///
    /// The record type comes from the input's file name and is checked
    /// before anything is read. `output` may name the CSV file itself or an
    /// existing directory to place a generated name in. Without it, the
    /// configured output directory is used (and created), falling back to
    /// the input's directory. Generated names carry the completion time.
    /// Nothing is left behind when the run fails.
    pub fn convert_file<F>(
        &self,
        input: &Path,
        output: Option<&Path>,
        on_progress: F,
    ) -> Result<ConversionStats, ConversionError>
    where
        F: FnMut(&Progress),
    {
        let record_type = RecordType::from_path(input)?;
        let source_bytes = std::fs::metadata(input)?.len();
        let target = self.output_target(input, output)?;

        info!(
            "Converting {} ({}) into {}",
            input.display(),
            record_type,
            target.path().display()
        );

        let source = File::open(input)?;
        let temp = NamedTempFile::new_in(target.dir())?;

        let (mut stats, writer) = self.convert_reader(
            record_type,
            source,
            source_bytes,
            BufWriter::new(temp),
            on_progress,
        )?;

        let temp = writer.into_inner().map_err(|e| e.into_error())?;
        let output_path = target.resolve(record_type, &Local::now());
        temp.persist(&output_path)?;
        debug!("Wrote {}", output_path.display());

        stats.output_path = Some(output_path);
        Ok(stats)
    }

    fn output_target(&self, input: &Path, output: Option<&Path>) -> std::io::Result<OutputTarget> {
        match (output, &self.config.output_dir) {
            (Some(path), _) if path.is_dir() => Ok(OutputTarget::Directory(path.to_path_buf())),
            (Some(path), _) => Ok(OutputTarget::File(path.to_path_buf())),
            (None, Some(dir)) => {
                std::fs::create_dir_all(dir)?;
                Ok(OutputTarget::Directory(dir.clone()))
            }
            (None, None) => Ok(OutputTarget::Directory(
                input.parent().map(Path::to_path_buf).unwrap_or_default(),
            )),
        }
    }

    /// Convert any byte source of a known record type, writing CSV to `writer`.
    ///
    /// `total_bytes` is only used for progress reporting.
    pub fn convert_reader<R, W, F>(
        &self,
        record_type: RecordType,
        source: R,
        total_bytes: u64,
        writer: W,
        mut on_progress: F,
    ) -> Result<(ConversionStats, W), ConversionError>
    where
        R: Read,
        W: Write,
        F: FnMut(&Progress),
    {
        let reader = ChunkedReader::with_chunk_size(source, self.config.chunk_size)
            .with_cancel(self.cancel.clone());
        let mut pipeline = ExtractionPipeline::new(record_type, self.config.on_malformed);
        let header = pipeline.header()?;
        let mut sink = CsvSink::new(writer, record_type, total_bytes, &header)?;

        let mut stats = ConversionStats::new(record_type, total_bytes);

        for chunk in reader {
            let chunk = chunk?;
            let extracted = pipeline.process(&chunk.lines)?;
            sink.write_fragment(&extracted.csv, extracted.rows)?;

            stats.records = chunk.records;
            stats.skipped_lines += extracted.skipped;

            let progress = sink.progress(chunk.records, chunk.offset);
            debug!(
                "{} records, {:.1}% of {}",
                progress.records, progress.percent, progress.source_size_label
            );
            on_progress(&progress);
        }

        let (writer, summary) = sink.finish()?;
        stats.rows = summary.rows;

        if stats.skipped_lines > 0 {
            warn!("Skipped {} malformed record lines", stats.skipped_lines);
        }
        info!(
            "Converted {} {} records into {} rows",
            stats.records, record_type, stats.rows
        );

        Ok((stats, writer))
    }
}

/// Where a finished CSV goes
#[derive(Debug, Clone, PartialEq, Eq)]
enum OutputTarget {
    /// Exactly this file
    File(PathBuf),
    /// A generated name inside this directory
    Directory(PathBuf),
}

impl OutputTarget {
    fn path(&self) -> &Path {
        match self {
            OutputTarget::File(path) | OutputTarget::Directory(path) => path,
        }
    }

    /// Directory the temporary file is created in, so persisting is a rename
    fn dir(&self) -> PathBuf {
        let dir = match self {
            OutputTarget::File(path) => path.parent(),
            OutputTarget::Directory(dir) => Some(dir.as_path()),
        };
        match dir {
            Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    fn resolve(&self, record_type: RecordType, finished: &DateTime<Local>) -> PathBuf {
        match self {
            OutputTarget::File(path) => path.clone(),
            OutputTarget::Directory(dir) => dir.join(suggested_file_name(record_type, finished)),
        }
    }
}
