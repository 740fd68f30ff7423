use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;

use lis2csv::converter::{ConversionConfig, RecordConverter};
use lis2csv::pipeline::MalformedPolicy;
use lis2csv::record::RecordType;
use lis2csv::sink::format_file_size;

use super::Config;

/// Convert a record export to CSV
pub fn run(
    input: PathBuf,
    output: Option<PathBuf>,
    config_path: Option<PathBuf>,
    skip_malformed: bool,
    chunk_size: Option<usize>,
) -> Result<()> {
    if !input.exists() {
        anyhow::bail!("Input file does not exist: {}", input.display());
    }

    let file_config = match &config_path {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    }
    .conversion;

    let record_type = RecordType::from_path(&input)?;

    let mut config = ConversionConfig::default();
    if let Some(size) = chunk_size.or(file_config.chunk_size) {
        config.chunk_size = size;
    }
    if skip_malformed || file_config.skip_malformed.unwrap_or(false) {
        config.on_malformed = MalformedPolicy::Skip;
    }
    config.output_dir = file_config.output_dir;

    info!("lis2csv Converter");
    info!("=================");
    info!("Input:  {} ({})", input.display(), record_type.root_tag());
    match (&output, &config.output_dir) {
        (Some(output), _) => info!("Output: {}", output.display()),
        (None, Some(dir)) => info!("Output directory: {}", dir.display()),
        (None, None) => {}
    }
    info!("Chunk size: {}", format_file_size(config.chunk_size as u64));
    info!("Malformed lines: {:?}", config.on_malformed);

    let converter = RecordConverter::with_config(config);
    let mut last_reported = -10.0;
    let stats = converter
        .convert_file(&input, output.as_deref(), |progress| {
            if progress.percent - last_reported >= 10.0 || progress.percent >= 100.0 {
                info!(
                    "Processed {} {} records ({:.0}% of {})",
                    progress.records, progress.record_type, progress.percent, progress.source_size_label
                );
                last_reported = progress.percent;
            }
        })
        .context("Conversion failed")?;

    info!("Conversion complete!");
    info!("  Records read: {}", stats.records);
    info!("  Rows written: {}", stats.rows);
    if stats.skipped_lines > 0 {
        info!("  Skipped lines: {}", stats.skipped_lines);
    }
    info!("  Source size: {}", format_file_size(stats.source_bytes));

    if let Some(path) = &stats.output_path {
        println!("{}", path.display());
    }

    Ok(())
}
