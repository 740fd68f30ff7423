//! # lis2csv
//!
//! A command-line tool for converting IMS LIS record exports to CSV.
//!
//! ## Usage
//!
//! ```bash
//! # Convert an export next to the input file
//! lis2csv convert PRSN2024-01-01T00.00.00.000000Z.xml
//!
//! # Show the fields of one record pasted on stdin
//! lis2csv inspect < record.xml
//!
//! # Print the record type of an export
//! lis2csv detect GRP2024-01-01T00.00.00.000000Z.xml
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::init_logging(cli.verbosity());
    cli::dispatch(cli)
}
