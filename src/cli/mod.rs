use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod config;
mod convert;
mod detect;
mod inspect;

pub use config::Config;

/// lis2csv - IMS LIS record export to CSV converter
#[derive(Parser)]
#[command(name = "lis2csv")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a record export file to CSV
    Convert {
        /// Export file, named like PRSN2024-01-01T00.00.00.000000Z.xml
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output CSV file or directory (defaults to the input's directory)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,

        /// Load settings from a TOML config file
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Skip lines that are not well-formed XML instead of aborting
        #[arg(long)]
        skip_malformed: bool,

        /// Bytes read per chunk
        #[arg(long, value_name = "BYTES", hide = true)]
        chunk_size: Option<usize>,
    },

    /// Show the fields of a single XML record
    Inspect {
        /// XML file (reads stdin when omitted)
        #[arg(value_name = "INPUT")]
        input: Option<PathBuf>,

        /// Print records as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the record type named by an export file name
    Detect {
        /// Export file path
        #[arg(value_name = "INPUT")]
        input: PathBuf,
    },
}

impl Cli {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }
}

pub fn init_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Convert {
            input,
            output,
            config,
            skip_malformed,
            chunk_size,
        } => convert::run(input, output, config, skip_malformed, chunk_size),
        Commands::Inspect { input, json } => inspect::run(input, json),
        Commands::Detect { input } => detect::run(input),
    }
}
