use anyhow::{Context, Result};
use std::io::Read;
use std::path::PathBuf;

use lis2csv::pipeline::extract_document;

/// Show the fields of one XML record
pub fn run(input: Option<PathBuf>, json: bool) -> Result<()> {
    let text = match &input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            text
        }
    };

    let inspection = extract_document(&text).context("Failed to parse XML")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&inspection)?);
        return Ok(());
    }

    #[cfg(feature = "colorized_output")]
    {
        print!("{}", inspection.format_colored());
    }

    #[cfg(not(feature = "colorized_output"))]
    {
        print!("{}", inspection);
    }

    Ok(())
}
