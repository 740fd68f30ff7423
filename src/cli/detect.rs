use anyhow::Result;
use std::path::PathBuf;

use lis2csv::record::RecordType;

/// Print the record type named by an export file name
pub fn run(input: PathBuf) -> Result<()> {
    let record_type = RecordType::from_path(&input)?;
    println!("{}\t{}", record_type, record_type.root_tag());
    Ok(())
}
