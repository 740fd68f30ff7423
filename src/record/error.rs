/// Errors resolving a record type
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    /// File name does not start with a known record-type prefix and timestamp
    #[error("File name '{file_name}' must begin with PRSN, CSEC, MEMB or GRP followed by an export timestamp")]
    FileNameMismatch {
        /// The rejected file name
        file_name: String,
    },

    /// Unknown record type code
    #[error("Unknown record type code: {0}")]
    UnknownCode(String),
}
