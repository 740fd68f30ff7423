use crate::xml::XmlError;

/// Errors that can occur while turning record lines into CSV
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// A candidate line is not well-formed XML
    #[error("Malformed record on line {line}: {source}")]
    MalformedLine {
        /// 1-based physical line number
        line: u64,
        /// Underlying parse error
        #[source]
        source: XmlError,
    },

    /// A raw XML document could not be parsed
    #[error("XML error: {0}")]
    XmlError(#[from] XmlError),

    /// CSV encoding failed
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}
