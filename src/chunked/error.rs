/// Errors that can occur while reading chunks
#[derive(Debug, thiserror::Error)]
pub enum ChunkError {
    /// I/O error reading the source
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Reading stopped because the cancel flag was raised
    #[error("Reading cancelled at byte offset {offset}")]
    Cancelled {
        /// Bytes consumed before cancellation
        offset: u64,
    },
}
