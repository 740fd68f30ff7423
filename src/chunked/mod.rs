//! Chunked line reader for large record exports
//!
//! Export files hold one record element per physical line, wrapped in an
//! envelope. This module reads such a file in fixed-size chunks without
//! loading it into memory:
//!
//! 1. Read up to `chunk_size` bytes (3 MiB by default)
//! 2. Decode them with a streaming UTF-8 decoder, so multi-byte characters
//!    split across chunks survive intact
//! 3. Prepend the leftover partial line from the previous chunk and split on `\n`
//! 4. Hold back the final, possibly incomplete segment as the new leftover
//! 5. Keep only lines that start with a known record tag
//!
//! After the source is exhausted, a non-empty leftover that starts with a
//! record tag becomes one final line. Envelope lines and anything truncated
//! never reach the XML parser.
//!
//! [`ChunkedReader`] is an [`Iterator`]: each call to `next` does one
//! chunk's worth of work and hands control back to the caller, which is
//! where progress is reported and where other work can be interleaved.

use std::io::{self, Read, Seek, SeekFrom};

use encoding_rs::{CoderResult, Decoder, UTF_8};

use crate::record::RecordType;

pub use cancel::CancelFlag;
pub use error::ChunkError;

mod cancel;
mod error;


/// Default chunk size: 3 MiB
pub const DEFAULT_CHUNK_SIZE: usize = 3 * 1024 * 1024;

/// One complete candidate record line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLine {
    /// 1-based physical line number in the source
    pub number: u64,
    /// Line text with surrounding whitespace trimmed
    pub text: String,
}

/// Reader progress carried from one chunk to the next
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StreamState {
    offset: u64,
    leftover: String,
    records: u64,
    lines: u64,
}

impl StreamState {
    /// Bytes consumed from the source so far
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Partial line waiting for the next chunk
    pub fn leftover(&self) -> &str {
        &self.leftover
    }

    /// Candidate record lines emitted so far
    pub fn records(&self) -> u64 {
        self.records
    }

    /// Return to the initial state
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Lines found in one chunk plus cumulative totals
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// Complete candidate lines, in source order
    pub lines: Vec<RawLine>,
    /// Bytes consumed so far, this chunk included
    pub offset: u64,
    /// Candidate lines emitted so far, this chunk included
    pub records: u64,
    /// True for the final chunk, produced once the source is exhausted
    pub is_last: bool,
}

/// Streaming reader yielding record lines chunk by chunk
pub struct ChunkedReader<R> {
    source: R,
    chunk_size: usize,
    decoder: Decoder,
    state: StreamState,
    buf: Vec<u8>,
    done: bool,
    cancel: Option<CancelFlag>,
}

impl<R: Read> ChunkedReader<R> {
    /// Create a reader with the default 3 MiB chunk size
    pub fn new(source: R) -> Self {
        Self::with_chunk_size(source, DEFAULT_CHUNK_SIZE)
    }

    /// Create a reader with a custom chunk size (minimum one byte)
    pub fn with_chunk_size(source: R, chunk_size: usize) -> Self {
        let chunk_size = chunk_size.max(1);
        Self {
            source,
            chunk_size,
            decoder: UTF_8.new_decoder_with_bom_removal(),
            state: StreamState::default(),
            buf: Vec::with_capacity(chunk_size),
            done: false,
            cancel: None,
        }
    }

    /// Stop before the next chunk once `flag` is raised
    pub fn with_cancel(mut self, flag: CancelFlag) -> Self {
        self.cancel = Some(flag);
        self
    }

    /// Current stream state
    pub fn state(&self) -> &StreamState {
        &self.state
    }

    /// Configured chunk size in bytes
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Give back the underlying source
    pub fn into_inner(self) -> R {
        self.source
    }

    /// Read and split the next chunk.
    ///
    /// Returns `Ok(None)` once the final chunk has been produced.
    pub fn next_chunk(&mut self) -> Result<Option<Chunk>, ChunkError> {
        if self.done {
            return Ok(None);
        }

        if self.cancel.as_ref().is_some_and(CancelFlag::is_cancelled) {
            self.done = true;
            return Err(ChunkError::Cancelled {
                offset: self.state.offset,
            });
        }

        self.buf.clear();
        let read = match self
            .source
            .by_ref()
            .take(self.chunk_size as u64)
            .read_to_end(&mut self.buf)
        {
            Ok(read) => read,
            Err(e) => {
                self.done = true;
                return Err(e.into());
            }
        };

        let is_last = read == 0;
        self.state.offset += read as u64;

        let text = self.decode(is_last);
        let lines = self.split_lines(text, is_last);
        self.state.records += lines.len() as u64;
        self.done = is_last;

        log::debug!(
            "Chunk: {} bytes read, {} record lines, offset {}",
            read,
            lines.len(),
            self.state.offset
        );

        Ok(Some(Chunk {
            lines,
            offset: self.state.offset,
            records: self.state.records,
            is_last,
        }))
    }

    /// Prepend the leftover to the decoded contents of `buf`
    fn decode(&mut self, last: bool) -> String {
        let mut text = std::mem::take(&mut self.state.leftover);
        let mut input: &[u8] = &self.buf;

        loop {
            let needed = self
                .decoder
                .max_utf8_buffer_length(input.len())
                .unwrap_or(input.len().saturating_mul(3) + 4);
            text.reserve(needed);

            let (result, read, _) = self.decoder.decode_to_string(input, &mut text, last);
            input = &input[read..];
            if let CoderResult::InputEmpty = result {
                break;
            }
        }

        text
    }

    /// Split text into complete candidate lines, storing the tail as leftover
    fn split_lines(&mut self, text: String, last: bool) -> Vec<RawLine> {
        let mut lines = Vec::new();

        let tail = match text.rfind('\n') {
            Some(end) => {
                for segment in text[..end].split('\n') {
                    self.accept(segment, &mut lines);
                }
                &text[end + 1..]
            }
            None => text.as_str(),
        };

        if last {
            if !tail.is_empty() {
                self.accept(tail, &mut lines);
            }
        } else {
            self.state.leftover = tail.to_string();
        }

        lines
    }

    fn accept(&mut self, segment: &str, lines: &mut Vec<RawLine>) {
        self.state.lines += 1;
        if RecordType::is_record_line(segment) {
            lines.push(RawLine {
                number: self.state.lines,
                text: segment.trim().to_string(),
            });
        }
    }
}

impl<R: Read + Seek> ChunkedReader<R> {
    /// Seek the source back to the start and reset all stream state for a new run
    pub fn rewind(&mut self) -> io::Result<()> {
        self.source.seek(SeekFrom::Start(0))?;
        self.state.reset();
        self.decoder = UTF_8.new_decoder_with_bom_removal();
        self.done = false;
        Ok(())
    }
}

impl<R: Read> Iterator for ChunkedReader<R> {
    type Item = Result<Chunk, ChunkError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_chunk().transpose()
    }
}
