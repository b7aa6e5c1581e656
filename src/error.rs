//! Error taxonomy surfaced by the decoder.
//!
//! The recognizer and validator never error — they return `bool`. Only the
//! decoder, which performs I/O through the [`crate::reader::Reader`]
//! abstraction, can fail.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HeaderError {
    /// The reader reported a failure.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The reader returned fewer than `HEADER_SIZE` bytes before
    /// end-of-input.
    #[error("unexpected end of input: need {needed} bytes, got {got}")]
    UnexpectedEof { needed: usize, got: usize },

    /// The bytes read did not pass the recognizer (magic/delimiter
    /// mismatch).
    #[error("input does not begin with a Cryptdatum header")]
    NoHeader,

    /// Reserved for callers that combine decode + validate; never emitted
    /// by the decoder alone.
    #[error("header failed validation: {0}")]
    InvalidHeader(String),
}
