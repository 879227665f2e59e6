//! Error types for GSF framing and record decoding.
//!
//! Framing failures ([`FrameError`]) and payload failures ([`FormatError`])
//! are kept as separate types: a frame error means record boundaries can no
//! longer be trusted, while a format error only affects one record.

use std::path::PathBuf;

use thiserror::Error;

/// The record stream itself is malformed. Terminal for the parsing session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrameError {
    #[error("truncated size field at offset {offset}: {remaining} bytes remain")]
    TruncatedSize { offset: usize, remaining: usize },

    #[error(
        "invalid frame length at offset {offset}: declared size {declared}, {remaining} bytes remain"
    )]
    InvalidLength {
        offset: usize,
        declared: u32,
        remaining: usize,
    },
}

/// A record payload does not match the layout of its type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("wrong payload size: expected {expected} bytes, got {actual}")]
    WrongSize { expected: usize, actual: usize },

    #[error("bad magic: not a GSF version string")]
    BadMagic,

    #[error("bad version number in header")]
    BadVersion,

    #[error("payload truncated: need {expected} bytes, got {actual}")]
    Truncated { expected: usize, actual: usize },
}

/// A slice request fell outside the available bytes.
///
/// Raised by [`ByteSource::slice`](crate::ByteSource::slice); inside the
/// crate it becomes [`FrameError::InvalidLength`] or [`FormatError::Truncated`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("slice {offset}+{size} out of bounds for {len} bytes")]
pub struct OutOfBounds {
    pub offset: usize,
    pub size: usize,
    pub len: usize,
}

impl From<OutOfBounds> for FormatError {
    fn from(e: OutOfBounds) -> Self {
        FormatError::Truncated {
            expected: e.offset.saturating_add(e.size),
            actual: e.len,
        }
    }
}

/// Top-level error for callers that want a single error type.
#[derive(Debug, Error)]
pub enum GsfError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("frame error: {0}")]
    Frame(#[from] FrameError),

    #[error("format error: {0}")]
    Format(#[from] FormatError),
}

impl GsfError {
    /// True for errors that make the rest of the stream untrustworthy.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GsfError::Format(_))
    }
}

pub type Result<T> = std::result::Result<T, GsfError>;
