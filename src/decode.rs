//! Decoders for the GSF metadata records: HEADER, COMMENT, HISTORY and
//! PROCESSING_PARAMETERS.
//!
//! Each decoder takes the payload bytes of one record (frame words already
//! removed) and returns an immutable value or a [`FormatError`].

use std::borrow::Cow;
use std::fmt;

use crate::codec::{FieldReader, trim_nul};
use crate::error::FormatError;
use crate::time::{GsfTime, epoch_to_time};

/// Exact payload size of a HEADER record.
pub const HEADER_SIZE: usize = 12;

/// Decoded HEADER record: the GSF library version that wrote the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderRecord {
    pub version_major: u8,
    pub version_minor: u8,
}

impl fmt::Display for HeaderRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "GSF-v{:02}.{:02}",
            self.version_major,
            self.version_minor
        )
    }
}

/// Decoded COMMENT record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentRecord {
    pub time: GsfTime,
    /// Comment bytes as stored, trailing NUL padding removed.
    pub text: Vec<u8>,
}

impl CommentRecord {
    /// The comment as text, replacing invalid UTF-8.
    pub fn text_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.text)
    }
}

/// Decoded HISTORY record: one processing step applied to the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRecord {
    pub time: GsfTime,
    pub host_name: String,
    pub operator_name: String,
    pub command_line: String,
    pub comment: String,
}

/// Decoded PROCESSING_PARAMETERS record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessingParameters {
    pub time: GsfTime,
    /// Parameter strings in file order, usually `KEY=VALUE`.
    pub parameters: Vec<String>,
}

impl ProcessingParameters {
    /// Value of the first `key=value` parameter whose key matches.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.parameters.iter().find_map(|p| {
            let (k, v) = p.split_once('=')?;
            (k.trim() == key).then(|| v.trim())
        })
    }
}

/// Decode a HEADER payload: `"GSF-v" MM "." mm` plus two padding bytes.
///
/// # Example
///
/// ```
/// use gsf_rs::decode::decode_header;
///
/// let header = decode_header(b"GSF-v01.10\0\0").unwrap();
/// assert_eq!((header.version_major, header.version_minor), (1, 10));
/// ```
pub fn decode_header(payload: &[u8]) -> Result<HeaderRecord, FormatError> {
    if payload.len() != HEADER_SIZE {
        return Err(FormatError::WrongSize {
            expected: HEADER_SIZE,
            actual: payload.len(),
        });
    }
    if &payload[0..4] != b"GSF-" || payload[4] != b'v' {
        return Err(FormatError::BadMagic);
    }
    let version_major = two_digits(&payload[5..7]).ok_or(FormatError::BadVersion)?;
    if payload[7] != b'.' {
        return Err(FormatError::BadVersion);
    }
    let version_minor = two_digits(&payload[8..10]).ok_or(FormatError::BadVersion)?;
    // bytes 10..12 are padding

    Ok(HeaderRecord {
        version_major,
        version_minor,
    })
}

fn two_digits(bytes: &[u8]) -> Option<u8> {
    match bytes {
        [hi @ b'0'..=b'9', lo @ b'0'..=b'9'] => Some((hi - b'0') * 10 + (lo - b'0')),
        _ => None,
    }
}

/// Decode a COMMENT payload.
///
/// Layout: `sec:i32, nsec:i32, len:u32, text[len]`, padded with NULs to a
/// 4-byte boundary.
///
/// # Example
///
/// ```
/// use gsf_rs::decode::decode_comment;
///
/// let payload = [
///     0, 0, 0, 1, 0, 0, 0, 2, 0, 0, 0, 5,
///     b'a', b'b', b'c', b'd', b'e', 0, 0, 0,
/// ];
/// let comment = decode_comment(&payload).unwrap();
/// assert_eq!(comment.text, b"abcde");
/// assert_eq!(comment.time.seconds, 1);
/// assert_eq!(comment.time.nanosecond, 2);
/// ```
pub fn decode_comment(payload: &[u8]) -> Result<CommentRecord, FormatError> {
    let mut r = FieldReader::new(payload);
    let time = read_time(&mut r)?;
    let len = r.u32()? as usize;
    let text = r.bytes(len)?;

    Ok(CommentRecord {
        time,
        text: trim_nul(text).to_vec(),
    })
}

/// Decode a HISTORY payload.
///
/// Layout: `sec:i32, nsec:i32`, then host name, operator, command line and
/// comment, each as `len:u16, bytes[len]`.
pub fn decode_history(payload: &[u8]) -> Result<HistoryRecord, FormatError> {
    let mut r = FieldReader::new(payload);
    let time = read_time(&mut r)?;
    let host_name = read_short_string(&mut r)?;
    let operator_name = read_short_string(&mut r)?;
    let command_line = read_short_string(&mut r)?;
    let comment = read_short_string(&mut r)?;

    Ok(HistoryRecord {
        time,
        host_name,
        operator_name,
        command_line,
        comment,
    })
}

/// Decode a PROCESSING_PARAMETERS payload.
///
/// Layout: `sec:i32, nsec:i32, count:u16`, then `count` entries of
/// `len:u16, bytes[len]`.
pub fn decode_processing_parameters(payload: &[u8]) -> Result<ProcessingParameters, FormatError> {
    let mut r = FieldReader::new(payload);
    let time = read_time(&mut r)?;
    let count = r.u16()?;
    let parameters = (0..count)
        .map(|_| read_short_string(&mut r))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ProcessingParameters { time, parameters })
}

/// Read the `sec:i32, nsec:i32` pair that opens most GSF records.
pub(crate) fn read_time(r: &mut FieldReader<'_>) -> Result<GsfTime, FormatError> {
    let seconds = r.i32()?;
    let nanoseconds = r.i32()?;
    Ok(epoch_to_time(i64::from(seconds), nanoseconds))
}

/// Read a `len:u16`-prefixed text field, NUL padding removed.
pub(crate) fn read_short_string(r: &mut FieldReader<'_>) -> Result<String, FormatError> {
    let len = r.u16()? as usize;
    let bytes = r.bytes(len)?;
    Ok(String::from_utf8_lossy(trim_nul(bytes)).into_owned())
}
