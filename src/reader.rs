//! Iterator-based framer for GSF record streams.
//!
//! Use [`RecordFramer`] to walk the frames of a byte slice. Each frame is
//!
//! ```text
//! size:u32  type_and_flags:u32  [checksum:u32]  payload
//! ```
//!
//! with all words big-endian. The framer never looks inside payloads; see
//! [`Record::decode`](crate::Record::decode) for that.

use std::iter::FusedIterator;

use crate::codec::{checked_slice, read_u32};
use crate::error::FrameError;
use crate::record::RecordView;
use crate::types::{CHECKSUM_FLAG, RESERVED_MASK, RecordType, SizeField, TYPE_MASK};

/// Size word plus type-and-flags word.
pub const FRAME_HEADER_LEN: usize = 8;
/// Optional checksum word following the type-and-flags word.
pub const CHECKSUM_LEN: usize = 4;

/// Framing options.
///
/// ```
/// use gsf_rs::{FramerConfig, SizeField};
///
/// let config = FramerConfig::new().with_size_field(SizeField::Frame);
/// assert_eq!(config.size_field, SizeField::Frame);
/// assert_eq!(FramerConfig::default().size_field, SizeField::Payload);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FramerConfig {
    pub size_field: SizeField,
}

impl FramerConfig {
    /// Default options: the size word counts payload bytes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set how the leading size word is interpreted.
    pub fn with_size_field(mut self, size_field: SizeField) -> Self {
        self.size_field = size_field;
        self
    }
}

/// Iterator over the frames of a GSF byte stream.
///
/// Each call to `next()` yields the next record's view and advances past
/// the frame. A [`FrameError`] ends iteration: once one size field is wrong
/// no later boundary can be trusted.
///
/// # Example
///
/// ```
/// use gsf_rs::{RecordFramer, RecordType};
///
/// // One COMMENT frame: size 16, type 6, empty text.
/// let mut data = vec![0, 0, 0, 16, 0, 0, 0, 6];
/// data.extend_from_slice(&[0; 16]);
///
/// let views: Vec<_> = RecordFramer::new(&data)
///     .collect::<Result<Vec<_>, _>>()
///     .unwrap();
/// assert_eq!(views.len(), 1);
/// assert_eq!(views[0].record_type(), RecordType::Comment);
/// assert_eq!(views[0].payload().len(), 16);
/// ```
#[derive(Debug, Clone)]
pub struct RecordFramer<'a> {
    data: &'a [u8],
    offset: usize,
    config: FramerConfig,
}

impl<'a> RecordFramer<'a> {
    /// Create a framer over the given bytes using the on-disk layout.
    pub fn new(data: &'a [u8]) -> Self {
        Self::with_config(data, FramerConfig::default())
    }

    /// Create a framer with explicit framing options.
    pub fn with_config(data: &'a [u8], config: FramerConfig) -> Self {
        Self {
            data,
            offset: 0,
            config,
        }
    }

    /// Byte offset of the next frame.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Bytes not yet consumed.
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.offset)
    }

    /// Options this framer was created with.
    pub fn config(&self) -> FramerConfig {
        self.config
    }

    /// Parse the frame at the cursor, returning its view and total length.
    fn read_frame(&self) -> Result<(RecordView<'a>, usize), FrameError> {
        let data = self.data;
        let offset = self.offset;
        let remaining = data.len() - offset;

        let truncated = FrameError::TruncatedSize { offset, remaining };
        let declared = read_u32(data, offset).ok_or(truncated)?;
        let invalid = || FrameError::InvalidLength {
            offset,
            declared,
            remaining,
        };

        let type_word = read_u32(data, offset + 4).ok_or_else(invalid)?;
        let (header_len, checksum) = if type_word & CHECKSUM_FLAG != 0 {
            let checksum = read_u32(data, offset + FRAME_HEADER_LEN).ok_or_else(invalid)?;
            (FRAME_HEADER_LEN + CHECKSUM_LEN, Some(checksum))
        } else {
            (FRAME_HEADER_LEN, None)
        };

        let payload_len = match self.config.size_field {
            SizeField::Payload => declared as usize,
            // The size word itself is not counted.
            SizeField::Frame => (declared as usize)
                .checked_sub(header_len - 4)
                .ok_or_else(invalid)?,
        };

        let payload = checked_slice(data, offset + header_len, payload_len)
            .map_err(|_| invalid())?;

        let raw_type = type_word & TYPE_MASK;
        let view = RecordView::from_frame(
            RecordType::from_code(raw_type),
            raw_type,
            type_word & RESERVED_MASK,
            checksum,
            declared,
            offset,
            payload,
        );
        Ok((view, header_len + payload_len))
    }
}

impl<'a> Iterator for RecordFramer<'a> {
    type Item = Result<RecordView<'a>, FrameError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.offset >= self.data.len() {
            return None;
        }

        match self.read_frame() {
            Ok((view, frame_len)) => {
                log::trace!(
                    "frame at {}: {}({}) size {}",
                    self.offset,
                    view.record_type(),
                    view.raw_type(),
                    view.size()
                );
                self.offset += frame_len;
                Some(Ok(view))
            }
            Err(e) => {
                log::warn!("stopping at unreadable frame: {e}");
                // Move offset to end to stop iteration
                self.offset = self.data.len();
                Some(Err(e))
            }
        }
    }
}

impl FusedIterator for RecordFramer<'_> {}
