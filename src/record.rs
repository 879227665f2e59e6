//! Record views and decoded records.
//!
//! A [`RecordView`] is what the framer hands out: the payload bytes of one
//! frame, borrowed from the source. [`Record`] is the decoded form, one
//! variant per record type this crate understands.

use std::fmt;

use crate::decode::{
    CommentRecord, HeaderRecord, HistoryRecord, ProcessingParameters, decode_comment,
    decode_header, decode_history, decode_processing_parameters,
};
use crate::decode_nav::{
    AttitudeRecord, HvNavigationErrorRecord, NavigationErrorRecord, SoundVelocityProfile,
    decode_attitude, decode_hv_navigation_error, decode_navigation_error,
    decode_sound_velocity_profile,
};
use crate::error::FormatError;
use crate::types::RecordType;

/// Borrowed payload of one framed record.
///
/// `size()` is the value of the frame's size word; `payload()` excludes the
/// size, type and checksum words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordView<'a> {
    record_type: RecordType,
    raw_type: u32,
    reserved: u32,
    checksum: Option<u32>,
    size: u32,
    offset: usize,
    payload: &'a [u8],
}

impl<'a> RecordView<'a> {
    /// View over an already isolated payload.
    pub fn new(record_type: RecordType, payload: &'a [u8]) -> Self {
        Self {
            record_type,
            raw_type: record_type.to_code(),
            reserved: 0,
            checksum: None,
            size: u32::try_from(payload.len()).unwrap_or(u32::MAX),
            offset: 0,
            payload,
        }
    }

    pub(crate) fn from_frame(
        record_type: RecordType,
        raw_type: u32,
        reserved: u32,
        checksum: Option<u32>,
        size: u32,
        offset: usize,
        payload: &'a [u8],
    ) -> Self {
        Self {
            record_type,
            raw_type,
            reserved,
            checksum,
            size,
            offset,
            payload,
        }
    }

    /// Record type resolved from the frame's type tag.
    pub fn record_type(&self) -> RecordType {
        self.record_type
    }

    /// Type tag as stored, before resolving to [`RecordType`].
    pub fn raw_type(&self) -> u32 {
        self.raw_type
    }

    /// Reserved bits of the type-and-flags word.
    pub fn reserved(&self) -> u32 {
        self.reserved
    }

    /// Stored checksum word, if the frame carries one. Not verified.
    pub fn checksum(&self) -> Option<u32> {
        self.checksum
    }

    /// Declared size from the frame header.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Byte offset of the frame within the stream.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Payload bytes, excluding the frame's size, type and checksum words.
    pub fn payload(&self) -> &'a [u8] {
        self.payload
    }

    /// Decode the payload according to the record type.
    pub fn decode(&self) -> Result<Record, FormatError> {
        Record::decode(self)
    }
}

/// A decoded GSF record.
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    Header(HeaderRecord),
    Comment(CommentRecord),
    History(HistoryRecord),
    ProcessingParameters(ProcessingParameters),
    Attitude(AttitudeRecord),
    NavigationError(NavigationErrorRecord),
    HvNavigationError(HvNavigationErrorRecord),
    SoundVelocityProfile(SoundVelocityProfile),
    /// A record kind this crate does not decode. Its bytes remain available
    /// on the [`RecordView`].
    Opaque(RecordType),
}

impl Record {
    /// Dispatch a view to the decoder for its type.
    ///
    /// Types without a decoder produce [`Record::Opaque`], never an error.
    pub fn decode(view: &RecordView<'_>) -> Result<Self, FormatError> {
        let payload = view.payload();
        let record = match view.record_type() {
            RecordType::Header => Self::Header(decode_header(payload)?),
            RecordType::Comment => Self::Comment(decode_comment(payload)?),
            RecordType::History => Self::History(decode_history(payload)?),
            RecordType::ProcessingParameters => {
                Self::ProcessingParameters(decode_processing_parameters(payload)?)
            }
            RecordType::Attitude => Self::Attitude(decode_attitude(payload)?),
            RecordType::NavigationError => {
                Self::NavigationError(decode_navigation_error(payload)?)
            }
            RecordType::HvNavigationError => {
                Self::HvNavigationError(decode_hv_navigation_error(payload)?)
            }
            RecordType::SoundVelocityProfile => {
                Self::SoundVelocityProfile(decode_sound_velocity_profile(payload)?)
            }
            other @ (RecordType::Invalid
            | RecordType::SwathBathymetryPing
            | RecordType::SensorParameters
            | RecordType::SwathBathySummary
            | RecordType::SingleBeamPing) => Self::Opaque(other),
        };
        Ok(record)
    }

    /// The record type this record was decoded from.
    pub fn record_type(&self) -> RecordType {
        match self {
            Self::Header(_) => RecordType::Header,
            Self::Comment(_) => RecordType::Comment,
            Self::History(_) => RecordType::History,
            Self::ProcessingParameters(_) => RecordType::ProcessingParameters,
            Self::Attitude(_) => RecordType::Attitude,
            Self::NavigationError(_) => RecordType::NavigationError,
            Self::HvNavigationError(_) => RecordType::HvNavigationError,
            Self::SoundVelocityProfile(_) => RecordType::SoundVelocityProfile,
            Self::Opaque(rt) => *rt,
        }
    }

    /// True when the record type has no decoder.
    pub fn is_opaque(&self) -> bool {
        matches!(self, Self::Opaque(_))
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Header(h) => write!(f, "header: {h}"),
            Self::Comment(c) => write!(f, "comment: {} {:?}", c.time, c.text_lossy()),
            Self::History(h) => write!(
                f,
                "history: {} host {:?} operator {:?} command {:?}",
                h.time,
                h.host_name,
                h.operator_name,
                h.command_line
            ),
            Self::ProcessingParameters(p) => write!(
                f,
                "processing parameters: {} ({} entries)",
                p.time,
                p.parameters.len()
            ),
            Self::Attitude(a) => write!(
                f,
                "attitude: {} ({} measurements)",
                a.time,
                a.measurements.len()
            ),
            Self::NavigationError(n) => write!(
                f,
                "navigation error: {} id {} lon {} m lat {} m",
                n.time,
                n.record_id,
                n.longitude_error,
                n.latitude_error
            ),
            Self::HvNavigationError(n) => write!(
                f,
                "hv navigation error: {} id {} horizontal {} m vertical {} m",
                n.time,
                n.record_id,
                n.horizontal_error,
                n.vertical_error
            ),
            Self::SoundVelocityProfile(s) => write!(
                f,
                "sound velocity profile: {} at ({}, {}) {} points",
                s.observation_time,
                s.latitude,
                s.longitude,
                s.points.len()
            ),
            Self::Opaque(rt) => write!(f, "{rt}: not decoded"),
        }
    }
}
