//! Shared types: [`RecordType`] and [`SizeField`].

use std::fmt;

/// Mask selecting the record type from the type-and-flags word.
pub const TYPE_MASK: u32 = 0x003F_FFFF;
/// Bits reserved by the format; reported but not interpreted.
pub const RESERVED_MASK: u32 = 0x7FC0_0000;
/// Set when a 4-byte checksum word follows the type-and-flags word.
pub const CHECKSUM_FLAG: u32 = 0x8000_0000;

/// GSF record kinds.
///
/// Tag values outside `1..=12` resolve to [`RecordType::Invalid`]; the raw
/// tag remains available on the [`RecordView`](crate::RecordView).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    Invalid,
    Header,
    SwathBathymetryPing,
    SoundVelocityProfile,
    ProcessingParameters,
    SensorParameters,
    Comment,
    History,
    NavigationError,
    SwathBathySummary,
    SingleBeamPing,
    HvNavigationError,
    Attitude,
}

impl RecordType {
    /// Every known record type, in tag order.
    pub const ALL: [RecordType; 13] = [
        Self::Invalid,
        Self::Header,
        Self::SwathBathymetryPing,
        Self::SoundVelocityProfile,
        Self::ProcessingParameters,
        Self::SensorParameters,
        Self::Comment,
        Self::History,
        Self::NavigationError,
        Self::SwathBathySummary,
        Self::SingleBeamPing,
        Self::HvNavigationError,
        Self::Attitude,
    ];

    /// Resolve a raw type tag (already masked) to a record type.
    pub fn from_code(code: u32) -> Self {
        match code {
            1 => Self::Header,
            2 => Self::SwathBathymetryPing,
            3 => Self::SoundVelocityProfile,
            4 => Self::ProcessingParameters,
            5 => Self::SensorParameters,
            6 => Self::Comment,
            7 => Self::History,
            8 => Self::NavigationError,
            9 => Self::SwathBathySummary,
            10 => Self::SingleBeamPing,
            11 => Self::HvNavigationError,
            12 => Self::Attitude,
            _ => Self::Invalid,
        }
    }

    /// The numeric tag for this record type.
    pub fn to_code(self) -> u32 {
        match self {
            Self::Invalid => 0,
            Self::Header => 1,
            Self::SwathBathymetryPing => 2,
            Self::SoundVelocityProfile => 3,
            Self::ProcessingParameters => 4,
            Self::SensorParameters => 5,
            Self::Comment => 6,
            Self::History => 7,
            Self::NavigationError => 8,
            Self::SwathBathySummary => 9,
            Self::SingleBeamPing => 10,
            Self::HvNavigationError => 11,
            Self::Attitude => 12,
        }
    }

    /// Upper-case name used in diagnostics, e.g. `"SWATH_BATHYMETRY_PING"`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Invalid => "INVALID",
            Self::Header => "HEADER",
            Self::SwathBathymetryPing => "SWATH_BATHYMETRY_PING",
            Self::SoundVelocityProfile => "SOUND_VELOCITY_PROFILE",
            Self::ProcessingParameters => "PROCESSING_PARAMETERS",
            Self::SensorParameters => "SENSOR_PARAMETERS",
            Self::Comment => "COMMENT",
            Self::History => "HISTORY",
            Self::NavigationError => "NAVIGATION_ERROR",
            Self::SwathBathySummary => "SWATH_BATHY_SUMMARY",
            Self::SingleBeamPing => "SINGLE_BEAM_PING",
            Self::HvNavigationError => "HV_NAVIGATION_ERROR",
            Self::Attitude => "ATTITUDE",
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How the leading size word of a frame is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SizeField {
    /// The size counts payload bytes only (on-disk GSF layout).
    #[default]
    Payload,
    /// The size also counts the type-and-flags word and the checksum word
    /// when present: `payload = size - 4 - (4 if checksum)`.
    Frame,
}

impl fmt::Display for SizeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Payload => write!(f, "payload"),
            Self::Frame => write!(f, "frame"),
        }
    }
}
