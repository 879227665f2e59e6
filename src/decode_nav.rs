//! Decoders for the navigation-side GSF records: ATTITUDE,
//! NAVIGATION_ERROR, HV_NAVIGATION_ERROR and SOUND_VELOCITY_PROFILE.
//!
//! GSF stores these values as scaled integers; the decoders apply the
//! format's fixed scale factors and return floating-point values in SI units
//! (metres, degrees, metres per second).

use crate::codec::{FieldReader, trim_nul};
use crate::decode::read_time;
use crate::error::FormatError;
use crate::time::GsfTime;

const ATTITUDE_MEASUREMENT_SIZE: usize = 10;
const SVP_POINT_SIZE: usize = 8;

/// Decoded ATTITUDE record: a burst of motion-sensor samples.
#[derive(Debug, Clone, PartialEq)]
pub struct AttitudeRecord {
    /// Base time; each measurement is offset from it.
    pub time: GsfTime,
    pub measurements: Vec<AttitudeMeasurement>,
}

/// One motion-sensor sample within an ATTITUDE record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttitudeMeasurement {
    pub time: GsfTime,
    /// Degrees.
    pub pitch: f64,
    /// Degrees.
    pub roll: f64,
    /// Metres.
    pub heave: f64,
    /// Degrees.
    pub heading: f64,
}

/// Decoded NAVIGATION_ERROR record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavigationErrorRecord {
    pub time: GsfTime,
    pub record_id: i32,
    /// Metres.
    pub longitude_error: f64,
    /// Metres.
    pub latitude_error: f64,
}

/// Decoded HV_NAVIGATION_ERROR record.
#[derive(Debug, Clone, PartialEq)]
pub struct HvNavigationErrorRecord {
    pub time: GsfTime,
    pub record_id: i32,
    /// Metres.
    pub horizontal_error: f64,
    /// Metres.
    pub vertical_error: f64,
    /// Metres.
    pub sep_uncertainty: f64,
    /// Positioning system description, e.g. `"GPS"` or `"RTK"`.
    pub position_type: String,
}

/// Decoded SOUND_VELOCITY_PROFILE record.
#[derive(Debug, Clone, PartialEq)]
pub struct SoundVelocityProfile {
    /// When the profile was measured.
    pub observation_time: GsfTime,
    /// When the profile was applied to the soundings.
    pub application_time: GsfTime,
    /// Degrees.
    pub longitude: f64,
    /// Degrees.
    pub latitude: f64,
    pub points: Vec<SvpPoint>,
}

/// One depth/sound-speed sample of a profile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SvpPoint {
    /// Metres.
    pub depth: f64,
    /// Metres per second.
    pub sound_speed: f64,
}

/// Decode an ATTITUDE payload.
///
/// Layout: `sec:i32, nsec:i32, count:u16`, then `count` measurements of
/// `time_offset_ms:i16, pitch:i16, roll:i16, heave:i16, heading:u16`
/// (angles and heave in hundredths).
pub fn decode_attitude(payload: &[u8]) -> Result<AttitudeRecord, FormatError> {
    let mut r = FieldReader::new(payload);
    let time = read_time(&mut r)?;
    let count = r.u16()? as usize;
    let mut measurements = Vec::with_capacity(count.min(r.remaining() / ATTITUDE_MEASUREMENT_SIZE));

    for _ in 0..count {
        let offset_ms = r.i16()?;
        let pitch = r.i16()?;
        let roll = r.i16()?;
        let heave = r.i16()?;
        let heading = r.u16()?;
        measurements.push(AttitudeMeasurement {
            time: time.offset_millis(i64::from(offset_ms)),
            pitch: f64::from(pitch) / 100.0,
            roll: f64::from(roll) / 100.0,
            heave: f64::from(heave) / 100.0,
            heading: f64::from(heading) / 100.0,
        });
    }

    Ok(AttitudeRecord { time, measurements })
}

/// Decode a NAVIGATION_ERROR payload.
///
/// Layout: `sec:i32, nsec:i32, record_id:i32, longitude_error:i32,
/// latitude_error:i32` (errors in decimetres).
pub fn decode_navigation_error(payload: &[u8]) -> Result<NavigationErrorRecord, FormatError> {
    let mut r = FieldReader::new(payload);
    let time = read_time(&mut r)?;
    let record_id = r.i32()?;
    let longitude_error = f64::from(r.i32()?) / 10.0;
    let latitude_error = f64::from(r.i32()?) / 10.0;

    Ok(NavigationErrorRecord {
        time,
        record_id,
        longitude_error,
        latitude_error,
    })
}

/// Decode an HV_NAVIGATION_ERROR payload.
///
/// Layout: `sec:i32, nsec:i32, record_id:i32, horizontal_error:i32 (mm),
/// vertical_error:i32 (mm), sep_uncertainty:u16 (cm), spare[2], len:u16,
/// position_type[len]`.
pub fn decode_hv_navigation_error(payload: &[u8]) -> Result<HvNavigationErrorRecord, FormatError> {
    let mut r = FieldReader::new(payload);
    let time = read_time(&mut r)?;
    let record_id = r.i32()?;
    let horizontal_error = f64::from(r.i32()?) / 1000.0;
    let vertical_error = f64::from(r.i32()?) / 1000.0;
    let sep_uncertainty = f64::from(r.u16()?) / 100.0;
    r.bytes(2)?;
    let len = r.u16()? as usize;
    let position_type = String::from_utf8_lossy(trim_nul(r.bytes(len)?)).into_owned();

    Ok(HvNavigationErrorRecord {
        time,
        record_id,
        horizontal_error,
        vertical_error,
        sep_uncertainty,
        position_type,
    })
}

/// Decode a SOUND_VELOCITY_PROFILE payload.
///
/// Layout: observation `sec, nsec`, application `sec, nsec`,
/// `longitude:i32, latitude:i32` (1e-7 degrees), `count:u32`, then `count`
/// pairs of `depth:u32, sound_speed:u32` (hundredths).
pub fn decode_sound_velocity_profile(payload: &[u8]) -> Result<SoundVelocityProfile, FormatError> {
    let mut r = FieldReader::new(payload);
    let observation_time = read_time(&mut r)?;
    let application_time = read_time(&mut r)?;
    let longitude = f64::from(r.i32()?) / 1.0e7;
    let latitude = f64::from(r.i32()?) / 1.0e7;
    let count = r.u32()? as usize;
    let mut points = Vec::with_capacity(count.min(r.remaining() / SVP_POINT_SIZE));

    for _ in 0..count {
        let depth = f64::from(r.u32()?) / 100.0;
        let sound_speed = f64::from(r.u32()?) / 100.0;
        points.push(SvpPoint { depth, sound_speed });
    }

    Ok(SoundVelocityProfile {
        observation_time,
        application_time,
        longitude,
        latitude,
        points,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::epoch_to_time;

    fn be32(out: &mut Vec<u8>, v: i32) {
        out.extend_from_slice(&v.to_be_bytes());
    }

    fn be16(out: &mut Vec<u8>, v: i16) {
        out.extend_from_slice(&v.to_be_bytes());
    }

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{a} != {b}");
    }

    #[test]
    fn test_attitude() {
        let mut data = Vec::new();
        be32(&mut data, 1_000);
        be32(&mut data, 0);
        be16(&mut data, 2);
        // measurement 1
        be16(&mut data, 0);
        be16(&mut data, 150);
        be16(&mut data, -225);
        be16(&mut data, 12);
        data.extend_from_slice(&35_999u16.to_be_bytes());
        // measurement 2, 1.5 s later
        be16(&mut data, 1_500);
        be16(&mut data, -1);
        be16(&mut data, 0);
        be16(&mut data, -40);
        data.extend_from_slice(&9_000u16.to_be_bytes());

        let a = decode_attitude(&data).unwrap();
        assert_eq!(a.time, epoch_to_time(1_000, 0));
        assert_eq!(a.measurements.len(), 2);

        let m = a.measurements[0];
        assert_eq!(m.time, a.time);
        assert_close(m.pitch, 1.5);
        assert_close(m.roll, -2.25);
        assert_close(m.heave, 0.12);
        assert_close(m.heading, 359.99);

        let m = a.measurements[1];
        assert_eq!(m.time, epoch_to_time(1_001, 500_000_000));
        assert_close(m.pitch, -0.01);
        assert_close(m.heave, -0.4);
        assert_close(m.heading, 90.0);
    }

    #[test]
    fn test_attitude_empty() {
        let mut data = vec![0u8; 8];
        be16(&mut data, 0);
        let a = decode_attitude(&data).unwrap();
        assert!(a.measurements.is_empty());
    }

    #[test]
    fn test_attitude_count_exceeds_data() {
        let mut data = vec![0u8; 8];
        data.extend_from_slice(&u16::MAX.to_be_bytes());
        data.extend_from_slice(&[0; 10]);
        assert!(matches!(
            decode_attitude(&data),
            Err(FormatError::Truncated { .. })
        ));
    }

    #[test]
    fn test_navigation_error() {
        let mut data = Vec::new();
        be32(&mut data, 7);
        be32(&mut data, 8);
        be32(&mut data, 42);
        be32(&mut data, 25);
        be32(&mut data, -15);

        let n = decode_navigation_error(&data).unwrap();
        assert_eq!(n.time, epoch_to_time(7, 8));
        assert_eq!(n.record_id, 42);
        assert_close(n.longitude_error, 2.5);
        assert_close(n.latitude_error, -1.5);
    }

    #[test]
    fn test_navigation_error_truncated() {
        assert_eq!(
            decode_navigation_error(&[0; 19]),
            Err(FormatError::Truncated {
                expected: 20,
                actual: 19
            })
        );
    }

    #[test]
    fn test_hv_navigation_error() {
        let mut data = Vec::new();
        be32(&mut data, 1);
        be32(&mut data, 0);
        be32(&mut data, -3);
        be32(&mut data, 1_234);
        be32(&mut data, 56);
        data.extend_from_slice(&250u16.to_be_bytes());
        data.extend_from_slice(&[0, 0]);
        data.extend_from_slice(&4u16.to_be_bytes());
        data.extend_from_slice(b"RTK\0");

        let n = decode_hv_navigation_error(&data).unwrap();
        assert_eq!(n.record_id, -3);
        assert_close(n.horizontal_error, 1.234);
        assert_close(n.vertical_error, 0.056);
        assert_close(n.sep_uncertainty, 2.5);
        assert_eq!(n.position_type, "RTK");
    }

    #[test]
    fn test_hv_navigation_error_missing_position_type() {
        let mut data = vec![0u8; 24];
        data.extend_from_slice(&8u16.to_be_bytes());
        data.extend_from_slice(b"GPS");
        assert_eq!(
            decode_hv_navigation_error(&data),
            Err(FormatError::Truncated {
                expected: 34,
                actual: 29
            })
        );
    }

    #[test]
    fn test_sound_velocity_profile() {
        let mut data = Vec::new();
        be32(&mut data, 100);
        be32(&mut data, 0);
        be32(&mut data, 200);
        be32(&mut data, 500_000_000);
        be32(&mut data, -1_225_000_000);
        be32(&mut data, 375_000_000);
        be32(&mut data, 2);
        be32(&mut data, 0);
        be32(&mut data, 150_000);
        be32(&mut data, 1_050);
        be32(&mut data, 148_525);

        let s = decode_sound_velocity_profile(&data).unwrap();
        assert_eq!(s.observation_time, epoch_to_time(100, 0));
        assert_eq!(s.application_time, epoch_to_time(200, 500_000_000));
        assert_close(s.longitude, -122.5);
        assert_close(s.latitude, 37.5);
        assert_eq!(s.points.len(), 2);
        assert_close(s.points[0].depth, 0.0);
        assert_close(s.points[0].sound_speed, 1500.0);
        assert_close(s.points[1].depth, 10.5);
        assert_close(s.points[1].sound_speed, 1485.25);
    }

    #[test]
    fn test_sound_velocity_profile_huge_count() {
        let mut data = vec![0u8; 24];
        data.extend_from_slice(&u32::MAX.to_be_bytes());
        data.extend_from_slice(&[0; 8]);
        assert!(matches!(
            decode_sound_velocity_profile(&data),
            Err(FormatError::Truncated { .. })
        ));
    }
}
