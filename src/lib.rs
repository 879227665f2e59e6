//! Pure Rust reader for Generic Sensor Format (GSF) sonar survey files.
//!
//! A GSF file is a flat sequence of big-endian frames, each holding one
//! record: a version header, comments, processing history, attitude, sound
//! velocity profiles, swath bathymetry pings and more. This crate splits the
//! stream into frames without copying and decodes the metadata records.
//! Record kinds without a decoder (pings, sensor parameters, summaries) are
//! skipped using their declared size and reported as [`Record::Opaque`].
//!
//! # Reading a file
//!
//! ```no_run
//! use gsf_rs::ByteSource;
//!
//! let source = ByteSource::open("survey.gsf")?;
//! for view in source.framer() {
//!     let view = view?;
//!     println!("{} ({} bytes)", view.record_type(), view.size());
//!     match view.decode() {
//!         Ok(record) => println!("  {record}"),
//!         Err(e) => eprintln!("  undecodable: {e}"),
//!     }
//! }
//! # Ok::<(), gsf_rs::GsfError>(())
//! ```
//!
//! # Framing in-memory data
//!
//! ```
//! use gsf_rs::{ByteSource, Record, RecordType};
//!
//! // HEADER frame: size 12, type 1, "GSF-v03.06" plus padding
//! let mut data = vec![0, 0, 0, 12, 0, 0, 0, 1];
//! data.extend_from_slice(b"GSF-v03.06\0\0");
//!
//! let source = ByteSource::from_vec(data);
//! let views: Vec<_> = source.framer().collect::<Result<Vec<_>, _>>().unwrap();
//! assert_eq!(views.len(), 1);
//! assert_eq!(views[0].record_type(), RecordType::Header);
//!
//! match views[0].decode().unwrap() {
//!     Record::Header(h) => assert_eq!((h.version_major, h.version_minor), (3, 6)),
//!     other => panic!("unexpected record {other:?}"),
//! }
//! ```
//!
//! # Decoding an isolated payload
//!
//! ```
//! use gsf_rs::{decode_comment, time_to_seconds};
//!
//! let payload = [0, 0, 0, 1, 0, 0, 0, 2, 0, 0, 0, 3, b'a', b'b', b'c', 0];
//! let comment = decode_comment(&payload).unwrap();
//! assert_eq!(comment.text, b"abc");
//! assert!((time_to_seconds(comment.time) - 1.000000002).abs() < 1e-6);
//! ```

pub mod codec;
pub mod decode;
pub mod decode_nav;
pub mod error;
pub mod reader;
pub mod record;
pub mod source;
pub mod time;
pub mod types;

pub use error::{FormatError, FrameError, GsfError, OutOfBounds, Result};
pub use reader::{FramerConfig, RecordFramer};
pub use record::{Record, RecordView};
pub use source::ByteSource;
pub use time::{GsfTime, epoch_to_time, time_to_seconds};
pub use types::{RecordType, SizeField};

pub use decode::{
    CommentRecord, HeaderRecord, HistoryRecord, ProcessingParameters, decode_comment,
    decode_header, decode_history, decode_processing_parameters,
};
pub use decode_nav::{
    AttitudeMeasurement, AttitudeRecord, HvNavigationErrorRecord, NavigationErrorRecord,
    SoundVelocityProfile, SvpPoint, decode_attitude, decode_hv_navigation_error,
    decode_navigation_error, decode_sound_velocity_profile,
};
