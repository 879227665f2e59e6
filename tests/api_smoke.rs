//! Compile-time smoke test: verify top-level re-exports work.

use gsf_rs::{
    ByteSource, CommentRecord, FormatError, FrameError, FramerConfig, GsfError, GsfTime,
    HeaderRecord, OutOfBounds, Record, RecordFramer, RecordType, RecordView, Result, SizeField,
    decode_comment, decode_header, epoch_to_time, time_to_seconds,
};

#[test]
fn top_level_imports_compile() {
    // Just verify the types are usable from the crate root
    let _: fn(&[u8]) -> std::result::Result<HeaderRecord, FormatError> = decode_header;
    let _: fn(&[u8]) -> std::result::Result<CommentRecord, FormatError> = decode_comment;
    let _: fn(i64, i32) -> GsfTime = epoch_to_time;
    let _: fn(GsfTime) -> f64 = time_to_seconds;
    let _: fn(Vec<u8>) -> ByteSource = ByteSource::from_vec;

    let _rt = RecordType::Comment;
    let _sf = SizeField::Frame;
    let _cfg = FramerConfig::default();
    let _framer = RecordFramer::new(&[]);
    let _view = RecordView::new(RecordType::Header, &[]);
    let _rec = Record::Opaque(RecordType::SingleBeamPing);

    // Error types are accessible
    let _e: Option<GsfError> = None;
    let _f: Option<FrameError> = None;
    let _o: Option<OutOfBounds> = None;
    let _r: Result<()> = Ok(());
}
