//! Big-endian field readers.
//!
//! GSF stores every multi-byte integer in network byte order. These readers
//! go through `from_be_bytes`, so the result is independent of host byte
//! order. Each returns `None` when the field would run past the slice.

use crate::error::{FormatError, OutOfBounds};

/// Read a big-endian `u32` at `offset`.
pub fn read_u32(bytes: &[u8], offset: usize) -> Option<u32> {
    field::<4>(bytes, offset).map(u32::from_be_bytes)
}

/// Read a big-endian `i32` at `offset`.
pub fn read_i32(bytes: &[u8], offset: usize) -> Option<i32> {
    field::<4>(bytes, offset).map(i32::from_be_bytes)
}

/// Read a big-endian `u16` at `offset`.
pub fn read_u16(bytes: &[u8], offset: usize) -> Option<u16> {
    field::<2>(bytes, offset).map(u16::from_be_bytes)
}

/// Read a big-endian `i16` at `offset`.
pub fn read_i16(bytes: &[u8], offset: usize) -> Option<i16> {
    field::<2>(bytes, offset).map(i16::from_be_bytes)
}

fn field<const N: usize>(bytes: &[u8], offset: usize) -> Option<[u8; N]> {
    let end = offset.checked_add(N)?;
    bytes.get(offset..end)?.try_into().ok()
}

/// Borrow `size` bytes of `bytes` starting at `offset`, overflow-safe.
pub(crate) fn checked_slice(
    bytes: &[u8],
    offset: usize,
    size: usize,
) -> Result<&[u8], OutOfBounds> {
    offset
        .checked_add(size)
        .and_then(|end| bytes.get(offset..end))
        .ok_or(OutOfBounds {
            offset,
            size,
            len: bytes.len(),
        })
}

/// Cursor over a record payload used by the decoders.
///
/// Every read is bounds-checked and reports [`FormatError::Truncated`] with
/// the byte count the layout needed at that point.
pub(crate) struct FieldReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> FieldReader<'a> {
    pub(crate) fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub(crate) fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    fn truncated(&self, need: usize) -> FormatError {
        FormatError::Truncated {
            expected: self.pos.saturating_add(need),
            actual: self.data.len(),
        }
    }

    pub(crate) fn bytes(&mut self, len: usize) -> Result<&'a [u8], FormatError> {
        let out = checked_slice(self.data, self.pos, len)?;
        self.pos += len;
        Ok(out)
    }

    pub(crate) fn u32(&mut self) -> Result<u32, FormatError> {
        let v = read_u32(self.data, self.pos).ok_or_else(|| self.truncated(4))?;
        self.pos += 4;
        Ok(v)
    }

    pub(crate) fn i32(&mut self) -> Result<i32, FormatError> {
        let v = read_i32(self.data, self.pos).ok_or_else(|| self.truncated(4))?;
        self.pos += 4;
        Ok(v)
    }

    pub(crate) fn u16(&mut self) -> Result<u16, FormatError> {
        let v = read_u16(self.data, self.pos).ok_or_else(|| self.truncated(2))?;
        self.pos += 2;
        Ok(v)
    }

    pub(crate) fn i16(&mut self) -> Result<i16, FormatError> {
        let v = read_i16(self.data, self.pos).ok_or_else(|| self.truncated(2))?;
        self.pos += 2;
        Ok(v)
    }
}

/// Strip the NUL padding GSF writers append to text fields.
pub(crate) fn trim_nul(bytes: &[u8]) -> &[u8] {
    let end = bytes.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
    &bytes[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_u32_big_endian() {
        let data = [0x12, 0x34, 0x56, 0x78, 0x9A];
        assert_eq!(read_u32(&data, 0), Some(0x1234_5678));
        assert_eq!(read_u32(&data, 1), Some(0x3456_789A));
        assert_eq!(read_u32(&data, 2), None);
    }

    #[test]
    fn test_read_signed() {
        let data = [0xFF, 0xFF, 0xFF, 0xFE];
        assert_eq!(read_i32(&data, 0), Some(-2));
        assert_eq!(read_i16(&data, 2), Some(-2));
        assert_eq!(read_u16(&data, 2), Some(0xFFFE));
    }

    #[test]
    fn test_read_offset_overflow() {
        assert_eq!(read_u32(&[0; 8], usize::MAX - 1), None);
        assert_eq!(read_u16(&[0; 8], usize::MAX), None);
    }

    #[test]
    fn test_field_reader_sequence() {
        let data = [0, 0, 0, 7, 0xFF, 0xF6, b'h', b'i'];
        let mut r = FieldReader::new(&data);
        assert_eq!(r.u32().unwrap(), 7);
        assert_eq!(r.i16().unwrap(), -10);
        assert_eq!(r.bytes(2).unwrap(), b"hi");
        assert_eq!(r.remaining(), 0);
        assert_eq!(
            r.u16().unwrap_err(),
            FormatError::Truncated {
                expected: 10,
                actual: 8
            }
        );
    }

    #[test]
    fn test_checked_slice() {
        let data = [1, 2, 3, 4];
        assert_eq!(checked_slice(&data, 1, 2).unwrap(), &[2u8, 3]);
        assert_eq!(checked_slice(&data, 4, 0).unwrap(), &[] as &[u8]);
        assert_eq!(
            checked_slice(&data, 2, 3).unwrap_err(),
            OutOfBounds {
                offset: 2,
                size: 3,
                len: 4
            }
        );
        assert!(checked_slice(&data, 5, 0).is_err());
        assert!(checked_slice(&data, 1, usize::MAX).is_err());
    }

    #[test]
    fn test_field_reader_bytes_past_end() {
        let data = [0, 0, 0, 3, b'a', b'b'];
        let mut r = FieldReader::new(&data);
        let len = r.u32().unwrap() as usize;
        assert_eq!(
            r.bytes(len).unwrap_err(),
            FormatError::Truncated {
                expected: 7,
                actual: 6
            }
        );
        assert_eq!(r.remaining(), 2);
        assert!(r.bytes(usize::MAX).is_err());
    }

    #[test]
    fn test_trim_nul() {
        assert_eq!(trim_nul(b"abc\0\0"), b"abc");
        assert_eq!(trim_nul(b"abc"), b"abc");
        assert_eq!(trim_nul(b"\0\0"), b"");
        assert_eq!(trim_nul(b"a\0b\0"), b"a\0b");
    }
}
