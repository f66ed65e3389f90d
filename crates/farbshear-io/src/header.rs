//! Frame header codec
//!
//! The stream starts with a fixed 16-byte block:
//!
//! ```text
//! Offset  Size  Field
//! ------  ----  -----
//! 0       8     magic tag (opaque, normally "farbfeld")
//! 8       4     width  (u32, big-endian)
//! 12      4     height (u32, big-endian)
//! ```
//!
//! The block is echoed to the output unchanged, so the magic is kept as
//! raw bytes and never rewritten.

use crate::{IoResult, read_full};
use std::io::{Read, Write};

/// Size of the header block in bytes.
pub const HEADER_SIZE: usize = 16;

/// Magic tag written by farbfeld encoders.
pub const FARBFELD_MAGIC: [u8; 8] = *b"farbfeld";

/// Parsed header block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHeader {
    /// Opaque 8-byte magic tag
    pub magic: [u8; 8],
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
}

impl FrameHeader {
    /// Create a header with the farbfeld magic.
    pub fn farbfeld(width: u32, height: u32) -> Self {
        FrameHeader {
            magic: FARBFELD_MAGIC,
            width,
            height,
        }
    }

    /// Decode a header block.
    pub fn parse(bytes: &[u8; HEADER_SIZE]) -> Self {
        let mut magic = [0u8; 8];
        magic.copy_from_slice(&bytes[0..8]);
        let width = u32::from_be_bytes([bytes[8], bytes[9], bytes[10], bytes[11]]);
        let height = u32::from_be_bytes([bytes[12], bytes[13], bytes[14], bytes[15]]);
        FrameHeader {
            magic,
            width,
            height,
        }
    }

    /// Encode the header block. `parse(&h.to_bytes()) == h` for every header.
    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut out = [0u8; HEADER_SIZE];
        out[0..8].copy_from_slice(&self.magic);
        out[8..12].copy_from_slice(&self.width.to_be_bytes());
        out[12..16].copy_from_slice(&self.height.to_be_bytes());
        out
    }

    /// Whether the magic tag is `farbfeld`.
    pub fn is_farbfeld(&self) -> bool {
        self.magic == FARBFELD_MAGIC
    }

    /// Number of pixel records the header declares.
    pub fn pixel_count(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

/// Read the 16-byte header block from a stream.
///
/// # Errors
///
/// Returns [`IoError::TruncatedInput`](crate::IoError::TruncatedInput) if
/// the stream ends before 16 bytes are available.
pub fn read_header<R: Read>(reader: &mut R) -> IoResult<FrameHeader> {
    let mut buf = [0u8; HEADER_SIZE];
    read_full(reader, &mut buf, "header")?;
    let header = FrameHeader::parse(&buf);
    if !header.is_farbfeld() {
        log::warn!(
            "unrecognized magic {:?}, passing it through unchanged",
            String::from_utf8_lossy(&header.magic)
        );
    }
    log::debug!("read header: {}x{}", header.width, header.height);
    Ok(header)
}

/// Write the 16-byte header block to a stream.
pub fn write_header<W: Write>(writer: &mut W, header: &FrameHeader) -> IoResult<()> {
    writer.write_all(&header.to_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::IoError;
    use std::io::Cursor;

    #[test]
    fn test_parse_big_endian_fields() {
        let mut bytes = [0u8; HEADER_SIZE];
        bytes[0..8].copy_from_slice(b"farbfeld");
        bytes[8..12].copy_from_slice(&[0x00, 0x00, 0x01, 0x22]);
        bytes[12..16].copy_from_slice(&[0x00, 0x00, 0x00, 0x46]);
        let header = FrameHeader::parse(&bytes);
        assert_eq!(header.width, 290);
        assert_eq!(header.height, 70);
        assert!(header.is_farbfeld());
        assert_eq!(header.to_bytes(), bytes);
    }

    #[test]
    fn test_large_dimensions_stay_unsigned() {
        let header = FrameHeader::farbfeld(0x8000_0001, 0xffff_ffff);
        let parsed = FrameHeader::parse(&header.to_bytes());
        assert_eq!(parsed.width, 0x8000_0001);
        assert_eq!(parsed.height, u32::MAX);
    }

    #[test]
    fn test_foreign_magic_preserved() {
        let header = FrameHeader {
            magic: *b"notfarbf",
            width: 1,
            height: 1,
        };
        let mut out = Vec::new();
        write_header(&mut out, &header).unwrap();
        let back = read_header(&mut Cursor::new(&out)).unwrap();
        assert!(!back.is_farbfeld());
        assert_eq!(&out[0..8], b"notfarbf");
        assert_eq!(back, header);
    }

    #[test]
    fn test_read_header_truncated() {
        let data = b"farbfeld\x00\x00\x00\x04\x00\x00";
        let err = read_header(&mut Cursor::new(&data[..])).unwrap_err();
        assert!(matches!(
            err,
            IoError::TruncatedInput {
                expected: 16,
                actual: 14,
                ..
            }
        ));
    }

    #[test]
    fn test_read_header_empty_stream() {
        let err = read_header(&mut Cursor::new(Vec::new())).unwrap_err();
        assert!(matches!(err, IoError::TruncatedInput { actual: 0, .. }));
    }
}
