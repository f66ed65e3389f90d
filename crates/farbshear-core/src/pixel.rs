//! Opaque 8-byte pixel records
//!
//! A farbfeld pixel is four big-endian 16-bit channels (RGBA), but nothing
//! in the rotation engine looks at the channels. Pixels are moved as whole
//! records.

/// Size of one pixel record in bytes.
pub const PIXEL_SIZE: usize = 8;

/// A single 8-byte pixel record, copied verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct Pixel(pub [u8; PIXEL_SIZE]);

impl Pixel {
    /// Create a pixel from its raw bytes.
    #[inline]
    pub const fn new(bytes: [u8; PIXEL_SIZE]) -> Self {
        Pixel(bytes)
    }

    /// Create a pixel whose eight bytes all equal `value`.
    #[inline]
    pub const fn splat(value: u8) -> Self {
        Pixel([value; PIXEL_SIZE])
    }

    /// Create a pixel from four 16-bit channels, stored big-endian.
    pub fn from_rgba16(r: u16, g: u16, b: u16, a: u16) -> Self {
        let mut bytes = [0u8; PIXEL_SIZE];
        bytes[0..2].copy_from_slice(&r.to_be_bytes());
        bytes[2..4].copy_from_slice(&g.to_be_bytes());
        bytes[4..6].copy_from_slice(&b.to_be_bytes());
        bytes[6..8].copy_from_slice(&a.to_be_bytes());
        Pixel(bytes)
    }

    /// Raw bytes of the record.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; PIXEL_SIZE] {
        &self.0
    }
}

impl From<[u8; PIXEL_SIZE]> for Pixel {
    fn from(bytes: [u8; PIXEL_SIZE]) -> Self {
        Pixel(bytes)
    }
}
