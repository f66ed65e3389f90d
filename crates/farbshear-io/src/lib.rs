//! farbshear-io - Raster stream I/O
//!
//! Reading and writing the farbfeld-style stream consumed and produced by
//! the filter:
//!
//! - [`header`] - the fixed 16-byte header block
//! - [`farbfeld`] - bulk loading and writing of pixel records

mod error;
pub mod farbfeld;
pub mod header;

pub use error::{IoError, IoResult};
pub use farbfeld::{read_image, read_pixels, write_image, write_pixels};
pub use header::{FARBFELD_MAGIC, FrameHeader, HEADER_SIZE, read_header, write_header};

use std::io::{ErrorKind, Read};

/// Fill `buf` completely from `reader`.
///
/// Like `Read::read_exact`, but a short stream is reported as
/// [`IoError::TruncatedInput`] together with the number of bytes that did
/// arrive.
pub(crate) fn read_full<R: Read>(
    reader: &mut R,
    buf: &mut [u8],
    what: &'static str,
) -> IoResult<()> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => {
                return Err(IoError::TruncatedInput {
                    what,
                    expected: buf.len(),
                    actual: filled,
                });
            }
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => {}
            Err(e) => return Err(IoError::Io(e)),
        }
    }
    Ok(())
}
