//! Process driver
//!
//! Wires the stages together in stream order: read and echo the header,
//! load the frame, derive the shears, then stream the remapped pixels.
//! The header is written before the frame is loaded, so a later failure
//! can leave a header with no pixel data behind it.

use crate::error::Result;
use farbshear_io::{FrameHeader, read_header, read_pixels, write_header};
use farbshear_transform::{ImageContext, ShearInput, ShearParams, remap_to_writer};
use std::io::{self, BufReader, BufWriter, Read, Write};

/// Capacity of the stdin/stdout buffers in bytes.
pub const BUFFER_CAPACITY: usize = 64 * 1024;

/// Options for a filter run
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Log verbosity: 0 warn, 1 info, 2 debug, 3+ trace
    pub verbosity: u8,
}

impl RunOptions {
    /// Set the log verbosity
    pub fn verbosity(mut self, verbosity: u8) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Log filter matching the verbosity.
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbosity {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}

/// What a completed run processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Header echoed to the output
    pub header: FrameHeader,
    /// Shears applied
    pub params: ShearParams,
}

/// Run the filter from `reader` to `writer`.
///
/// The writer is flushed before returning.
pub fn run<R: Read, W: Write>(
    input: ShearInput,
    reader: &mut R,
    writer: &mut W,
) -> Result<RunSummary> {
    let header = read_header(reader)?;
    write_header(writer, &header)?;

    let grid = read_pixels(reader, header.width, header.height)?;
    let params = ShearParams::from_input(input, header.width, header.height)?;
    let ctx = ImageContext::new(&grid, params);
    remap_to_writer(&ctx, writer)?;
    writer.flush().map_err(farbshear_io::IoError::from)?;

    log::info!(
        "rotated {}x{} frame with shear ({}, {})",
        header.width,
        header.height,
        params.shear_h,
        params.shear_v
    );
    Ok(RunSummary { header, params })
}

/// Run the filter on the process's standard streams.
pub fn run_stdio(input: ShearInput) -> Result<RunSummary> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut reader = BufReader::with_capacity(BUFFER_CAPACITY, stdin.lock());
    let mut writer = BufWriter::with_capacity(BUFFER_CAPACITY, stdout.lock());
    run(input, &mut reader, &mut writer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use farbshear_core::{Pixel, PixelGrid};
    use farbshear_io::FARBFELD_MAGIC;
    use std::io::Cursor;

    fn stream(grid: &PixelGrid) -> Vec<u8> {
        let mut buf = Vec::new();
        farbshear_io::write_image(&mut buf, FARBFELD_MAGIC, grid).unwrap();
        buf
    }

    #[test]
    fn test_run_identity() {
        let grid = PixelGrid::from_fn(4, 4, |x, y| Pixel::splat((y * 4 + x) as u8)).unwrap();
        let input = stream(&grid);
        let mut out = Vec::new();
        let summary = run(ShearInput::direct(0, 0), &mut Cursor::new(&input), &mut out).unwrap();
        assert_eq!(out, input);
        assert!(summary.params.is_identity());
        assert_eq!(summary.header.width, 4);
    }

    #[test]
    fn test_run_truncated_pixels_leaves_header() {
        let grid = PixelGrid::try_new(3, 3).unwrap();
        let mut input = stream(&grid);
        input.truncate(16 + 10);
        let mut out = Vec::new();
        let err = run(ShearInput::Angle(10.0), &mut Cursor::new(&input), &mut out).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TruncatedInput);
        assert_eq!(out, &input[..16]);
    }

    #[test]
    fn test_run_truncated_header_writes_nothing() {
        let mut out = Vec::new();
        let err = run(
            ShearInput::direct(0, 0),
            &mut Cursor::new(b"farb".to_vec()),
            &mut out,
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TruncatedInput);
        assert!(out.is_empty());
    }

    #[test]
    fn test_run_half_turn() {
        // tan(90 deg) gives a shear far beyond 2^40; the frame still comes out
        let grid = PixelGrid::from_fn(2, 2, |x, y| Pixel::splat((y * 2 + x) as u8)).unwrap();
        let input = stream(&grid);
        let mut out = Vec::new();
        let summary = run(ShearInput::Angle(180.0), &mut Cursor::new(&input), &mut out).unwrap();
        assert!(summary.params.shear_v.unsigned_abs() > 1 << 40);
        assert_eq!(out.len(), input.len());
        assert_eq!(&out[..16], &input[..16]);
    }

    #[test]
    fn test_run_non_finite_angle() {
        let input = stream(&PixelGrid::try_new(2, 2).unwrap());
        let mut out = Vec::new();
        let err = run(ShearInput::Angle(f64::NAN), &mut Cursor::new(&input), &mut out).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidShear);
    }

    #[test]
    fn test_run_options() {
        let opts = RunOptions::default().verbosity(2);
        assert_eq!(opts.log_level(), log::LevelFilter::Debug);
        assert_eq!(RunOptions::default().log_level(), log::LevelFilter::Warn);
    }
}
