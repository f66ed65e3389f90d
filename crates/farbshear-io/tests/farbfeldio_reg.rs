//! Farbfeld stream I/O regression test
//!
//! Tests the header codec and bulk pixel loading:
//!   1. Lossless stream read/write for several frame shapes
//!   2. Header bytes survive a decode/encode cycle untouched
//!   3. Short streams are rejected with the number of bytes received

use farbshear_core::{Pixel, PixelGrid};
use farbshear_io::{
    FrameHeader, HEADER_SIZE, IoError, read_header, read_image, read_pixels, write_header,
};
use farbshear_test::{RegParams, encode_stream, gradient_grid, solid_grid};
use std::io::Cursor;

#[test]
fn farbfeldio_reg() {
    let mut rp = RegParams::new("farbfeldio");

    // --- Part 1: lossless read/write ---
    eprintln!("\n=== Part 1: lossless r/w ===");
    let fixtures = [
        gradient_grid(4, 4).expect("fixture"),
        gradient_grid(17, 3).expect("fixture"),
        solid_grid(5, 5, Pixel::from_rgba16(0xffff, 0, 0x8000, 0xffff)).expect("fixture"),
        PixelGrid::try_new(0, 7).expect("fixture"),
    ];
    for (i, grid) in fixtures.iter().enumerate() {
        eprintln!("  Test {}: {}x{}", i, grid.width(), grid.height());
        let bytes = encode_stream(grid).expect("encode");
        rp.compare_values(
            (HEADER_SIZE + grid.data().len()) as f64,
            bytes.len() as f64,
            0.0,
        );
        let (header, back) = read_image(&mut Cursor::new(&bytes)).expect("decode");
        rp.compare_values(1.0, if header.is_farbfeld() { 1.0 } else { 0.0 }, 0.0);
        rp.compare_grid(grid, &back);
    }

    // --- Part 2: header echo is byte-exact ---
    eprintln!("\n=== Part 2: header echo ===");
    let raw: [u8; HEADER_SIZE] = *b"XYZWVUTS\x00\x00\x01\x00\xff\x00\x00\x02";
    let header = read_header(&mut Cursor::new(&raw[..])).expect("header");
    rp.compare_values(256.0, f64::from(header.width), 0.0);
    rp.compare_values(f64::from(0xff00_0002u32), f64::from(header.height), 0.0);
    let mut echoed = Vec::new();
    write_header(&mut echoed, &header).expect("write header");
    rp.compare_strings(&raw, &echoed);
    rp.compare_values(
        1.0,
        if header == FrameHeader::parse(&raw) {
            1.0
        } else {
            0.0
        },
        0.0,
    );

    // --- Part 3: truncated input ---
    eprintln!("\n=== Part 3: truncated input ===");
    let bytes = encode_stream(&gradient_grid(3, 3).expect("fixture")).expect("encode");
    for cut in [0, 5, HEADER_SIZE - 1, HEADER_SIZE + 1, bytes.len() - 1] {
        let result = read_image(&mut Cursor::new(&bytes[..cut]));
        let truncated = matches!(result, Err(IoError::TruncatedInput { .. }));
        rp.compare_values(1.0, if truncated { 1.0 } else { 0.0 }, 0.0);
    }
    let result = read_pixels(&mut Cursor::new(vec![0u8; 20]), 2, 2);
    match result {
        Err(IoError::TruncatedInput {
            expected, actual, ..
        }) => {
            rp.compare_values(32.0, expected as f64, 0.0);
            rp.compare_values(20.0, actual as f64, 0.0);
        }
        other => {
            eprintln!("  unexpected result: {:?}", other.map(|g| g.pixel_count()));
            rp.compare_values(1.0, 0.0, 0.0);
        }
    }

    assert!(rp.cleanup(), "farbfeldio regression test failed");
}
