//! Shear-composition pixel remapping
//!
//! For each destination pixel the source coordinate is found by composing
//! three axis-aligned shears about the frame center:
//!
//! ```text
//! xx = x - w/2            yy = y - h/2
//! yy += (xx * shear_v) / w
//! xx -= (yy * shear_h) / h
//! yy += (xx * shear_v) / w
//! xx += w/2               yy += h/2
//! source = (xx mod w, yy mod h)
//! ```
//!
//! Division truncates toward zero. The vertical shear is applied twice and
//! the horizontal shear once; this V-H-V order is kept as is, since every
//! non-zero rotation depends on it.
//!
//! Out-of-range coordinates wrap around, so the frame behaves as a torus
//! and every destination pixel has a source.

use crate::TransformResult;
use crate::shear::ShearParams;
use farbshear_core::PixelGrid;
use std::io::Write;

/// Wrap `value` into `[0, modulus)`.
///
/// Equivalent to adding `modulus` until the value is non-negative and then
/// taking the remainder. Shared by both axes.
///
/// # Panics
///
/// Panics if `modulus` is zero.
#[inline]
pub fn wrap_coord(value: i128, modulus: i128) -> i128 {
    value.rem_euclid(modulus)
}

/// Immutable state for one remapping pass.
///
/// Built once from the loaded frame and the derived shear pair, then
/// handed to [`remap_to_writer`] or [`remap`]. Every `i64` shear is
/// accepted; the mapping is exact over the whole range.
#[derive(Debug, Clone, Copy)]
pub struct ImageContext<'a> {
    grid: &'a PixelGrid,
    params: ShearParams,
    width: i128,
    height: i128,
}

impl<'a> ImageContext<'a> {
    /// Bundle a frame with its shear parameters.
    pub fn new(grid: &'a PixelGrid, params: ShearParams) -> Self {
        ImageContext {
            grid,
            params,
            width: i128::from(grid.width()),
            height: i128::from(grid.height()),
        }
    }

    /// The source frame.
    #[inline]
    pub fn grid(&self) -> &'a PixelGrid {
        self.grid
    }

    /// The shear pair in use.
    #[inline]
    pub fn params(&self) -> ShearParams {
        self.params
    }

    /// Frame width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.grid.width()
    }

    /// Frame height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.grid.height()
    }

    /// Source coordinate sampled for destination `(x, y)`.
    ///
    /// The caller must pass a coordinate inside the frame; for an empty
    /// frame there is none.
    pub fn source_coord(&self, x: u32, y: u32) -> (u32, u32) {
        debug_assert!(x < self.width() && y < self.height());
        let (w, h) = (self.width, self.height);
        let sh = i128::from(self.params.shear_h);
        let sv = i128::from(self.params.shear_v);

        let mut xx = i128::from(x) - w / 2;
        let mut yy = i128::from(y) - h / 2;
        // |xx * sv| < 2^95, and |yy| stays below 2^63 + 2^31, so
        // |yy * sh| < 2^127: the first two steps are exact in i128.
        yy += (xx * sv) / w;
        xx -= (yy * sh) / h;

        // xx can now reach 2^126. Split it as xx = q * w + r, where q and r
        // share a sign, so trunc(xx * sv / w) = q * sv + trunc(r * sv / w).
        // Only yy mod h is used from here on, so q * sv is reduced mod h.
        let (q, r) = (xx / w, xx % w);
        let whole = wrap_coord(wrap_coord(q, h) * wrap_coord(sv, h), h);
        yy += whole + (r * sv) / w;

        xx += w / 2;
        yy += h / 2;

        // Both results lie in [0, u32::MAX)
        (wrap_coord(xx, w) as u32, wrap_coord(yy, h) as u32)
    }
}

/// Stream the remapped frame to `writer` in raster order.
///
/// Each destination pixel is written as soon as its source is resolved;
/// no second frame buffer is allocated. Wrap the writer in a
/// `BufWriter` for unbuffered sinks.
pub fn remap_to_writer<W: Write>(ctx: &ImageContext<'_>, writer: &mut W) -> TransformResult<()> {
    log::debug!(
        "remapping {}x{} with shear_h={} shear_v={}",
        ctx.width(),
        ctx.height(),
        ctx.params().shear_h,
        ctx.params().shear_v
    );
    for y in 0..ctx.height() {
        for x in 0..ctx.width() {
            let (sx, sy) = ctx.source_coord(x, y);
            let bytes = ctx
                .grid()
                .pixel_bytes(sx, sy)
                .ok_or_else(|| farbshear_core::Error::IndexOutOfBounds {
                    x: sx,
                    y: sy,
                    width: ctx.width(),
                    height: ctx.height(),
                })?;
            writer.write_all(bytes)?;
        }
    }
    Ok(())
}

/// Remap into a new in-memory frame.
///
/// Produces the same pixels as [`remap_to_writer`], for callers that want
/// the result as a [`PixelGrid`].
pub fn remap(ctx: &ImageContext<'_>) -> TransformResult<PixelGrid> {
    let mut out = PixelGrid::try_new(ctx.width(), ctx.height())?;
    for y in 0..ctx.height() {
        for x in 0..ctx.width() {
            let (sx, sy) = ctx.source_coord(x, y);
            out.set_unchecked(x, y, ctx.grid().get_unchecked(sx, sy));
        }
    }
    Ok(out)
}
