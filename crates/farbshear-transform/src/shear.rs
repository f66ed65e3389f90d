//! Shear parameter derivation
//!
//! A rotation by `θ` is approximated by shearing the image along its axes.
//! The filter works with an integer pair:
//!
//! - `shear_h`: horizontal shear, `round(sin(θ) * width)`
//! - `shear_v`: vertical shear, `round(tan(θ / 2) * height)`
//!
//! Both are scaled to the image dimensions so that the remapper can use
//! pure integer arithmetic (see [`crate::remap`]).
//!
//! # Example
//!
//! ```
//! use farbshear_transform::{ShearInput, ShearParams};
//!
//! let params = ShearParams::from_input(ShearInput::Angle(30.0), 100, 100).unwrap();
//! assert_eq!(params, ShearParams::new(50, 27));
//!
//! let direct = ShearParams::from_input(ShearInput::direct(3, -2), 100, 100).unwrap();
//! assert_eq!(direct, ShearParams::new(3, -2));
//! ```

use crate::{TransformError, TransformResult};
use std::f64::consts::TAU;

// ============================================================================
// Types
// ============================================================================

/// How the shear pair is requested.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShearInput {
    /// Rotation angle in degrees; may be negative or exceed 360
    Angle(f64),
    /// Explicit shear magnitudes, used verbatim
    Direct { shear_h: i64, shear_v: i64 },
}

impl ShearInput {
    /// Shorthand for [`ShearInput::Direct`].
    pub fn direct(shear_h: i64, shear_v: i64) -> Self {
        ShearInput::Direct { shear_h, shear_v }
    }
}

/// Integer shear magnitudes, derived once per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ShearParams {
    /// Horizontal shear, applied once
    pub shear_h: i64,
    /// Vertical shear, applied before and after the horizontal one
    pub shear_v: i64,
}

impl ShearParams {
    /// Create a parameter pair from explicit values.
    pub const fn new(shear_h: i64, shear_v: i64) -> Self {
        ShearParams { shear_h, shear_v }
    }

    /// The pair that leaves every pixel in place.
    pub const fn identity() -> Self {
        ShearParams::new(0, 0)
    }

    /// True if both shears are zero.
    pub fn is_identity(&self) -> bool {
        self.shear_h == 0 && self.shear_v == 0
    }

    /// Derive the shear pair for a rotation of `degrees` on a
    /// `width` x `height` frame.
    ///
    /// `shear_h = round(sin(θ·τ/360) · width)` and
    /// `shear_v = round(tan(θ·τ/720) · height)`, rounding half away from zero.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::InvalidParameters`] if the angle or either
    /// product is not finite.
    pub fn from_angle(degrees: f64, width: u32, height: u32) -> TransformResult<Self> {
        if !degrees.is_finite() {
            return Err(TransformError::InvalidParameters(format!(
                "rotation angle must be finite, got {degrees}"
            )));
        }

        let h = (degrees * TAU / 360.0).sin() * f64::from(width);
        let v = (degrees * TAU / 720.0).tan() * f64::from(height);
        if !h.is_finite() || !v.is_finite() {
            return Err(TransformError::InvalidParameters(format!(
                "angle {degrees} gives a non-finite shear"
            )));
        }

        // `as` saturates at the i64 bounds
        let params = ShearParams::new(h.round() as i64, v.round() as i64);
        log::debug!(
            "angle {degrees} deg on {width}x{height}: shear_h={} shear_v={}",
            params.shear_h,
            params.shear_v
        );
        Ok(params)
    }

    /// Resolve a [`ShearInput`] against the frame dimensions.
    pub fn from_input(input: ShearInput, width: u32, height: u32) -> TransformResult<Self> {
        match input {
            ShearInput::Angle(degrees) => Self::from_angle(degrees, width, height),
            ShearInput::Direct { shear_h, shear_v } => Ok(ShearParams::new(shear_h, shear_v)),
        }
    }
}

// ============================================================================
// Argument parsing
// ============================================================================

/// Parse an explicit shear magnitude.
///
/// Accepts C `strtol` base-0 notation: an optional sign, then `0x`/`0X`
/// followed by hex digits, a leading `0` followed by octal digits, or plain
/// decimal. Surrounding whitespace is ignored. Trailing garbage is an error.
///
/// # Errors
///
/// Returns [`TransformError::InvalidParameters`] for malformed or
/// out-of-range values.
pub fn parse_shear_value(text: &str) -> TransformResult<i64> {
    let invalid = || TransformError::InvalidParameters(format!("invalid shear value '{text}'"));

    let trimmed = text.trim();
    let (negative, body) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let (radix, digits) = if let Some(hex) = body
        .strip_prefix("0x")
        .or_else(|| body.strip_prefix("0X"))
    {
        (16, hex)
    } else if body.len() > 1 && body.starts_with('0') {
        (8, &body[1..])
    } else {
        (10, body)
    };

    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(invalid());
    }

    let magnitude = u64::from_str_radix(digits, radix).map_err(|_| invalid())?;
    let signed = if negative {
        -i128::from(magnitude)
    } else {
        i128::from(magnitude)
    };
    i64::try_from(signed).map_err(|_| invalid())
}

/// Parse a rotation angle in degrees.
///
/// # Errors
///
/// Returns [`TransformError::InvalidParameters`] if the text is not a
/// finite floating-point number.
pub fn parse_angle(text: &str) -> TransformResult<f64> {
    match text.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(TransformError::InvalidParameters(format!(
            "invalid rotation angle '{text}'"
        ))),
    }
}
