//! farbshear-transform - Shear-based rotation
//!
//! This crate provides the rotation engine of the filter:
//!
//! - Shear parameter derivation from an angle or explicit values
//! - Per-pixel inverse remapping through a vertical/horizontal/vertical
//!   shear composition with toroidal wraparound
//!
//! All pixel arithmetic is integer; no sample is ever interpolated.

mod error;
pub mod remap;
pub mod shear;

pub use error::{TransformError, TransformResult};
pub use remap::{ImageContext, remap, remap_to_writer, wrap_coord};
pub use shear::{ShearInput, ShearParams, parse_angle, parse_shear_value};
