//! Command-line interface
//!
//! The positional arguments select the shear mode by count:
//!
//! | Args | Meaning |
//! |---|---|
//! | `ANGLE` | rotation angle in degrees |
//! | `SHEAR_H SHEAR_V` | explicit integer shears (`0x`/`0` prefixes allowed) |
//!
//! Any other count is a usage error. The count is resolved into a
//! [`ShearInput`] before any input is read.

use crate::app::RunOptions;
use crate::error::{Error, Result};
use clap::Parser;
use farbshear_transform::{ShearInput, parse_angle, parse_shear_value};

/// Rotate a farbfeld image read from stdin by composing shears, writing
/// the result to stdout.
#[derive(Debug, Parser)]
#[command(name = "farbshear", version, about)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// ANGLE in degrees, or SHEAR_H SHEAR_V. Put `--` before values such
    /// as `-0x10` that are not plain negative numbers.
    #[arg(value_name = "ARGS", allow_negative_numbers = true)]
    pub args: Vec<String>,
}

impl Cli {
    /// Resolve the positional arguments into a shear request.
    pub fn shear_input(&self) -> Result<ShearInput> {
        resolve_shear_input(&self.args)
    }

    /// Run options implied by the flags.
    pub fn run_options(&self) -> RunOptions {
        RunOptions::default().verbosity(self.verbose)
    }
}

/// Select the shear mode from the number of positional arguments.
///
/// # Errors
///
/// Returns [`Error::Usage`] for a wrong argument count or a value that
/// does not parse.
pub fn resolve_shear_input<S: AsRef<str>>(args: &[S]) -> Result<ShearInput> {
    match args {
        [angle] => {
            let degrees = parse_angle(angle.as_ref()).map_err(|e| Error::Usage(e.to_string()))?;
            Ok(ShearInput::Angle(degrees))
        }
        [h, v] => {
            let shear_h = parse_shear_value(h.as_ref()).map_err(|e| Error::Usage(e.to_string()))?;
            let shear_v = parse_shear_value(v.as_ref()).map_err(|e| Error::Usage(e.to_string()))?;
            Ok(ShearInput::direct(shear_h, shear_v))
        }
        _ => Err(Error::Usage(format!(
            "incorrect number of arguments: expected ANGLE or SHEAR_H SHEAR_V, got {}",
            args.len()
        ))),
    }
}
