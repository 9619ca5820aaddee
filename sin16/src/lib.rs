//! # sin16
//!
//! A `no_std`, allocation-free 16-bit sine approximation for targets where a
//! floating-point `sin` is too slow or missing. Angles are 14-bit fractions of
//! a full turn; the result is `32767 * sin(angle)` as an `i16`, computed from a
//! 17-entry quarter-wave table by quadrant symmetry and linear interpolation.
//!
//! ## Architecture
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`angle`] | [`Angle`] newtype and the [`Layout`] of its bit fields |
//! | [`table`] | [`QuarterWaveTable`]: the published literal and generators |
//! | [`global`] | Process-wide table, static or generated once |
//! | [`approximator`] | [`SineApproximator`] and the [`sine`] entry point |
//! | [`convert`] | Degree and radian conversions |
//!
//! ## Quick start
//!
//! ```
//! use sin16::{degrees_to_angle, sine};
//!
//! assert_eq!(sine(degrees_to_angle(90.0)), 32767);
//! assert_eq!(sine(degrees_to_angle(270.0)), -32767);
//!
//! let half = sine(degrees_to_angle(30.0));
//! assert!((half - 16384).abs() < 32);
//! ```
//!
//! Other table sizes and interpolation widths go through [`SineApproximator`]:
//!
//! ```
//! use sin16::{Angle, Config, QuarterWaveTable, SineApproximator};
//!
//! let table = QuarterWaveTable::<257>::generate();
//! let approx = SineApproximator::new(&table, Config::new(8, 4, true)?)?;
//! assert_eq!(approx.sine(Angle::QUARTER_TURN), 32767);
//! # Ok::<(), sin16::ConfigError>(())
//! ```
//!
//! ## Features
//!
//! | Feature | Default | Enables |
//! |---------|---------|---------|
//! | `generated-table` | no | Compute the process-wide table with `libm::sin` on first use instead of using the literal |

#![no_std]

#[cfg(test)]
extern crate std;

pub mod constants;
pub mod angle;
pub mod table;
pub mod global;
pub mod approximator;
pub mod convert;
mod error;


pub use angle::{Angle, Decomposed, Layout};
pub use approximator::{sine, Config, SineApproximator};
pub use convert::{
    angle_to_degrees, angle_to_degrees_i, angle_to_degrees_i_rounded, angle_to_radians,
    degrees_to_angle, degrees_to_angle_i, degrees_to_angle_i_rounded, degrees_to_angle_rounded,
    radians_to_angle, radians_to_angle_rounded,
};
pub use error::ConfigError;
pub use global::{init_table, table_lookup, table_size};
pub use table::{QuarterWaveTable, SINE16_TABLE};
