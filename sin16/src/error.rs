//! Configuration errors.
//!
//! The sine lookup itself is total over the 14-bit angle domain; only building
//! a [`Layout`](crate::Layout) or [`SineApproximator`](crate::SineApproximator)
//! can fail.

use thiserror::Error;

/// Rejected approximator configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Index and interpolation fields do not fit below the quadrant bits.
    #[error("index width {index_width} + interpolation width {interp_width} exceeds 12 bits")]
    WidthsTooWide {
        /// Requested table index width.
        index_width: u32,
        /// Requested interpolation width.
        interp_width: u32,
    },
    /// The layout's index width does not match the table length.
    #[error("table holds 2^{table} + 1 entries but layout expects 2^{layout} + 1")]
    IndexWidthMismatch {
        /// Index width implied by the table length.
        table: u32,
        /// Index width requested by the layout.
        layout: u32,
    },
}
