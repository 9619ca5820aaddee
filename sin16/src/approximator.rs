//! Table-interpolated sine approximation.
//!
//! Only the first quadrant is stored. The other three follow from
//! `sin(90° + x) = sin(90° - x)` and `sin(180° + x) = -sin(x)`: quadrants 1
//! and 3 read the table backwards, quadrants 2 and 3 negate the result.
//! Between table entries the value is linearly interpolated using the
//! angle's interpolation field.

use crate::angle::{Angle, Layout};
use crate::error::ConfigError;
use crate::global;
use crate::table::QuarterWaveTable;

/// Approximator settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Bit layout used to split angles. Its index width must match the table.
    pub layout: Layout,
    /// Add half an interpolation step before truncating the phase bits.
    ///
    /// Has no effect when the layout leaves no phase bits.
    pub rounding: bool,
}

impl Config {
    /// 4-bit index, 8-bit interpolation, rounding enabled.
    pub const DEFAULT: Config = Config {
        layout: Layout::DEFAULT,
        rounding: true,
    };

    /// Validate widths and build a config.
    pub const fn new(index_width: u32, interp_width: u32, rounding: bool) -> Result<Self, ConfigError> {
        match Layout::new(index_width, interp_width) {
            Ok(layout) => Ok(Config { layout, rounding }),
            Err(e) => Err(e),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::DEFAULT
    }
}

/// Linear interpolation delta between adjacent samples `x1` and `x2`.
///
/// Computed in `i32`: a sample delta is at most 32767 and `interp` is below
/// `2^12`, so the product stays under `2^27`.
#[inline(always)]
pub fn interpolation_delta(x1: i32, x2: i32, interp: i32, interp_width: u32) -> i32 {
    ((x2 - x1) * interp) >> interp_width
}

/// Sine approximator over a borrowed quarter-wave table.
///
/// # Example
/// ```
/// use sin16::{degrees_to_angle, SineApproximator, SINE16_TABLE};
///
/// let approx = SineApproximator::from_table(&SINE16_TABLE);
/// assert_eq!(approx.sine(degrees_to_angle(90.0)), 32767);
/// assert_eq!(approx.sine(degrees_to_angle(270.0)), -32767);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SineApproximator<'a, const N: usize> {
    table: &'a QuarterWaveTable<N>,
    layout: Layout,
    /// Pre-truncation offset, zero when rounding is disabled.
    rounding: Angle,
}

impl<'a, const N: usize> SineApproximator<'a, N> {
    /// Build an approximator, checking that `config` addresses `table`.
    pub const fn new(table: &'a QuarterWaveTable<N>, config: Config) -> Result<Self, ConfigError> {
        let table_width = QuarterWaveTable::<N>::INDEX_WIDTH;
        if config.layout.index_width() != table_width {
            return Err(ConfigError::IndexWidthMismatch {
                table: table_width,
                layout: config.layout.index_width(),
            });
        }
        let rounding = if config.rounding {
            Angle::new(config.layout.rounding_constant())
        } else {
            Angle::ZERO
        };
        Ok(SineApproximator {
            table,
            layout: config.layout,
            rounding,
        })
    }

    /// Approximator using every bit below the index field for interpolation.
    pub const fn from_table(table: &'a QuarterWaveTable<N>) -> Self {
        SineApproximator {
            table,
            layout: Layout::with_full_interpolation(QuarterWaveTable::<N>::INDEX_WIDTH),
            rounding: Angle::ZERO,
        }
    }

    /// The layout angles are split with.
    pub const fn layout(&self) -> Layout {
        self.layout
    }

    /// The table samples are read from.
    pub const fn table(&self) -> &'a QuarterWaveTable<N> {
        self.table
    }

    /// `32767 * sin(angle)`, approximated.
    #[inline]
    pub fn sine(&self, angle: Angle) -> i16 {
        let fields = (angle + self.rounding).decompose(self.layout);
        let forward = fields.is_odd_quadrant();

        let mut index = fields.index;
        if !forward {
            index = (1 << self.layout.index_width()) - 1 - index;
        }

        let x1 = self.table[index] as i32;
        let x2 = self.table[index + 1] as i32;
        let shift = interpolation_delta(x1, x2, fields.interp, self.layout.interp_width());

        let sine = if forward { x1 + shift } else { x2 - shift };
        if fields.is_negative() {
            -sine as i16
        } else {
            sine as i16
        }
    }
}

/// `32767 * sin(angle)` from the process-wide table with the default layout.
///
/// ```
/// use sin16::{sine, Angle};
///
/// assert_eq!(sine(Angle::ZERO), 0);
/// assert_eq!(sine(Angle::QUARTER_TURN), 32767);
/// ```
#[inline]
pub fn sine(angle: Angle) -> i16 {
    SineApproximator::from_table(global::table()).sine(angle)
}
