//! 14-bit fixed-point angles and the bit layout used to decompose them.
//!
//! One full turn is `0x4000` units. With the default widths the bits read:
//!
//! ```text
//!  15 14 | 13 12 | 11 10  9  8 | 7  6  5  4  3  2  1  0
//!   x  x |  Q  Q |  T  T  T  T | I  I  I  I  I  I  I  I
//! ```
//!
//! - `Q`: quadrant, `00` = 0–90°, `01` = 90–180°, and so on.
//! - `T`: index into the quarter-wave table, `index_width` bits.
//! - `I`: interpolation between successive table entries, `interp_width` bits.
//!
//! When `index_width + interp_width < 12`, the bits left over at the bottom are
//! phase bits. They carry no meaning of their own and are only used to round.

use core::ops::{Add, Neg, Sub};

use crate::constants::{ANGLE_MASK, DEFAULT_INDEX_WIDTH, DEFAULT_INTERP_WIDTH, FIELD_BITS, QUADRANT_OFFSET};
use crate::error::ConfigError;

/// Extract `width` bits of `value` starting at bit `offset`.
#[inline(always)]
pub(crate) const fn bits(value: u32, width: u32, offset: u32) -> u32 {
    (value >> offset) & ((1 << width) - 1)
}

/// A position on the unit circle as a 14-bit fraction of a full turn.
///
/// The upper two bits of the `u16` are always zero: every constructor and
/// arithmetic operation wraps modulo one turn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Angle(u16);

impl Angle {
    /// 0°.
    pub const ZERO: Angle = Angle(0);
    /// 90°.
    pub const QUARTER_TURN: Angle = Angle(0x1000);
    /// 180°.
    pub const HALF_TURN: Angle = Angle(0x2000);
    /// 270°.
    pub const THREE_QUARTER_TURN: Angle = Angle(0x3000);
    /// Largest representable angle, one unit short of 360°.
    pub const MAX: Angle = Angle(ANGLE_MASK);

    /// Create an angle, reducing `raw` modulo one full turn.
    #[inline(always)]
    pub const fn new(raw: u16) -> Self {
        Angle(raw & ANGLE_MASK)
    }

    /// The raw 14-bit value.
    #[inline(always)]
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Quadrant selector (0–3) from bits 12..13.
    #[inline(always)]
    pub const fn quadrant(self) -> u8 {
        bits(self.0 as u32, 2, QUADRANT_OFFSET) as u8
    }

    /// Add two angles modulo one full turn.
    #[inline(always)]
    pub const fn wrapping_add(self, rhs: Angle) -> Angle {
        Angle::new(self.0.wrapping_add(rhs.0))
    }

    /// Subtract two angles modulo one full turn.
    #[inline(always)]
    pub const fn wrapping_sub(self, rhs: Angle) -> Angle {
        Angle::new(self.0.wrapping_sub(rhs.0))
    }

    /// Split the angle into quadrant, table index and interpolation fraction.
    ///
    /// The index is returned as stored in the angle; reflection for the
    /// reversed quadrants happens in the approximator.
    #[inline(always)]
    pub const fn decompose(self, layout: Layout) -> Decomposed {
        let raw = self.0 as u32;
        Decomposed {
            quadrant: self.quadrant(),
            index: bits(raw, layout.index_width, layout.index_offset()) as usize,
            interp: bits(raw, layout.interp_width, layout.interp_offset()) as i32,
        }
    }
}

impl From<u16> for Angle {
    fn from(raw: u16) -> Self {
        Angle::new(raw)
    }
}

impl From<Angle> for u16 {
    fn from(angle: Angle) -> Self {
        angle.0
    }
}

impl Add for Angle {
    type Output = Angle;

    fn add(self, rhs: Angle) -> Angle {
        self.wrapping_add(rhs)
    }
}

impl Sub for Angle {
    type Output = Angle;

    fn sub(self, rhs: Angle) -> Angle {
        self.wrapping_sub(rhs)
    }
}

impl Neg for Angle {
    type Output = Angle;

    fn neg(self) -> Angle {
        Angle::ZERO.wrapping_sub(self)
    }
}

/// Widths of the index and interpolation fields below the quadrant bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Layout {
    index_width: u32,
    interp_width: u32,
}

impl Layout {
    /// 4 index bits (17-entry table) and 8 interpolation bits.
    pub const DEFAULT: Layout = Layout {
        index_width: DEFAULT_INDEX_WIDTH,
        interp_width: DEFAULT_INTERP_WIDTH,
    };

    /// Validate and build a layout.
    ///
    /// `index_width + interp_width` must not exceed 12, the bits below the
    /// quadrant selector.
    pub const fn new(index_width: u32, interp_width: u32) -> Result<Self, ConfigError> {
        if index_width > FIELD_BITS || interp_width > FIELD_BITS - index_width {
            return Err(ConfigError::WidthsTooWide { index_width, interp_width });
        }
        Ok(Layout { index_width, interp_width })
    }

    /// Layout giving every bit below the index field to interpolation, so no
    /// phase bits remain. Widths past 12 are clamped.
    pub const fn with_full_interpolation(index_width: u32) -> Layout {
        let index_width = if index_width > FIELD_BITS { FIELD_BITS } else { index_width };
        Layout {
            index_width,
            interp_width: FIELD_BITS - index_width,
        }
    }

    /// Width of the table index field.
    #[inline(always)]
    pub const fn index_width(self) -> u32 {
        self.index_width
    }

    /// Width of the interpolation field.
    #[inline(always)]
    pub const fn interp_width(self) -> u32 {
        self.interp_width
    }

    /// Lowest bit of the index field.
    #[inline(always)]
    pub const fn index_offset(self) -> u32 {
        FIELD_BITS - self.index_width
    }

    /// Lowest bit of the interpolation field; also the number of phase bits.
    #[inline(always)]
    pub const fn interp_offset(self) -> u32 {
        self.index_offset() - self.interp_width
    }

    /// Half of one interpolation step, added before truncation when rounding.
    ///
    /// Zero when there are no phase bits to round away.
    #[inline(always)]
    pub const fn rounding_constant(self) -> u16 {
        let offset = self.interp_offset();
        if offset > 0 {
            1 << (offset - 1)
        } else {
            0
        }
    }

    /// Number of quarter-wave table entries this layout indexes, padding included.
    #[inline(always)]
    pub const fn table_len(self) -> usize {
        (1 << self.index_width) + 1
    }
}

impl Default for Layout {
    fn default() -> Self {
        Layout::DEFAULT
    }
}

/// Bit fields of an angle under a particular [`Layout`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decomposed {
    /// Quadrant selector, 0–3.
    pub quadrant: u8,
    /// Table index as stored in the angle, before reflection.
    pub index: usize,
    /// Interpolation fraction, `0..2^interp_width`.
    pub interp: i32,
}

impl Decomposed {
    /// Quadrants 0 and 2 (the first and third, counting from one) read the
    /// table forward; quadrants 1 and 3 read it reversed.
    #[inline(always)]
    pub const fn is_odd_quadrant(&self) -> bool {
        (self.quadrant & 0x01) == 0
    }

    /// Angles of 180° and above produce a negated result.
    #[inline(always)]
    pub const fn is_negative(&self) -> bool {
        (self.quadrant & 0x02) != 0
    }
}
