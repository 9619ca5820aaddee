//! Quarter-wave sine tables.
//!
//! A table of `2^k + 1` entries holds `32767 * sin(θ)` for θ evenly spaced over
//! 0°..=90°. The extra entry stores the 90° endpoint so interpolation from the
//! last segment never reads past the end.

use core::f64::consts::FRAC_PI_2;
use core::fmt;

use crate::constants::{DEFAULT_TABLE_LEN, FIELD_BITS, SINE_SCALE};

/// Immutable quarter-wave table of `N` signed 16-bit samples.
///
/// `N - 1` must be a power of two no larger than `2^12`; other lengths fail
/// to compile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuarterWaveTable<const N: usize> {
    entries: [i16; N],
}

/// The 17-entry table for the default 4-bit index.
///
/// These are the published constants, which truncate rather than round;
/// [`QuarterWaveTable::generate_truncated`] reproduces them exactly.
pub static SINE16_TABLE: QuarterWaveTable<DEFAULT_TABLE_LEN> = QuarterWaveTable::from_entries([
        0,  3211,  6392,  9511, 12539, 15446, 18204, 20787,
    23169, 25329, 27244, 28897, 30272, 31356, 32137, 32609,
    32767,
]);

#[allow(clippy::len_without_is_empty)]
impl<const N: usize> QuarterWaveTable<N> {
    /// Width of the index field addressing this table, `log2(N - 1)`.
    pub const INDEX_WIDTH: u32 = {
        assert!(N >= 2, "a quarter-wave table needs at least 2 entries");
        let segments = N - 1;
        assert!(segments.is_power_of_two(), "quarter-wave table length must be 2^k + 1");
        let width = segments.trailing_zeros();
        assert!(width <= FIELD_BITS, "quarter-wave table index is wider than 12 bits");
        width
    };

    /// Wrap precomputed samples.
    pub const fn from_entries(entries: [i16; N]) -> Self {
        assert!(Self::INDEX_WIDTH <= FIELD_BITS);
        QuarterWaveTable { entries }
    }

    /// Compute the table with round-to-nearest quantization.
    pub fn generate() -> Self {
        Self::generate_with(libm::round)
    }

    /// Compute the table with truncation toward zero, as the offline table
    /// printer did when the literal constants were produced.
    pub fn generate_truncated() -> Self {
        Self::generate_with(libm::trunc)
    }

    fn generate_with(quantize: fn(f64) -> f64) -> Self {
        let segments = (N - 1) as f64;
        let mut entries = [0i16; N];
        for (i, entry) in entries.iter_mut().enumerate() {
            let radians = i as f64 * FRAC_PI_2 / segments;
            *entry = quantize(SINE_SCALE as f64 * libm::sin(radians)) as i16;
        }
        tracing::debug!(len = N, index_width = Self::INDEX_WIDTH, "generated quarter-wave table");
        Self::from_entries(entries)
    }

    /// Number of entries, padding included.
    #[inline(always)]
    pub const fn len(&self) -> usize {
        N
    }

    /// Width of the index field addressing this table.
    #[inline(always)]
    pub const fn index_width(&self) -> u32 {
        Self::INDEX_WIDTH
    }

    /// Sample at `index`, or `None` past the end.
    #[inline]
    pub fn get(&self, index: usize) -> Option<i16> {
        self.entries.get(index).copied()
    }

    /// All samples, 0° first.
    #[inline]
    pub const fn as_slice(&self) -> &[i16] {
        &self.entries
    }

    /// Whether every sample is greater than or equal to its predecessor.
    pub fn is_monotonic(&self) -> bool {
        self.entries.windows(2).all(|w| w[0] <= w[1])
    }

    /// Render the samples as comma-separated `%5d` fields, eight per line,
    /// ready to paste back in as a literal.
    pub fn write_literal<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        let mut sep = "";
        for (i, value) in self.entries.iter().enumerate() {
            write!(out, "{sep}{value:5}")?;
            sep = if (i + 1) % 8 == 0 { ",\n" } else { ", " };
        }
        Ok(())
    }
}

impl<const N: usize> fmt::Display for QuarterWaveTable<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_literal(f)
    }
}

impl<const N: usize> core::ops::Index<usize> for QuarterWaveTable<N> {
    type Output = i16;

    #[inline(always)]
    fn index(&self, index: usize) -> &i16 {
        &self.entries[index]
    }
}
