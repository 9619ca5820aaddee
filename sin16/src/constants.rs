/// Number of significant bits in an [`Angle`](crate::Angle).
pub const ANGLE_BITS: u32 = 14;

/// One full turn (360°) in angle units.
pub const FULL_TURN: u32 = 1 << ANGLE_BITS;

/// Mask that reduces a raw value modulo one full turn.
pub const ANGLE_MASK: u16 = (FULL_TURN - 1) as u16;

/// Bit position of the 2-bit quadrant selector.
pub const QUADRANT_OFFSET: u32 = 12;

/// Bits available below the quadrant selector for the index and interpolation fields.
pub const FIELD_BITS: u32 = QUADRANT_OFFSET;

/// Full-scale sine output: `sin(90°)` maps to this value.
pub const SINE_SCALE: i16 = 32767;

/// Default width of the table index field (16-segment quarter wave).
pub const DEFAULT_INDEX_WIDTH: u32 = 4;

/// Default width of the interpolation field.
pub const DEFAULT_INTERP_WIDTH: u32 = 8;

/// Entries in the default quarter-wave table: `2^DEFAULT_INDEX_WIDTH + 1`.
pub const DEFAULT_TABLE_LEN: usize = (1 << DEFAULT_INDEX_WIDTH) + 1;
