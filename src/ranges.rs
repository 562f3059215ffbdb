/*!
Named constant groups for the structural ranges of the Unicode standard.

Every group exposes inclusive `MIN`/`MAX` bounds. Where a range is tested by
masking rather than by comparison, the group also carries the `MASK` that
isolates the bits shared by every member of the range.
*/

/// The largest Unicode code point, `U+10FFFF`.
pub const MAX_CODE_POINT: u32 = 0x10FFFF;

/// The Basic Multilingual Plane, `U+0000..=U+FFFF`.
pub mod bmp {
    pub const MIN: u32 = 0x0000;
    pub const MAX: u32 = 0xFFFF;
}

/// Supplementary code points, `U+10000..=U+10FFFF`.
pub mod supplementary {
    pub const MIN: u32 = 0x10000;
    pub const MAX: u32 = super::MAX_CODE_POINT;
    /// `MAX - MIN`, the bound used by the single unsigned comparison in
    /// [`crate::codepoint::is_supplementary`].
    pub const SPAN: u32 = MAX - MIN;
}

/// All surrogates, `U+D800..=U+DFFF`.
pub mod surrogate {
    pub const MIN: u32 = 0xD800;
    pub const MAX: u32 = 0xDFFF;
    /// Clears the low 11 bits, which vary across the 2048 surrogates.
    pub const MASK: u32 = 0xFFFF_F800;
}

/// Lead (first) surrogates, `U+D800..=U+DBFF`.
pub mod lead_surrogate {
    pub const MIN: u32 = 0xD800;
    pub const MAX: u32 = 0xDBFF;
    /// Clears the low 10 bits, which carry the surrogate payload.
    pub const MASK: u32 = 0xFFFF_FC00;
    /// Added to `supplementary >> 10` to produce the lead surrogate. Equal to
    /// `MIN - (0x10000 >> 10)`.
    pub const BIAS: u32 = 0xD7C0;
}

/// Trail (second) surrogates, `U+DC00..=U+DFFF`.
pub mod trail_surrogate {
    pub const MIN: u32 = 0xDC00;
    pub const MAX: u32 = 0xDFFF;
    /// Clears the low 10 bits, which carry the surrogate payload.
    pub const MASK: u32 = 0xFFFF_FC00;
    /// Selects the payload bits of a trail surrogate.
    pub const PAYLOAD: u32 = 0x3FF;
}

/// Noncharacters.
///
/// There is one contiguous block in the Arabic Presentation Forms-A range,
/// plus the last two code points of each of the 17 planes. The latter share
/// the property `cp & PLANE_END_MASK == PLANE_END_MASK`.
pub mod noncharacter {
    pub const BLOCK_MIN: u32 = 0xFDD0;
    pub const BLOCK_MAX: u32 = 0xFDEF;
    pub const PLANE_END_MASK: u32 = 0xFFFE;
}

/// UTF-8 code unit ranges.
pub mod utf8 {
    /// Largest code point encoded in one byte.
    pub const MAX_ONE_BYTE: u32 = 0x7F;
    /// Largest code point encoded in two bytes.
    pub const MAX_TWO_BYTE: u32 = 0x7FF;
    /// Largest code point encoded in three bytes.
    pub const MAX_THREE_BYTE: u32 = 0xFFFF;

    /// The bit that is clear in every ASCII byte and set in every other one.
    pub const NON_ASCII_BIT: u8 = 0b1000_0000;

    /// Smallest well-formed lead byte. `0xC0` and `0xC1` could only start an
    /// overlong encoding.
    pub const LEAD_MIN: u8 = 0xC2;
    /// Largest well-formed lead byte. Anything above would encode a value
    /// past `U+10FFFF`.
    pub const LEAD_MAX: u8 = 0xF4;
    /// Smallest lead byte of a three byte sequence.
    pub const LEAD_THREE_MIN: u8 = 0b1110_0000;
    /// Smallest lead byte of a four byte sequence.
    pub const LEAD_FOUR_MIN: u8 = 0b1111_0000;

    pub const TRAIL_MIN: u8 = 0x80;
    pub const TRAIL_MAX: u8 = 0xBF;
}
