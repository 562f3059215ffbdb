/*!
Classification of UTF-8 code units.

Only well-formed lead bytes count as lead bytes: `0xC0` and `0xC1` can only
start overlong encodings, and `0xF5..=0xFF` would encode values past
`U+10FFFF`. Those bytes are neither lead nor trail bytes.
*/

use crate::error::ConversionError;
use crate::ranges::utf8::{LEAD_FOUR_MIN, LEAD_MAX, LEAD_MIN, LEAD_THREE_MIN, NON_ASCII_BIT};


/// Returns true if and only if `byte` is ASCII, and therefore encodes a code
/// point by itself.
#[cfg_attr(feature = "perf-inline", inline(always))]
pub const fn is_ascii_single(byte: u8) -> bool {
    (byte & NON_ASCII_BIT) == 0
}

/// Returns true if and only if `byte` is a well-formed lead byte, i.e. in
/// `0xC2..=0xF4`.
#[cfg_attr(feature = "perf-inline", inline(always))]
pub const fn is_lead_byte(byte: u8) -> bool {
    // Bytes below LEAD_MIN wrap around past the bound, which turns the two
    // sided range check into a single comparison.
    byte.wrapping_sub(LEAD_MIN) <= LEAD_MAX - LEAD_MIN
}

/// Returns true if and only if `byte` is a continuation byte, i.e. in
/// `0x80..=0xBF`.
#[cfg_attr(feature = "perf-inline", inline(always))]
pub const fn is_trail_byte(byte: u8) -> bool {
    // As an i8, exactly 0x80..=0xBF falls in -128..-64.
    (byte as i8) < -0x40
}

/// The number of trail bytes that follow `lead`: 1 for `0xC2..=0xDF`, 2 for
/// `0xE0..=0xEF` and 3 for `0xF0..=0xF4`.
///
/// Returns 0 for anything that is not a lead byte, which includes ASCII.
#[cfg_attr(feature = "perf-inline", inline(always))]
pub const fn count_trail_bytes(lead: u8) -> usize {
    if is_lead_byte(lead) {
        1 + (lead >= LEAD_THREE_MIN) as usize + (lead >= LEAD_FOUR_MIN) as usize
    } else {
        0
    }
}

/// The number of trail bytes that follow `lead`, without checking that
/// `lead` is a well-formed lead byte.
///
/// This is not an `unsafe fn`: the result for an invalid `lead` is merely
/// unspecified. It is deterministic and never panics. It agrees with
/// [`count_trail_bytes`] on every well-formed lead byte and does not branch,
/// so callers that have already validated the byte can use it in a hot loop.
#[cfg_attr(feature = "perf-inline", inline(always))]
pub const fn count_trail_bytes_unsafe(lead: u8) -> usize {
    (lead >= LEAD_MIN) as usize
        + (lead >= LEAD_THREE_MIN) as usize
        + (lead >= LEAD_FOUR_MIN) as usize
}

/// Like [`count_trail_bytes`], but returns an error instead of `0` when
/// `lead` is not a lead byte.
pub fn try_count_trail_bytes(lead: u8) -> Result<usize, ConversionError> {
    if !is_lead_byte(lead) {
        return Err(ConversionError::not_utf8_lead(lead));
    }
    Ok(count_trail_bytes(lead))
}

/// [`count_trail_bytes`] for every byte value, indexed by the byte.
pub const TRAIL_BYTE_COUNTS: [u8; 256] = {
    const fn mktable() -> [u8; 256] {
        let mut table = [0; 256];
        let mut i = 0;
        while i < table.len() {
            table[i] = count_trail_bytes(i as u8) as u8;
            i += 1;
        }
        table
    }
    mktable()
};

/// The class of a UTF-8 code unit, as reported by [`classify`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ByteClass {
    /// `0x00..=0x7F`.
    Ascii,
    /// A well-formed lead byte, followed by `trail_bytes` continuation bytes.
    Lead { trail_bytes: usize },
    /// A continuation byte, `0x80..=0xBF`.
    Trail,
    /// A byte that never appears in well-formed UTF-8: `0xC0`, `0xC1` and
    /// `0xF5..=0xFF`.
    Invalid,
}

impl ByteClass {
    pub const fn as_str(self) -> &'static str {
        match self {
            ByteClass::Ascii => "ASCII",
            ByteClass::Lead { .. } => "lead byte",
            ByteClass::Trail => "trail byte",
            ByteClass::Invalid => "invalid byte",
        }
    }
}

impl core::fmt::Display for ByteClass {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match *self {
            ByteClass::Lead { trail_bytes } => {
                write!(f, "lead byte with {} trail byte(s)", trail_bytes)
            }
            class => f.write_str(class.as_str()),
        }
    }
}

/// Classifies `byte`.
#[cfg_attr(feature = "perf-inline", inline(always))]
pub const fn classify(byte: u8) -> ByteClass {
    if is_ascii_single(byte) {
        ByteClass::Ascii
    } else if is_trail_byte(byte) {
        ByteClass::Trail
    } else if is_lead_byte(byte) {
        ByteClass::Lead { trail_bytes: count_trail_bytes(byte) }
    } else {
        ByteClass::Invalid
    }
}
