/*!
Classification of 32-bit code point values.

Every predicate here is total over `u32`: values above `U+10FFFF` and
surrogates are not scalar values, but they are still classified rather than
rejected. The length functions follow the same rule, although
[`utf16_length`] gives an unspecified answer for non-scalar input.
*/

use crate::error::ConversionError;
use crate::ranges::{self, lead_surrogate, noncharacter, supplementary, surrogate, trail_surrogate};


/// Returns true if and only if `cp` is a noncharacter: one of
/// `U+FDD0..=U+FDEF`, or the last two code points of any plane
/// (`U+xFFFE`, `U+xFFFF`).
///
/// The plane-end test only looks at the low 16 bits, so it is bounded by
/// `U+10FFFF` explicitly.
#[cfg_attr(feature = "perf-inline", inline(always))]
pub const fn is_noncharacter(cp: u32) -> bool {
    cp >= noncharacter::BLOCK_MIN
        && (cp <= noncharacter::BLOCK_MAX
            || (cp & noncharacter::PLANE_END_MASK) == noncharacter::PLANE_END_MASK)
        && cp <= ranges::MAX_CODE_POINT
}

/// Returns true if and only if `cp` is a code point that can be assigned a
/// character. That is, it is in range, is not a surrogate and is not a
/// noncharacter.
#[cfg_attr(feature = "perf-inline", inline(always))]
pub const fn is_assignable(cp: u32) -> bool {
    cp < surrogate::MIN
        || (surrogate::MAX < cp && cp <= ranges::MAX_CODE_POINT && !is_noncharacter(cp))
}

/// Returns true if and only if `cp` is a Unicode scalar value, i.e. any code
/// point that is not a surrogate. This is exactly the set of values a `char`
/// can hold.
#[cfg_attr(feature = "perf-inline", inline(always))]
pub const fn is_scalar_value(cp: u32) -> bool {
    cp <= ranges::MAX_CODE_POINT && !is_surrogate(cp)
}

/// Returns true if and only if `cp <= U+FFFF`.
///
/// There is no other check: surrogates and noncharacters in the BMP count.
#[cfg_attr(feature = "perf-inline", inline(always))]
pub const fn is_bmp(cp: u32) -> bool {
    cp <= ranges::bmp::MAX
}

/// Returns true if and only if `cp` is in `U+10000..=U+10FFFF`.
#[cfg_attr(feature = "perf-inline", inline(always))]
pub const fn is_supplementary(cp: u32) -> bool {
    // Values below MIN wrap around to something far larger than SPAN.
    cp.wrapping_sub(supplementary::MIN) <= supplementary::SPAN
}

/// Returns true if and only if `cp` is in `U+D800..=U+DBFF`.
#[cfg_attr(feature = "perf-inline", inline(always))]
pub const fn is_lead_surrogate(cp: u32) -> bool {
    (cp & lead_surrogate::MASK) == lead_surrogate::MIN
}

/// Returns true if and only if `cp` is in `U+DC00..=U+DFFF`.
#[cfg_attr(feature = "perf-inline", inline(always))]
pub const fn is_trail_surrogate(cp: u32) -> bool {
    (cp & trail_surrogate::MASK) == trail_surrogate::MIN
}

/// Returns true if and only if `cp` is in `U+D800..=U+DFFF`.
#[cfg_attr(feature = "perf-inline", inline(always))]
pub const fn is_surrogate(cp: u32) -> bool {
    (cp & surrogate::MASK) == surrogate::MIN
}

/// The number of UTF-16 code units needed to encode `cp`: 1 or 2.
///
/// The result is unspecified if `cp` is not a scalar value. Use
/// [`try_utf16_length`] when that can't be ruled out.
#[cfg_attr(feature = "perf-inline", inline(always))]
pub const fn utf16_length(cp: u32) -> usize {
    if cp <= ranges::bmp::MAX {
        1
    } else {
        2
    }
}

/// The number of UTF-8 code units needed to encode `cp`: 1 to 4, or 0 if
/// `cp` is a surrogate or above `U+10FFFF`.
#[cfg_attr(feature = "perf-inline", inline(always))]
pub const fn utf8_length(cp: u32) -> usize {
    use crate::ranges::utf8::{MAX_ONE_BYTE, MAX_THREE_BYTE, MAX_TWO_BYTE};

    // The order matters: the surrogate hole sits inside the three byte range.
    if cp <= MAX_ONE_BYTE {
        1
    } else if cp <= MAX_TWO_BYTE {
        2
    } else if cp < surrogate::MIN {
        3
    } else if cp <= surrogate::MAX || cp > ranges::MAX_CODE_POINT {
        0
    } else if cp <= MAX_THREE_BYTE {
        3
    } else {
        4
    }
}

/// The largest value [`utf16_length`] returns for a scalar value.
#[cfg_attr(feature = "perf-inline", inline(always))]
pub const fn utf16_max_length() -> usize {
    2
}

/// The largest value [`utf8_length`] returns.
#[cfg_attr(feature = "perf-inline", inline(always))]
pub const fn utf8_max_length() -> usize {
    4
}

/// Like [`utf16_length`], but returns an error instead of an unspecified
/// length when `cp` is not a scalar value.
///
/// Noncharacters are scalar values and so have a length.
pub fn try_utf16_length(cp: u32) -> Result<usize, ConversionError> {
    if !is_scalar_value(cp) {
        return Err(ConversionError::not_scalar_value(cp));
    }
    Ok(utf16_length(cp))
}

/// Like [`utf8_length`], but returns an error instead of `0` when `cp` is
/// not a scalar value.
pub fn try_utf8_length(cp: u32) -> Result<usize, ConversionError> {
    match utf8_length(cp) {
        0 => Err(ConversionError::not_scalar_value(cp)),
        len => Ok(len),
    }
}

/// The class of a 32-bit value, as reported by [`classify`].
///
/// Exactly one class applies to every `u32`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CodePointClass {
    /// A scalar value that is not a noncharacter.
    Assignable,
    /// A scalar value permanently reserved as "not a character".
    Noncharacter,
    /// `U+D800..=U+DBFF`.
    LeadSurrogate,
    /// `U+DC00..=U+DFFF`.
    TrailSurrogate,
    /// Anything above `U+10FFFF`.
    OutOfRange,
}

impl CodePointClass {
    /// Returns true for the classes that are Unicode scalar values.
    pub const fn is_scalar_value(self) -> bool {
        matches!(self, CodePointClass::Assignable | CodePointClass::Noncharacter)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            CodePointClass::Assignable => "assignable",
            CodePointClass::Noncharacter => "noncharacter",
            CodePointClass::LeadSurrogate => "lead surrogate",
            CodePointClass::TrailSurrogate => "trail surrogate",
            CodePointClass::OutOfRange => "out of range",
        }
    }
}

impl core::fmt::Display for CodePointClass {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies `cp`.
#[cfg_attr(feature = "perf-inline", inline(always))]
pub const fn classify(cp: u32) -> CodePointClass {
    if cp > ranges::MAX_CODE_POINT {
        CodePointClass::OutOfRange
    } else if is_lead_surrogate(cp) {
        CodePointClass::LeadSurrogate
    } else if is_trail_surrogate(cp) {
        CodePointClass::TrailSurrogate
    } else if is_noncharacter(cp) {
        CodePointClass::Noncharacter
    } else {
        CodePointClass::Assignable
    }
}
