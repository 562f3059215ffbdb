/*!
Classification of UTF-16 code units and surrogate pair arithmetic.

The predicates reuse the code point masks: a `u16` zero-extends into a `u32`
whose high bits can never disturb the mask comparison.

The arithmetic functions ([`combine_surrogates`], [`lead_surrogate_for`] and
[`trail_surrogate_for`]) don't validate their input. They're meant for decode
loops that have already classified the code units. For any supplementary
code point `s`:

```
use unicode_formal::utf16::{combine_surrogates, lead_surrogate_for, trail_surrogate_for};

let s = 0x1F600;
assert_eq!(s, combine_surrogates(lead_surrogate_for(s), trail_surrogate_for(s)));
```
*/

use crate::codepoint;
use crate::error::ConversionError;
use crate::ranges::{lead_surrogate, supplementary, trail_surrogate};


/// Returns true if and only if `cu` is not a surrogate, i.e. it encodes a
/// complete BMP code point on its own.
#[cfg_attr(feature = "perf-inline", inline(always))]
pub const fn is_single(cu: u16) -> bool {
    !is_surrogate(cu)
}

/// Returns true if and only if `cu` is in `0xD800..=0xDBFF`.
#[cfg_attr(feature = "perf-inline", inline(always))]
pub const fn is_lead_surrogate(cu: u16) -> bool {
    codepoint::is_lead_surrogate(cu as u32)
}

/// Returns true if and only if `cu` is in `0xDC00..=0xDFFF`.
#[cfg_attr(feature = "perf-inline", inline(always))]
pub const fn is_trail_surrogate(cu: u16) -> bool {
    codepoint::is_trail_surrogate(cu as u32)
}

/// Returns true if and only if `cu` is in `0xD800..=0xDFFF`.
#[cfg_attr(feature = "perf-inline", inline(always))]
pub const fn is_surrogate(cu: u16) -> bool {
    codepoint::is_surrogate(cu as u32)
}

/// The amount subtracted from `(lead << 10) + trail` to land a surrogate pair
/// in the supplementary range.
#[cfg_attr(feature = "perf-inline", inline(always))]
pub const fn surrogate_offset() -> u32 {
    (lead_surrogate::MIN << 10) + trail_surrogate::MIN - supplementary::MIN
}

/// Combines a lead and a trail surrogate into the supplementary code point
/// they encode.
///
/// The result is unspecified (but deterministic) if `lead` is not a lead
/// surrogate or `trail` is not a trail surrogate.
#[cfg_attr(feature = "perf-inline", inline(always))]
pub const fn combine_surrogates(lead: u16, trail: u16) -> u32 {
    ((lead as u32) << 10).wrapping_add(trail as u32).wrapping_sub(surrogate_offset())
}

/// The lead surrogate of the UTF-16 encoding of `supplementary`.
///
/// The result is unspecified if `supplementary` is not in
/// `U+10000..=U+10FFFF`.
#[cfg_attr(feature = "perf-inline", inline(always))]
pub const fn lead_surrogate_for(supplementary: u32) -> u16 {
    // Cannot overflow: `u32::MAX >> 10` leaves plenty of headroom.
    ((supplementary >> 10) + lead_surrogate::BIAS) as u16
}

/// The trail surrogate of the UTF-16 encoding of `supplementary`.
///
/// The result is unspecified if `supplementary` is not in
/// `U+10000..=U+10FFFF`.
#[cfg_attr(feature = "perf-inline", inline(always))]
pub const fn trail_surrogate_for(supplementary: u32) -> u16 {
    ((supplementary & trail_surrogate::PAYLOAD) | trail_surrogate::MIN) as u16
}

/// Like [`combine_surrogates`], but checks that `lead` and `trail` really
/// are a lead and a trail surrogate.
///
/// # Example
///
/// ```
/// use unicode_formal::utf16::try_combine_surrogates;
///
/// assert_eq!(Ok(0x1F600), try_combine_surrogates(0xD83D, 0xDE00));
/// // Swapped.
/// let err = try_combine_surrogates(0xDE00, 0xD83D).unwrap_err();
/// assert!(err.is_not_lead_surrogate());
/// assert_eq!(0xDE00, err.value());
/// ```
pub fn try_combine_surrogates(lead: u16, trail: u16) -> Result<u32, ConversionError> {
    if !is_lead_surrogate(lead) {
        return Err(ConversionError::not_lead_surrogate(lead));
    }
    if !is_trail_surrogate(trail) {
        return Err(ConversionError::not_trail_surrogate(trail));
    }
    Ok(combine_surrogates(lead, trail))
}

/// Splits a supplementary code point into its `(lead, trail)` surrogate
/// pair, or returns an error if `cp` is not in `U+10000..=U+10FFFF`.
pub fn try_split_supplementary(cp: u32) -> Result<(u16, u16), ConversionError> {
    if !codepoint::is_supplementary(cp) {
        return Err(ConversionError::not_supplementary(cp));
    }
    Ok((lead_surrogate_for(cp), trail_surrogate_for(cp)))
}

/// The class of a UTF-16 code unit, as reported by [`classify`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CodeUnitClass {
    /// Not a surrogate; encodes a BMP code point by itself.
    Single,
    /// First half of a surrogate pair.
    LeadSurrogate,
    /// Second half of a surrogate pair.
    TrailSurrogate,
}

impl CodeUnitClass {
    pub const fn as_str(self) -> &'static str {
        match self {
            CodeUnitClass::Single => "single",
            CodeUnitClass::LeadSurrogate => "lead surrogate",
            CodeUnitClass::TrailSurrogate => "trail surrogate",
        }
    }
}

impl core::fmt::Display for CodeUnitClass {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies `cu`.
#[cfg_attr(feature = "perf-inline", inline(always))]
pub const fn classify(cu: u16) -> CodeUnitClass {
    if is_lead_surrogate(cu) {
        CodeUnitClass::LeadSurrogate
    } else if is_trail_surrogate(cu) {
        CodeUnitClass::TrailSurrogate
    } else {
        CodeUnitClass::Single
    }
}
