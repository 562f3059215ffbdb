/// An error returned by the checked conversions in this crate.
///
/// The unchecked primitives (for example
/// [`combine_surrogates`](crate::utf16::combine_surrogates)) never fail; they
/// produce an unspecified value when their precondition does not hold. The
/// `try_*` variants check the precondition first and return this error
/// instead.
///
/// This error provides very little introspection capabilities. You can:
///
/// * Ask for the offending input value with [`ConversionError::value`]. It is
/// zero-extended to `u32` regardless of the width of the input.
/// * Ask which precondition failed through the `is_*` methods.
/// * Ask for a human readable message through the `Display` impl.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConversionError {
    kind: ConversionErrorKind,
    value: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ConversionErrorKind {
    NotLeadSurrogate,
    NotTrailSurrogate,
    NotSupplementary,
    NotScalarValue,
    NotUtf8Lead,
}

impl ConversionError {
    /// The input that failed validation.
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Returns true if a UTF-16 code unit was expected to be a lead
    /// surrogate (`0xD800..=0xDBFF`) but was not.
    pub fn is_not_lead_surrogate(&self) -> bool {
        matches!(self.kind, ConversionErrorKind::NotLeadSurrogate)
    }

    /// Returns true if a UTF-16 code unit was expected to be a trail
    /// surrogate (`0xDC00..=0xDFFF`) but was not.
    pub fn is_not_trail_surrogate(&self) -> bool {
        matches!(self.kind, ConversionErrorKind::NotTrailSurrogate)
    }

    /// Returns true if a code point was expected to be in
    /// `U+10000..=U+10FFFF` but was not.
    pub fn is_not_supplementary(&self) -> bool {
        matches!(self.kind, ConversionErrorKind::NotSupplementary)
    }

    /// Returns true if a code point was a surrogate or above `U+10FFFF`, and
    /// so has no encoding in any Unicode encoding form.
    pub fn is_not_scalar_value(&self) -> bool {
        matches!(self.kind, ConversionErrorKind::NotScalarValue)
    }

    /// Returns true if a byte was expected to be a well-formed UTF-8 lead
    /// byte (`0xC2..=0xF4`) but was not.
    pub fn is_not_utf8_lead(&self) -> bool {
        matches!(self.kind, ConversionErrorKind::NotUtf8Lead)
    }

    pub(crate) fn not_lead_surrogate(cu: u16) -> ConversionError {
        ConversionError::new(ConversionErrorKind::NotLeadSurrogate, u32::from(cu))
    }

    pub(crate) fn not_trail_surrogate(cu: u16) -> ConversionError {
        ConversionError::new(ConversionErrorKind::NotTrailSurrogate, u32::from(cu))
    }

    pub(crate) fn not_supplementary(cp: u32) -> ConversionError {
        ConversionError::new(ConversionErrorKind::NotSupplementary, cp)
    }

    pub(crate) fn not_scalar_value(cp: u32) -> ConversionError {
        ConversionError::new(ConversionErrorKind::NotScalarValue, cp)
    }

    pub(crate) fn not_utf8_lead(byte: u8) -> ConversionError {
        ConversionError::new(ConversionErrorKind::NotUtf8Lead, u32::from(byte))
    }

    fn new(kind: ConversionErrorKind, value: u32) -> ConversionError {
        let err = ConversionError { kind, value };
        log::trace!("rejecting input: {}", err);
        err
    }
}

impl std::error::Error for ConversionError {}

impl core::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.kind {
            ConversionErrorKind::NotLeadSurrogate => {
                write!(f, "code unit {:#06X} is not a lead surrogate", self.value)
            }
            ConversionErrorKind::NotTrailSurrogate => {
                write!(f, "code unit {:#06X} is not a trail surrogate", self.value)
            }
            ConversionErrorKind::NotSupplementary => {
                write!(f, "code point U+{:04X} is not a supplementary code point", self.value)
            }
            ConversionErrorKind::NotScalarValue => {
                write!(f, "code point U+{:04X} is not a Unicode scalar value", self.value)
            }
            ConversionErrorKind::NotUtf8Lead => {
                write!(f, "byte {:#04X} is not a UTF-8 lead byte", self.value)
            }
        }
    }
}
