use crate::codepoint::{self, CodePointClass};
use crate::utf16::{self, CodeUnitClass};
use crate::utf8::{self, ByteClass};

#[test]
fn euro_sign() {
    let euro = '€';
    let cp = euro as u32;
    assert_eq!(cp, 0x20AC);
    assert_eq!(codepoint::classify(cp), CodePointClass::Assignable);
    assert_eq!(codepoint::utf8_length(cp), 3);
    assert_eq!(codepoint::utf16_length(cp), 1);

    let mut units = [0; 2];
    let units = euro.encode_utf16(&mut units);
    assert_eq!(units.len(), 1);
    assert!(utf16::is_single(units[0]));
    assert_eq!(utf16::classify(units[0]), CodeUnitClass::Single);

    let mut bytes = [0; 4];
    let bytes = euro.encode_utf8(&mut bytes).as_bytes();
    assert_eq!(bytes, [0xE2, 0x82, 0xAC]);
    assert_eq!(utf8::classify(bytes[0]), ByteClass::Lead { trail_bytes: 2 });
    assert!(utf8::is_trail_byte(bytes[1]));
    assert!(utf8::is_trail_byte(bytes[2]));
}

#[test]
fn grinning_face() -> anyhow::Result<()> {
    let cp = '😀' as u32;
    assert_eq!(cp, 0x1F600);
    assert!(codepoint::is_supplementary(cp));
    assert!(codepoint::is_assignable(cp));
    assert_eq!(codepoint::utf16_length(cp), 2);
    assert_eq!(codepoint::utf8_length(cp), 4);

    let lead = utf16::lead_surrogate_for(cp);
    let trail = utf16::trail_surrogate_for(cp);
    assert_eq!(lead, 0xD83D);
    assert_eq!(trail, 0xDE00);
    assert_eq!(utf16::classify(lead), CodeUnitClass::LeadSurrogate);
    assert_eq!(utf16::classify(trail), CodeUnitClass::TrailSurrogate);
    assert_eq!(utf16::combine_surrogates(lead, trail), 0x1F600);
    assert_eq!(utf16::try_combine_surrogates(lead, trail)?, 0x1F600);

    let mut bytes = [0; 4];
    let bytes = '😀'.encode_utf8(&mut bytes).as_bytes();
    assert_eq!(utf8::count_trail_bytes(bytes[0]), 3);
    assert_eq!(utf8::count_trail_bytes_unsafe(bytes[0]), 3);
    Ok(())
}

/// A surrogate pair's code units, looked at as code points, are surrogates
/// and have no UTF-8 encoding.
#[test]
fn lone_surrogates() {
    for cu in [0xD83Du16, 0xDE00] {
        let cp = u32::from(cu);
        assert!(codepoint::is_surrogate(cp));
        assert!(!codepoint::is_assignable(cp));
        assert_eq!(codepoint::utf8_length(cp), 0);
        assert!(codepoint::try_utf8_length(cp).is_err());
        assert_eq!(codepoint::is_lead_surrogate(cp), utf16::is_lead_surrogate(cu));
        assert_eq!(codepoint::is_trail_surrogate(cp), utf16::is_trail_surrogate(cu));
    }
}

/// The code unit predicates agree with their code point counterparts on the
/// zero-extended value.
#[test]
fn code_unit_width_agreement() {
    for cu in 0..=u16::MAX {
        let cp = u32::from(cu);
        assert_eq!(utf16::is_surrogate(cu), codepoint::is_surrogate(cp));
        assert_eq!(utf16::is_lead_surrogate(cu), codepoint::is_lead_surrogate(cp));
        assert_eq!(utf16::is_trail_surrogate(cu), codepoint::is_trail_surrogate(cp));
        assert!(codepoint::is_bmp(cp));
    }
}
