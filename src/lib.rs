/*!
Classification and conversion primitives for Unicode code points and their
UTF-8 and UTF-16 code units.

The crate is split by input width:

* [`codepoint`] classifies `u32` values: surrogates, noncharacters, planes,
and the number of UTF-8/UTF-16 code units a code point needs.
* [`utf16`] classifies `u16` code units and converts between surrogate pairs
and supplementary code points.
* [`utf8`] classifies `u8` code units and counts the trail bytes that follow
a lead byte.

Every primitive is a `const fn` that accepts any value of its input width
and never panics. Where a result is only meaningful for valid input, the
documentation says so and the answer for invalid input is unspecified but
deterministic. The `try_*` functions check the precondition first and
return a [`ConversionError`] instead.

The structural ranges these functions are built from are exposed as named
constants in [`ranges`].

# Example

```
use unicode_formal::{codepoint, utf16, utf8};

let cp = '😀' as u32;
assert_eq!(codepoint::utf8_length(cp), 4);
assert_eq!(codepoint::utf16_length(cp), 2);

let (lead, trail) = (utf16::lead_surrogate_for(cp), utf16::trail_surrogate_for(cp));
assert_eq!((lead, trail), (0xD83D, 0xDE00));
assert_eq!(utf16::combine_surrogates(lead, trail), cp);

assert_eq!(utf8::count_trail_bytes(0xF0), 3);
assert!(!utf8::is_lead_byte(0xC0));
```

# Crate features

* **perf-inline** (enabled by default) - Forces the primitives to be
inlined. Disabling it leaves inlining up to the compiler.
*/

pub use error::ConversionError;

pub mod codepoint;
mod error;
pub mod ranges;
pub mod utf16;
pub mod utf8;

#[cfg(test)]
mod tests;
