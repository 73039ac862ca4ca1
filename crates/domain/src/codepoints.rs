// crates/domain/src/codepoints.rs
//! UTF-16 code unit → code point decoding.
//!
//! Host platforms that hand text over as UTF-16 (the common case for editable
//! UI surfaces) must not see astral-plane characters counted twice. This
//! decoder turns a surrogate pair into one code point and passes an unpaired
//! surrogate half through as exactly one code point.

use crate::config::CountConfig;
use crate::counter::count;
use crate::model::CountResult;

const HIGH_SURROGATE: std::ops::Range<u16> = 0xD800..0xDC00;
const LOW_SURROGATE: std::ops::Range<u16> = 0xDC00..0xE000;

/// Iterator over the code points of a UTF-16 code unit slice.
///
/// Each unpaired surrogate half yields one `U+FFFD`; for counting purposes
/// that is indistinguishable from passing the half through, since neither is
/// whitespace, a line terminator, or stripped punctuation.
#[derive(Debug, Clone)]
pub struct CodePoints<'a> {
    units: &'a [u16],
    pos: usize,
}

impl<'a> CodePoints<'a> {
    pub const fn new(units: &'a [u16]) -> Self {
        Self { units, pos: 0 }
    }
}

impl Iterator for CodePoints<'_> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        let unit = *self.units.get(self.pos)?;
        self.pos += 1;

        if HIGH_SURROGATE.contains(&unit) {
            if let Some(&low) = self.units.get(self.pos)
                && LOW_SURROGATE.contains(&low)
            {
                self.pos += 1;
                let scalar = 0x10000
                    + ((u32::from(unit) - 0xD800) << 10)
                    + (u32::from(low) - 0xDC00);
                return Some(char::from_u32(scalar).unwrap_or(char::REPLACEMENT_CHARACTER));
            }
            Some(char::REPLACEMENT_CHARACTER)
        } else if LOW_SURROGATE.contains(&unit) {
            Some(char::REPLACEMENT_CHARACTER)
        } else {
            // BMP, non-surrogate: always a valid scalar value.
            char::from_u32(u32::from(unit))
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.units.len() - self.pos;
        (remaining.div_ceil(2), Some(remaining))
    }
}

/// Decodes UTF-16 code units into a `String`, one code point per unpaired
/// surrogate half.
pub fn decode_utf16_lossy(units: &[u16]) -> String {
    CodePoints::new(units).collect()
}

/// [`count`] over UTF-16 input.
pub fn count_utf16(units: &[u16], config: &CountConfig) -> CountResult {
    count(&decode_utf16_lossy(units), config)
}
