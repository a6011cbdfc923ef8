use crate::encoding::Encoding;

/// UTF-16 encoding marker.
///
/// Characters in the Basic Multilingual Plane take one unit; everything above
/// U+FFFF is split into a high/low surrogate pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Utf16;

// Surrogate range constants
const SURROGATE_HIGH_START: u16 = 0xD800;
const SURROGATE_HIGH_END: u16 = 0xDBFF;
const SURROGATE_LOW_START: u16 = 0xDC00;
const SURROGATE_LOW_END: u16 = 0xDFFF;

const SUPPLEMENTARY_OFFSET: u32 = 0x10000;

/// Returns true if the unit lies anywhere in U+D800..=U+DFFF.
#[inline]
pub fn is_surrogate(unit: u16) -> bool {
    (SURROGATE_HIGH_START..=SURROGATE_LOW_END).contains(&unit)
}

/// Splits a supplementary-plane character into its surrogate pair.
///
/// Returns `None` for characters in the Basic Multilingual Plane, which
/// encode as a single unit.
#[inline]
pub fn split_surrogates(c: char) -> Option<(u16, u16)> {
    let cp = (c as u32).checked_sub(SUPPLEMENTARY_OFFSET)?;
    // char tops out at U+10FFFF, so cp fits in 20 bits
    let high = SURROGATE_HIGH_START + (cp >> 10) as u16;
    let low = SURROGATE_LOW_START + (cp & 0x3FF) as u16;
    Some((high, low))
}

/// Joins a high/low surrogate pair back into a code point.
///
/// Returns `None` if either unit is not in its surrogate range.
#[inline]
pub fn join_surrogates(high: u16, low: u16) -> Option<u32> {
    if !(SURROGATE_HIGH_START..=SURROGATE_HIGH_END).contains(&high)
        || !(SURROGATE_LOW_START..=SURROGATE_LOW_END).contains(&low)
    {
        return None;
    }
    let high = u32::from(high - SURROGATE_HIGH_START);
    let low = u32::from(low - SURROGATE_LOW_START);
    Some(SUPPLEMENTARY_OFFSET + (high << 10) + low)
}

impl Encoding for Utf16 {
    const NAME: &'static str = "UTF-16";
    const MAX_UNITS: usize = 2;
    type Unit = u16;

    #[inline]
    fn encoded_len(c: char) -> usize {
        if (c as u32) < SUPPLEMENTARY_OFFSET { 1 } else { 2 }
    }

    fn encode_char(c: char, buf: &mut [u16]) -> usize {
        match split_surrogates(c) {
            Some((high, low)) => {
                buf[0] = high;
                buf[1] = low;
                2
            }
            None => {
                // A char is never a surrogate, so this unit is never one either
                buf[0] = c as u16;
                1
            }
        }
    }

    fn decode_char_at(units: &[u16], offset: usize) -> Option<(char, usize)> {
        let unit = *units.get(offset)?;

        if (SURROGATE_HIGH_START..=SURROGATE_HIGH_END).contains(&unit) {
            let low = *units.get(offset + 1)?;
            let cp = join_surrogates(unit, low)?;
            let c = char::from_u32(cp)?;
            Some((c, offset + 2))
        } else if is_surrogate(unit) {
            // Lone low surrogate
            None
        } else {
            let c = char::from_u32(u32::from(unit))?;
            Some((c, offset + 1))
        }
    }
}

// === Registry registration ===

#[cfg(feature = "registry")]
inventory::submit! {
    crate::registry::EncodingEntry {
        name: "UTF-16",
        aliases: &["UTF16", "utf-16", "utf16", "UCS-2", "ucs-2"],
        unit_bits: 16,
        encode: |c| {
            Utf16::encode_to_vec(c).into_iter().map(u32::from).collect()
        },
    }
}
