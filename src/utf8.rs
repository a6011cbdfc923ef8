use crate::encoding::Encoding;

/// UTF-8 encoding marker.
///
/// Packs a scalar value into 1 to 4 bytes: a lead byte carrying the length
/// prefix followed by `10xxxxxx` continuation bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Utf8;

// Largest scalar value for each sequence length
const MAX_ONE_BYTE: u32 = 0x7F;
const MAX_TWO_BYTE: u32 = 0x7FF;
const MAX_THREE_BYTE: u32 = 0xFFFF;

const TAG_CONT: u8 = 0b1000_0000;
const TAG_TWO: u8 = 0b1100_0000;
const TAG_THREE: u8 = 0b1110_0000;
const TAG_FOUR: u8 = 0b1111_0000;

impl Encoding for Utf8 {
    const NAME: &'static str = "UTF-8";
    const MAX_UNITS: usize = 4;
    type Unit = u8;

    #[inline]
    fn encoded_len(c: char) -> usize {
        match c as u32 {
            0..=MAX_ONE_BYTE => 1,
            0..=MAX_TWO_BYTE => 2,
            0..=MAX_THREE_BYTE => 3,
            _ => 4,
        }
    }

    fn encode_char(c: char, buf: &mut [u8]) -> usize {
        let cp = c as u32;
        let len = Self::encoded_len(c);
        let buf = &mut buf[..len];

        match len {
            1 => buf[0] = cp as u8,
            2 => {
                buf[0] = TAG_TWO | (cp >> 6) as u8;
                buf[1] = continuation(cp);
            }
            3 => {
                buf[0] = TAG_THREE | (cp >> 12) as u8;
                buf[1] = continuation(cp >> 6);
                buf[2] = continuation(cp);
            }
            _ => {
                buf[0] = TAG_FOUR | (cp >> 18) as u8;
                buf[1] = continuation(cp >> 12);
                buf[2] = continuation(cp >> 6);
                buf[3] = continuation(cp);
            }
        }

        len
    }

    fn decode_char_at(bytes: &[u8], offset: usize) -> Option<(char, usize)> {
        let slice = bytes.get(offset..)?;
        let first = *slice.first()?;

        let (len, lead_bits, min) = match first {
            0x00..=0x7F => return Some((char::from(first), offset + 1)),
            0xC0..=0xDF => (2, u32::from(first & 0x1F), MAX_ONE_BYTE + 1),
            0xE0..=0xEF => (3, u32::from(first & 0x0F), MAX_TWO_BYTE + 1),
            0xF0..=0xF7 => (4, u32::from(first & 0x07), MAX_THREE_BYTE + 1),
            _ => return None, // Continuation byte or invalid lead
        };

        let tail = slice.get(1..len)?;
        let mut cp = lead_bits;
        for &b in tail {
            if !is_utf8_continuation(b) {
                return None;
            }
            cp = (cp << 6) | u32::from(b & 0x3F);
        }

        // Reject overlong forms; char::from_u32 rejects surrogates and > U+10FFFF
        if cp < min {
            return None;
        }
        let c = char::from_u32(cp)?;

        Some((c, offset + len))
    }
}

/// Returns the continuation byte carrying the low six bits of `bits`.
#[inline]
fn continuation(bits: u32) -> u8 {
    TAG_CONT | (bits & 0x3F) as u8
}

/// Returns true if the byte is a UTF-8 continuation byte (10xxxxxx).
#[inline]
fn is_utf8_continuation(b: u8) -> bool {
    (b & 0xC0) == TAG_CONT
}

// === Registry registration ===

#[cfg(feature = "registry")]
inventory::submit! {
    crate::registry::EncodingEntry {
        name: "UTF-8",
        aliases: &["UTF8", "utf-8", "utf8"],
        unit_bits: 8,
        encode: |c| {
            Utf8::encode_to_vec(c).into_iter().map(u32::from).collect()
        },
    }
}
