//! Code-unit encoding trait.
//!
//! An [`Encoding`] turns a single Unicode scalar value into a short sequence of
//! fixed-width code units and back:
//!
//! - [`Utf8`](crate::Utf8): `u8` units, 1 to 4 per character
//! - [`Utf16`](crate::Utf16): `u16` units, 1 or 2 per character
//!
//! # Example
//!
//! ```
//! use charcode::{Encoding, Utf8, Utf16};
//!
//! assert_eq!(Utf8::NAME, "UTF-8");
//! assert_eq!(Utf8::MAX_UNITS, 4);
//!
//! let mut buf = [0u8; 4];
//! let len = Utf8::encode_char('가', &mut buf);
//! assert_eq!(&buf[..len], &[0xEA, 0xB0, 0x80]);
//!
//! let units = Utf16::encode_to_vec('\u{1F600}');
//! assert_eq!(units, [0xD83D, 0xDE00]); // surrogate pair
//! ```

use alloc::vec::Vec;

/// A trait defining how one character maps to code units.
///
/// Implementors are zero-sized types that serve as type-level markers.
/// All operations are static methods.
pub trait Encoding: Sized + 'static {
    /// The human-readable name of this encoding (e.g., "UTF-8").
    const NAME: &'static str;

    /// The maximum number of code units a single character can occupy.
    const MAX_UNITS: usize;

    /// The code unit type.
    type Unit: Copy + Default + Into<u32> + core::fmt::Debug + 'static;

    /// Returns the number of code units needed to encode the given character.
    fn encoded_len(c: char) -> usize;

    /// Encodes a character into the given buffer.
    ///
    /// Returns the number of code units written.
    ///
    /// # Panics
    ///
    /// Panics if the buffer is shorter than [`encoded_len`](Self::encoded_len).
    fn encode_char(c: char, buf: &mut [Self::Unit]) -> usize;

    /// Decodes a character starting at the given unit offset.
    ///
    /// Returns `Some((char, next_offset))` where `next_offset` is the index
    /// immediately after the decoded character, or `None` if no valid
    /// character starts at `offset`.
    fn decode_char_at(units: &[Self::Unit], offset: usize) -> Option<(char, usize)>;

    /// Encodes a character into a freshly allocated vector of code units.
    fn encode_to_vec(c: char) -> Vec<Self::Unit> {
        let mut units = alloc::vec![Self::Unit::default(); Self::encoded_len(c)];
        let written = Self::encode_char(c, &mut units);
        debug_assert_eq!(written, units.len());
        units
    }
}
