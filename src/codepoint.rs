//! Extraction of the first Unicode scalar value from caller input.
//!
//! Input always arrives as a whole string, but only its first character is
//! analyzed. Extraction is scalar-aware for every input form: a supplementary
//! character is never split into its surrogate halves.

use crate::encoding::Encoding;
use crate::error::AnalyzeError;
use crate::utf16::Utf16;

/// Returns the first scalar value of a string slice.
#[inline]
pub fn first_char(input: &str) -> Result<char, AnalyzeError> {
    input.chars().next().ok_or(AnalyzeError::EmptyInput)
}

/// Returns the first scalar value of raw UTF-16 text.
///
/// A leading high surrogate followed by a low surrogate is joined into one
/// scalar value; any other leading surrogate is rejected.
pub fn first_char_utf16(units: &[u16]) -> Result<char, AnalyzeError> {
    let &first = units.first().ok_or(AnalyzeError::EmptyInput)?;
    Utf16::decode_char_at(units, 0)
        .map(|(c, _)| c)
        .ok_or(AnalyzeError::lone_surrogate(first))
}

/// Converts a number to a scalar value.
#[inline]
pub fn from_u32(value: u32) -> Result<char, AnalyzeError> {
    char::from_u32(value).ok_or(AnalyzeError::invalid_code_point(value))
}
