use thiserror::Error;

/// An error returned when input cannot be turned into a character report.
///
/// Report construction itself is total over Unicode scalar values; these
/// variants only describe input that never reaches it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalyzeError {
    /// The input contained no characters at all.
    #[error("input is empty")]
    EmptyInput,

    /// The input started with a UTF-16 surrogate that is not part of a valid pair.
    #[error("lone surrogate 0x{unit:04X} at the start of the input")]
    LoneSurrogate {
        /// The unpaired surrogate code unit.
        unit: u16,
    },

    /// The number is a surrogate or lies beyond U+10FFFF.
    #[error("0x{value:X} is not a Unicode scalar value")]
    InvalidCodePoint {
        /// The rejected value.
        value: u32,
    },
}

impl AnalyzeError {
    /// Creates an error for an unpaired surrogate unit.
    #[inline]
    pub const fn lone_surrogate(unit: u16) -> Self {
        Self::LoneSurrogate { unit }
    }

    /// Creates an error for a number outside the scalar value range.
    #[inline]
    pub const fn invalid_code_point(value: u32) -> Self {
        Self::InvalidCodePoint { value }
    }
}
