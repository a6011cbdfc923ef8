//! Character reports.
//!
//! A [`CharacterReport`] holds every representation of one character that the
//! panels show: ASCII code and bases, Unicode code point, UTF-8 bytes, UTF-16
//! units and the HTML entity.
//!
//! # Example
//!
//! ```
//! use charcode::{analyze, Category};
//!
//! let report = analyze("가나다").unwrap();
//! assert_eq!(report.code_point(), 0xAC00);
//! assert_eq!(report.category(), Category::Korean);
//! assert_eq!(report.utf8_bytes(), &[0xEA, 0xB0, 0x80]);
//! assert_eq!(report.html_entity(), "&#44032;");
//! ```

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::category::Category;
use crate::codepoint;
use crate::encoding::Encoding;
use crate::error::AnalyzeError;
use crate::html;
use crate::radix;
use crate::utf16::Utf16;
use crate::utf8::Utf8;

/// Largest code point in the ASCII range.
pub const ASCII_MAX: u32 = 0x7F;

/// Analyzes the first character of `input`.
///
/// Everything after the first Unicode scalar value is ignored.
///
/// # Errors
///
/// Returns [`AnalyzeError::EmptyInput`] if `input` is empty.
pub fn analyze(input: &str) -> Result<CharacterReport, AnalyzeError> {
    codepoint::first_char(input).map(CharacterReport::new)
}

/// Analyzes the first character of raw UTF-16 text.
///
/// # Errors
///
/// Returns [`AnalyzeError::EmptyInput`] for no units, or
/// [`AnalyzeError::LoneSurrogate`] if the text starts with an unpaired
/// surrogate.
pub fn analyze_utf16(units: &[u16]) -> Result<CharacterReport, AnalyzeError> {
    codepoint::first_char_utf16(units).map(CharacterReport::new)
}

/// Analyzes the character with the given code point.
///
/// # Errors
///
/// Returns [`AnalyzeError::InvalidCodePoint`] for surrogates and values above
/// U+10FFFF.
pub fn analyze_code_point(value: u32) -> Result<CharacterReport, AnalyzeError> {
    codepoint::from_u32(value).map(CharacterReport::new)
}

/// Every representation of a single character.
///
/// Reports are immutable; analyzing another character builds a new one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CharacterReport {
    character: char,
    category: Category,
    utf8_bytes: Vec<u8>,
    utf16_units: Vec<u16>,
}

impl CharacterReport {
    /// Builds the report for `character`. Total over all scalar values.
    pub fn new(character: char) -> Self {
        let code_point = character as u32;
        let category = Category::of(code_point);
        log::trace!("analyzing U+{code_point:04X} as {category}");

        Self {
            character,
            category,
            utf8_bytes: Utf8::encode_to_vec(character),
            utf16_units: Utf16::encode_to_vec(character),
        }
    }

    /// The analyzed character.
    #[inline]
    pub fn character(&self) -> char {
        self.character
    }

    /// The Unicode scalar value, in `0..=0x10FFFF`.
    #[inline]
    pub fn code_point(&self) -> u32 {
        self.character as u32
    }

    /// Whether the code point lies in `0..=127`.
    #[inline]
    pub fn is_ascii(&self) -> bool {
        self.code_point() <= ASCII_MAX
    }

    /// The script/class of the character.
    #[inline]
    pub fn category(&self) -> Category {
        self.category
    }

    /// The number of bytes the character occupies in UTF-8.
    #[inline]
    pub fn byte_length(&self) -> usize {
        self.utf8_bytes.len()
    }

    /// Base-10 code point, e.g. `65`.
    pub fn decimal(&self) -> String {
        radix::decimal(self.code_point())
    }

    /// Base-16 code point as shown in the ASCII panel, e.g. `0x41`.
    pub fn hex(&self) -> String {
        radix::hex(self.code_point())
    }

    /// Base-16 code point in `U+` notation, e.g. `U+0041`.
    pub fn unicode_hex(&self) -> String {
        radix::unicode_hex(self.code_point())
    }

    /// Base-8 code point with a leading zero, e.g. `0101`.
    pub fn octal(&self) -> String {
        radix::octal(self.code_point())
    }

    /// Base-2 code point padded to at least 8 digits, e.g. `01000001`.
    pub fn binary(&self) -> String {
        radix::binary(self.code_point())
    }

    /// The UTF-8 encoding.
    #[inline]
    pub fn utf8_bytes(&self) -> &[u8] {
        &self.utf8_bytes
    }

    /// The UTF-16 encoding: one unit, or a high/low surrogate pair.
    #[inline]
    pub fn utf16_units(&self) -> &[u16] {
        &self.utf16_units
    }

    /// The decimal numeric character reference, e.g. `&#65;`.
    pub fn html_entity(&self) -> String {
        html::numeric_entity(self.code_point())
    }

    /// UTF-8 bytes as `0xEA 0xB0 0x80`.
    pub fn utf8_display(&self) -> String {
        join_units(self.utf8_bytes.iter().map(|b| alloc::format!("0x{b:02X}")))
    }

    /// UTF-16 units as `0xD83D 0xDE00`.
    pub fn utf16_display(&self) -> String {
        join_units(self.utf16_units.iter().map(|u| alloc::format!("0x{u:04X}")))
    }

    /// UTF-8 size as `3 bytes`.
    pub fn byte_size_display(&self) -> String {
        match self.byte_length() {
            1 => String::from("1 byte"),
            n => alloc::format!("{n} bytes"),
        }
    }
}

fn join_units(units: impl Iterator<Item = String>) -> String {
    units.collect::<Vec<_>>().join(" ")
}

/// Renders the character, ASCII and Unicode panels.
impl fmt::Display for CharacterReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Character")?;
        writeln!(f, "  {:<22}{}", "glyph", self.character.escape_debug())?;
        writeln!(f, "  {:<22}{}", "type", self.category.label())?;
        writeln!(f, "  {:<22}{}", "size", self.byte_size_display())?;
        writeln!(f)?;

        writeln!(f, "ASCII")?;
        if self.is_ascii() {
            writeln!(f, "  {:<22}{}", "code", self.code_point())?;
            writeln!(f, "  {:<22}{}", "decimal", self.decimal())?;
            writeln!(f, "  {:<22}{}", "hex", self.hex())?;
            writeln!(f, "  {:<22}{}", "octal", self.octal())?;
            writeln!(f, "  {:<22}{}", "binary", self.binary())?;
        } else {
            writeln!(f, "  outside the ASCII range (ASCII covers 0-127 only)")?;
        }
        writeln!(f)?;

        writeln!(f, "Unicode")?;
        writeln!(f, "  {:<22}{}", "code point", self.unicode_hex())?;
        writeln!(f, "  {:<22}{}", "code point (decimal)", self.decimal())?;
        writeln!(f, "  {:<22}{}", "UTF-8", self.utf8_display())?;
        writeln!(f, "  {:<22}{}", "UTF-16", self.utf16_display())?;
        write!(f, "  {:<22}{}", "HTML entity", self.html_entity())
    }
}
