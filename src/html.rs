//! HTML decimal numeric character references.
//!
//! Both directions are public: [`numeric_entity`] renders the reference shown
//! in the Unicode panel, and [`parse_numeric_entity`] reads one back, so a
//! caller holding markup such as `&#45208;` can recover the character it names.
//!
//! ```
//! use charcode::html;
//!
//! assert_eq!(html::numeric_entity(0xB098), "&#45208;");
//! assert_eq!(html::parse_numeric_entity("&#45208;"), Some('나'));
//! ```

use alloc::format;
use alloc::string::String;

/// Returns the decimal numeric character reference, e.g. `&#44032;` for `가`.
#[inline]
pub fn numeric_entity(code_point: u32) -> String {
    format!("&#{code_point};")
}

/// Parses a decimal numeric character reference back to its character.
///
/// Returns `None` unless `entity` is exactly `&#` + decimal digits + `;`
/// naming a Unicode scalar value.
pub fn parse_numeric_entity(entity: &str) -> Option<char> {
    let digits = entity.strip_prefix("&#")?.strip_suffix(';')?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    char::from_u32(digits.parse().ok()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_entity() {
        assert_eq!(numeric_entity(65), "&#65;");
        assert_eq!(numeric_entity(0xAC00), "&#44032;");
        assert_eq!(numeric_entity(0x1F600), "&#128512;");
    }

    #[test]
    fn test_parse_numeric_entity() {
        assert_eq!(parse_numeric_entity("&#65;"), Some('A'));
        assert_eq!(parse_numeric_entity("&#45208;"), Some('나'));
        assert_eq!(parse_numeric_entity("&#x41;"), None);
        assert_eq!(parse_numeric_entity("&#;"), None);
        assert_eq!(parse_numeric_entity("&#+65;"), None);
        assert_eq!(parse_numeric_entity("&#55296;"), None); // U+D800
        assert_eq!(parse_numeric_entity("&#99999999999;"), None);
    }
}
