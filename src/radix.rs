//! Numeric renderings of a code point.
//!
//! ```
//! use charcode::radix;
//!
//! assert_eq!(radix::decimal(65), "65");
//! assert_eq!(radix::hex(65), "0x41");
//! assert_eq!(radix::unicode_hex(65), "U+0041");
//! assert_eq!(radix::octal(65), "0101");
//! assert_eq!(radix::binary(65), "01000001");
//! ```

use alloc::format;
use alloc::string::String;

/// Base-10 digits.
#[inline]
pub fn decimal(code_point: u32) -> String {
    format!("{code_point}")
}

/// Uppercase base-16 digits with a `0x` prefix and no padding.
#[inline]
pub fn hex(code_point: u32) -> String {
    format!("0x{code_point:X}")
}

/// The `U+` notation: uppercase base-16, zero-padded to at least 4 digits.
#[inline]
pub fn unicode_hex(code_point: u32) -> String {
    format!("U+{code_point:04X}")
}

/// Base-8 digits with a single leading `0`.
#[inline]
pub fn octal(code_point: u32) -> String {
    format!("0{code_point:o}")
}

/// Base-2 digits, zero-padded to at least 8.
#[inline]
pub fn binary(code_point: u32) -> String {
    format!("{code_point:08b}")
}
