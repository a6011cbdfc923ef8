//! Character code reports.
//!
//! This crate maps a single character to the representations an ASCII/Unicode
//! lookup panel shows: its ASCII code (when it has one), Unicode code point in
//! several bases, UTF-8 bytes, UTF-16 code units, and HTML numeric entity.
//!
//! Only the first Unicode scalar value of the input is analyzed.
//!
//! # Example
//!
//! ```
//! use charcode::{analyze, Category};
//!
//! let report = analyze("A").unwrap();
//! assert!(report.is_ascii());
//! assert_eq!(report.category(), Category::Alphabet);
//! assert_eq!(report.hex(), "0x41");
//! assert_eq!(report.binary(), "01000001");
//!
//! // Supplementary characters stay whole
//! let report = analyze("😀!").unwrap();
//! assert_eq!(report.code_point(), 0x1F600);
//! assert_eq!(report.utf16_units(), &[0xD83D, 0xDE00]);
//! ```

#![deny(missing_docs)]

extern crate alloc;

/// Script/class tags and the ordered classification table.
pub mod category;
/// Extraction of the first scalar value from caller input.
pub mod codepoint;
/// Encoding trait.
pub mod encoding;
/// Error types for analysis input.
pub mod error;
/// HTML numeric character references.
pub mod html;
/// Decimal, hex, octal and binary renderings.
pub mod radix;
/// Character reports and the analysis entry points.
pub mod report;
/// UTF-16 encoding implementation.
pub mod utf16;
/// UTF-8 encoding implementation.
pub mod utf8;

/// Runtime encoding registry for dynamic encoding selection.
#[cfg(feature = "registry")]
pub mod registry;

// Re-export main types
pub use category::Category;
pub use encoding::Encoding;
pub use error::AnalyzeError;
pub use report::{analyze, analyze_code_point, analyze_utf16, CharacterReport};
pub use utf16::Utf16;
pub use utf8::Utf8;
