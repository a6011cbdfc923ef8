//! Runtime encoding registry.
//!
//! Lets tools pick a code-unit encoding by name, e.g. from a command-line flag.
//!
//! # Example
//!
//! ```
//! use charcode::registry;
//!
//! let utf16 = registry::find_encoding("utf16").unwrap();
//! assert_eq!(utf16.name(), "UTF-16");
//! assert_eq!(utf16.encode('😀'), [0xD83D, 0xDE00]);
//! assert_eq!(utf16.format_units('😀'), "0xD83D 0xDE00");
//! ```

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use thiserror::Error;

/// Error returned when an encoding is not found.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown encoding: {0}")]
pub struct UnknownEncodingError(pub String);

/// A registered encoding entry.
///
/// Each encoding registers one of these via `inventory::submit!`.
pub struct EncodingEntry {
    /// The canonical name of the encoding (e.g., "UTF-8").
    pub name: &'static str,
    /// Alternative names for the encoding (e.g., &["UTF8"]).
    pub aliases: &'static [&'static str],
    /// The width of one code unit in bits.
    pub unit_bits: u32,
    /// Encode a char, returning its code units widened to `u32`.
    pub encode: fn(char) -> Vec<u32>,
}

impl EncodingEntry {
    /// Returns the canonical name of this encoding.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the width of one code unit in bits.
    pub fn unit_bits(&self) -> u32 {
        self.unit_bits
    }

    /// Returns all names (canonical + aliases) for this encoding.
    pub fn all_names(&self) -> impl Iterator<Item = &'static str> {
        core::iter::once(self.name).chain(self.aliases.iter().copied())
    }

    /// Check if this encoding matches the given name (case-insensitive).
    pub fn matches(&self, name: &str) -> bool {
        self.all_names().any(|n| n.eq_ignore_ascii_case(name))
    }

    /// Encodes a character to its code units.
    pub fn encode(&self, c: char) -> Vec<u32> {
        (self.encode)(c)
    }

    /// Encodes a character and formats each unit as zero-padded uppercase hex.
    pub fn format_units(&self, c: char) -> String {
        let width = (self.unit_bits / 4) as usize;
        self.encode(c)
            .iter()
            .map(|u| alloc::format!("0x{u:0width$X}"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl core::fmt::Debug for EncodingEntry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("EncodingEntry")
            .field("name", &self.name)
            .field("aliases", &self.aliases)
            .field("unit_bits", &self.unit_bits)
            .finish_non_exhaustive()
    }
}

inventory::collect!(EncodingEntry);

/// Returns an iterator over all registered encodings.
pub fn encodings() -> impl Iterator<Item = &'static EncodingEntry> {
    inventory::iter::<EncodingEntry>()
}

/// Find an encoding by name (case-insensitive).
pub fn find_encoding(name: &str) -> Result<&'static EncodingEntry, UnknownEncodingError> {
    log::debug!("looking up encoding {name:?}");
    encodings()
        .find(|e| e.matches(name))
        .ok_or_else(|| UnknownEncodingError(name.to_string()))
}
