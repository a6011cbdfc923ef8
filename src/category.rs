//! Script/class tags for a single code point.
//!
//! Classification walks [`CLASSIFICATION`] top to bottom and returns the first
//! range containing the code point. Ranges that are not in the table fall back
//! to [`Category::AsciiSymbol`] for `0..=127` and [`Category::Other`] above.

use core::fmt;
use core::ops::RangeInclusive;

/// The class of a character, as reported to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Pictographs in U+1F300..=U+1F9FF.
    Emoji,
    /// Hangul syllables.
    Korean,
    /// CJK unified ideographs.
    Chinese,
    /// Japanese hiragana.
    Hiragana,
    /// Japanese katakana.
    Katakana,
    /// ASCII letters `A-Z` and `a-z`.
    Alphabet,
    /// ASCII digits `0-9`.
    Number,
    /// Any other ASCII character: punctuation, space, control codes.
    AsciiSymbol,
    /// Everything else.
    Other,
}

/// Ordered classification rules. The first matching range wins.
pub const CLASSIFICATION: &[(RangeInclusive<u32>, Category)] = &[
    (0x1F300..=0x1F9FF, Category::Emoji),
    (0xAC00..=0xD7A3, Category::Korean),
    (0x4E00..=0x9FFF, Category::Chinese),
    (0x3040..=0x309F, Category::Hiragana),
    (0x30A0..=0x30FF, Category::Katakana),
    (0x41..=0x5A, Category::Alphabet),
    (0x61..=0x7A, Category::Alphabet),
    (0x30..=0x39, Category::Number),
    (0x00..=0x7F, Category::AsciiSymbol),
];

impl Category {
    /// Classifies a code point.
    pub fn of(code_point: u32) -> Self {
        CLASSIFICATION
            .iter()
            .find(|(range, _)| range.contains(&code_point))
            .map_or(Category::Other, |&(_, category)| category)
    }

    /// Returns the short English name of this category.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Emoji => "Emoji",
            Self::Korean => "Korean",
            Self::Chinese => "Chinese",
            Self::Hiragana => "Hiragana",
            Self::Katakana => "Katakana",
            Self::Alphabet => "Alphabet",
            Self::Number => "Number",
            Self::AsciiSymbol => "ASCII symbol",
            Self::Other => "Other Unicode character",
        }
    }

    /// Returns the bilingual label shown in the character panel.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Emoji => "이모지 (Emoji)",
            Self::Korean => "한글 (Korean)",
            Self::Chinese => "한자 (Chinese)",
            Self::Hiragana => "히라가나 (Japanese)",
            Self::Katakana => "가타카나 (Japanese)",
            Self::Alphabet => "영문자 (Alphabet)",
            Self::Number => "숫자 (Number)",
            Self::AsciiSymbol => "ASCII 특수문자 (ASCII symbol)",
            Self::Other => "기타 유니코드 문자 (Other)",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
