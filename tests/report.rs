//! Character report scenarios and whole-range properties.

use charcode::html::parse_numeric_entity;
use charcode::utf16::join_surrogates;
use charcode::{
    analyze, analyze_code_point, analyze_utf16, AnalyzeError, Category, CharacterReport, Encoding,
    Utf8,
};

fn all_scalars() -> impl Iterator<Item = char> {
    (0u32..=0x10FFFF).filter_map(char::from_u32)
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn latin_capital_a() {
    let report = analyze("A").unwrap();
    assert_eq!(report.character(), 'A');
    assert_eq!(report.code_point(), 65);
    assert!(report.is_ascii());
    assert_eq!(report.category(), Category::Alphabet);
    assert_eq!(report.decimal(), "65");
    assert_eq!(report.hex(), "0x41");
    assert_eq!(report.unicode_hex(), "U+0041");
    assert_eq!(report.octal(), "0101");
    assert_eq!(report.binary(), "01000001");
    assert_eq!(report.utf8_bytes(), &[0x41]);
    assert_eq!(report.utf16_units(), &[0x0041]);
    assert_eq!(report.html_entity(), "&#65;");
}

#[test]
fn hangul_syllable_ga() {
    let report = analyze("가").unwrap();
    assert_eq!(report.code_point(), 0xAC00);
    assert_eq!(report.code_point(), 44032);
    assert!(!report.is_ascii());
    assert_eq!(report.category(), Category::Korean);
    assert_eq!(report.byte_length(), 3);
    assert_eq!(report.utf8_bytes(), &[0xEA, 0xB0, 0x80]);
    assert_eq!(report.utf16_units(), &[0xAC00]);
    assert_eq!(report.html_entity(), "&#44032;");
}

#[test]
fn digit_five() {
    let report = analyze("5").unwrap();
    assert_eq!(report.code_point(), 53);
    assert_eq!(report.category(), Category::Number);
    assert_eq!(report.binary(), "00110101");
}

#[test]
fn grinning_face() {
    let report = analyze("😀").unwrap();
    assert_eq!(report.code_point(), 128512);
    assert!(!report.is_ascii());
    assert_eq!(report.category(), Category::Emoji);
    assert_eq!(report.byte_length(), 4);
    assert_eq!(report.utf16_units(), &[0xD83D, 0xDE00]);
    assert_eq!(report.unicode_hex(), "U+1F600");
}

#[test]
fn precomposed_e_acute() {
    let report = analyze("\u{E9}").unwrap();
    assert_eq!(report.code_point(), 233);
    assert!(!report.is_ascii());
    assert_eq!(report.category(), Category::Other);
    assert_eq!(report.utf8_bytes().len(), 2);
}

#[test]
fn only_first_character_is_analyzed() {
    assert_eq!(analyze("Hello").unwrap(), CharacterReport::new('H'));
    assert_eq!(analyze("😀😃").unwrap(), CharacterReport::new('😀'));
    assert_eq!(
        analyze_utf16(&[0xD83D, 0xDE00, 0x0041]).unwrap(),
        CharacterReport::new('😀')
    );
}

#[test]
fn each_call_builds_a_fresh_report() {
    let first = analyze("A").unwrap();
    let second = analyze("B").unwrap();
    assert_eq!(first.character(), 'A');
    assert_eq!(second.character(), 'B');
}

#[test]
fn rejected_inputs() {
    assert_eq!(analyze(""), Err(AnalyzeError::EmptyInput));
    assert_eq!(
        analyze_utf16(&[0xDE00]),
        Err(AnalyzeError::LoneSurrogate { unit: 0xDE00 })
    );
    assert_eq!(
        analyze_code_point(0xDFFF),
        Err(AnalyzeError::InvalidCodePoint { value: 0xDFFF })
    );
}

#[test]
fn classification_precedence() {
    // Inside a ranged rule, never the catch-all
    assert_eq!(analyze_code_point(0xAC00).unwrap().category(), Category::Korean);
    assert_eq!(analyze_code_point(0x1F600).unwrap().category(), Category::Emoji);
    // ASCII letters and digits beat the ASCII symbol fallback
    assert_eq!(analyze("z").unwrap().category(), Category::Alphabet);
    assert_eq!(analyze("0").unwrap().category(), Category::Number);
    assert_eq!(analyze("~").unwrap().category(), Category::AsciiSymbol);
}

// =============================================================================
// Whole-range properties
// =============================================================================

#[test]
fn ascii_flag_matches_range() {
    for c in all_scalars() {
        let report = CharacterReport::new(c);
        assert_eq!(report.is_ascii(), report.code_point() <= 127, "U+{:04X}", c as u32);
        if report.is_ascii() {
            assert!(matches!(
                report.category(),
                Category::Alphabet | Category::Number | Category::AsciiSymbol
            ));
        }
    }
}

#[test]
fn utf8_bytes_roundtrip_and_match_length() {
    for c in all_scalars() {
        let report = CharacterReport::new(c);
        let cp = report.code_point();
        let expected_len = match cp {
            0..=0x7F => 1,
            0x80..=0x7FF => 2,
            0x800..=0xFFFF => 3,
            _ => 4,
        };
        assert_eq!(report.byte_length(), expected_len, "U+{cp:04X}");
        assert_eq!(report.utf8_bytes().len(), report.byte_length());

        let (decoded, _) = Utf8::decode_char_at(report.utf8_bytes(), 0).unwrap();
        assert_eq!(decoded as u32, cp);
    }
}

#[test]
fn utf16_units_follow_plane() {
    for c in all_scalars() {
        let report = CharacterReport::new(c);
        let cp = report.code_point();
        let units = report.utf16_units();
        if cp <= 0xFFFF {
            assert_eq!(units, &[cp as u16], "U+{cp:04X}");
        } else {
            assert_eq!(units.len(), 2, "U+{cp:04X}");
            assert_eq!(join_surrogates(units[0], units[1]), Some(cp));
        }
    }
}

#[test]
fn html_entity_roundtrip() {
    for c in ['A', '<', '&', '가', '나', '😀', '\u{10FFFF}'] {
        let report = CharacterReport::new(c);
        assert_eq!(parse_numeric_entity(&report.html_entity()), Some(c));
    }
}
