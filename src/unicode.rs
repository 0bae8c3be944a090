//! Character classification used by the shaper and the visual composer.
//!
//! The categories mirror the general category groups: punctuation is `P*`, symbols are `S*` and
//! numbers are `N*`. Whitespace is the Unicode `White_Space` property.

use unicode_general_category::{get_general_category, GeneralCategory};

pub mod mirror;

pub fn is_punctuation(ch: char) -> bool {
    matches!(
        get_general_category(ch),
        GeneralCategory::ConnectorPunctuation
            | GeneralCategory::DashPunctuation
            | GeneralCategory::OpenPunctuation
            | GeneralCategory::ClosePunctuation
            | GeneralCategory::InitialPunctuation
            | GeneralCategory::FinalPunctuation
            | GeneralCategory::OtherPunctuation
    )
}

pub fn is_symbol(ch: char) -> bool {
    matches!(
        get_general_category(ch),
        GeneralCategory::MathSymbol
            | GeneralCategory::CurrencySymbol
            | GeneralCategory::ModifierSymbol
            | GeneralCategory::OtherSymbol
    )
}

pub fn is_number(ch: char) -> bool {
    matches!(
        get_general_category(ch),
        GeneralCategory::DecimalNumber | GeneralCategory::LetterNumber | GeneralCategory::OtherNumber
    )
}

/// Upper or lower case letter. Arabic letters are caseless so this picks out Latin, Greek,
/// Cyrillic and the like.
pub fn is_cased_letter(ch: char) -> bool {
    matches!(
        get_general_category(ch),
        GeneralCategory::LowercaseLetter | GeneralCategory::UppercaseLetter
    )
}

pub fn is_whitespace(ch: char) -> bool {
    ch.is_whitespace()
}

/// Characters outside the Basic Multilingual Plane.
///
/// These are the characters that need a surrogate pair in UTF-16.
pub fn is_supplementary(ch: char) -> bool {
    u32::from(ch) > 0xFFFF
}
