//! Mapping from logical Arabic and Persian letters to their presentation forms.
//!
//! Each letter carries its logical code point (Arabic block) and the code point of its isolated
//! presentation form (Arabic Presentation Forms-A/B). The initial, medial and final forms follow
//! the isolated form at fixed offsets, see [`ContextualForm`].

use lazy_static::lazy_static;
use rustc_hash::{FxHashMap, FxHashSet};

/// Isolated form of U+0621 ARABIC LETTER HAMZA.
pub const ISOLATED_HAMZA: char = '\u{FE80}';
/// Isolated form of U+0644 ARABIC LETTER LAM.
pub const ISOLATED_LAM: char = '\u{FEDD}';

/// The range of Arabic Presentation Forms-B.
const PRESENTATION_FORMS_B: std::ops::RangeInclusive<char> = '\u{FE70}'..='\u{FEFF}';

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ArabicLetter {
    Hamza,
    Alef,
    AlefWithHamzaAbove,
    WawWithHamzaAbove,
    AlefWithHamzaBelow,
    AlefMaksura,
    YehWithHamzaAbove,
    Beh,
    Teh,
    Theh,
    Jeem,
    Hah,
    Khah,
    Dal,
    Thal,
    Reh,
    Zain,
    Seen,
    Sheen,
    Sad,
    Dad,
    Tah,
    Zah,
    Ain,
    Ghain,
    Feh,
    Qaf,
    Kaf,
    Lam,
    Meem,
    Noon,
    Heh,
    Waw,
    Yeh,
    AlefWithMaddaAbove,
    TehMarbuta,
    // Persian
    Peh,
    Tcheh,
    Jeh,
    Gaf,
    Keheh,
    FarsiYeh,
}

impl ArabicLetter {
    pub const ALL: [ArabicLetter; 42] = [
        ArabicLetter::Hamza,
        ArabicLetter::Alef,
        ArabicLetter::AlefWithHamzaAbove,
        ArabicLetter::WawWithHamzaAbove,
        ArabicLetter::AlefWithHamzaBelow,
        ArabicLetter::AlefMaksura,
        ArabicLetter::YehWithHamzaAbove,
        ArabicLetter::Beh,
        ArabicLetter::Teh,
        ArabicLetter::Theh,
        ArabicLetter::Jeem,
        ArabicLetter::Hah,
        ArabicLetter::Khah,
        ArabicLetter::Dal,
        ArabicLetter::Thal,
        ArabicLetter::Reh,
        ArabicLetter::Zain,
        ArabicLetter::Seen,
        ArabicLetter::Sheen,
        ArabicLetter::Sad,
        ArabicLetter::Dad,
        ArabicLetter::Tah,
        ArabicLetter::Zah,
        ArabicLetter::Ain,
        ArabicLetter::Ghain,
        ArabicLetter::Feh,
        ArabicLetter::Qaf,
        ArabicLetter::Kaf,
        ArabicLetter::Lam,
        ArabicLetter::Meem,
        ArabicLetter::Noon,
        ArabicLetter::Heh,
        ArabicLetter::Waw,
        ArabicLetter::Yeh,
        ArabicLetter::AlefWithMaddaAbove,
        ArabicLetter::TehMarbuta,
        ArabicLetter::Peh,
        ArabicLetter::Tcheh,
        ArabicLetter::Jeh,
        ArabicLetter::Gaf,
        ArabicLetter::Keheh,
        ArabicLetter::FarsiYeh,
    ];

    /// The code point of the letter in logical (stored) text.
    pub const fn logical(self) -> char {
        match self {
            ArabicLetter::Hamza => '\u{0621}',
            ArabicLetter::Alef => '\u{0627}',
            ArabicLetter::AlefWithHamzaAbove => '\u{0623}',
            ArabicLetter::WawWithHamzaAbove => '\u{0624}',
            ArabicLetter::AlefWithHamzaBelow => '\u{0625}',
            ArabicLetter::AlefMaksura => '\u{0649}',
            ArabicLetter::YehWithHamzaAbove => '\u{0626}',
            ArabicLetter::Beh => '\u{0628}',
            ArabicLetter::Teh => '\u{062A}',
            ArabicLetter::Theh => '\u{062B}',
            ArabicLetter::Jeem => '\u{062C}',
            ArabicLetter::Hah => '\u{062D}',
            ArabicLetter::Khah => '\u{062E}',
            ArabicLetter::Dal => '\u{062F}',
            ArabicLetter::Thal => '\u{0630}',
            ArabicLetter::Reh => '\u{0631}',
            ArabicLetter::Zain => '\u{0632}',
            ArabicLetter::Seen => '\u{0633}',
            ArabicLetter::Sheen => '\u{0634}',
            ArabicLetter::Sad => '\u{0635}',
            ArabicLetter::Dad => '\u{0636}',
            ArabicLetter::Tah => '\u{0637}',
            ArabicLetter::Zah => '\u{0638}',
            ArabicLetter::Ain => '\u{0639}',
            ArabicLetter::Ghain => '\u{063A}',
            ArabicLetter::Feh => '\u{0641}',
            ArabicLetter::Qaf => '\u{0642}',
            ArabicLetter::Kaf => '\u{0643}',
            ArabicLetter::Lam => '\u{0644}',
            ArabicLetter::Meem => '\u{0645}',
            ArabicLetter::Noon => '\u{0646}',
            ArabicLetter::Heh => '\u{0647}',
            ArabicLetter::Waw => '\u{0648}',
            ArabicLetter::Yeh => '\u{064A}',
            ArabicLetter::AlefWithMaddaAbove => '\u{0622}',
            ArabicLetter::TehMarbuta => '\u{0629}',
            ArabicLetter::Peh => '\u{067E}',
            ArabicLetter::Tcheh => '\u{0686}',
            ArabicLetter::Jeh => '\u{0698}',
            ArabicLetter::Gaf => '\u{06AF}',
            ArabicLetter::Keheh => '\u{06A9}',
            ArabicLetter::FarsiYeh => '\u{06CC}',
        }
    }

    /// The code point of the isolated presentation form.
    pub const fn isolated(self) -> char {
        match self {
            ArabicLetter::Hamza => '\u{FE80}',
            ArabicLetter::Alef => '\u{FE8D}',
            ArabicLetter::AlefWithHamzaAbove => '\u{FE83}',
            ArabicLetter::WawWithHamzaAbove => '\u{FE85}',
            ArabicLetter::AlefWithHamzaBelow => '\u{FE87}',
            // Shares the Farsi Yeh forms so that it takes all four contextual forms
            ArabicLetter::AlefMaksura => '\u{FBFC}',
            ArabicLetter::YehWithHamzaAbove => '\u{FE89}',
            ArabicLetter::Beh => '\u{FE8F}',
            ArabicLetter::Teh => '\u{FE95}',
            ArabicLetter::Theh => '\u{FE99}',
            ArabicLetter::Jeem => '\u{FE9D}',
            ArabicLetter::Hah => '\u{FEA1}',
            ArabicLetter::Khah => '\u{FEA5}',
            ArabicLetter::Dal => '\u{FEA9}',
            ArabicLetter::Thal => '\u{FEAB}',
            ArabicLetter::Reh => '\u{FEAD}',
            ArabicLetter::Zain => '\u{FEAF}',
            ArabicLetter::Seen => '\u{FEB1}',
            ArabicLetter::Sheen => '\u{FEB5}',
            ArabicLetter::Sad => '\u{FEB9}',
            ArabicLetter::Dad => '\u{FEBD}',
            ArabicLetter::Tah => '\u{FEC1}',
            ArabicLetter::Zah => '\u{FEC5}',
            ArabicLetter::Ain => '\u{FEC9}',
            ArabicLetter::Ghain => '\u{FECD}',
            ArabicLetter::Feh => '\u{FED1}',
            ArabicLetter::Qaf => '\u{FED5}',
            ArabicLetter::Kaf => '\u{FED9}',
            ArabicLetter::Lam => '\u{FEDD}',
            ArabicLetter::Meem => '\u{FEE1}',
            ArabicLetter::Noon => '\u{FEE5}',
            ArabicLetter::Heh => '\u{FEE9}',
            ArabicLetter::Waw => '\u{FEED}',
            ArabicLetter::Yeh => '\u{FEF1}',
            ArabicLetter::AlefWithMaddaAbove => '\u{FE81}',
            ArabicLetter::TehMarbuta => '\u{FE93}',
            ArabicLetter::Peh => '\u{FB56}',
            ArabicLetter::Tcheh => '\u{FB7A}',
            ArabicLetter::Jeh => '\u{FB8A}',
            ArabicLetter::Gaf => '\u{FB92}',
            ArabicLetter::Keheh => '\u{FB8E}',
            ArabicLetter::FarsiYeh => '\u{FBFC}',
        }
    }

    /// Letters that never join to the letter that follows them.
    pub const fn is_non_connecting(self) -> bool {
        matches!(
            self,
            ArabicLetter::Hamza
                | ArabicLetter::Alef
                | ArabicLetter::AlefWithHamzaAbove
                | ArabicLetter::AlefWithHamzaBelow
                | ArabicLetter::AlefWithMaddaAbove
                | ArabicLetter::WawWithHamzaAbove
                | ArabicLetter::Dal
                | ArabicLetter::Thal
                | ArabicLetter::Reh
                | ArabicLetter::Zain
                | ArabicLetter::Jeh
                | ArabicLetter::Waw
        )
    }

    pub fn from_logical(ch: char) -> Option<ArabicLetter> {
        LETTERS.get(&ch).copied()
    }
}

lazy_static! {
    static ref LETTERS: FxHashMap<char, ArabicLetter> = ArabicLetter::ALL
        .iter()
        .map(|&letter| (letter.logical(), letter))
        .collect();
    static ref ISOLATED_FORMS: FxHashSet<char> = ArabicLetter::ALL
        .iter()
        .map(|letter| letter.isolated())
        .collect();
    static ref NON_CONNECTING: FxHashSet<char> = ArabicLetter::ALL
        .iter()
        .filter(|letter| letter.is_non_connecting())
        .map(|letter| letter.isolated())
        .collect();
}

/// Maps a logical letter to its isolated presentation form. Anything else is returned unchanged.
pub fn to_isolated_form(ch: char) -> char {
    match ArabicLetter::from_logical(ch) {
        Some(letter) => letter.isolated(),
        None => ch,
    }
}

/// True for Presentation Forms-B and for the isolated forms of the table's letters (the
/// Persian letters live in Presentation Forms-A).
pub fn is_isolated_form(ch: char) -> bool {
    PRESENTATION_FORMS_B.contains(&ch) || ISOLATED_FORMS.contains(&ch)
}

/// Checks the non-connecting set. `ch` must be in isolated form.
pub fn is_non_connecting(ch: char) -> bool {
    NON_CONNECTING.contains(&ch)
}

/// One of the four joining forms of a letter.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ContextualForm {
    Isolated,
    Initial,
    Medial,
    Final,
}

impl ContextualForm {
    /// Offset of this form from the isolated form, following the layout of Presentation
    /// Forms-B: isolated, final, initial, medial.
    pub const fn offset(self) -> u32 {
        match self {
            ContextualForm::Isolated => 0,
            ContextualForm::Final => 1,
            ContextualForm::Initial => 2,
            ContextualForm::Medial => 3,
        }
    }

    /// Applies this form to a code point in isolated form.
    pub fn apply(self, isolated: char) -> char {
        char::from_u32(u32::from(isolated) + self.offset()).unwrap_or(isolated)
    }
}
