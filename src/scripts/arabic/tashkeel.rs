//! Extraction and reinsertion of tashkeel (Arabic diacritic marks).
//!
//! Marks are lifted out of a line before shaping so that they don't interrupt the joining of
//! the letters they sit on, then spliced back into the shaped line at the same base character.

use log::debug;

/// The recognised tashkeel marks, plus the three Shadda ligatures they can be fused into.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TashkeelKind {
    Fathatan,
    Dammatan,
    Kasratan,
    Fatha,
    Damma,
    Kasra,
    Shadda,
    Sukun,
    MaddahAbove,
    ShaddaFatha,
    ShaddaDamma,
    ShaddaKasra,
}

impl TashkeelKind {
    /// Classifies a tashkeel character, including an already formed Shadda ligature.
    pub fn from_char(ch: char) -> Option<TashkeelKind> {
        match ch {
            '\u{064B}' => Some(TashkeelKind::Fathatan),
            '\u{064C}' => Some(TashkeelKind::Dammatan),
            '\u{064D}' => Some(TashkeelKind::Kasratan),
            '\u{064E}' => Some(TashkeelKind::Fatha),
            '\u{064F}' => Some(TashkeelKind::Damma),
            '\u{0650}' => Some(TashkeelKind::Kasra),
            '\u{0651}' => Some(TashkeelKind::Shadda),
            '\u{0652}' => Some(TashkeelKind::Sukun),
            '\u{0653}' => Some(TashkeelKind::MaddahAbove),
            '\u{FC60}' => Some(TashkeelKind::ShaddaFatha),
            '\u{FC61}' => Some(TashkeelKind::ShaddaDamma),
            '\u{FC62}' => Some(TashkeelKind::ShaddaKasra),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            TashkeelKind::Fathatan => '\u{064B}',
            TashkeelKind::Dammatan => '\u{064C}',
            TashkeelKind::Kasratan => '\u{064D}',
            TashkeelKind::Fatha => '\u{064E}',
            TashkeelKind::Damma => '\u{064F}',
            TashkeelKind::Kasra => '\u{0650}',
            TashkeelKind::Shadda => '\u{0651}',
            TashkeelKind::Sukun => '\u{0652}',
            TashkeelKind::MaddahAbove => '\u{0653}',
            TashkeelKind::ShaddaFatha => '\u{FC60}',
            TashkeelKind::ShaddaDamma => '\u{FC61}',
            TashkeelKind::ShaddaKasra => '\u{FC62}',
        }
    }

    /// The Shadda ligature formed by `self` followed by `next`, in either order.
    fn fuse(self, next: TashkeelKind) -> Option<TashkeelKind> {
        use TashkeelKind::*;

        match (self, next) {
            (Shadda, Fatha) | (Fatha, Shadda) => Some(ShaddaFatha),
            (Shadda, Damma) | (Damma, Shadda) => Some(ShaddaDamma),
            (Shadda, Kasra) | (Kasra, Shadda) => Some(ShaddaKasra),
            _ => None,
        }
    }
}

/// A mark lifted out of a line.
///
/// `position` counts the base (non-mark) characters that precede the mark, so a mark belongs
/// after the base character at `position - 1`. A position of 0 means the line started with
/// marks.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TashkeelMark {
    pub kind: TashkeelKind,
    pub position: usize,
}

impl TashkeelMark {
    pub fn new(kind: TashkeelKind, position: usize) -> Self {
        TashkeelMark { kind, position }
    }
}

/// Removes the tashkeel from `line`, returning the remaining characters and the marks in the
/// order they were found.
///
/// When `combine` is set, a Fatha, Damma or Kasra next to a Shadda (in either order) is fused
/// with the most recently recorded mark into a single Shadda ligature at that mark's position.
pub fn extract_marks(line: &[char], combine: bool) -> (Vec<char>, Vec<TashkeelMark>) {
    let mut stripped = Vec::with_capacity(line.len());
    let mut marks: Vec<TashkeelMark> = Vec::new();

    for &ch in line {
        let kind = match TashkeelKind::from_char(ch) {
            Some(kind) => kind,
            None => {
                stripped.push(ch);
                continue;
            }
        };

        if combine {
            if let Some(last) = marks.last_mut() {
                if let Some(fused) = last.kind.fuse(kind) {
                    debug!("fused {:?} and {:?} into {:?}", last.kind, kind, fused);
                    last.kind = fused;
                    continue;
                }
            }
        }

        marks.push(TashkeelMark::new(kind, stripped.len()));
    }

    (stripped, marks)
}

/// Splices `marks` back into a shaped line.
///
/// `shaped` must have one slot per base character of the line the marks were extracted from,
/// and `marks` must be in extraction order (sorted by position). Marks sharing a position are
/// inserted in the order given. Any mark left over, because it is out of order or its position
/// is past the end of `shaped`, is appended to the end of the line rather than lost.
pub fn reinsert_marks(shaped: &[Option<char>], marks: &[TashkeelMark]) -> Vec<Option<char>> {
    let mut line = Vec::with_capacity(shaped.len() + marks.len());
    let mut marks = marks.iter().peekable();

    while let Some(mark) = marks.next_if(|mark| mark.position == 0) {
        line.push(Some(mark.kind.to_char()));
    }
    for (i, &slot) in shaped.iter().enumerate() {
        line.push(slot);
        while let Some(mark) = marks.next_if(|mark| mark.position == i + 1) {
            line.push(Some(mark.kind.to_char()));
        }
    }
    line.extend(marks.map(|mark| Some(mark.kind.to_char())));

    line
}
