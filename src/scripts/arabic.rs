//! Contextual shaping of Arabic and Persian letters into presentation forms.
//!
//! Shaping works on a line that has already had its tashkeel removed (see [`tashkeel`]). Each
//! letter is first mapped to its isolated presentation form, then a single left-to-right pass
//! picks the joining form of every letter by looking at its immediate neighbours:
//!
//! 1. Lam followed by one of the Alef variants becomes a Lam-Alef ligature. The slot of the Alef
//!    is consumed and left empty.
//! 2. Letters take the medial, final or initial form, checked in that order, or stay isolated.
//! 3. ASCII digits are optionally replaced with Arabic-Indic digits.
//!
//! The result has exactly one slot per input character so mark positions recorded before
//! shaping remain valid.

pub mod table;
pub mod tashkeel;

use log::debug;

use crate::options::ShapingOptions;
use crate::unicode::{is_cased_letter, is_number, is_punctuation, is_symbol, is_whitespace};
use table::{
    is_isolated_form, is_non_connecting, to_isolated_form, ArabicLetter, ContextualForm,
    ISOLATED_HAMZA, ISOLATED_LAM,
};

/// Offset from an ASCII digit to the matching ARABIC-INDIC DIGIT.
const ARABIC_INDIC_DIGIT_OFFSET: u32 = 0x0630;

/// Shapes a line without tashkeel.
///
/// The returned buffer has one slot per character of `stripped`. A `None` slot was consumed by
/// a ligature formed with the character before it.
pub fn shape(stripped: &[char], options: ShapingOptions) -> Vec<Option<char>> {
    let letters = stripped
        .iter()
        .map(|&ch| to_isolated_form(ch))
        .collect::<Vec<_>>();
    let mut shaped = letters.iter().copied().map(Some).collect::<Vec<_>>();

    let mut i = 0;
    while i < letters.len() {
        if let Some(ligature) = lam_alef_ligature(&letters, i) {
            debug!("lam-alef ligature U+{:04X} at {}", u32::from(ligature), i);
            shaped[i] = Some(ligature);
            shaped[i + 1] = None;
            i += 2;
            continue;
        }

        let ch = letters[i];
        shaped[i] = Some(contextual_form(&letters, i).apply(ch));

        if options.alternate_digits() {
            if let Some(digit) = alternate_digit(ch) {
                shaped[i] = Some(digit);
            }
        }

        i += 1;
    }

    shaped
}

/// Picks the joining form of the letter at `index` of a buffer of isolated forms.
///
/// Medial takes precedence over final, and final over initial. Characters that aren't Arabic
/// letters are always reported as isolated (they take no offset).
pub fn contextual_form(letters: &[char], index: usize) -> ContextualForm {
    match letters.get(index) {
        Some(&ch) if !is_ignored(ch) => {
            if is_middle_letter(letters, index) {
                ContextualForm::Medial
            } else if is_finishing_letter(letters, index) {
                ContextualForm::Final
            } else if is_leading_letter(letters, index) {
                ContextualForm::Initial
            } else {
                ContextualForm::Isolated
            }
        }
        _ => ContextualForm::Isolated,
    }
}

/// Characters that never take a contextual form: punctuation, numbers, cased letters, symbols
/// and anything that isn't an isolated Arabic form.
fn is_ignored(ch: char) -> bool {
    is_punctuation(ch)
        || is_number(ch)
        || is_cased_letter(ch)
        || is_symbol(ch)
        || !is_isolated_form(ch)
}

/// Can the letter at `index` start a joined sequence?
pub fn is_leading_letter(letters: &[char], index: usize) -> bool {
    let ch = match letters.get(index) {
        Some(&ch) => ch,
        None => return false,
    };

    let previous_breaks = match previous(letters, index) {
        Some(prev) => {
            is_whitespace(prev)
                || is_symbol(prev)
                || is_punctuation(prev)
                || is_non_connecting(prev)
        }
        None => true,
    };
    let can_lead = !is_whitespace(ch) && !is_non_connecting(ch);
    let next_joins = match letters.get(index + 1) {
        Some(&next) => {
            !is_whitespace(next)
                && !is_punctuation(next)
                && !is_number(next)
                && !is_symbol(next)
                && !is_cased_letter(next)
                && next != ISOLATED_HAMZA
        }
        None => false,
    };

    previous_breaks && can_lead && next_joins
}

/// Can the letter at `index` end a joined sequence?
pub fn is_finishing_letter(letters: &[char], index: usize) -> bool {
    match letters.get(index) {
        Some(&ch) => {
            previous_joins(letters, index) && !is_whitespace(ch) && ch != ISOLATED_HAMZA
        }
        None => false,
    }
}

/// Can the letter at `index` join on both sides?
pub fn is_middle_letter(letters: &[char], index: usize) -> bool {
    let ch = match letters.get(index) {
        Some(&ch) => ch,
        None => return false,
    };

    let next_joins = match letters.get(index + 1) {
        Some(&next) => {
            !is_whitespace(next)
                && !is_number(next)
                && !is_symbol(next)
                && !is_punctuation(next)
                && next != ISOLATED_HAMZA
        }
        None => false,
    };

    !is_non_connecting(ch) && previous_joins(letters, index) && next_joins
}

/// A previous character exists and would join to the following letter.
fn previous_joins(letters: &[char], index: usize) -> bool {
    match previous(letters, index) {
        Some(prev) => {
            !is_whitespace(prev)
                && !is_punctuation(prev)
                && !is_symbol(prev)
                && !is_non_connecting(prev)
        }
        None => false,
    }
}

fn previous(letters: &[char], index: usize) -> Option<char> {
    index.checked_sub(1).and_then(|i| letters.get(i).copied())
}

fn lam_alef_ligature(letters: &[char], index: usize) -> Option<char> {
    const ALEF: char = ArabicLetter::Alef.isolated();
    const ALEF_WITH_HAMZA_ABOVE: char = ArabicLetter::AlefWithHamzaAbove.isolated();
    const ALEF_WITH_HAMZA_BELOW: char = ArabicLetter::AlefWithHamzaBelow.isolated();
    const ALEF_WITH_MADDA_ABOVE: char = ArabicLetter::AlefWithMaddaAbove.isolated();

    if letters.get(index) != Some(&ISOLATED_LAM) {
        return None;
    }

    match letters.get(index + 1)? {
        &ALEF_WITH_MADDA_ABOVE => Some('\u{FEF3}'),
        &ALEF_WITH_HAMZA_ABOVE => Some('\u{FEF5}'),
        &ALEF_WITH_HAMZA_BELOW => Some('\u{FEF7}'),
        &ALEF => Some('\u{FEF9}'),
        _ => None,
    }
}

fn alternate_digit(ch: char) -> Option<char> {
    if ch.is_ascii_digit() {
        char::from_u32(u32::from(ch) + ARABIC_INDIC_DIGIT_OFFSET)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALEF: char = '\u{0627}';
    const BEH: char = '\u{0628}';
    const DAL: char = '\u{062F}';
    const HAMZA: char = '\u{0621}';
    const LAM: char = '\u{0644}';
    const MEEM: char = '\u{0645}';

    fn isolated(cs: &[char]) -> Vec<char> {
        cs.iter().map(|&ch| to_isolated_form(ch)).collect()
    }

    #[test]
    fn single_letter_is_isolated() {
        assert_eq!(shape(&[BEH], ShapingOptions::empty()), vec![Some('\u{FE8F}')]);
        assert_eq!(
            shape(&[' ', BEH, ' '], ShapingOptions::empty()),
            vec![Some(' '), Some('\u{FE8F}'), Some(' ')]
        );
    }

    #[test]
    fn three_joining_letters() {
        // Beh Meem Beh: initial, medial, final
        assert_eq!(
            shape(&[BEH, MEEM, BEH], ShapingOptions::empty()),
            vec![Some('\u{FE91}'), Some('\u{FEE4}'), Some('\u{FE90}')]
        );
    }

    #[test]
    fn non_connecting_letter_breaks_joining() {
        // Beh Dal Beh: the Dal joins to the Beh before it but not the one after
        assert_eq!(
            shape(&[BEH, DAL, BEH], ShapingOptions::empty()),
            vec![Some('\u{FE91}'), Some('\u{FEAA}'), Some('\u{FE8F}')]
        );
    }

    #[test]
    fn hamza_never_joins() {
        let letters = isolated(&[BEH, HAMZA, BEH]);
        assert!(!is_middle_letter(&letters, 1));
        assert!(!is_finishing_letter(&letters, 1));
        assert!(!is_leading_letter(&letters, 1));
        assert_eq!(contextual_form(&letters, 1), ContextualForm::Isolated);
        // A Hamza following a letter keeps it from leading
        assert!(!is_leading_letter(&letters, 0));
    }

    #[test]
    fn middle_takes_precedence() {
        let letters = isolated(&[BEH, MEEM, BEH]);
        assert!(is_middle_letter(&letters, 1));
        assert!(is_finishing_letter(&letters, 1));
        assert_eq!(contextual_form(&letters, 1), ContextualForm::Medial);
    }

    #[test]
    fn finishing_takes_precedence_over_leading() {
        // A digit before a letter counts as joining
        let letters = isolated(&['5', BEH, MEEM]);
        assert!(is_middle_letter(&letters, 1));
        let letters = isolated(&['5', BEH]);
        assert!(is_finishing_letter(&letters, 1));
        assert!(!is_leading_letter(&letters, 1));
        assert_eq!(contextual_form(&letters, 1), ContextualForm::Final);
    }

    #[test]
    fn predicates_out_of_bounds() {
        let letters = isolated(&[BEH]);
        assert!(!is_leading_letter(&letters, 1));
        assert!(!is_finishing_letter(&letters, 1));
        assert!(!is_middle_letter(&letters, 1));
        assert_eq!(contextual_form(&letters, 5), ContextualForm::Isolated);
        assert!(!is_leading_letter(&[], 0));
    }

    #[test]
    fn lam_alef_ligatures() {
        for (alef, ligature) in [
            ('\u{0622}', '\u{FEF3}'),
            ('\u{0623}', '\u{FEF5}'),
            ('\u{0625}', '\u{FEF7}'),
            (ALEF, '\u{FEF9}'),
        ] {
            assert_eq!(
                shape(&[LAM, alef], ShapingOptions::empty()),
                vec![Some(ligature), None]
            );
        }
    }

    #[test]
    fn letter_after_ligature_follows_alef() {
        // The Alef doesn't join forward so the Beh after the ligature is isolated
        assert_eq!(
            shape(&[LAM, ALEF, BEH], ShapingOptions::empty()),
            vec![Some('\u{FEF9}'), None, Some('\u{FE8F}')]
        );
    }

    #[test]
    fn lam_at_end_of_line() {
        assert_eq!(
            shape(&[BEH, LAM], ShapingOptions::empty()),
            vec![Some('\u{FE91}'), Some('\u{FEDE}')]
        );
    }

    #[test]
    fn digits() {
        assert_eq!(
            shape(&['5', 'a'], ShapingOptions::ALTERNATE_DIGITS),
            vec![Some('\u{0665}'), Some('a')]
        );
        assert_eq!(
            shape(&['5', 'a'], ShapingOptions::empty()),
            vec![Some('5'), Some('a')]
        );
    }

    #[test]
    fn latin_is_untouched() {
        assert_eq!(
            shape(&['a', 'b', '!'], ShapingOptions::default()),
            vec![Some('a'), Some('b'), Some('!')]
        );
    }

    #[test]
    fn persian_letters() {
        // Peh Gaf: initial, final
        assert_eq!(
            shape(&['\u{067E}', '\u{06AF}'], ShapingOptions::empty()),
            vec![Some('\u{FB58}'), Some('\u{FB93}')]
        );
    }
}
