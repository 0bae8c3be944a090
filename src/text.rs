//! Multi-line text and direction handling on top of [`shape_line`].

use itertools::Itertools;

use crate::options::ShapingOptions;
use crate::shaping::shape_line;
use crate::unicode::is_cased_letter;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TextDirection {
    LeftToRight,
    RightToLeft,
}

/// Shapes every line of `text` as right-to-left text.
///
/// Lines are separated by `\n`; a `\r` before the `\n` is kept in place.
pub fn fix_text(text: &str, options: ShapingOptions) -> String {
    fix_text_with_direction(text, TextDirection::RightToLeft, options)
}

/// Shapes every line of `text` in the given base direction.
///
/// With `LeftToRight` each line is split into words and only the words that look Arabic are
/// shaped, see [`fix_mixed_line`]. This is a heuristic and can misclassify words that mix
/// scripts.
pub fn fix_text_with_direction(
    text: &str,
    direction: TextDirection,
    options: ShapingOptions,
) -> String {
    text.split('\n')
        .map(|line| {
            let (line, cr) = match line.strip_suffix('\r') {
                Some(line) => (line, "\r"),
                None => (line, ""),
            };
            let fixed = match direction {
                TextDirection::RightToLeft => shape_line(line, options),
                TextDirection::LeftToRight => fix_mixed_line(line, options),
            };
            fixed + cr
        })
        .join("\n")
}

/// Shapes the Arabic words of a left-to-right line.
///
/// Consecutive Arabic words are gathered and shaped together. Latin words are copied through
/// and each is followed by a single space. Runs of whitespace collapse to one space.
pub fn fix_mixed_line(line: &str, options: ShapingOptions) -> String {
    let mut fixed = String::with_capacity(line.len());
    let mut arabic = String::new();

    for word in line.split_whitespace() {
        if is_latin_word(word) {
            fixed.push_str(&shape_line(&arabic, options));
            fixed.push_str(word);
            fixed.push(' ');
            arabic.clear();
        } else {
            arabic.push_str(word);
            arabic.push(' ');
        }
    }
    if !arabic.is_empty() {
        fixed.push_str(&shape_line(&arabic, options));
    }

    fixed
}

/// A word is Latin if its middle character is a cased letter.
fn is_latin_word(word: &str) -> bool {
    let middle = word.chars().count() / 2;
    word.chars().nth(middle).map_or(false, is_cased_letter)
}
