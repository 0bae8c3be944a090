mod common;

use arabic_fixer::{fix_text, fix_text_with_direction, ShapingOptions, TextDirection};
use common::code_points;

#[test]
fn multi_line_text() {
    let text = "\u{0645}\u{0631}\u{062D}\u{0628}\u{0627}\r\nhello 42";
    assert_eq!(
        fix_text(text, ShapingOptions::default()),
        "\u{FE8E}\u{FE92}\u{FEA3}\u{FEAE}\u{FEE3}\r\nhello \u{0664}\u{0662}"
    );
}

#[test]
fn empty_lines_are_kept() {
    assert_eq!(fix_text("\n\n", ShapingOptions::default()), "\n\n");
}

#[test]
fn left_to_right_shapes_arabic_words_only() {
    let fixed = fix_text_with_direction(
        "see \u{0628}\u{0628} here",
        TextDirection::LeftToRight,
        ShapingOptions::empty(),
    );
    assert_eq!(
        code_points(&fixed),
        code_points("see  \u{FE90}\u{FE91}here ")
    );
}
