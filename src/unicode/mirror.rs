/// Returns the mirrored partner of a paired bracket, or the character unchanged.
///
/// Only the ASCII pairs `()`, `<>` and `[]` are mirrored.
pub fn mirror_bracket(ch: char) -> char {
    match ch {
        '(' => ')',
        ')' => '(',
        '<' => '>',
        '>' => '<',
        '[' => ']',
        ']' => '[',
        _ => ch,
    }
}
