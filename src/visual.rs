//! Reordering of a shaped line into visual (left-to-right display) order.
//!
//! The line is scanned from its last character to its first. Arabic letters and the whitespace
//! between them are emitted as they are met, which reverses them. Latin letters, digits,
//! symbols and punctuation are collected into a forward run that is emitted in reading order
//! once the next Arabic character (or the start of the line) is reached.

use tinyvec::TinyVec;

use crate::unicode::mirror::mirror_bracket;
use crate::unicode::{is_cased_letter, is_number, is_punctuation, is_supplementary, is_symbol};

type ForwardRun = TinyVec<[char; 32]>;

/// Produces the visual order of a shaped line.
///
/// `None` slots (consumed by ligatures) are dropped. Paired brackets are mirrored when they
/// sit in a run of punctuation or inside a forward run.
///
/// A punctuation character with punctuation on either side is written out as soon as it is
/// met, without flushing the forward run collected after it. Inside otherwise Latin text this
/// moves it ahead of the run: `wow!?` comes out as `!wow?`. Lines that are entirely
/// left-to-right should not be passed through this function.
pub fn compose_visual_order(line: &[Option<char>]) -> Vec<char> {
    let mut output = Vec::with_capacity(line.len());
    let mut forward_run = ForwardRun::new();

    for i in (0..line.len()).rev() {
        let ch = match line[i] {
            Some(ch) => ch,
            None => {
                flush(&mut forward_run, &mut output);
                continue;
            }
        };
        let interior = i > 0 && i + 1 < line.len();

        if is_punctuation(ch)
            && interior
            && (matches_at(line, i - 1, is_punctuation) || matches_at(line, i + 1, is_punctuation))
        {
            output.push(mirror_bracket(ch));
        } else if ch == ' '
            && interior
            && matches_at(line, i - 1, is_latin_or_number)
            && matches_at(line, i + 1, is_latin_or_number)
        {
            forward_run.push(ch);
        } else if is_number(ch) || is_cased_letter(ch) || is_symbol(ch) || is_punctuation(ch) {
            forward_run.push(mirror_bracket(ch));
        } else if is_supplementary(ch) {
            forward_run.push(ch);
        } else {
            flush(&mut forward_run, &mut output);
            output.push(ch);
        }
    }
    flush(&mut forward_run, &mut output);

    output
}

fn is_latin_or_number(ch: char) -> bool {
    is_cased_letter(ch) || is_number(ch)
}

fn matches_at(line: &[Option<char>], index: usize, pred: impl Fn(char) -> bool) -> bool {
    matches!(line.get(index), Some(&Some(ch)) if pred(ch))
}

/// Emits the pending forward run in reading order. It was collected back to front.
fn flush(forward_run: &mut ForwardRun, output: &mut Vec<char>) {
    output.extend(forward_run.iter().rev());
    forward_run.clear();
}
