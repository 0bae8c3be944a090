//! Line shaping entry points.
//!
//! A line goes through four stages, each producing a new buffer:
//!
//! 1. tashkeel extraction ([`extract_marks`]),
//! 2. contextual shaping ([`arabic::shape`]),
//! 3. tashkeel reinsertion ([`reinsert_marks`]), only when diacritics are shown,
//! 4. visual reordering ([`compose_visual_order`]).

use log::{trace, warn};

use crate::error::ShapingError;
use crate::options::ShapingOptions;
use crate::scripts::arabic;
use crate::scripts::arabic::tashkeel::{extract_marks, reinsert_marks};
use crate::visual::compose_visual_order;

/// Shapes and reorders one logical line.
///
/// `line` should not contain line breaks; they are treated as whitespace rather than splitting
/// the line. Use [`fix_text`](crate::fix_text) for multi-line text.
pub fn shape_chars(line: &[char], options: ShapingOptions) -> Vec<char> {
    trace!("shaping line of {} chars with {:?}", line.len(), options);

    let (stripped, marks) = extract_marks(line, options.combine_diacritic_ligatures());
    let shaped = arabic::shape(&stripped, options);
    let full = if options.show_diacritics() {
        reinsert_marks(&shaped, &marks)
    } else {
        shaped
    };

    compose_visual_order(&full)
}

/// Shapes and reorders one logical line of a string.
pub fn shape_line(line: &str, options: ShapingOptions) -> String {
    let chars = line.chars().collect::<Vec<_>>();
    shape_chars(&chars, options).into_iter().collect()
}

/// Shapes a line given as code points.
///
/// Fails if any value is not a Unicode scalar value.
pub fn shape_code_points(line: &[u32], options: ShapingOptions) -> Result<Vec<u32>, ShapingError> {
    let chars = line
        .iter()
        .map(|&code| char::from_u32(code).ok_or(ShapingError::InvalidCodePoint(code)))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|err| {
            warn!("rejecting line: {}", err);
            err
        })?;

    Ok(shape_chars(&chars, options)
        .into_iter()
        .map(u32::from)
        .collect())
}

/// Shapes a line given as UTF-16 code units.
///
/// Fails on an unpaired surrogate. Surrogate pairs are decoded and re-encoded, so characters
/// outside the Basic Multilingual Plane keep their pair order.
pub fn shape_utf16(line: &[u16], options: ShapingOptions) -> Result<Vec<u16>, ShapingError> {
    let chars = char::decode_utf16(line.iter().copied())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|err| {
            let err = ShapingError::from(err);
            warn!("rejecting line: {}", err);
            err
        })?;

    let mut units = Vec::with_capacity(line.len());
    let mut buf = [0; 2];
    for ch in shape_chars(&chars, options) {
        units.extend_from_slice(ch.encode_utf16(&mut buf));
    }

    Ok(units)
}
