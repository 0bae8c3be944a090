//! Error types

use std::fmt;

/// Error returned from the code point and UTF-16 entry points
///
/// Shaping itself never fails. These errors only arise when decoding input that is not a
/// sequence of Unicode scalar values.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum ShapingError {
    /// A value that is not a Unicode scalar value (a surrogate or a value above U+10FFFF).
    InvalidCodePoint(u32),
    /// A UTF-16 surrogate half without its partner.
    UnpairedSurrogate(u16),
}

impl From<std::char::DecodeUtf16Error> for ShapingError {
    fn from(error: std::char::DecodeUtf16Error) -> Self {
        ShapingError::UnpairedSurrogate(error.unpaired_surrogate())
    }
}

impl fmt::Display for ShapingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapingError::InvalidCodePoint(code) => {
                write!(f, "invalid code point: U+{:04X}", code)
            }
            ShapingError::UnpairedSurrogate(unit) => {
                write!(f, "unpaired surrogate: 0x{:04X}", unit)
            }
        }
    }
}

impl std::error::Error for ShapingError {}
