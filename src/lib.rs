#![warn(rust_2018_idioms)]

//! Shaping of Arabic and Persian text for renderers that draw code points left to right
//! without bidirectional or Arabic shaping support.
//!
//! Text in logical order is converted into presentation-form code points (contextual joining
//! forms and Lam-Alef ligatures) laid out in visual order:
//!
//! ```
//! use arabic_fixer::{shape_line, ShapingOptions};
//!
//! // Lam, Alef
//! let shaped = shape_line("\u{0644}\u{0627}", ShapingOptions::empty());
//! assert_eq!(shaped, "\u{FEF9}");
//! ```

pub mod error;
pub mod options;
pub mod scripts;
pub mod shaping;
pub mod text;
pub mod unicode;
pub mod visual;

pub use crate::error::ShapingError;
pub use crate::options::ShapingOptions;
pub use crate::shaping::{shape_chars, shape_code_points, shape_line, shape_utf16};
pub use crate::text::{fix_text, fix_text_with_direction, TextDirection};
