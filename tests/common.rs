#![allow(dead_code)]

use arabic_fixer::ShapingOptions;

/// The code points of a string, for comparing against expected output.
pub fn code_points(s: &str) -> Vec<u32> {
    s.chars().map(u32::from).collect()
}

/// Every combination of shaping options.
pub fn all_options() -> Vec<ShapingOptions> {
    (0..=ShapingOptions::all().bits())
        .filter_map(ShapingOptions::from_bits)
        .collect()
}

/// The recognised tashkeel and the Shadda ligatures.
pub fn is_tashkeel(code: u32) -> bool {
    (0x064B..=0x0653).contains(&code) || (0xFC60..=0xFC62).contains(&code)
}
