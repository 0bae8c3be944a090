//! Per-call shaping configuration.

use bitflags::bitflags;

bitflags! {
    /// Options controlling a single shaping call.
    ///
    /// Options are passed by value into every call, so concurrent calls with different options
    /// never observe each other.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ShapingOptions: u8 {
        /// Keep tashkeel (diacritic marks) in the output. When unset all marks are dropped.
        const SHOW_DIACRITICS             = 0b001;
        /// Fuse Shadda with an adjacent Fatha, Damma or Kasra into a single ligature mark.
        const COMBINE_DIACRITIC_LIGATURES = 0b010;
        /// Replace ASCII digits with Arabic-Indic digits (U+0660..U+0669).
        const ALTERNATE_DIGITS            = 0b100;
    }
}

impl Default for ShapingOptions {
    /// Diacritics hidden, Shadda ligatures combined, Arabic-Indic digits.
    fn default() -> Self {
        ShapingOptions::COMBINE_DIACRITIC_LIGATURES | ShapingOptions::ALTERNATE_DIGITS
    }
}

impl ShapingOptions {
    /// Sets or clears [`SHOW_DIACRITICS`](Self::SHOW_DIACRITICS).
    pub fn with_diacritics(self, show: bool) -> Self {
        self.with(ShapingOptions::SHOW_DIACRITICS, show)
    }

    /// Sets or clears [`COMBINE_DIACRITIC_LIGATURES`](Self::COMBINE_DIACRITIC_LIGATURES).
    pub fn with_combined_diacritics(self, combine: bool) -> Self {
        self.with(ShapingOptions::COMBINE_DIACRITIC_LIGATURES, combine)
    }

    /// Sets or clears [`ALTERNATE_DIGITS`](Self::ALTERNATE_DIGITS).
    pub fn with_alternate_digits(self, alternate: bool) -> Self {
        self.with(ShapingOptions::ALTERNATE_DIGITS, alternate)
    }

    /// Whether tashkeel is kept in the output.
    pub fn show_diacritics(self) -> bool {
        self.contains(ShapingOptions::SHOW_DIACRITICS)
    }

    /// Whether Shadda is fused with an adjacent Fatha, Damma or Kasra.
    pub fn combine_diacritic_ligatures(self) -> bool {
        self.contains(ShapingOptions::COMBINE_DIACRITIC_LIGATURES)
    }

    /// Whether ASCII digits are replaced with Arabic-Indic digits.
    pub fn alternate_digits(self) -> bool {
        self.contains(ShapingOptions::ALTERNATE_DIGITS)
    }

    fn with(mut self, flag: ShapingOptions, value: bool) -> Self {
        self.set(flag, value);
        self
    }
}
