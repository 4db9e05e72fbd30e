//! Range bar layout configuration.

use serde::Deserialize;

/// Separator characters between the label, bar and value columns.
pub const RESERVED_PADDING: usize = 2;

/// Widest permitted display line. Bounds the render buffers.
pub const MAX_TOTAL_WIDTH: usize = 72;

/// Column widths and glyphs shared by all range bars on a panel.
#[derive(Debug, Clone, Deserialize)]
pub struct BarLayout {
    /// Total width of a rendered line in characters.
    #[serde(default = "default_total_width")]
    pub total_width: usize,

    /// Label column width; longer labels are truncated.
    #[serde(default = "default_label_width")]
    pub label_width: usize,

    /// Value column width; overlong values are truncated.
    #[serde(default = "default_value_width")]
    pub value_width: usize,

    /// Glyph marking the current value's position on the bar.
    #[serde(default = "default_marker")]
    pub marker: char,

    /// Glyph filling the rest of the bar.
    #[serde(default = "default_fill")]
    pub fill: char,
}

fn default_total_width() -> usize {
    56
}

fn default_label_width() -> usize {
    12
}

fn default_value_width() -> usize {
    5
}

fn default_marker() -> char {
    '█'
}

fn default_fill() -> char {
    '-'
}

impl Default for BarLayout {
    fn default() -> Self {
        Self {
            total_width: default_total_width(),
            label_width: default_label_width(),
            value_width: default_value_width(),
            marker: default_marker(),
            fill: default_fill(),
        }
    }
}

impl BarLayout {
    /// Characters reserved outside the bar for a channel with the given
    /// unit length: label column, value column, unit suffix and separators.
    pub fn reserved(&self, unit_len: usize) -> usize {
        self.label_width + self.value_width + unit_len + RESERVED_PADDING
    }

    /// Bar cell count for a channel with the given unit length, if any
    /// cells remain after the reserved columns.
    pub fn bar_width(&self, unit_len: usize) -> Option<usize> {
        self.total_width.checked_sub(self.reserved(unit_len)).filter(|w| *w > 0)
    }
}
