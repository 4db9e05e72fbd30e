//! Range bar geometry and rendering.
//!
//! A range bar shows where the latest value of a bounded channel sits inside
//! its configured range, plus the numeric value itself. The progress ratio is
//! deliberately not clamped: a value outside the configured bounds yields a
//! ratio below 0 or above 1, which the severity coloring surfaces instead of
//! hiding. Only the marker cell is clamped, so the marker can never index
//! outside the bar.

use core::fmt::Write;

use heapless::String;

use crate::config::{BarLayout, ChannelConfig};
use crate::error::{ConfigError, Result};

use super::color::Severity;
use super::RenderedLine;

/// Scratch buffer for the bar glyph run (glyphs may be multi-byte).
const BAR_BUF: usize = 192;

/// Scratch buffer for the formatted value and unit.
const VALUE_BUF: usize = 64;

/// Renderer for one bounded numeric channel.
#[derive(Debug, Clone)]
pub struct RangeBar {
    channel: ChannelConfig,
    layout: BarLayout,
    /// Cell count, fixed at construction from layout minus reserved columns.
    bar_width: usize,
    /// Latest sample value.
    value: f32,
}

impl RangeBar {
    /// Create a range bar for a channel under a shared layout.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidRange`] when `max_value <= min_value`
    /// and [`ConfigError::BarTooNarrow`] when the layout leaves no bar cells
    /// for this channel's unit. Both are rejected here, at construction, so
    /// render time never divides by a zero span.
    pub fn new(channel: ChannelConfig, layout: BarLayout) -> Result<Self> {
        if !channel.is_valid() {
            return Err(ConfigError::InvalidRange {
                min: channel.min_value,
                max: channel.max_value,
            }
            .into());
        }

        let bar_width = layout.bar_width(channel.unit.len()).ok_or(ConfigError::BarTooNarrow {
            total_width: layout.total_width,
            reserved: layout.reserved(channel.unit.len()),
        })?;

        let value = channel.min_value;
        Ok(Self {
            channel,
            layout,
            bar_width,
            value,
        })
    }

    /// Store the latest sample value.
    pub fn update(&mut self, value: f32) {
        self.value = value;
    }

    /// Latest sample value.
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Channel configuration this bar renders.
    pub fn channel(&self) -> &ChannelConfig {
        &self.channel
    }

    /// Number of bar cells.
    pub fn bar_width(&self) -> usize {
        self.bar_width
    }

    /// Normalized position of the value within the range. Not clamped:
    /// out-of-range values yield ratios below 0 or above 1.
    pub fn ratio(&self) -> f32 {
        (self.value - self.channel.min_value) / self.channel.span()
    }

    /// Severity of the current ratio, shared by the bar and value coloring.
    pub fn severity(&self) -> Severity {
        Severity::for_ratio(self.ratio())
    }

    /// Bar cell holding the marker, always within `[0, bar_width - 1]`.
    pub fn marker_cell(&self) -> usize {
        let cell = libm::floorf(self.bar_width as f32 * self.ratio()) as i32;
        cell.clamp(0, (self.bar_width - 1) as i32) as usize
    }

    /// The uncolored bar glyph run: fill up to the marker, the marker, fill
    /// for the remainder.
    pub fn bar_text(&self) -> String<BAR_BUF> {
        let mut bar = String::new();
        let marker = self.marker_cell();
        // Render failures only mean buffer exhaustion on a pathological
        // layout; a truncated bar must not take down the refresh loop.
        for cell in 0..self.bar_width {
            let glyph = if cell == marker {
                self.layout.marker
            } else {
                self.layout.fill
            };
            let _ = bar.push(glyph);
        }
        bar
    }

    /// The formatted value with unit suffix: fixed decimals, right-aligned
    /// in the value column, truncated when overlong.
    pub fn value_text(&self) -> String<VALUE_BUF> {
        let mut number: String<VALUE_BUF> = String::new();
        let _ = write!(
            number,
            "{:>width$.digits$}",
            self.value,
            width = self.layout.value_width,
            digits = self.channel.digits as usize,
        );
        number.truncate(self.layout.value_width);

        let mut text: String<VALUE_BUF> = String::new();
        let _ = write!(text, "{}{}", number, self.channel.unit);
        text
    }

    /// Render the full display line: padded label, colored bar, colored
    /// value. Bar and value carry the same severity color.
    pub fn render(&self) -> RenderedLine {
        // Pad or truncate the label to its column, by characters so a
        // multi-byte label cannot split mid-glyph.
        let mut label: String<VALUE_BUF> = String::new();
        for c in self.channel.label.chars().take(self.layout.label_width) {
            let _ = label.push(c);
        }
        while label.chars().count() < self.layout.label_width {
            let _ = label.push(' ');
        }

        let color = self.severity().color();
        let mut line = RenderedLine::new();
        let _ = write!(line, "{} ", label);
        let _ = color.paint(&mut line, self.bar_text().as_str());
        let _ = line.push(' ');
        let _ = color.paint(&mut line, self.value_text().as_str());
        line
    }
}
