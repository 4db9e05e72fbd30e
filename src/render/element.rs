//! Display element variants.
//!
//! The panel drives a small closed set of element kinds rather than an open
//! trait hierarchy: every element consumes one upstream field and renders one
//! line, but each kind owns different state. The enum keeps dispatch explicit
//! and lets each variant expose exactly the timing hooks it needs.

use crate::alert::AlertCycler;
use crate::error::Result;

use super::color::Severity;
use super::range::RangeBar;
use super::status::StatusLine;
use super::RenderedLine;

/// Rotating alert line: a fixed prefix followed by the label of one active
/// alert at a time.
#[derive(Debug, Clone)]
pub struct AlertLine {
    prefix: &'static str,
    cycler: AlertCycler,
}

impl AlertLine {
    /// Create an alert line with the given static prefix.
    pub fn new(prefix: &'static str) -> Self {
        Self {
            prefix,
            cycler: AlertCycler::new(),
        }
    }

    /// Feed the latest alert mask. See [`AlertCycler::update`].
    pub fn update(&mut self, code: u32, now_ms: u64) {
        self.cycler.update(code, now_ms);
    }

    /// Drive the rotation timer. Returns `true` when the visible text changed.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        self.cycler.poll(now_ms)
    }

    /// Deadline of the next rotation step, `None` when no alert is active.
    pub fn next_deadline(&self) -> Option<u64> {
        self.cycler.next_deadline()
    }

    /// Access the underlying cycler.
    pub fn cycler(&self) -> &AlertCycler {
        &self.cycler
    }

    /// The current rendered line. Active alerts are shown in the critical
    /// color; with no active alert only the prefix remains.
    pub fn render(&self) -> RenderedLine {
        let mut line = RenderedLine::new();
        let _ = line.push_str(self.prefix);
        let visible = self.cycler.visible_text();
        if !visible.is_empty() {
            let _ = Severity::Critical.color().paint(&mut line, visible);
        }
        line
    }
}

/// One display element of the panel.
///
/// Each variant exclusively owns its render state; nothing is shared across
/// elements.
#[derive(Debug, Clone)]
pub enum Element {
    /// Bounded numeric channel rendered as a range bar.
    Range(RangeBar),
    /// Motor state ordinal rendered as colored status text.
    Status(StatusLine),
    /// Alert bitmask rendered as a rotating alert label.
    Alert(AlertLine),
}

impl Element {
    /// Feed the latest decoded value of this element's field.
    ///
    /// Range and alert updates cannot fail; a status update fails on an
    /// unknown ordinal, leaving the element's displayed text unchanged.
    pub fn update(&mut self, value: f64, now_ms: u64) -> Result<()> {
        match self {
            Element::Range(bar) => {
                bar.update(value as f32);
                Ok(())
            }
            Element::Status(status) => status.update(value as i64),
            Element::Alert(alert) => {
                alert.update(value as u32, now_ms);
                Ok(())
            }
        }
    }

    /// The current rendered line.
    pub fn render(&self) -> RenderedLine {
        match self {
            Element::Range(bar) => bar.render(),
            Element::Status(status) => status.render(),
            Element::Alert(alert) => alert.render(),
        }
    }

    /// Drive this element's timer, if it has one. Returns `true` when the
    /// rendered text changed.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        match self {
            Element::Alert(alert) => alert.poll(now_ms),
            _ => false,
        }
    }

    /// Deadline of this element's next self-scheduled change, if any.
    pub fn next_deadline(&self) -> Option<u64> {
        match self {
            Element::Alert(alert) => alert.next_deadline(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alert_line_idle_renders_prefix_only() {
        let line = AlertLine::new("Faults: ");
        assert_eq!(line.render().as_str(), "Faults: ");
    }

    #[test]
    fn test_alert_line_shows_first_alert_immediately() {
        let mut line = AlertLine::new("Faults: ");
        line.update(0b000101, 0);
        assert_eq!(line.render().as_str(), "Faults: \x1b[31mALERT\x1b[0m");
    }

    #[test]
    fn test_alert_line_clears_on_zero() {
        let mut line = AlertLine::new("Faults: ");
        line.update(0b000101, 0);
        line.update(0, 100);
        assert_eq!(line.render().as_str(), "Faults: ");
        assert_eq!(line.next_deadline(), None);
    }

    #[test]
    fn test_status_element_error_keeps_display() {
        let mut element = Element::Status(StatusLine::new("Motor Status: "));
        element.update(3.0, 0).unwrap();
        let before = element.render();
        assert!(element.update(7.0, 0).is_err());
        assert_eq!(element.render(), before);
    }

    #[test]
    fn test_non_alert_elements_have_no_deadline() {
        let element = Element::Status(StatusLine::new("Motor Status: "));
        assert_eq!(element.next_deadline(), None);
    }
}
