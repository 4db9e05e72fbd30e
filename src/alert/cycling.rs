//! Alert rotation state machine.
//!
//! A single display line can only show one alert at a time, so the cycler
//! rotates the visible label through every active alert on a fixed cadence.
//!
//! The rotation wait is an explicit deadline owned by the cycler and driven
//! by the caller's event loop: arm it through [`AlertCycler::update`], read
//! it back through [`AlertCycler::next_deadline`], and call
//! [`AlertCycler::poll`] when it expires. Clearing the alert code disarms the
//! deadline, and liveness is re-checked at poll time, so a cancelled rotation
//! can never fire a stale tick. Time is a caller-supplied monotonic
//! millisecond counter; the cycler never reads a clock itself.

use super::register::{alert_labels, count};

/// Delay between rotation steps in milliseconds.
pub const ROTATION_INTERVAL_MS: u64 = 3000;

/// Rotates the visible alert label through the active alerts of a mask.
///
/// Two states: Idle (mask is zero, nothing shown) and Cycling (deadline
/// armed, one active alert label visible). The cycler is single-writer by
/// construction; `update` and `poll` take `&mut self` and therefore can
/// never interleave for the same element.
#[derive(Debug, Clone)]
pub struct AlertCycler {
    /// Latest alert mask from telemetry.
    code: u32,
    /// Rotation position within the active alert set.
    index: usize,
    /// Label currently shown, empty when idle.
    visible: &'static str,
    /// Next rotation step, armed only while cycling.
    deadline_ms: Option<u64>,
}

impl Default for AlertCycler {
    fn default() -> Self {
        Self::new()
    }
}

impl AlertCycler {
    /// Create an idle cycler.
    pub const fn new() -> Self {
        Self {
            code: 0,
            index: 0,
            visible: "",
            deadline_ms: None,
        }
    }

    /// Feed the latest alert mask from a telemetry sample.
    ///
    /// Never waits. A zero mask stops the rotation: the visible text is
    /// cleared and the armed deadline disarmed before this call returns, so
    /// no further rotation step can fire. A non-zero mask starts the
    /// rotation if idle, showing the lowest active bit's label immediately;
    /// if already cycling, the new mask takes effect at the next step and
    /// the currently visible label is left alone.
    ///
    /// A change of mask resets the rotation position to the first active
    /// alert, so the position can never be misaligned against a
    /// differently-sized alert set.
    pub fn update(&mut self, code: u32, now_ms: u64) {
        if code == 0 {
            self.code = 0;
            self.index = 0;
            self.visible = "";
            self.deadline_ms = None;
            return;
        }

        if code != self.code {
            self.code = code;
            self.index = 0;
        }

        if self.deadline_ms.is_none() {
            // Idle -> Cycling: first label is shown without delay.
            self.step(now_ms);
        }
    }

    /// Fire the rotation step if the armed deadline has passed.
    ///
    /// Returns `true` when the visible text changed. Callers wake at
    /// [`AlertCycler::next_deadline`] and invoke this; calling early or when
    /// idle is a no-op.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        match self.deadline_ms {
            Some(deadline) if now_ms >= deadline => {
                let before = self.visible;
                self.step(now_ms);
                self.visible != before
            }
            _ => false,
        }
    }

    /// One rotation step: show the label at the current position, advance
    /// modulo the active count, re-arm the deadline.
    fn step(&mut self, now_ms: u64) {
        let labels = alert_labels(self.code);
        let n = count(self.code);
        if n == 0 {
            // Mask had only unknown bits set; nothing to show.
            self.code = 0;
            self.index = 0;
            self.visible = "";
            self.deadline_ms = None;
            return;
        }

        if self.index >= n {
            self.index = 0;
        }
        self.visible = labels[self.index];
        self.index = (self.index + 1) % n;
        self.deadline_ms = Some(now_ms + ROTATION_INTERVAL_MS);
    }

    /// Whether the cycler is rotating through active alerts.
    pub fn is_cycling(&self) -> bool {
        self.deadline_ms.is_some()
    }

    /// Label currently shown, empty when idle.
    pub fn visible_text(&self) -> &'static str {
        self.visible
    }

    /// Deadline of the next rotation step, `None` when idle.
    pub fn next_deadline(&self) -> Option<u64> {
        self.deadline_ms
    }
}
