//! Panel: element registry and per-sample dispatch.
//!
//! The panel owns every display element, keyed by the upstream field name,
//! and sits between the external decode pipeline and the external refresh
//! loop. Samples are dispatched field by field through
//! [`Panel::apply_sample`]; the refresh loop reads [`Panel::render_lines`]
//! and drives the alert rotation timers through [`Panel::poll`].

use heapless::{String, Vec};

use crate::config::MonitorConfig;
use crate::error::{ConfigError, Result};
use crate::render::{AlertLine, Element, RangeBar, RenderedLine, StatusLine};

/// Maximum number of elements on a panel.
pub const MAX_ELEMENTS: usize = 20;

/// Upstream field carrying the motor state ordinal.
pub const STATUS_FIELD: &str = "status";

/// Upstream field carrying the alert bitmask.
pub const FAULTS_FIELD: &str = "faults";

/// Prefix of the motor status line.
const STATUS_PREFIX: &str = "Motor Status: ";

/// Prefix of the rotating alert line.
const FAULTS_PREFIX: &str = "Faults: ";

/// Display elements keyed by upstream field name, in insertion order.
#[derive(Debug)]
pub struct Panel {
    elements: Vec<(String<32>, Element), MAX_ELEMENTS>,
}

impl Default for Panel {
    fn default() -> Self {
        Self::new()
    }
}

impl Panel {
    /// Create an empty panel.
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Build a panel from configuration: one range bar per configured
    /// channel, then the status and faults lines.
    ///
    /// # Errors
    ///
    /// Returns an error when a channel's range or the layout is invalid.
    pub fn from_config(config: &MonitorConfig) -> Result<Self> {
        let mut panel = Self::new();

        for (name, channel) in config.channels.iter() {
            let bar = RangeBar::new(channel.clone(), config.layout.clone())?;
            panel.add_element(name.as_str(), Element::Range(bar))?;
        }

        panel.add_element(STATUS_FIELD, Element::Status(StatusLine::new(STATUS_PREFIX)))?;
        panel.add_element(FAULTS_FIELD, Element::Alert(AlertLine::new(FAULTS_PREFIX)))?;

        Ok(panel)
    }

    /// Register an element under an upstream field name.
    ///
    /// # Errors
    ///
    /// Returns an error when the field is already registered or the panel
    /// is full.
    pub fn add_element(&mut self, field: &str, element: Element) -> Result<()> {
        let name = String::try_from(field).map_err(|_| ConfigError::FieldNameTooLong)?;

        if self.element(field).is_some() {
            return Err(ConfigError::DuplicateField(name).into());
        }

        self.elements
            .push((name, element))
            .map_err(|_| ConfigError::TooManyElements)?;
        Ok(())
    }

    /// Get an element by field name.
    pub fn element(&self, field: &str) -> Option<&Element> {
        self.elements
            .iter()
            .find(|(name, _)| name.as_str() == field)
            .map(|(_, element)| element)
    }

    /// Dispatch one decoded sample field to its element.
    ///
    /// Fields with no registered element (padding, controller internals)
    /// are ignored. A failing element reports its error but leaves every
    /// other element untouched; a single bad sample must not stop the
    /// refresh loop.
    pub fn apply_sample(&mut self, field: &str, value: f64, now_ms: u64) -> Result<()> {
        match self
            .elements
            .iter_mut()
            .find(|(name, _)| name.as_str() == field)
        {
            Some((_, element)) => element.update(value, now_ms),
            None => Ok(()),
        }
    }

    /// Drive every element's timer. Returns `true` when any rendered text
    /// changed.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        let mut changed = false;
        for (_, element) in self.elements.iter_mut() {
            changed |= element.poll(now_ms);
        }
        changed
    }

    /// Earliest pending timer deadline across all elements, for the event
    /// loop's timed wait.
    pub fn next_deadline(&self) -> Option<u64> {
        self.elements
            .iter()
            .filter_map(|(_, element)| element.next_deadline())
            .min()
    }

    /// Render every element in registration order.
    pub fn render_lines(&self) -> Vec<RenderedLine, MAX_ELEMENTS> {
        self.elements
            .iter()
            .map(|(_, element)| element.render())
            .collect()
    }

    /// Number of registered elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the panel has no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}
