//! Monitored channel configuration.

use serde::Deserialize;

/// Configuration of one bounded numeric telemetry channel.
///
/// The upstream decoder names each field; the channel binds that field to a
/// display label, a unit, the expected value range and the number of decimal
/// digits shown.
#[derive(Debug, Clone, Deserialize)]
pub struct ChannelConfig {
    /// Display label, e.g. "Axis Position".
    pub label: heapless::String<32>,

    /// Unit suffix, e.g. "mm".
    #[serde(default)]
    pub unit: heapless::String<8>,

    /// Lower bound of the expected range.
    pub min_value: f32,

    /// Upper bound of the expected range. Must be greater than `min_value`.
    pub max_value: f32,

    /// Decimal digits shown for the value.
    #[serde(default = "default_digits")]
    pub digits: u8,
}

fn default_digits() -> u8 {
    1
}

impl ChannelConfig {
    /// Check that the range is usable (max > min).
    pub fn is_valid(&self) -> bool {
        self.max_value > self.min_value
    }

    /// Width of the configured range.
    pub fn span(&self) -> f32 {
        self.max_value - self.min_value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn channel(min: f32, max: f32) -> ChannelConfig {
        ChannelConfig {
            label: heapless::String::try_from("Axis Position").unwrap(),
            unit: heapless::String::try_from("mm").unwrap(),
            min_value: min,
            max_value: max,
            digits: 1,
        }
    }

    #[test]
    fn test_valid_range() {
        assert!(channel(0.0, 1000.0).is_valid());
        assert!(channel(-100.0, 100.0).is_valid());
    }

    #[test]
    fn test_degenerate_range_invalid() {
        assert!(!channel(50.0, 50.0).is_valid());
        assert!(!channel(100.0, -100.0).is_valid());
    }
}
