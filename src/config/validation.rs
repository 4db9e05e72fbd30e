//! Configuration validation.

use crate::error::{ConfigError, Error, Result};

use super::layout::MAX_TOTAL_WIDTH;
use super::MonitorConfig;

/// Validate a monitor configuration.
///
/// Checks:
/// - Every channel range has `max_value > min_value`
/// - The layout width fits the render buffers
/// - Every channel leaves at least one bar cell after the reserved columns
pub fn validate_config(config: &MonitorConfig) -> Result<()> {
    if config.layout.total_width > MAX_TOTAL_WIDTH {
        return Err(Error::Config(ConfigError::LineTooWide {
            total_width: config.layout.total_width,
            max: MAX_TOTAL_WIDTH,
        }));
    }

    for (_, channel) in config.channels.iter() {
        if !channel.is_valid() {
            return Err(Error::Config(ConfigError::InvalidRange {
                min: channel.min_value,
                max: channel.max_value,
            }));
        }

        if config.layout.bar_width(channel.unit.len()).is_none() {
            return Err(Error::Config(ConfigError::BarTooNarrow {
                total_width: config.layout.total_width,
                reserved: config.layout.reserved(channel.unit.len()),
            }));
        }
    }

    Ok(())
}
