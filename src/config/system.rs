//! Monitor configuration - root configuration structure.

use heapless::{FnvIndexMap, String};
use serde::Deserialize;

use super::channel::ChannelConfig;
use super::layout::BarLayout;

/// Maximum number of configured channels.
pub const MAX_CHANNELS: usize = 16;

/// Root configuration structure from TOML.
#[derive(Debug, Clone, Deserialize)]
pub struct MonitorConfig {
    /// Bounded numeric channels, keyed by the upstream field name.
    #[serde(default)]
    pub channels: FnvIndexMap<String<32>, ChannelConfig, MAX_CHANNELS>,

    /// Shared bar layout.
    #[serde(default)]
    pub layout: BarLayout,
}

impl MonitorConfig {
    /// Get a channel configuration by field name.
    pub fn channel(&self, name: &str) -> Option<&ChannelConfig> {
        self.channels
            .iter()
            .find(|(k, _)| k.as_str() == name)
            .map(|(_, v)| v)
    }

    /// List all configured channel field names.
    pub fn channel_names(&self) -> impl Iterator<Item = &str> {
        self.channels.keys().map(|s| s.as_str())
    }
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            channels: FnvIndexMap::new(),
            layout: BarLayout::default(),
        }
    }
}
