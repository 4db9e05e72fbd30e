//! Configuration module for axis-monitor.
//!
//! Provides types for loading and validating monitored-channel and layout
//! configurations from TOML files (with `std` feature) or pre-parsed data.

mod channel;
mod layout;
#[cfg(feature = "std")]
mod loader;
mod system;
mod validation;

pub use channel::ChannelConfig;
pub use layout::{BarLayout, MAX_TOTAL_WIDTH, RESERVED_PADDING};
pub use system::{MonitorConfig, MAX_CHANNELS};
pub use validation::validate_config;

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};
