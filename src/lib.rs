//! # axis-monitor
//!
//! Decoding and rendering core for a terminal dashboard monitoring a
//! motorized axis over a periodic telemetry stream.
//!
//! Upstream, an external framing/validation pipeline decodes raw serial
//! bytes into named numeric fields at a fixed sample rate. Downstream, an
//! external display framework owns the redraw loop. This crate is the
//! semantic layer between the two:
//!
//! - **State decoding**: maps the drive's state ordinal onto a closed state
//!   set with fixed labels and a coloring policy
//! - **Alert decoding**: expands the alert register bitmask into an ordered
//!   alert set
//! - **Alert cycling**: rotates a single display line through the active
//!   alerts on a fixed cadence, with an explicit cancellable timer
//! - **Range bars**: geometry and threshold coloring for bounded numeric
//!   channels (position, velocity, torque, ...)
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use axis_monitor::{load_config, Panel};
//!
//! let config = load_config("monitor.toml")?;
//! let mut panel = Panel::from_config(&config)?;
//!
//! // Per decoded sample (now_ms is a monotonic millisecond counter):
//! panel.apply_sample("position", 412.5, now_ms)?;
//! panel.apply_sample("status", 3.0, now_ms)?;
//! panel.apply_sample("faults", 0.0, now_ms)?;
//!
//! // Per refresh tick:
//! panel.poll(now_ms);
//! for line in panel.render_lines() {
//!     println!("{line}");
//! }
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O and TOML parsing
//! - `alloc`: Enables heap allocation for no_std with allocator
//! - `defmt`: Enables defmt logging for embedded targets

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
// Allow large error types - necessary for no_std with heapless strings
#![allow(clippy::result_large_err)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Core modules
pub mod alert;
pub mod config;
pub mod error;
pub mod panel;
pub mod render;
pub mod state;

// Re-exports for ergonomic API
pub use alert::{active_alerts, alert_labels, Alert, AlertCycler, ROTATION_INTERVAL_MS};
pub use config::{validate_config, BarLayout, ChannelConfig, MonitorConfig};
pub use error::{ConfigError, DecodeError, Error, Result};
pub use panel::{Panel, FAULTS_FIELD, STATUS_FIELD};
pub use render::{AlertLine, Element, RangeBar, RenderedLine, Severity, StatusLine};
pub use state::MotorState;

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::load_config;
