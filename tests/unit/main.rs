//! Unit test harness for axis-monitor.
//!
//! This module organizes unit tests for each component of the library.

mod alert_decoding;
mod config_parsing;
mod config_validation;
mod range_geometry;
