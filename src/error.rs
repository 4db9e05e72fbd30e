//! Error types for axis-monitor.
//!
//! Provides unified error handling across configuration and telemetry decoding.

use core::fmt;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all axis-monitor operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// Telemetry field decoding error
    Decode(DecodeError),
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// Range bounds are degenerate or inverted (max must be > min)
    InvalidRange {
        /// Configured minimum value
        min: f32,
        /// Configured maximum value
        max: f32,
    },
    /// Layout leaves no room for bar cells after reserved columns
    BarTooNarrow {
        /// Total configured line width
        total_width: usize,
        /// Characters reserved for label, value, unit and decoration
        reserved: usize,
    },
    /// Layout wider than the render buffers allow
    LineTooWide {
        /// Total configured line width
        total_width: usize,
        /// Widest permitted line
        max: usize,
    },
    /// Two panel elements registered under the same field name
    DuplicateField(heapless::String<32>),
    /// Upstream field name longer than the panel's key capacity
    FieldNameTooLong,
    /// Panel element capacity exceeded
    TooManyElements,
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Telemetry decoding errors.
#[derive(Debug, Clone, PartialEq)]
pub enum DecodeError {
    /// Motor state ordinal outside the known set {0..4}
    InvalidState(i64),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Decode(e) => write!(f, "Decode error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::InvalidRange { min, max } => {
                write!(f, "Invalid range: min ({}) must be < max ({})", min, max)
            }
            ConfigError::BarTooNarrow { total_width, reserved } => {
                write!(
                    f,
                    "Bar too narrow: total width {} leaves no cells after {} reserved characters",
                    total_width, reserved
                )
            }
            ConfigError::LineTooWide { total_width, max } => {
                write!(
                    f,
                    "Line too wide: total width {} exceeds maximum {}",
                    total_width, max
                )
            }
            ConfigError::DuplicateField(name) => {
                write!(f, "Duplicate panel field: '{}'", name)
            }
            ConfigError::FieldNameTooLong => write!(f, "Field name too long (max 32 characters)"),
            ConfigError::TooManyElements => write!(f, "Panel element capacity exceeded"),
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::InvalidState(code) => {
                write!(f, "Invalid motor state code: {}. Valid codes: 0-4", code)
            }
        }
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<DecodeError> for Error {
    fn from(e: DecodeError) -> Self {
        Error::Decode(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for DecodeError {}
