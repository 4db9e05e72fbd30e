//! Motor ready-state decoding.
//!
//! The servo drive reports its operating state as a small integer ordinal in
//! every telemetry sample. This module maps that ordinal onto a closed state
//! set with fixed display labels. The mapping is total over {0..4}; anything
//! else is rejected rather than guessed, since showing a wrong state on an
//! operational dashboard is worse than showing none.

use core::fmt;

use crate::error::DecodeError;

/// Motor operating state as reported by the drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotorState {
    /// Drive output disabled.
    Disabled,
    /// Drive is enabling (power-up or re-enable in progress).
    Enabling,
    /// Drive is faulted and needs recovery.
    Faulted,
    /// Drive enabled and holding position.
    Ready,
    /// Drive executing a move.
    Moving,
}

impl MotorState {
    /// Resolve a raw telemetry ordinal to a motor state.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::InvalidState`] when the ordinal is outside {0..4}.
    pub fn from_code(code: i64) -> Result<Self, DecodeError> {
        match code {
            0 => Ok(MotorState::Disabled),
            1 => Ok(MotorState::Enabling),
            2 => Ok(MotorState::Faulted),
            3 => Ok(MotorState::Ready),
            4 => Ok(MotorState::Moving),
            _ => Err(DecodeError::InvalidState(code)),
        }
    }

    /// Fixed short label shown on the dashboard.
    pub const fn label(self) -> &'static str {
        match self {
            MotorState::Disabled => "DISABLED",
            MotorState::Enabling => "ENABLING",
            MotorState::Faulted => "FAULTED",
            MotorState::Ready => "READY",
            MotorState::Moving => "MOVING",
        }
    }

    /// The raw ordinal for this state.
    pub const fn code(self) -> u8 {
        match self {
            MotorState::Disabled => 0,
            MotorState::Enabling => 1,
            MotorState::Faulted => 2,
            MotorState::Ready => 3,
            MotorState::Moving => 4,
        }
    }
}

impl fmt::Display for MotorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
