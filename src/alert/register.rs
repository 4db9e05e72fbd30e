//! Alert register bit decoding.
//!
//! Pure functions of the raw mask: no cached state, so repeated calls with
//! the same mask always return the same ordered sequence.

use core::fmt;

use heapless::Vec;

/// Number of known alert bits in the register.
pub const ALERT_BITS: usize = 6;

/// One alert condition from the drive's alert register.
///
/// Discriminants are the bit positions in the raw mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Alert {
    /// Motion canceled because the drive entered an alert condition.
    MotionCanceledInAlert = 0,
    /// Motion canceled by the positive limit switch.
    MotionCanceledPositiveLimit = 1,
    /// Motion canceled by the negative limit switch.
    MotionCanceledNegativeLimit = 2,
    /// Motion canceled by the sensor E-stop input.
    MotionCanceledSensorEStop = 3,
    /// Motion canceled because the motor was disabled.
    MotionCanceledMotorDisabled = 4,
    /// Motor is faulted.
    MotorFaulted = 5,
}

/// All known alerts in ascending bit order.
const ALL: [Alert; ALERT_BITS] = [
    Alert::MotionCanceledInAlert,
    Alert::MotionCanceledPositiveLimit,
    Alert::MotionCanceledNegativeLimit,
    Alert::MotionCanceledSensorEStop,
    Alert::MotionCanceledMotorDisabled,
    Alert::MotorFaulted,
];

impl Alert {
    /// Bit position of this alert in the raw mask.
    pub const fn bit(self) -> u8 {
        self as u8
    }

    /// Short display label shown on the dashboard.
    pub const fn label(self) -> &'static str {
        match self {
            Alert::MotionCanceledInAlert => "ALERT",
            Alert::MotionCanceledPositiveLimit => "POS-LIMIT",
            Alert::MotionCanceledNegativeLimit => "NEG-LIMIT",
            Alert::MotionCanceledSensorEStop => "E-STOP",
            Alert::MotionCanceledMotorDisabled => "DISABLED",
            Alert::MotorFaulted => "FAULT",
        }
    }

    /// Stable identifier name for logging and diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            Alert::MotionCanceledInAlert => "MotionCanceledInAlert",
            Alert::MotionCanceledPositiveLimit => "MotionCanceledPositiveLimit",
            Alert::MotionCanceledNegativeLimit => "MotionCanceledNegativeLimit",
            Alert::MotionCanceledSensorEStop => "MotionCanceledSensorEStop",
            Alert::MotionCanceledMotorDisabled => "MotionCanceledMotorDisabled",
            Alert::MotorFaulted => "MotorFaulted",
        }
    }
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Decode the active alerts from a raw mask, in ascending bit order.
///
/// Bits beyond the known 6 carry no meaning for this drive family and are
/// excluded from the result.
pub fn active_alerts(code: u32) -> Vec<Alert, ALERT_BITS> {
    let mut alerts = Vec::new();
    for alert in ALL {
        if (code >> alert.bit()) & 1 == 1 {
            // Capacity equals the number of known bits; push cannot fail.
            let _ = alerts.push(alert);
        }
    }
    alerts
}

/// Display labels of the active alerts, in the same order as [`active_alerts`].
pub fn alert_labels(code: u32) -> Vec<&'static str, ALERT_BITS> {
    active_alerts(code).iter().map(|a| a.label()).collect()
}

/// Number of active alerts among the known bits.
pub fn count(code: u32) -> usize {
    active_alerts(code).len()
}
