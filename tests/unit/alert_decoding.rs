//! Unit tests for alert register decoding.

use axis_monitor::alert::{active_alerts, alert_labels, count, Alert, ALERT_BITS};
use proptest::prelude::*;

/// Mask covering only the known alert bits.
const KNOWN_MASK: u32 = (1 << ALERT_BITS) - 1;

#[test]
fn test_scenario_bits_zero_and_two() {
    assert_eq!(
        active_alerts(0b000101).as_slice(),
        &[
            Alert::MotionCanceledInAlert,
            Alert::MotionCanceledNegativeLimit
        ]
    );
    assert_eq!(alert_labels(0b000101).as_slice(), &["ALERT", "NEG-LIMIT"]);
    assert_eq!(count(0b000101), 2);
}

#[test]
fn test_identifier_names_stable() {
    assert_eq!(
        Alert::MotionCanceledSensorEStop.name(),
        "MotionCanceledSensorEStop"
    );
    assert_eq!(Alert::MotorFaulted.label(), "FAULT");
}

proptest! {
    /// count equals the popcount of the known bits.
    #[test]
    fn prop_count_matches_popcount(mask in 0u32..(1 << ALERT_BITS)) {
        prop_assert_eq!(count(mask), mask.count_ones() as usize);
    }

    /// Active alerts are strictly ascending in bit index (no duplicates).
    #[test]
    fn prop_alerts_ascending_no_duplicates(mask: u32) {
        let alerts = active_alerts(mask);
        for pair in alerts.windows(2) {
            prop_assert!(pair[0].bit() < pair[1].bit());
        }
    }

    /// Unknown bits never contribute to the result.
    #[test]
    fn prop_unknown_bits_ignored(mask: u32) {
        let full = active_alerts(mask);
        let masked = active_alerts(mask & KNOWN_MASK);
        prop_assert_eq!(full.as_slice(), masked.as_slice());
    }

    /// Decoding is idempotent: same mask, same ordered sequence.
    #[test]
    fn prop_decode_idempotent(mask: u32) {
        let alerts_a = active_alerts(mask);
        let alerts_b = active_alerts(mask);
        prop_assert_eq!(alerts_a.as_slice(), alerts_b.as_slice());
        let labels_a = alert_labels(mask);
        let labels_b = alert_labels(mask);
        prop_assert_eq!(labels_a.as_slice(), labels_b.as_slice());
    }

    /// Labels follow the same order as the decoded alerts.
    #[test]
    fn prop_labels_match_alert_order(mask: u32) {
        let alerts = active_alerts(mask);
        let labels = alert_labels(mask);
        prop_assert_eq!(alerts.len(), labels.len());
        for (alert, label) in alerts.iter().zip(labels.iter()) {
            prop_assert_eq!(alert.label(), *label);
        }
    }
}
