//! Unit tests for range bar geometry.

use axis_monitor::{BarLayout, ChannelConfig, RangeBar, Severity};
use proptest::prelude::*;

fn channel(min: f32, max: f32) -> ChannelConfig {
    ChannelConfig {
        label: heapless::String::try_from("Channel").unwrap(),
        unit: heapless::String::try_from("u").unwrap(),
        min_value: min,
        max_value: max,
        digits: 1,
    }
}

#[test]
fn test_ratio_endpoints() {
    let mut bar = RangeBar::new(channel(-100.0, 100.0), BarLayout::default()).unwrap();
    bar.update(-100.0);
    assert_eq!(bar.ratio(), 0.0);
    bar.update(100.0);
    assert_eq!(bar.ratio(), 1.0);
}

#[test]
fn test_severity_band_boundaries() {
    let mut bar = RangeBar::new(channel(0.0, 100.0), BarLayout::default()).unwrap();

    bar.update(59.0);
    assert_eq!(bar.severity(), Severity::Nominal);
    bar.update(60.0);
    assert_eq!(bar.severity(), Severity::Warning);
    bar.update(79.0);
    assert_eq!(bar.severity(), Severity::Warning);
    bar.update(80.0);
    assert_eq!(bar.severity(), Severity::Critical);
    bar.update(95.0);
    assert_eq!(bar.severity(), Severity::Critical);
}

proptest! {
    /// The marker cell stays inside the bar no matter how far the value
    /// strays outside the configured range.
    #[test]
    fn prop_marker_always_inside_bar(value in -1e7f32..1e7f32) {
        let mut bar = RangeBar::new(channel(0.0, 1000.0), BarLayout::default()).unwrap();
        bar.update(value);
        prop_assert!(bar.marker_cell() < bar.bar_width());
    }

    /// The bar glyph run always has exactly bar_width cells with exactly
    /// one marker.
    #[test]
    fn prop_bar_text_well_formed(value in -1e7f32..1e7f32) {
        let mut bar = RangeBar::new(channel(-500.0, 500.0), BarLayout::default()).unwrap();
        bar.update(value);
        let text = bar.bar_text();
        prop_assert_eq!(text.chars().count(), bar.bar_width());
        prop_assert_eq!(text.chars().filter(|c| *c == '█').count(), 1);
    }

    /// Ratio is linear in the value: min maps to 0, max to 1, and values
    /// in between stay in [0, 1].
    #[test]
    fn prop_in_range_values_have_unit_ratio(value in 0.0f32..=1000.0f32) {
        let mut bar = RangeBar::new(channel(0.0, 1000.0), BarLayout::default()).unwrap();
        bar.update(value);
        prop_assert!((0.0..=1.0).contains(&bar.ratio()));
    }
}
