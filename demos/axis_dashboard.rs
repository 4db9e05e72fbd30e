//! Example: terminal dashboard wiring.
//!
//! This example demonstrates how to:
//! - Parse the monitor configuration from TOML
//! - Build a panel and feed it decoded telemetry samples
//! - Drive the alert rotation timer from an event loop
//!
//! The telemetry here is simulated; in the real dashboard the samples come
//! from the serial decode pipeline and the loop is the display framework's
//! refresh scheduler.
//!
//! Run with: `cargo run --example axis_dashboard --features std`

use axis_monitor::config::parse_config;
use axis_monitor::{Panel, Result};

const CONFIG: &str = r#"
[channels.position]
label = "Axis Position"
unit = "mm"
min_value = 0.0
max_value = 1000.0

[channels.velocity]
label = "Axis Vel"
unit = "mm/s"
min_value = -100.0
max_value = 100.0

[channels.motor_speed]
label = "Motor Speed"
unit = "rpm"
min_value = -1500.0
max_value = 1500.0

[channels.torque_current]
label = "Torque"
unit = "%"
min_value = -100.0
max_value = 100.0

[channels.torque_limit]
label = "Torque Limit"
unit = "%"
min_value = 0.0
max_value = 100.0
"#;

fn main() -> Result<()> {
    let config = parse_config(CONFIG)?;
    let mut panel = Panel::from_config(&config)?;

    // Simulated move: the axis accelerates toward 900 mm, trips the negative
    // limit alert halfway through, then recovers and stops.
    for step in 0..=100u64 {
        let now_ms = step * 100;
        let progress = step as f64 / 100.0;

        panel.apply_sample("position", 900.0 * progress, now_ms)?;
        panel.apply_sample("velocity", 80.0 * (1.0 - progress), now_ms)?;
        panel.apply_sample("motor_speed", 1200.0 * (1.0 - progress), now_ms)?;
        panel.apply_sample("torque_current", 35.0, now_ms)?;
        panel.apply_sample("torque_limit", 80.0, now_ms)?;

        let (status, faults) = if (40..60).contains(&step) {
            (2.0, 0b000101 as f64)
        } else if step == 100 {
            (3.0, 0.0)
        } else {
            (4.0, 0.0)
        };
        panel.apply_sample("status", status, now_ms)?;
        panel.apply_sample("faults", faults, now_ms)?;

        panel.poll(now_ms);

        // Redraw every second of simulated time
        if step % 10 == 0 {
            println!("--- t = {:>5} ms ---", now_ms);
            for line in panel.render_lines() {
                println!("{}", line);
            }
            println!();
        }
    }

    Ok(())
}
