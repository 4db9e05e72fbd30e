//! Alert register decoding and alert cycling.
//!
//! The drive packs motion-cancel and fault conditions into a bitmask field.
//! [`register`] decodes the mask into an ordered alert set; [`cycling`]
//! rotates the visible alert text among the active alerts on a fixed cadence
//! so a single display line can show all of them over time.

mod cycling;
mod register;

pub use cycling::{AlertCycler, ROTATION_INTERVAL_MS};
pub use register::{active_alerts, alert_labels, count, Alert, ALERT_BITS};
