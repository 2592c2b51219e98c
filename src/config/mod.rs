//! Application configuration.
//!
//! - `calibration`: Per-sensor raw ranges and bar-graph segment count
//! - `monitor`: Poll interval, log labels and clock preset
//! - `wiring`: GPIO numbers of both sensors and both bars

pub mod calibration;
pub mod monitor;
pub mod wiring;

// Re-export at config level for convenience
pub use calibration::{DRUG_CALIBRATION, GAS_CALIBRATION, SEGMENTS};
pub use monitor::{BANNER, CLOCK_PRESET, DRUG_LABEL, GAS_LABEL, POLL_INTERVAL_MS};
