//! Sensor bar-graph library - testable modules for the dual sensor monitor.
//!
//! This library contains the core logic that can be tested on the host machine.
//! The binary (`main.rs`) uses this library and adds the RP2040-specific code.
//!
//! # Testing
//!
//! Run tests on host with:
//! ```bash
//! cargo test --lib --target x86_64-unknown-linux-gnu  # Linux
//! cargo test --lib --target aarch64-apple-darwin      # macOS
//! ```
//!
//! Tests run with `std` enabled (via `cfg_attr`), allowing use of the standard
//! test framework while the actual firmware runs as `no_std`.

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]

// === Pure logic modules (testable on host, no ARM dependencies) ===

// Configuration
pub mod config;

// Bar graph core
pub mod bargraph;
pub mod thresholds;

// Sensor plumbing
pub mod channel;
pub mod clock;
pub mod report;
pub mod sample;

// Re-export commonly used items
pub use bargraph::BarGraph;
pub use channel::SensorChannel;
pub use thresholds::{CalibrationError, CalibrationRange, ThresholdTable, build_thresholds};
