//! Polling loop configuration.

use crate::clock::ClockSetting;

/// Delay between polling cycles.
pub const POLL_INTERVAL_MS: u64 = 1000;

/// Printed once after hardware init.
pub const BANNER: &str = "System Started - Dual Detection Mode (Gas & Drugs)";

/// Log label for the gas sensor reading.
pub const GAS_LABEL: &str = "Gas level";

/// Log label for the drug sensor reading.
pub const DRUG_LABEL: &str = "Drug level";

/// Date and time written to a stopped RTC at boot.
///
/// The RTC loses the time on power loss. Set this to the current time before
/// flashing to get wall-clock timestamps, e.g.:
///
/// ```ignore
/// pub const CLOCK_PRESET: Option<ClockSetting> = Some(ClockSetting {
///     year: 2023, month: 10, day: 25, day_of_week: 3,
///     hour: 14, minute: 30, second: 0,
/// });
/// ```
///
/// With `None` a stopped clock starts at [`ClockSetting::EPOCH`].
pub const CLOCK_PRESET: Option<ClockSetting> = None;

// A preset that the RTC would reject is a configuration mistake
const _: () = match CLOCK_PRESET {
    Some(setting) => assert!(setting.validate().is_ok(), "CLOCK_PRESET is not a valid date/time"),
    None => {}
};

const _: () = assert!(POLL_INTERVAL_MS > 0);
