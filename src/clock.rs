//! Wall-clock time for log timestamps.
//!
//! The RP2040 RTC forgets the time on power loss and boots stopped. At
//! startup [`ClockStart::decide`] picks what to do with it:
//!
//! - RTC already running (warm reset): keep it.
//! - A [`ClockSetting`] preset is configured: start from the preset.
//! - Otherwise: start from [`ClockSetting::EPOCH`] so timestamps count from
//!   boot instead of showing garbage. The firmware logs a warning.

use core::fmt;

/// Shown in place of a timestamp when the clock cannot be read.
pub const UNKNOWN_TIMESTAMP: &str = "--:--:--";

/// Largest year the RP2040 RTC stores (12-bit field).
pub const MAX_YEAR: u16 = 4095;

// =============================================================================
// Errors
// =============================================================================

/// Clock field that failed validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub enum ClockField {
    Year,
    Month,
    Day,
    DayOfWeek,
    Hour,
    Minute,
    Second,
}

/// Clock failures.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub enum ClockError {
    /// A setting field is out of range.
    InvalidSetting(ClockField),
}

impl fmt::Display for ClockError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::InvalidSetting(field) => write!(f, "clock setting has invalid {field:?}"),
        }
    }
}

// =============================================================================
// Wall Time
// =============================================================================

/// Time of day as read from the RTC.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub struct WallTime {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl WallTime {
    pub const fn new(
        hour: u8,
        minute: u8,
        second: u8,
    ) -> Self {
        Self { hour, minute, second }
    }
}

impl fmt::Display for WallTime {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

// =============================================================================
// Clock Setting
// =============================================================================

/// Full date and time written to the RTC when starting it.
///
/// `day_of_week` counts from Sunday = 0, like the RP2040 RTC.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub struct ClockSetting {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub day_of_week: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl ClockSetting {
    /// 2000-01-01 00:00:00, a Saturday. Start point for an unset clock.
    pub const EPOCH: Self = Self {
        year: 2000,
        month: 1,
        day: 1,
        day_of_week: 6,
        hour: 0,
        minute: 0,
        second: 0,
    };

    /// Check every field against the ranges the RTC accepts.
    pub const fn validate(&self) -> Result<(), ClockError> {
        if self.year > MAX_YEAR {
            return Err(ClockError::InvalidSetting(ClockField::Year));
        }
        if self.month < 1 || self.month > 12 {
            return Err(ClockError::InvalidSetting(ClockField::Month));
        }
        if self.day < 1 || self.day > days_in_month(self.year, self.month) {
            return Err(ClockError::InvalidSetting(ClockField::Day));
        }
        if self.day_of_week > 6 {
            return Err(ClockError::InvalidSetting(ClockField::DayOfWeek));
        }
        if self.hour > 23 {
            return Err(ClockError::InvalidSetting(ClockField::Hour));
        }
        if self.minute > 59 {
            return Err(ClockError::InvalidSetting(ClockField::Minute));
        }
        if self.second > 59 {
            return Err(ClockError::InvalidSetting(ClockField::Second));
        }
        Ok(())
    }
}

const fn is_leap_year(year: u16) -> bool { year % 4 == 0 && (year % 100 != 0 || year % 400 == 0) }

/// Days in `month` (1-12) of `year`.
pub const fn days_in_month(
    year: u16,
    month: u8,
) -> u8 {
    match month {
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

// =============================================================================
// Boot Policy
// =============================================================================

/// What to do with the RTC at boot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub enum ClockStart {
    /// Already running; leave it alone.
    KeepRunning,
    /// Start from the configured preset.
    Preset(ClockSetting),
    /// No usable preset; start from [`ClockSetting::EPOCH`].
    Epoch,
}

impl ClockStart {
    /// Pick the boot action.
    ///
    /// An invalid preset falls back to the epoch rather than leaving the
    /// clock stopped.
    pub const fn decide(
        running: bool,
        preset: Option<ClockSetting>,
    ) -> Self {
        if running {
            return Self::KeepRunning;
        }
        match preset {
            Some(setting) if setting.validate().is_ok() => Self::Preset(setting),
            _ => Self::Epoch,
        }
    }

    /// Setting to write, if any.
    pub const fn setting(&self) -> Option<ClockSetting> {
        match self {
            Self::KeepRunning => None,
            Self::Preset(setting) => Some(*setting),
            Self::Epoch => Some(ClockSetting::EPOCH),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
