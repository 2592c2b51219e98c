//! RP2040 real-time clock adapter.
//!
//! Starts the RTC according to [`ClockStart::decide`] and reads the time of
//! day for log timestamps.

use defmt::{Debug2Format, error, info, warn};
use embassy_rp::{Peri, bind_interrupts, rtc};
use embassy_rp::peripherals::RTC;
use embassy_rp::rtc::{DateTime, DayOfWeek, Rtc};
use sensor_bargraph::clock::{ClockSetting, ClockStart, WallTime};

bind_interrupts!(struct Irqs {
    RTC_IRQ => rtc::InterruptHandler;
});

pub struct WallClock {
    rtc: Rtc<'static, RTC>,
}

impl WallClock {
    /// Take the RTC and make sure it is running.
    ///
    /// Never fails: a clock that cannot be started only costs timestamps, and
    /// [`now`](Self::now) then reports `None`.
    pub fn start(
        peripheral: Peri<'static, RTC>,
        preset: Option<ClockSetting>,
    ) -> Self {
        let mut rtc = Rtc::new(peripheral, Irqs);
        let start = ClockStart::decide(rtc.is_running(), preset);

        match start {
            ClockStart::KeepRunning => info!("RTC already running"),
            ClockStart::Preset(setting) => info!("RTC set from preset: {}", setting),
            ClockStart::Epoch => warn!("RTC not set; timestamps count from 00:00:00 at boot"),
        }

        if let Some(setting) = start.setting()
            && let Err(e) = rtc.set_datetime(to_datetime(setting))
        {
            error!("RTC start failed: {}", Debug2Format(&e));
        }

        Self { rtc }
    }

    /// Current time of day, or `None` when the RTC cannot be read.
    pub fn now(&self) -> Option<WallTime> {
        self.rtc
            .now()
            .ok()
            .map(|dt| WallTime::new(dt.hour, dt.minute, dt.second))
    }
}

fn to_datetime(setting: ClockSetting) -> DateTime {
    DateTime {
        year: setting.year,
        month: setting.month,
        day: setting.day,
        day_of_week: day_of_week(setting.day_of_week),
        hour: setting.hour,
        minute: setting.minute,
        second: setting.second,
    }
}

/// Sunday = 0, as stored by the RTC. Validated settings never exceed 6.
fn day_of_week(index: u8) -> DayOfWeek {
    match index {
        0 => DayOfWeek::Sunday,
        1 => DayOfWeek::Monday,
        2 => DayOfWeek::Tuesday,
        3 => DayOfWeek::Wednesday,
        4 => DayOfWeek::Thursday,
        5 => DayOfWeek::Friday,
        _ => DayOfWeek::Saturday,
    }
}
