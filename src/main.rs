//! Dual Sensor Bar-Graph Firmware for Raspberry Pi Pico (RP2040)
//!
//! Polls a gas sensor and a drug sensor once per second, logs both readings
//! with an RTC timestamp over defmt RTT, and shows each reading on a
//! 10-segment LED bar graph.
//!
//! # Wiring
//!
//! - Gas sensor: GP26 (ADC0), bar on GP0-GP9 (green)
//! - Drug sensor: GP27 (ADC1), bar on GP10-GP19 (red)
//!
//! The tables live in `config::wiring`; every claimed pin is checked against
//! them at boot.

#![no_std]
#![no_main]

// Modules only used in the binary (not testable on host)
mod rtc;
mod sensors;

use defmt::info;
use embassy_executor::Spawner;
use embassy_rp::Peri;
use embassy_rp::adc::{self, Adc, Channel};
use embassy_rp::gpio::{Level, Output, Pin, Pull};
use embassy_time::Timer;
use sensor_bargraph::config::{
    BANNER,
    CLOCK_PRESET,
    DRUG_CALIBRATION,
    DRUG_LABEL,
    GAS_CALIBRATION,
    GAS_LABEL,
    POLL_INTERVAL_MS,
    SEGMENTS,
};
use sensor_bargraph::config::wiring::{DRUG_ADC_PIN, DRUG_BAR_PINS, GAS_ADC_PIN, GAS_BAR_PINS};
use sensor_bargraph::report::format_line;
use sensor_bargraph::{BarGraph, SensorChannel};
use {defmt_rtt as _, panic_probe as _};

use crate::rtc::WallClock;
use crate::sensors::SensorBank;

// Program metadata for `picotool info`
#[unsafe(link_section = ".bi_entries")]
#[used]
pub static PICOTOOL_ENTRIES: [embassy_rp::binary_info::EntryAddr; 4] = [
    embassy_rp::binary_info::rp_program_name!(c"sensor-bargraph"),
    embassy_rp::binary_info::rp_program_description!(c"Dual gas/drug sensor LED bar graphs"),
    embassy_rp::binary_info::rp_cargo_version!(),
    embassy_rp::binary_info::rp_program_build_attribute!(),
];

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Sensor bar-graph starting...");

    let p = embassy_rp::init(Default::default());

    // Sensors: gas on GP26 (ADC0), drug on GP27 (ADC1)
    let adc = Adc::new_blocking(p.ADC, adc::Config::default());
    let mut sensors = SensorBank::new(
        adc,
        Channel::new_pin(wired(p.PIN_26, GAS_ADC_PIN), Pull::None),
        Channel::new_pin(wired(p.PIN_27, DRUG_ADC_PIN), Pull::None),
    );

    // Gas bar (green): GP0-GP9, segment 0 first
    let gas_bar: BarGraph<Output<'static>, SEGMENTS> = BarGraph::new([
        Output::new(wired(p.PIN_0, GAS_BAR_PINS[0]), Level::Low),
        Output::new(wired(p.PIN_1, GAS_BAR_PINS[1]), Level::Low),
        Output::new(wired(p.PIN_2, GAS_BAR_PINS[2]), Level::Low),
        Output::new(wired(p.PIN_3, GAS_BAR_PINS[3]), Level::Low),
        Output::new(wired(p.PIN_4, GAS_BAR_PINS[4]), Level::Low),
        Output::new(wired(p.PIN_5, GAS_BAR_PINS[5]), Level::Low),
        Output::new(wired(p.PIN_6, GAS_BAR_PINS[6]), Level::Low),
        Output::new(wired(p.PIN_7, GAS_BAR_PINS[7]), Level::Low),
        Output::new(wired(p.PIN_8, GAS_BAR_PINS[8]), Level::Low),
        Output::new(wired(p.PIN_9, GAS_BAR_PINS[9]), Level::Low),
    ]);

    // Drug bar (red): GP10-GP19, segment 0 first
    let drug_bar: BarGraph<Output<'static>, SEGMENTS> = BarGraph::new([
        Output::new(wired(p.PIN_10, DRUG_BAR_PINS[0]), Level::Low),
        Output::new(wired(p.PIN_11, DRUG_BAR_PINS[1]), Level::Low),
        Output::new(wired(p.PIN_12, DRUG_BAR_PINS[2]), Level::Low),
        Output::new(wired(p.PIN_13, DRUG_BAR_PINS[3]), Level::Low),
        Output::new(wired(p.PIN_14, DRUG_BAR_PINS[4]), Level::Low),
        Output::new(wired(p.PIN_15, DRUG_BAR_PINS[5]), Level::Low),
        Output::new(wired(p.PIN_16, DRUG_BAR_PINS[6]), Level::Low),
        Output::new(wired(p.PIN_17, DRUG_BAR_PINS[7]), Level::Low),
        Output::new(wired(p.PIN_18, DRUG_BAR_PINS[8]), Level::Low),
        Output::new(wired(p.PIN_19, DRUG_BAR_PINS[9]), Level::Low),
    ]);

    info!("Bar graphs initialized (gas GPIOs {}, drug GPIOs {})", GAS_BAR_PINS, DRUG_BAR_PINS);

    // Threshold tables, one per sensor. A rejected calibration halts here.
    let mut gas = match SensorChannel::new(GAS_LABEL, GAS_CALIBRATION, gas_bar) {
        Ok(channel) => channel,
        Err(e) => defmt::panic!("{} calibration rejected: {}", GAS_LABEL, e),
    };
    let mut drug = match SensorChannel::new(DRUG_LABEL, DRUG_CALIBRATION, drug_bar) {
        Ok(channel) => channel,
        Err(e) => defmt::panic!("{} calibration rejected: {}", DRUG_LABEL, e),
    };
    info!("{} levels: {}", gas.label(), gas.table().levels());
    info!("{} levels: {}", drug.label(), drug.table().levels());

    // Real-time clock (not kept across power loss)
    let clock = WallClock::start(p.RTC, CLOCK_PRESET);

    info!("{}", BANNER);

    loop {
        // 1. Timestamp
        let time = clock.now();

        // 2. Sample both sensors
        let gas_value = sensors.read_gas();
        let drug_value = sensors.read_drug();

        // 3. Update the bars (GPIO writes cannot fail on RP2040)
        let Ok(_) = gas.apply(gas_value);
        let Ok(_) = drug.apply(drug_value);

        // 4. Log the cycle
        let line = format_line(time, &[gas.reading(), drug.reading()]);
        info!("{}", line.as_str());

        Timer::after_millis(POLL_INTERVAL_MS).await;
    }
}

/// Pass `pin` through if it is the GPIO the wiring table expects.
fn wired<T: Pin>(
    pin: Peri<'static, T>,
    expected: u8,
) -> Peri<'static, T> {
    let actual = pin.pin();
    if actual != expected {
        defmt::panic!("GP{} claimed where config::wiring expects GP{}", actual, expected);
    }
    pin
}
