//! ADC adapter for the two analog sensors.
//!
//! Both sensors share the RP2040's single ADC. Conversions are blocking; each
//! takes a couple of microseconds, well inside the one-second poll.

use defmt::warn;
use embassy_rp::adc::{Adc, Blocking, Channel};
use sensor_bargraph::config::{DRUG_LABEL, GAS_LABEL};
use sensor_bargraph::sample::{SensorError, scale_to_u16};

/// The ADC plus one channel per sensor.
pub struct SensorBank<'d> {
    adc: Adc<'d, Blocking>,
    gas: Channel<'d>,
    drug: Channel<'d>,
}

impl<'d> SensorBank<'d> {
    pub fn new(
        adc: Adc<'d, Blocking>,
        gas: Channel<'d>,
        drug: Channel<'d>,
    ) -> Self {
        Self { adc, gas, drug }
    }

    /// Scaled gas reading, or `None` after logging a failed conversion.
    pub fn read_gas(&mut self) -> Option<u16> {
        convert(&mut self.adc, &mut self.gas)
            .inspect_err(|e| warn!("{}: {}", GAS_LABEL, e))
            .ok()
    }

    /// Scaled drug reading, or `None` after logging a failed conversion.
    pub fn read_drug(&mut self) -> Option<u16> {
        convert(&mut self.adc, &mut self.drug)
            .inspect_err(|e| warn!("{}: {}", DRUG_LABEL, e))
            .ok()
    }
}

/// One blocking conversion, widened to the 16-bit calibration domain.
fn convert(
    adc: &mut Adc<'_, Blocking>,
    channel: &mut Channel<'_>,
) -> Result<u16, SensorError> {
    adc.blocking_read(channel)
        .map(scale_to_u16)
        .map_err(|_| SensorError::ConversionFailed)
}
