//! Raw ADC sample handling.
//!
//! The RP2040 ADC converts to 12 bits. Calibration constants are expressed in
//! the 16-bit domain (the range MicroPython's `read_u16` reports), so every
//! conversion is widened before it reaches a threshold table.

use core::fmt;

/// Bits per RP2040 ADC conversion.
pub const ADC_BITS: u32 = 12;

/// Largest raw conversion the ADC can report.
pub const ADC_MAX: u16 = (1 << ADC_BITS) - 1;

/// A sensor conversion that produced no value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub enum SensorError {
    /// The ADC flagged the conversion as failed.
    ConversionFailed,
}

impl fmt::Display for SensorError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::ConversionFailed => f.write_str("ADC conversion failed"),
        }
    }
}

/// Widen a 12-bit conversion to the full `u16` range.
///
/// The top bits are replicated into the low nibble so `0` maps to `0` and
/// [`ADC_MAX`] maps to `u16::MAX`. Bits above the 12th are ignored.
#[inline]
pub const fn scale_to_u16(raw: u16) -> u16 {
    let raw = raw & ADC_MAX;
    (raw << 4) | (raw >> 8)
}
