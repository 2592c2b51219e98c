//! GPIO wiring.
//!
//! Pin numbers are the RP2040 `GPn` numbers. The firmware checks each
//! peripheral it claims against these tables at boot, so the board and this
//! file cannot drift apart silently.

use super::calibration::SEGMENTS;

/// GPIOs usable as ADC inputs on the RP2040 (ADC0-ADC3).
pub const ADC_PINS: core::ops::RangeInclusive<u8> = 26..=29;

// =============================================================================
// Sensors
// =============================================================================

/// Gas sensor input (ADC0).
pub const GAS_ADC_PIN: u8 = 26;

/// Drug sensor input (ADC1).
pub const DRUG_ADC_PIN: u8 = 27;

// =============================================================================
// Bar Graphs
// =============================================================================

/// Gas bar (green), segment 0 first.
pub const GAS_BAR_PINS: [u8; SEGMENTS] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9];

/// Drug bar (red), segment 0 first.
pub const DRUG_BAR_PINS: [u8; SEGMENTS] = [10, 11, 12, 13, 14, 15, 16, 17, 18, 19];

/// True when no GPIO is claimed twice across both bars and both sensors.
pub const fn wiring_is_distinct() -> bool {
    let mut claimed: u32 = 0;
    let mut i = 0;
    while i < SEGMENTS {
        if !claim(&mut claimed, GAS_BAR_PINS[i]) || !claim(&mut claimed, DRUG_BAR_PINS[i]) {
            return false;
        }
        i += 1;
    }
    claim(&mut claimed, GAS_ADC_PIN) && claim(&mut claimed, DRUG_ADC_PIN)
}

const fn claim(
    claimed: &mut u32,
    pin: u8,
) -> bool {
    if pin >= 30 {
        return false;
    }
    let bit = 1u32 << pin;
    if *claimed & bit != 0 {
        return false;
    }
    *claimed |= bit;
    true
}

const _: () = assert!(wiring_is_distinct(), "a GPIO is wired twice or does not exist");
const _: () = assert!(
    *ADC_PINS.start() <= GAS_ADC_PIN && GAS_ADC_PIN <= *ADC_PINS.end(),
    "GAS_ADC_PIN is not an ADC input"
);
const _: () = assert!(
    *ADC_PINS.start() <= DRUG_ADC_PIN && DRUG_ADC_PIN <= *ADC_PINS.end(),
    "DRUG_ADC_PIN is not an ADC input"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bars_have_one_pin_per_segment() {
        assert_eq!(GAS_BAR_PINS.len(), SEGMENTS);
        assert_eq!(DRUG_BAR_PINS.len(), SEGMENTS);
    }

    #[test]
    fn test_wiring_is_distinct() {
        assert!(wiring_is_distinct());
    }

    #[test]
    fn test_sensors_on_adc_inputs() {
        assert!(ADC_PINS.contains(&GAS_ADC_PIN));
        assert!(ADC_PINS.contains(&DRUG_ADC_PIN));
        assert!(!GAS_BAR_PINS.iter().chain(&DRUG_BAR_PINS).any(|pin| ADC_PINS.contains(pin)));
    }

    #[test]
    fn test_claim_rejects_reuse_and_missing_pins() {
        let mut claimed = 0;
        assert!(claim(&mut claimed, 3));
        assert!(!claim(&mut claimed, 3));
        assert!(!claim(&mut claimed, 30));
        assert!(claim(&mut claimed, 29));
    }
}
