//! Sensor calibration constants.
//!
//! Ranges are in the 16-bit scaled ADC domain (see [`crate::sample`]). Both
//! sensors start from the same bounds; tune each one independently once the
//! sensors have been characterised.
//!
//! # Compile-Time Validation
//!
//! Each range is built through [`CalibrationRange::new`] in a `const`, so an
//! inverted or empty range fails the build instead of lighting a dead bar.

use crate::thresholds::CalibrationRange;

/// LEDs per bar graph.
pub const SEGMENTS: usize = 10;

const _: () = assert!(SEGMENTS > 0);

// =============================================================================
// Gas Sensor (GP26 / ADC0)
// =============================================================================

/// Scaled reading in clean air. Nothing lights at or below this value.
pub const GAS_RAW_MIN: u16 = 13_475;

/// Scaled reading at which the whole bar lights.
pub const GAS_RAW_MAX: u16 = 64_655;

pub const GAS_CALIBRATION: CalibrationRange = match CalibrationRange::new(GAS_RAW_MIN, GAS_RAW_MAX) {
    Ok(range) => range,
    Err(_) => panic!("GAS_RAW_MIN must be below GAS_RAW_MAX"),
};

// =============================================================================
// Drug Sensor (GP27 / ADC1)
// =============================================================================

/// Scaled baseline reading. Nothing lights at or below this value.
pub const DRUG_RAW_MIN: u16 = 13_475;

/// Scaled reading at which the whole bar lights.
pub const DRUG_RAW_MAX: u16 = 64_655;

pub const DRUG_CALIBRATION: CalibrationRange = match CalibrationRange::new(DRUG_RAW_MIN, DRUG_RAW_MAX) {
    Ok(range) => range,
    Err(_) => panic!("DRUG_RAW_MIN must be below DRUG_RAW_MAX"),
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::thresholds::ThresholdTable;

    #[test]
    fn test_ranges_match_constants() {
        assert_eq!(GAS_CALIBRATION.min(), GAS_RAW_MIN);
        assert_eq!(GAS_CALIBRATION.max(), GAS_RAW_MAX);
        assert_eq!(DRUG_CALIBRATION.min(), DRUG_RAW_MIN);
        assert_eq!(DRUG_CALIBRATION.max(), DRUG_RAW_MAX);
    }

    #[test]
    fn test_configured_tables_build() {
        let gas = ThresholdTable::<SEGMENTS>::build(GAS_CALIBRATION).unwrap();
        let drug = ThresholdTable::<SEGMENTS>::build(DRUG_CALIBRATION).unwrap();
        assert_eq!(gas.last(), GAS_RAW_MAX);
        assert_eq!(drug.last(), DRUG_RAW_MAX);
    }

    #[test]
    fn test_segments_do_not_collapse() {
        // Every LED should have its own level with the shipped ranges
        assert!(GAS_CALIBRATION.span() as usize >= SEGMENTS);
        assert!(DRUG_CALIBRATION.span() as usize >= SEGMENTS);
    }
}
