//! Threshold table construction for the LED bar graphs.
//!
//! A [`ThresholdTable`] splits a [`CalibrationRange`] into `N` evenly spaced
//! levels. Segment `i` lights once a reading reaches level `i`:
//!
//! ```text
//! level[i] = min + floor((max - min) * (i + 1) / N)
//! ```
//!
//! The division truncates, so intermediate levels round down toward `min`.
//! The last level always lands on `max`. Spans narrower than `N` produce
//! repeated levels; those segments light together and are kept as-is.
//!
//! # Usage
//!
//! ```ignore
//! use sensor_bargraph::thresholds::{CalibrationRange, ThresholdTable};
//!
//! let range = CalibrationRange::new(13_475, 64_655)?;
//! let table = ThresholdTable::<10>::build(range)?;
//! assert_eq!(table.first(), 18_593);
//! ```

use core::fmt;

// =============================================================================
// Errors
// =============================================================================

/// Reasons a calibration is rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub enum CalibrationError {
    /// `min` is not strictly below `max`.
    EmptyRange {
        /// Lower bound as configured.
        min: u16,
        /// Upper bound as configured.
        max: u16,
    },
    /// A table must have at least one segment.
    NoSegments,
}

impl fmt::Display for CalibrationError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::EmptyRange { min, max } => write!(f, "empty calibration range {min}..{max}"),
            Self::NoSegments => f.write_str("threshold table needs at least one segment"),
        }
    }
}

// =============================================================================
// Calibration Range
// =============================================================================

/// Raw sensor bounds a bar graph spans, in the 16-bit scaled ADC domain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub struct CalibrationRange {
    min: u16,
    max: u16,
}

impl CalibrationRange {
    /// Create a range, rejecting `min >= max`.
    pub const fn new(
        min: u16,
        max: u16,
    ) -> Result<Self, CalibrationError> {
        if min >= max {
            return Err(CalibrationError::EmptyRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Lower bound. Readings below it light no segment.
    #[inline]
    pub const fn min(&self) -> u16 { self.min }

    /// Upper bound.
    #[inline]
    pub const fn max(&self) -> u16 { self.max }

    /// Distance between the bounds.
    #[inline]
    pub const fn span(&self) -> u16 { self.max - self.min }
}

// =============================================================================
// Threshold Table
// =============================================================================

/// `N` non-decreasing levels, one per bar-graph segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub struct ThresholdTable<const N: usize> {
    levels: [u16; N],
    range: CalibrationRange,
}

impl<const N: usize> ThresholdTable<N> {
    /// Build the table for `range`.
    ///
    /// Fails with [`CalibrationError::NoSegments`] when `N == 0`.
    pub const fn build(range: CalibrationRange) -> Result<Self, CalibrationError> {
        if N == 0 {
            return Err(CalibrationError::NoSegments);
        }

        let span = range.span() as u64;
        let mut levels = [0u16; N];
        let mut i = 0;
        while i < N {
            // Fits in u16: the quotient never exceeds span.
            let step = span * (i as u64 + 1) / N as u64;
            levels[i] = range.min() + step as u16;
            i += 1;
        }

        Ok(Self { levels, range })
    }

    /// Levels in segment order.
    #[inline]
    pub const fn levels(&self) -> &[u16; N] { &self.levels }

    /// Range the table was built from.
    #[inline]
    pub const fn range(&self) -> CalibrationRange { self.range }

    /// Level of the first segment.
    #[inline]
    pub const fn first(&self) -> u16 { self.levels[0] }

    /// Level of the last segment. Never above the range's `max`.
    #[inline]
    pub const fn last(&self) -> u16 { self.levels[N - 1] }

    /// Number of segments a reading lights.
    ///
    /// Counts every level the value meets or exceeds.
    pub fn lit_count(
        &self,
        value: u16,
    ) -> usize {
        self.levels.iter().filter(|&&level| value >= level).count()
    }
}

/// Build a table from raw bounds in one step.
pub const fn build_thresholds<const N: usize>(
    min: u16,
    max: u16,
) -> Result<ThresholdTable<N>, CalibrationError> {
    match CalibrationRange::new(min, max) {
        Ok(range) => ThresholdTable::build(range),
        Err(e) => Err(e),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const MIN: u16 = 13_475;
    const MAX: u16 = 64_655;

    fn device_table() -> ThresholdTable<10> { build_thresholds::<10>(MIN, MAX).unwrap() }

    #[test]
    fn test_device_calibration_levels() {
        let table = device_table();
        assert_eq!(table.first(), 18_593);
        assert_eq!(table.last(), 64_655);
        // 51180 / 10 = 5118 per segment
        for (i, &level) in table.levels().iter().enumerate() {
            assert_eq!(level, MIN + 5_118 * (i as u16 + 1));
        }
    }

    #[test]
    fn test_truncating_division_rounds_levels_down() {
        // span 10, 3 segments: 3, 6, 10 -> 3.33 and 6.66 truncate
        let table = build_thresholds::<3>(0, 10).unwrap();
        assert_eq!(table.levels(), &[3, 6, 10]);

        // span 10, 4 segments: 2.5, 5, 7.5, 10
        let table = build_thresholds::<4>(100, 110).unwrap();
        assert_eq!(table.levels(), &[102, 105, 107, 110]);

        // span 7, 2 segments: 3.5 truncates, last level is exact
        let table = build_thresholds::<2>(0, 7).unwrap();
        assert_eq!(table.levels(), &[3, 7]);
    }

    #[test]
    fn test_uneven_span_truncates_every_level() {
        let table = build_thresholds::<7>(1_000, 1_100).unwrap();
        assert_eq!(table.levels(), &[1_014, 1_028, 1_042, 1_057, 1_071, 1_085, 1_100]);
    }

    #[test]
    fn test_narrow_span_repeats_levels() {
        // span 3 across 10 segments: dead segments share a level
        let table = build_thresholds::<10>(50, 53).unwrap();
        assert_eq!(table.levels(), &[50, 50, 50, 51, 51, 51, 52, 52, 52, 53]);
        assert_eq!(table.lit_count(50), 3);
        assert_eq!(table.lit_count(49), 0);
        assert_eq!(table.lit_count(53), 10);
    }

    #[test]
    fn test_properties_hold_across_ranges() {
        let ranges = [(0u16, 1u16), (0, 9), (0, 10), (1, 2), (13_475, 64_655), (0, u16::MAX), (65_000, u16::MAX)];
        for &(min, max) in &ranges {
            let table = build_thresholds::<10>(min, max).unwrap();
            let levels = table.levels();
            assert_eq!(levels.len(), 10);
            assert!(levels.windows(2).all(|w| w[0] <= w[1]), "{min}..{max} not monotonic");
            assert!(table.last() <= max);
            assert!(table.first() >= min);
        }
    }

    #[test]
    fn test_single_segment_table() {
        let table = build_thresholds::<1>(10, 20).unwrap();
        assert_eq!(table.levels(), &[20]);
        assert_eq!(table.lit_count(19), 0);
        assert_eq!(table.lit_count(20), 1);
    }

    #[test]
    fn test_full_u16_span_does_not_overflow() {
        let table = build_thresholds::<16>(0, u16::MAX).unwrap();
        assert_eq!(table.last(), u16::MAX);
        assert_eq!(table.first(), 4_095);
    }

    #[test]
    fn test_rejects_empty_range() {
        assert_eq!(
            CalibrationRange::new(100, 100),
            Err(CalibrationError::EmptyRange { min: 100, max: 100 })
        );
        assert_eq!(
            build_thresholds::<10>(200, 100),
            Err(CalibrationError::EmptyRange { min: 200, max: 100 })
        );
    }

    #[test]
    fn test_rejects_zero_segments() {
        let range = CalibrationRange::new(0, 100).unwrap();
        assert_eq!(ThresholdTable::<0>::build(range), Err(CalibrationError::NoSegments));
    }

    #[test]
    fn test_lit_count_matches_device_scenarios() {
        let table = device_table();
        assert_eq!(table.lit_count(13_474), 0);
        assert_eq!(table.lit_count(MIN), 0);
        assert_eq!(table.lit_count(18_592), 0);
        assert_eq!(table.lit_count(18_593), 1);
        assert_eq!(table.lit_count(64_654), 9);
        assert_eq!(table.lit_count(64_655), 10);
        assert_eq!(table.lit_count(u16::MAX), 10);
    }

    #[test]
    fn test_error_display() {
        let err = CalibrationError::EmptyRange { min: 5, max: 1 };
        assert_eq!(err.to_string(), "empty calibration range 5..1");
        assert_eq!(
            CalibrationError::NoSegments.to_string(),
            "threshold table needs at least one segment"
        );
    }

    #[test]
    fn test_build_in_const_context() {
        const TABLE: ThresholdTable<10> = match build_thresholds::<10>(MIN, MAX) {
            Ok(table) => table,
            Err(_) => panic!("device calibration rejected"),
        };
        assert_eq!(TABLE, device_table());
        assert_eq!(TABLE.range().span(), 51_180);
    }
}
