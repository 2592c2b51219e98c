//! One sensor wired to one bar graph.
//!
//! A [`SensorChannel`] owns the threshold table built for its sensor and the
//! bar that displays it, so each sensor can carry its own calibration.

use embedded_hal::digital::OutputPin;

use crate::bargraph::BarGraph;
use crate::report::Reading;
use crate::thresholds::{CalibrationError, CalibrationRange, ThresholdTable};

/// A labelled sensor with its own threshold table and bar graph.
pub struct SensorChannel<P, const N: usize> {
    label: &'static str,
    table: ThresholdTable<N>,
    bar: BarGraph<P, N>,
    last: Option<u16>,
}

impl<P: OutputPin, const N: usize> SensorChannel<P, N> {
    /// Build the channel's table from `range` and take ownership of its bar.
    pub fn new(
        label: &'static str,
        range: CalibrationRange,
        bar: BarGraph<P, N>,
    ) -> Result<Self, CalibrationError> {
        Ok(Self {
            label,
            table: ThresholdTable::build(range)?,
            bar,
            last: None,
        })
    }

    /// Show a fresh reading.
    ///
    /// `None` (failed conversion) leaves the bar as it was. Returns the number
    /// of lit segments when the bar was redrawn.
    pub fn apply(
        &mut self,
        reading: Option<u16>,
    ) -> Result<Option<usize>, P::Error> {
        self.last = reading;
        match reading {
            Some(value) => self.bar.render(value, &self.table).map(Some),
            None => Ok(None),
        }
    }

    /// Label and value from the latest [`apply`](Self::apply), for the log line.
    pub fn reading(&self) -> Reading<'static> { Reading::new(self.label, self.last) }

    /// Name used in the log line.
    #[inline]
    pub fn label(&self) -> &'static str { self.label }

    /// Levels this channel's bar is drawn against.
    #[inline]
    pub fn table(&self) -> &ThresholdTable<N> { &self.table }
}

#[cfg(test)]
mod tests {
    use core::convert::Infallible;
    use std::cell::Cell;
    use std::rc::Rc;

    use embedded_hal::digital::ErrorType;

    use super::*;

    #[derive(Clone, Default)]
    struct LedPin(Rc<Cell<bool>>);

    impl ErrorType for LedPin {
        type Error = Infallible;
    }

    impl OutputPin for LedPin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.0.set(false);
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.0.set(true);
            Ok(())
        }
    }

    fn channel(
        min: u16,
        max: u16,
    ) -> (SensorChannel<LedPin, 4>, [LedPin; 4]) {
        let pins: [LedPin; 4] = core::array::from_fn(|_| LedPin::default());
        let range = CalibrationRange::new(min, max).unwrap();
        let channel = SensorChannel::new("Gas", range, BarGraph::new(pins.clone())).unwrap();
        (channel, pins)
    }

    fn lit(pins: &[LedPin]) -> usize { pins.iter().filter(|p| p.0.get()).count() }

    #[test]
    fn test_apply_renders_reading() {
        let (mut ch, pins) = channel(0, 400);
        assert_eq!(ch.apply(Some(250)), Ok(Some(2)));
        assert_eq!(lit(&pins), 2);
        assert_eq!(ch.reading(), Reading::new("Gas", Some(250)));
    }

    #[test]
    fn test_failed_reading_keeps_bar() {
        let (mut ch, pins) = channel(0, 400);
        ch.apply(Some(400)).unwrap();
        assert_eq!(ch.apply(None), Ok(None));
        assert_eq!(lit(&pins), 4);
        assert_eq!(ch.reading(), Reading::new("Gas", None));
    }

    #[test]
    fn test_channels_use_their_own_calibration() {
        let (mut low, low_pins) = channel(0, 400);
        let (mut high, high_pins) = channel(1_000, 2_000);

        low.apply(Some(500)).unwrap();
        high.apply(Some(500)).unwrap();

        assert_eq!(lit(&low_pins), 4);
        assert_eq!(lit(&high_pins), 0);
        assert_eq!(high.table().levels(), &[1_250, 1_500, 1_750, 2_000]);
    }

    #[test]
    fn test_label() {
        let (ch, _) = channel(0, 400);
        assert_eq!(ch.label(), "Gas");
        assert_eq!(ch.reading(), Reading::new("Gas", None));
    }

    #[test]
    fn test_zero_segment_channel_is_rejected() {
        let range = CalibrationRange::new(0, 10).unwrap();
        let bar: BarGraph<LedPin, 0> = BarGraph::new([]);
        assert!(matches!(SensorChannel::new("Gas", range, bar), Err(CalibrationError::NoSegments)));
    }
}
