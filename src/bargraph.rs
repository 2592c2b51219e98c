//! LED bar-graph rendering.
//!
//! A [`BarGraph`] owns `N` output lines and sets every one of them from a
//! reading and a [`ThresholdTable`] on each call. Nothing is remembered
//! between calls: the same reading always produces the same pin states.

use embedded_hal::digital::{OutputPin, PinState};

use crate::thresholds::ThresholdTable;

/// Row of `N` LEDs driven through [`OutputPin`]s, segment 0 first.
pub struct BarGraph<P, const N: usize> {
    segments: [P; N],
}

impl<P: OutputPin, const N: usize> BarGraph<P, N> {
    /// Wrap the segment pins in bar order.
    pub const fn new(segments: [P; N]) -> Self { Self { segments } }

    /// Light segment `i` iff `value >= table.levels()[i]`.
    ///
    /// Returns the number of lit segments. Stops at the first pin error.
    pub fn render(
        &mut self,
        value: u16,
        table: &ThresholdTable<N>,
    ) -> Result<usize, P::Error> {
        let mut lit = 0;
        for (pin, &level) in self.segments.iter_mut().zip(table.levels()) {
            let on = value >= level;
            pin.set_state(PinState::from(on))?;
            lit += usize::from(on);
        }
        Ok(lit)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
