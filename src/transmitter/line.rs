use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use super::timing::{OneWireTimings, Pulse, frame_pulses};

/// A data line that can emit one-wire pulses
///
/// Implemented by anything that can hold a pin high and low for a number of
/// shift-clock cycles: a bit-banged GPIO, an SPI peripheral, a PIO state
/// machine or a test recorder.
pub trait OneWireLine {
    type Error: core::fmt::Debug;

    /// Emit one pulse: high for `pulse.high_cycles`, then low for `pulse.low_cycles`
    fn send_pulse(&mut self, pulse: Pulse, timings: &OneWireTimings) -> Result<(), Self::Error>;

    /// Hold the line low long enough for the strip to latch the frame
    fn latch(&mut self, timings: &OneWireTimings) -> Result<(), Self::Error>;
}

/// Clock a frame out on `line`, followed by the latch period
///
/// Stops at the first line error. The strip shows a partially updated frame
/// until the next complete transmission.
pub fn clock_out<L: OneWireLine>(
    line: &mut L,
    words: &[u32],
    timings: &OneWireTimings,
) -> Result<(), L::Error> {
    for pulse in frame_pulses(words, timings) {
        line.send_pulse(pulse, timings)?;
    }
    line.latch(timings)
}

/// One-wire line driven by toggling a GPIO pin
///
/// Accuracy depends entirely on `D` and on nothing interrupting the loop.
/// Jitter corrupts colors of the current frame only.
pub struct BitBangLine<P, D> {
    pin: P,
    delay: D,
}

impl<P: OutputPin, D: DelayNs> BitBangLine<P, D> {
    /// Create a new line and drive the pin low
    pub fn new(mut pin: P, delay: D) -> Result<Self, P::Error> {
        pin.set_low()?;
        Ok(Self { pin, delay })
    }

    /// Release the pin and the delay provider
    pub fn release(self) -> (P, D) {
        (self.pin, self.delay)
    }
}

impl<P: OutputPin, D: DelayNs> OneWireLine for BitBangLine<P, D> {
    type Error = P::Error;

    fn send_pulse(&mut self, pulse: Pulse, timings: &OneWireTimings) -> Result<(), Self::Error> {
        self.pin.set_high()?;
        self.delay.delay_ns(pulse.high_ns(timings));
        self.pin.set_low()?;
        self.delay.delay_ns(pulse.low_ns(timings));
        Ok(())
    }

    fn latch(&mut self, timings: &OneWireTimings) -> Result<(), Self::Error> {
        self.pin.set_low()?;
        self.delay.delay_us(timings.reset_us);
        Ok(())
    }
}
