//! Serial pixel transmitter
//!
//! Turns composed frames into one-wire pulses. The protocol is
//! unidirectional: there is no acknowledgment and a disconnected strip
//! cannot be detected, so transmitting never reports an error.

mod line;
mod pipeline;
mod timing;

#[cfg(feature = "esp32-log")]
use esp_println::println;

pub use line::{BitBangLine, OneWireLine, clock_out};
pub use pipeline::{
    DEFAULT_PIPELINE_DEPTH, InFlightFrame, PipelineState, PipelineTransmitter, ShiftConsumer,
    ShiftPipeline, TrySendError,
};
pub use timing::{
    BITS_PER_PIXEL, OneWireTimings, Pulse, WordBits, encode_word, frame_bits, frame_pulses,
};

use crate::frame::Frame;

/// Abstract frame transmitter
///
/// Implement this trait to support different hardware platforms. The frame
/// is handed over by value; the caller keeps no reference to it.
pub trait Transmitter<const N: usize> {
    /// Send a full frame to the strip
    fn transmit(&mut self, frame: Frame<N>);
}

impl<const N: usize, T: Transmitter<N> + ?Sized> Transmitter<N> for &mut T {
    fn transmit(&mut self, frame: Frame<N>) {
        (**self).transmit(frame);
    }
}

/// Transmitter that clocks every frame out synchronously on a line
///
/// `transmit` returns once the frame and the latch period are on the wire.
pub struct DirectTransmitter<L> {
    line: L,
    timings: OneWireTimings,
}

impl<L: OneWireLine> DirectTransmitter<L> {
    pub const fn new(line: L, timings: OneWireTimings) -> Self {
        Self { line, timings }
    }

    pub const fn timings(&self) -> &OneWireTimings {
        &self.timings
    }

    pub fn line_mut(&mut self) -> &mut L {
        &mut self.line
    }

    pub fn release(self) -> L {
        self.line
    }
}

impl<const N: usize, L: OneWireLine> Transmitter<N> for DirectTransmitter<L> {
    fn transmit(&mut self, frame: Frame<N>) {
        if let Err(_err) = clock_out(&mut self.line, &frame, &self.timings) {
            #[cfg(feature = "esp32-log")]
            println!("[DirectTransmitter] frame aborted: {:?}", _err);
        }
    }
}
