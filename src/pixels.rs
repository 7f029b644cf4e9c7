//! Pixel API
//!
//! The surface scenes talk to. Owns the pixel buffer, the last composed
//! frame and the transmitter, and routes every update through the
//! compositor.

use crate::color::{BLACK, Rgb};
use crate::compositor::{compose_all, compose_all_weighted, compose_one};
use crate::config::{LED_COUNT, StripConfig};
use crate::error::Result;
use crate::frame::Frame;
use crate::strip::Strip;
use crate::transmitter::Transmitter;

/// A strip together with its transmitter
pub struct Pixels<T, const N: usize = LED_COUNT> {
    strip: Strip<N>,
    last_frame: Frame<N>,
    transmitter: T,
}

impl<T: Transmitter<N>, const N: usize> Pixels<T, N> {
    /// Create a black strip with the default brightness
    pub const fn new(transmitter: T) -> Self {
        Self::with_strip(Strip::new(), transmitter)
    }

    pub const fn with_config(config: &StripConfig, transmitter: T) -> Self {
        Self::with_strip(Strip::with_brightness(config.brightness), transmitter)
    }

    pub const fn with_strip(strip: Strip<N>, transmitter: T) -> Self {
        Self {
            strip,
            last_frame: Frame::blank(),
            transmitter,
        }
    }

    pub fn set_color(&mut self, index: usize, color: Rgb) -> Result<()> {
        self.strip.set_color(index, color)
    }

    pub fn set_color_all(&mut self, color: Rgb) {
        self.strip.set_color_all(color);
    }

    pub fn set_brightness(&mut self, index: usize, value: f32) -> Result<()> {
        self.strip.set_brightness(index, value)
    }

    pub fn set_brightness_all(&mut self, value: f32) {
        self.strip.set_brightness_all(value);
    }

    /// Send every pixel scaled by one global brightness
    ///
    /// Stored per-pixel brightness is left untouched.
    pub fn update_all_global(&mut self, brightness: f32) {
        let frame = compose_all(&self.strip, brightness);
        self.send(frame);
    }

    /// Send every pixel scaled by its own brightness
    pub fn update_all_weighted(&mut self) {
        let frame = compose_all_weighted(&self.strip);
        self.send(frame);
    }

    /// Recompose one pixel and send the full frame
    ///
    /// Other pixels keep the values of the last composed frame. Before the
    /// first full update those are all off.
    pub fn update_one(&mut self, index: usize) -> Result<()> {
        let frame = compose_one(&self.strip, &self.last_frame, index)?;
        self.send(frame);
        Ok(())
    }

    /// Turn every pixel black and send an all-off frame
    pub fn clear(&mut self) {
        self.strip.set_color_all(BLACK);
        self.update_all_global(0.0);
    }

    pub const fn strip(&self) -> &Strip<N> {
        &self.strip
    }

    /// The frame most recently handed to the transmitter
    pub const fn last_frame(&self) -> &Frame<N> {
        &self.last_frame
    }

    pub const fn transmitter(&self) -> &T {
        &self.transmitter
    }

    pub fn transmitter_mut(&mut self) -> &mut T {
        &mut self.transmitter
    }

    pub fn into_parts(self) -> (Strip<N>, T) {
        (self.strip, self.transmitter)
    }

    fn send(&mut self, frame: Frame<N>) {
        self.last_frame.clone_from(&frame);
        self.transmitter.transmit(frame);
    }
}
