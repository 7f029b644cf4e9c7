//! Frame compositor
//!
//! Combines the raw colors of a [`Strip`] with a brightness and packs the
//! result into a transmit-ready [`Frame`].
//!
//! Scaling is linear: every channel is multiplied by the brightness in double
//! precision and truncated toward zero. Products outside `0..=255` are clamped, so a
//! brightness above `1.0` saturates and a negative (or NaN) brightness
//! turns the channel off.

use libm::floor;

use crate::color::{Rgb, pack_grb};
use crate::error::Result;
use crate::frame::Frame;
use crate::strip::{Pixel, Strip};

/// Source of the brightness applied during composition
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Brightness {
    /// One scalar for every pixel; stored per-pixel brightness is ignored
    Global(f32),
    /// Each pixel's own stored brightness
    PerPixel,
}

impl Brightness {
    const fn for_pixel(self, pixel: &Pixel) -> f32 {
        match self {
            Self::Global(value) => value,
            Self::PerPixel => pixel.brightness,
        }
    }
}

/// Scale one channel by `brightness`, truncating and clamping to a byte
///
/// The product is taken in `f64`, so a brightness like `0.29` (stored as
/// slightly less than 0.29) truncates `100` to `28`, not `29`.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn scale_channel(value: u8, brightness: f32) -> u8 {
    let scaled = floor(f64::from(value) * f64::from(brightness));
    if scaled.is_nan() || scaled <= 0.0 {
        0
    } else if scaled >= 255.0 {
        u8::MAX
    } else {
        scaled as u8
    }
}

/// Scale all channels of `color` by `brightness`
#[inline]
pub fn scale_color(color: Rgb, brightness: f32) -> Rgb {
    Rgb {
        r: scale_channel(color.r, brightness),
        g: scale_channel(color.g, brightness),
        b: scale_channel(color.b, brightness),
    }
}

/// Compose every pixel of `strip` with the given brightness source
pub fn compose<const N: usize>(strip: &Strip<N>, brightness: Brightness) -> Frame<N> {
    let mut frame = Frame::blank();
    for (index, pixel) in strip.iter().enumerate() {
        frame.set(index, compose_pixel(pixel, brightness.for_pixel(pixel)));
    }
    frame
}

/// Compose every pixel with one global brightness
///
/// Stored per-pixel brightness is neither used nor modified.
pub fn compose_all<const N: usize>(strip: &Strip<N>, brightness: f32) -> Frame<N> {
    compose(strip, Brightness::Global(brightness))
}

/// Compose every pixel with its own stored brightness
pub fn compose_all_weighted<const N: usize>(strip: &Strip<N>) -> Frame<N> {
    compose(strip, Brightness::PerPixel)
}

/// Recompose a single pixel on top of a previously composed frame
///
/// All other slots are copied from `previous` unchanged. If `previous` was
/// never filled by a full composition, those slots stay as they are
/// (typically zero).
pub fn compose_one<const N: usize>(
    strip: &Strip<N>,
    previous: &Frame<N>,
    index: usize,
) -> Result<Frame<N>> {
    let pixel = strip.pixel(index)?;

    let mut frame = previous.clone();
    frame.set(index, compose_pixel(pixel, pixel.brightness));
    Ok(frame)
}

/// Compose a single pixel into its packed word
#[inline]
pub fn compose_pixel(pixel: &Pixel, brightness: f32) -> u32 {
    pack_grb(scale_color(pixel.color, brightness))
}
