//! Pixel buffer
//!
//! Holds the raw color and the brightness scalar of every LED. This is the
//! single source of truth for the strip; frames are always derived from it.

use crate::color::{BLACK, Rgb};
use crate::config::{DEFAULT_BRIGHTNESS, LED_COUNT};
use crate::error::{Result, check_index};

/// A single LED as stored in the buffer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pixel {
    pub color: Rgb,
    pub brightness: f32,
}

impl Pixel {
    const fn new(brightness: f32) -> Self {
        Self {
            color: BLACK,
            brightness,
        }
    }
}

/// Fixed-size pixel buffer
///
/// `N` is the number of LEDs in the strip.
#[derive(Debug, Clone)]
pub struct Strip<const N: usize = LED_COUNT> {
    pixels: [Pixel; N],
}

impl<const N: usize> Strip<N> {
    /// Create a black strip with the default brightness
    pub const fn new() -> Self {
        Self::with_brightness(DEFAULT_BRIGHTNESS)
    }

    /// Create a black strip with every pixel at `brightness`
    pub const fn with_brightness(brightness: f32) -> Self {
        Self {
            pixels: [Pixel::new(brightness); N],
        }
    }

    /// Number of pixels
    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Set the raw color of one pixel
    pub fn set_color(&mut self, index: usize, color: Rgb) -> Result<()> {
        self.pixel_mut(index)?.color = color;
        Ok(())
    }

    /// Set the raw color of every pixel
    pub fn set_color_all(&mut self, color: Rgb) {
        for pixel in &mut self.pixels {
            pixel.color = color;
        }
    }

    /// Set the brightness of one pixel
    ///
    /// The value is stored as given. Values outside `0.0..=1.0` are clamped
    /// when the pixel is composed, not here.
    pub fn set_brightness(&mut self, index: usize, value: f32) -> Result<()> {
        self.pixel_mut(index)?.brightness = value;
        Ok(())
    }

    /// Set the brightness of every pixel
    pub fn set_brightness_all(&mut self, value: f32) {
        for pixel in &mut self.pixels {
            pixel.brightness = value;
        }
    }

    pub fn color(&self, index: usize) -> Result<Rgb> {
        Ok(self.pixel(index)?.color)
    }

    pub fn brightness(&self, index: usize) -> Result<f32> {
        Ok(self.pixel(index)?.brightness)
    }

    /// Get a pixel by index
    pub fn pixel(&self, index: usize) -> Result<&Pixel> {
        let index = check_index(index, N)?;
        Ok(&self.pixels[index])
    }

    fn pixel_mut(&mut self, index: usize) -> Result<&mut Pixel> {
        let index = check_index(index, N)?;
        Ok(&mut self.pixels[index])
    }

    /// Iterate over all pixels in strip order
    pub fn iter(&self) -> core::slice::Iter<'_, Pixel> {
        self.pixels.iter()
    }
}

impl<const N: usize> Default for Strip<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, const N: usize> IntoIterator for &'a Strip<N> {
    type Item = &'a Pixel;
    type IntoIter = core::slice::Iter<'a, Pixel>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
