use core::ops::Deref;

use crate::color::{Rgb, unpack_grb};
use crate::config::LED_COUNT;

/// A composed, transmit-ready frame
///
/// Every word holds one pixel packed as `G<<16 | R<<8 | B`. A frame is
/// produced by the compositor for a single update and moved into the
/// transmitter; it is never shared with the pixel buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame<const N: usize = LED_COUNT> {
    words: [u32; N],
}

impl<const N: usize> Frame<N> {
    /// A frame with every pixel off
    pub const fn blank() -> Self {
        Self { words: [0; N] }
    }

    pub const fn from_words(words: [u32; N]) -> Self {
        Self { words }
    }

    pub const fn words(&self) -> &[u32; N] {
        &self.words
    }

    /// Decode the color sent to pixel `index`
    pub fn color(&self, index: usize) -> Option<Rgb> {
        self.words.get(index).copied().map(unpack_grb)
    }

    /// Whether every pixel in the frame is off
    pub fn is_blank(&self) -> bool {
        self.words.iter().all(|&word| word == 0)
    }

    pub(crate) fn set(&mut self, index: usize, word: u32) {
        self.words[index] = word;
    }
}

impl<const N: usize> Default for Frame<N> {
    fn default() -> Self {
        Self::blank()
    }
}

impl<const N: usize> Deref for Frame<N> {
    type Target = [u32];

    fn deref(&self) -> &Self::Target {
        &self.words
    }
}
