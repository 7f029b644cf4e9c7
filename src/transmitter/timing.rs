//! One-wire bit timing and encoding
//!
//! Each bit is clocked out in three phases counted in shift-clock cycles:
//!
//! ```text
//!        rise     data     tail
//! 1:   ‾‾‾‾‾‾‾|‾‾‾‾‾‾‾‾‾|_______
//! 0:   ‾‾‾‾‾‾‾|_________|_______
//! ```
//!
//! The line is high during `rise`, carries the bit value during `data` and
//! is low during `tail`. A frame ends with the line held low for the reset
//! period, which latches the shifted colors into the LEDs.

use core::num::NonZeroU32;

use crate::color::WORD_MASK;

/// Number of bits sent per pixel.
pub const BITS_PER_PIXEL: u32 = 24;

/// Shift-clock timing of the one-wire protocol
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OneWireTimings {
    /// Shift clock frequency
    pub clock_hz: NonZeroU32,
    /// Cycles the line is high at the start of every bit
    pub rise_cycles: u8,
    /// Cycles that carry the bit value (high for 1, low for 0)
    pub data_cycles: u8,
    /// Cycles the line is low at the end of every bit
    pub tail_cycles: u8,
    /// Low period that latches a frame
    pub reset_us: u32,
}

impl OneWireTimings {
    /// WS2812 timing: 8 MHz, 10 cycles per bit (1.25 us)
    pub const WS2812: Self = Self {
        clock_hz: match NonZeroU32::new(8_000_000) {
            Some(hz) => hz,
            None => panic!("zero shift clock"),
        },
        rise_cycles: 2,
        data_cycles: 5,
        tail_cycles: 3,
        reset_us: 80,
    };

    pub const fn cycles_per_bit(&self) -> u32 {
        self.rise_cycles as u32 + self.data_cycles as u32 + self.tail_cycles as u32
    }

    /// Convert shift-clock cycles to nanoseconds (truncated, saturating)
    #[allow(clippy::cast_possible_truncation)]
    pub const fn cycles_to_ns(&self, cycles: u32) -> u32 {
        let ns = cycles as u64 * 1_000_000_000 / self.clock_hz.get() as u64;
        if ns > u32::MAX as u64 {
            u32::MAX
        } else {
            ns as u32
        }
    }

    /// Duration of one bit in nanoseconds
    pub const fn bit_ns(&self) -> u32 {
        self.cycles_to_ns(self.cycles_per_bit())
    }

    /// Pulse shape for a bit value
    pub const fn pulse(&self, bit: bool) -> Pulse {
        if bit {
            Pulse {
                high_cycles: self.rise_cycles as u16 + self.data_cycles as u16,
                low_cycles: self.tail_cycles as u16,
            }
        } else {
            Pulse {
                high_cycles: self.rise_cycles as u16,
                low_cycles: self.data_cycles as u16 + self.tail_cycles as u16,
            }
        }
    }
}

impl Default for OneWireTimings {
    fn default() -> Self {
        Self::WS2812
    }
}

/// One high pulse followed by a low period, in shift-clock cycles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pulse {
    pub high_cycles: u16,
    pub low_cycles: u16,
}

impl Pulse {
    pub fn high_ns(self, timings: &OneWireTimings) -> u32 {
        timings.cycles_to_ns(u32::from(self.high_cycles))
    }

    pub fn low_ns(self, timings: &OneWireTimings) -> u32 {
        timings.cycles_to_ns(u32::from(self.low_cycles))
    }

    /// Line level for every shift-clock cycle of the pulse
    pub fn levels(self) -> impl Iterator<Item = bool> {
        let high = core::iter::repeat_n(true, usize::from(self.high_cycles));
        let low = core::iter::repeat_n(false, usize::from(self.low_cycles));
        high.chain(low)
    }
}

/// Bits of one packed word, most significant first
///
/// Only the low 24 bits are sent; the top byte is discarded.
#[derive(Debug, Clone)]
pub struct WordBits {
    word: u32,
    remaining: u32,
}

impl Iterator for WordBits {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some((self.word >> self.remaining) & 1 == 1)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for WordBits {}

/// Encode one packed word into its 24 wire bits
pub const fn encode_word(word: u32) -> WordBits {
    WordBits {
        word: word & WORD_MASK,
        remaining: BITS_PER_PIXEL,
    }
}

/// Wire bits of a whole sequence of words, in order
pub fn frame_bits(words: &[u32]) -> impl Iterator<Item = bool> + '_ {
    words.iter().flat_map(|&word| encode_word(word))
}

/// Pulses of a whole sequence of words, in order
pub fn frame_pulses<'a>(
    words: &'a [u32],
    timings: &'a OneWireTimings,
) -> impl Iterator<Item = Pulse> + 'a {
    frame_bits(words).map(move |bit| timings.pulse(bit))
}
