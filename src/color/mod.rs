mod palette;

use smart_leds::RGB8;

pub use palette::*;

pub type Rgb = RGB8;

/// Mask of the 24 bits a packed word carries on the wire.
pub const WORD_MASK: u32 = 0x00FF_FFFF;

/// Pack a color into the strip-native word (`G<<16 | R<<8 | B`).
///
/// The top byte is always zero.
#[inline]
pub const fn pack_grb(color: Rgb) -> u32 {
    ((color.g as u32) << 16) | ((color.r as u32) << 8) | color.b as u32
}

/// Inverse of [`pack_grb`]. The top byte of `word` is ignored.
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn unpack_grb(word: u32) -> Rgb {
    Rgb {
        r: ((word >> 8) & 0xFF) as u8,
        g: ((word >> 16) & 0xFF) as u8,
        b: (word & 0xFF) as u8,
    }
}
