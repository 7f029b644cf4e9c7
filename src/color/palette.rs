//! Named colors used by the lightpainting scenes.
//!
//! The values are dimmed per channel so that the colors look balanced on a
//! WS2812 strip at the same brightness.

use super::Rgb;

pub const WHITE: Rgb = Rgb { r: 120, g: 120, b: 120 };
pub const RED: Rgb = Rgb { r: 220, g: 0, b: 0 };
pub const ORANGE: Rgb = Rgb { r: 200, g: 55, b: 0 };
pub const YELLOW: Rgb = Rgb { r: 180, g: 110, b: 0 };
pub const GREEN: Rgb = Rgb { r: 0, g: 200, b: 0 };
pub const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };
pub const GREEN_BLUE: Rgb = Rgb { r: 0, g: 100, b: 155 };
pub const GREEN_YELLOW: Rgb = Rgb { r: 80, g: 150, b: 0 };
pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
