use crate::transmitter::OneWireTimings;

/// Number of LEDs on the lightpainting strip.
pub const LED_COUNT: usize = 120;

/// Brightness every pixel starts with.
pub const DEFAULT_BRIGHTNESS: f32 = 0.5;

/// Configuration for a strip and its data line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StripConfig {
    /// Initial per-pixel brightness
    pub brightness: f32,
    /// Bit timing of the one-wire protocol
    pub timings: OneWireTimings,
}

impl StripConfig {
    pub const DEFAULT: Self = Self {
        brightness: DEFAULT_BRIGHTNESS,
        timings: OneWireTimings::WS2812,
    };
}

impl Default for StripConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
