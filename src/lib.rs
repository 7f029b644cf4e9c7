#![no_std]

pub mod color;
pub mod compositor;
pub mod config;
pub mod error;
pub mod frame;
pub mod pixels;
pub mod scene;
pub mod strip;
pub mod transmitter;

pub use compositor::{Brightness, compose_all, compose_all_weighted, compose_one};
pub use config::{DEFAULT_BRIGHTNESS, LED_COUNT, StripConfig};
pub use error::{Error, Result};
pub use frame::Frame;
pub use pixels::Pixels;
pub use scene::{Scene, SceneBuilder, SceneRunner, SceneTick, Step};
pub use strip::{Pixel, Strip};
pub use transmitter::{
    BitBangLine, DirectTransmitter, OneWireLine, OneWireTimings, ShiftPipeline, Transmitter,
};

pub use color::Rgb;
pub use embassy_time::{Duration, Instant};
