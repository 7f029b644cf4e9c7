//! Data-driven scenes
//!
//! A scene is a flat list of [`Step`]s: pixel mutations, updates and waits.
//! Content lives in the step list; [`SceneRunner`] and [`play`] are the
//! engine that executes it against [`Pixels`].

pub mod library;
mod runner;

use embassy_time::Duration;
use heapless::Vec;

pub use runner::{DEFAULT_MAX_DRIFT, SceneRunner, SceneTick, play};

use crate::color::Rgb;
use crate::error::{Error, Result};
use crate::pixels::Pixels;
use crate::transmitter::Transmitter;

/// One instruction of a scene
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    SetColor { index: usize, color: Rgb },
    SetColorAll(Rgb),
    SetBrightness { index: usize, value: f32 },
    SetBrightnessAll(f32),
    /// Send all pixels at one global brightness
    UpdateAllGlobal(f32),
    /// Send all pixels at their own brightness
    UpdateAllWeighted,
    /// Recompose one pixel and send
    UpdateOne(usize),
    /// Black out the strip
    Clear,
    /// Pause before the next step
    Wait(Duration),
}

impl Step {
    /// Apply the step to `pixels`
    ///
    /// [`Step::Wait`] does nothing here; pacing is up to the runner.
    pub fn apply<T: Transmitter<N>, const N: usize>(&self, pixels: &mut Pixels<T, N>) -> Result<()> {
        match *self {
            Self::SetColor { index, color } => pixels.set_color(index, color)?,
            Self::SetColorAll(color) => pixels.set_color_all(color),
            Self::SetBrightness { index, value } => pixels.set_brightness(index, value)?,
            Self::SetBrightnessAll(value) => pixels.set_brightness_all(value),
            Self::UpdateAllGlobal(brightness) => pixels.update_all_global(brightness),
            Self::UpdateAllWeighted => pixels.update_all_weighted(),
            Self::UpdateOne(index) => pixels.update_one(index)?,
            Self::Clear => pixels.clear(),
            Self::Wait(_) => {}
        }
        Ok(())
    }
}

/// A named, borrowed list of steps
#[derive(Debug, Clone, Copy)]
pub struct Scene<'a> {
    pub name: &'a str,
    pub steps: &'a [Step],
}

impl<'a> Scene<'a> {
    pub const fn new(name: &'a str, steps: &'a [Step]) -> Self {
        Self { name, steps }
    }

    /// Sum of all waits in the scene
    pub fn duration(&self) -> Duration {
        self.steps
            .iter()
            .fold(Duration::from_ticks(0), |total, step| match step {
                Step::Wait(wait) => total + *wait,
                _ => total,
            })
    }
}

/// Builds a scene into a fixed-capacity buffer
///
/// `CAP` is the maximum number of steps.
#[derive(Debug, Clone)]
pub struct SceneBuilder<const CAP: usize> {
    name: &'static str,
    steps: Vec<Step, CAP>,
}

impl<const CAP: usize> SceneBuilder<CAP> {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            steps: Vec::new(),
        }
    }

    /// Append a step
    pub fn push(&mut self, step: Step) -> Result<&mut Self> {
        self.steps
            .push(step)
            .map_err(|_| Error::SceneFull { capacity: CAP })?;
        Ok(self)
    }

    pub fn set_color(&mut self, index: usize, color: Rgb) -> Result<&mut Self> {
        self.push(Step::SetColor { index, color })
    }

    pub fn set_brightness(&mut self, index: usize, value: f32) -> Result<&mut Self> {
        self.push(Step::SetBrightness { index, value })
    }

    pub fn wait_ms(&mut self, millis: u64) -> Result<&mut Self> {
        self.push(Step::Wait(Duration::from_millis(millis)))
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Borrow the built steps as a scene
    pub fn scene(&self) -> Scene<'_> {
        Scene::new(self.name, &self.steps)
    }
}
