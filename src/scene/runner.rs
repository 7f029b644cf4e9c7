//! Scene pacing without async/await or platform-specific timers.
//!
//! The caller is responsible for sleeping between ticks.

use embassy_time::{Duration, Instant};
use embedded_hal::delay::DelayNs;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use super::{Scene, Step};
use crate::error::Result;
use crate::pixels::Pixels;
use crate::transmitter::Transmitter;

/// Lateness after which the runner stops catching up.
///
/// If a tick arrives later than this past its deadline, the schedule is
/// restarted from `now` instead of running the following waits short.
pub const DEFAULT_MAX_DRIFT: Duration = Duration::from_millis(100);

/// Result of a scene tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneTick {
    /// When the next step is due
    pub next_deadline: Instant,
    /// How long to wait until the next tick (zero if behind schedule)
    pub sleep_duration: Duration,
    /// Whether the scene has run all its steps
    pub finished: bool,
}

/// Steps through a scene as time passes
///
/// # Usage
///
/// ```ignore
/// let mut runner = SceneRunner::new(scene);
///
/// loop {
///     let tick = runner.tick(&mut pixels, Instant::now())?;
///     if tick.finished {
///         break;
///     }
///     sleep(tick.sleep_duration);
/// }
/// ```
pub struct SceneRunner<'a> {
    scene: Scene<'a>,
    position: usize,
    next_step: Option<Instant>,
    max_drift: Duration,
}

impl<'a> SceneRunner<'a> {
    pub const fn new(scene: Scene<'a>) -> Self {
        Self::with_max_drift(scene, DEFAULT_MAX_DRIFT)
    }

    pub const fn with_max_drift(scene: Scene<'a>, max_drift: Duration) -> Self {
        Self {
            scene,
            position: 0,
            next_step: None,
            max_drift,
        }
    }

    pub const fn is_finished(&self) -> bool {
        self.position >= self.scene.steps.len()
    }

    /// Index of the next step to run
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Start the scene over on the next tick
    pub fn reset(&mut self) {
        self.position = 0;
        self.next_step = None;
    }

    /// Run every step that is due at `now`
    ///
    /// Executes steps until the next [`Step::Wait`] or the end of the scene.
    /// An error aborts the scene: it is reported once and the runner is
    /// finished afterwards.
    pub fn tick<T: Transmitter<N>, const N: usize>(
        &mut self,
        pixels: &mut Pixels<T, N>,
        now: Instant,
    ) -> Result<SceneTick> {
        let mut deadline = match self.next_step {
            Some(deadline) if deadline > now => return Ok(self.pending(deadline, now)),
            // Drift correction: too late, restart the schedule from now
            Some(deadline) if now > deadline + self.max_drift => now,
            Some(deadline) => deadline,
            None => now,
        };

        while let Some(step) = self.scene.steps.get(self.position) {
            self.position += 1;
            if let Step::Wait(wait) = *step {
                deadline += wait;
                break;
            }
            if let Err(err) = step.apply(pixels) {
                #[cfg(feature = "esp32-log")]
                println!(
                    "[SceneRunner] scene {} aborted at step {}: {}",
                    self.scene.name,
                    self.position - 1,
                    err
                );
                self.position = self.scene.steps.len();
                return Err(err);
            }
        }

        self.next_step = Some(deadline);
        Ok(self.pending(deadline, now))
    }

    fn pending(&self, deadline: Instant, now: Instant) -> SceneTick {
        let sleep_duration = if deadline > now {
            deadline - now
        } else {
            Duration::from_ticks(0)
        };
        SceneTick {
            next_deadline: deadline,
            sleep_duration,
            finished: self.is_finished() && sleep_duration == Duration::from_ticks(0),
        }
    }
}

/// Run a whole scene, blocking on `delay` for every wait
pub fn play<T, D, const N: usize>(
    pixels: &mut Pixels<T, N>,
    scene: &Scene<'_>,
    delay: &mut D,
) -> Result<()>
where
    T: Transmitter<N>,
    D: DelayNs,
{
    #[cfg(feature = "esp32-log")]
    println!("[play] scene {} ({} steps)", scene.name, scene.steps.len());

    for step in scene.steps {
        match *step {
            Step::Wait(wait) => wait_us(delay, wait.as_micros()),
            _ => step.apply(pixels)?,
        }
    }
    Ok(())
}

/// Block for `micros`, in chunks `DelayNs` can take
fn wait_us<D: DelayNs>(delay: &mut D, micros: u64) {
    let mut remaining = micros;
    while remaining > 0 {
        let chunk = u32::try_from(remaining).unwrap_or(u32::MAX);
        delay.delay_us(chunk);
        remaining -= u64::from(chunk);
    }
}
