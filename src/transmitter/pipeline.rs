//! Bounded frame handoff to a shift engine.
//!
//! Models the hardware shifter that clocks frames out while the control
//! loop keeps running. The producer hands over frames by value; the
//! consumer (an interrupt, a second core or a task) takes them in order,
//! clocks them out and reports completion. Frames are never shared, so a
//! frame in flight cannot be torn by later pixel updates, and no frame is
//! ever dropped: a producer facing a full queue waits for room.
//!
//! Thread/interrupt safe via `critical-section`. The queue is backed by a
//! fixed-size `heapless::Deque`.

use core::cell::RefCell;
use core::ops::Deref;

use critical_section::Mutex;
use heapless::Deque;

use super::Transmitter;
use super::line::{OneWireLine, clock_out};
use super::timing::OneWireTimings;
use crate::frame::Frame;

/// Default number of frames that can wait behind the one in flight.
pub const DEFAULT_PIPELINE_DEPTH: usize = 2;

/// Error returned when trying to send to a full pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrySendError<T>(pub T);

/// Observable state of the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    /// Nothing to send
    Idle,
    /// Frames are waiting for the consumer
    Pending,
    /// The consumer is clocking a frame out; `pending` tells whether
    /// other frames are queued behind it
    InFlight { pending: bool },
}

struct Slot<const N: usize, const DEPTH: usize> {
    queue: Deque<Frame<N>, DEPTH>,
    in_flight: bool,
}

/// A bounded frame queue between producer and shift engine
///
/// `DEPTH` is the number of frames that can wait behind the frame in flight.
pub struct ShiftPipeline<const N: usize, const DEPTH: usize = DEFAULT_PIPELINE_DEPTH> {
    inner: Mutex<RefCell<Slot<N, DEPTH>>>,
}

impl<const N: usize, const DEPTH: usize> ShiftPipeline<N, DEPTH> {
    /// Create an idle pipeline
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Slot {
                queue: Deque::new(),
                in_flight: false,
            })),
        }
    }

    /// Get a producer handle implementing [`Transmitter`]
    pub const fn transmitter(&self) -> PipelineTransmitter<'_, N, DEPTH> {
        PipelineTransmitter { pipeline: self }
    }

    /// Get a consumer handle for the shift engine
    pub const fn consumer(&self) -> ShiftConsumer<'_, N, DEPTH> {
        ShiftConsumer { pipeline: self }
    }

    /// Try to queue a frame for the shift engine
    ///
    /// Returns `Err(TrySendError(frame))` if the queue is full.
    pub fn try_send(&self, frame: Frame<N>) -> Result<(), TrySendError<Frame<N>>> {
        critical_section::with(|cs| {
            let mut slot = self.inner.borrow(cs).borrow_mut();
            slot.queue.push_back(frame).map_err(TrySendError)
        })
    }

    /// Queue a frame, waiting for the consumer to make room if needed
    ///
    /// The consumer must run concurrently (interrupt, other core or thread),
    /// otherwise this never returns once the queue is full.
    pub fn send(&self, frame: Frame<N>) {
        let mut frame = frame;
        loop {
            match self.try_send(frame) {
                Ok(()) => return,
                Err(TrySendError(rejected)) => {
                    frame = rejected;
                    core::hint::spin_loop();
                }
            }
        }
    }

    /// Take the oldest queued frame and mark it as in flight
    ///
    /// Returns `None` if nothing is queued or a frame is already in flight.
    pub fn begin(&self) -> Option<Frame<N>> {
        critical_section::with(|cs| {
            let mut slot = self.inner.borrow(cs).borrow_mut();
            if slot.in_flight {
                return None;
            }
            let frame = slot.queue.pop_front()?;
            slot.in_flight = true;
            Some(frame)
        })
    }

    /// Mark the frame in flight as fully clocked out
    pub fn finish(&self) {
        critical_section::with(|cs| {
            self.inner.borrow(cs).borrow_mut().in_flight = false;
        });
    }

    pub fn state(&self) -> PipelineState {
        critical_section::with(|cs| {
            let slot = self.inner.borrow(cs).borrow();
            match (slot.in_flight, !slot.queue.is_empty()) {
                (false, false) => PipelineState::Idle,
                (false, true) => PipelineState::Pending,
                (true, pending) => PipelineState::InFlight { pending },
            }
        })
    }

    /// Number of frames waiting behind the one in flight
    pub fn queued(&self) -> usize {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().queue.len())
    }
}

impl<const N: usize, const DEPTH: usize> Default for ShiftPipeline<N, DEPTH> {
    fn default() -> Self {
        Self::new()
    }
}

/// Producer handle of a [`ShiftPipeline`]
///
/// This is a lightweight reference that can be copied and passed around.
#[derive(Clone, Copy)]
pub struct PipelineTransmitter<'a, const N: usize, const DEPTH: usize = DEFAULT_PIPELINE_DEPTH> {
    pipeline: &'a ShiftPipeline<N, DEPTH>,
}

impl<const N: usize, const DEPTH: usize> Transmitter<N> for PipelineTransmitter<'_, N, DEPTH> {
    /// Queue the frame, waiting while the pipeline is full
    fn transmit(&mut self, frame: Frame<N>) {
        self.pipeline.send(frame);
    }
}

/// Consumer handle of a [`ShiftPipeline`], owned by the shift engine
#[derive(Clone, Copy)]
pub struct ShiftConsumer<'a, const N: usize, const DEPTH: usize = DEFAULT_PIPELINE_DEPTH> {
    pipeline: &'a ShiftPipeline<N, DEPTH>,
}

impl<'a, const N: usize, const DEPTH: usize> ShiftConsumer<'a, N, DEPTH> {
    /// Take the next frame, if any
    ///
    /// The pipeline stays in flight until the returned guard is dropped.
    pub fn take(&self) -> Option<InFlightFrame<'a, N, DEPTH>> {
        let frame = self.pipeline.begin()?;
        Some(InFlightFrame {
            pipeline: self.pipeline,
            frame,
        })
    }

    /// Clock the next queued frame out on `line`
    ///
    /// Returns `Ok(true)` if a frame was sent and `Ok(false)` if there was
    /// nothing to send. On a line error the frame is dropped and the
    /// pipeline is released.
    pub fn poll<L: OneWireLine>(
        &self,
        line: &mut L,
        timings: &OneWireTimings,
    ) -> Result<bool, L::Error> {
        let Some(frame) = self.take() else {
            return Ok(false);
        };
        clock_out(line, &frame, timings)?;
        Ok(true)
    }
}

/// A frame being clocked out
///
/// Dropping the guard marks the transmission as finished.
pub struct InFlightFrame<'a, const N: usize, const DEPTH: usize = DEFAULT_PIPELINE_DEPTH> {
    pipeline: &'a ShiftPipeline<N, DEPTH>,
    frame: Frame<N>,
}

impl<const N: usize, const DEPTH: usize> Deref for InFlightFrame<'_, N, DEPTH> {
    type Target = Frame<N>;

    fn deref(&self) -> &Self::Target {
        &self.frame
    }
}

impl<const N: usize, const DEPTH: usize> Drop for InFlightFrame<'_, N, DEPTH> {
    fn drop(&mut self) {
        self.pipeline.finish();
    }
}
