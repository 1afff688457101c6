// Playback controller: transport state machine over a frame sequence

use super::speed::SpeedTier;
use super::state::{Command, PlaybackState, PlaybackUpdate, TransportPhase};
use crate::snapshot::{ArraySnapshot, Frame, FrameSequence};
use crate::sorting::errors::SortError;
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Duration;
use tracing::{debug, trace};

/// Owns the loaded sequence and the playback counters.
///
/// Collaborators issue commands and read published state; nothing outside
/// the controller can write the counters.
#[derive(Debug, Default)]
pub struct PlaybackController {
    /// Frames being played; `None` until a sequence is loaded
    sequence: Option<FrameSequence>,

    state: PlaybackState,

    /// Time accumulated toward the next frame advance
    pending: Duration,

    /// Subscribers receiving a [`PlaybackUpdate`] on every change
    observers: Vec<Sender<PlaybackUpdate>>,
}

impl PlaybackController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a controller with a sequence already loaded
    pub fn with_sequence(sequence: FrameSequence) -> Self {
        let mut controller = Self::new();
        controller.load(sequence);
        controller
    }

    /// Replace the sequence and hard-reset playback
    pub fn load(&mut self, sequence: FrameSequence) {
        debug!(
            frames = sequence.len(),
            step_limit = sequence.step_limit(),
            "loading frame sequence"
        );
        self.sequence = Some(sequence);
        self.reset();
        self.publish();
    }

    /// Drop the sequence and hard-reset playback
    pub fn unload(&mut self) {
        self.sequence = None;
        self.reset();
        self.publish();
    }

    /// Set the target step, clamped to `0..=step_limit`
    pub fn set_desired_step(&mut self, step: usize) {
        let clamped = step.min(self.step_limit());
        if clamped == self.state.desired_step {
            return;
        }
        self.state.desired_step = clamped;
        self.publish();
    }

    /// Start or resume playback.
    ///
    /// With no pending seek, playback runs to the end of the sequence.
    /// Ignored when there is nothing to play or the last frame is showing.
    pub fn play(&mut self) {
        let limit = self.step_limit();
        if limit == 0 || self.state.is_playing() || self.state.current_step >= limit {
            return;
        }
        if self.state.desired_step == self.state.current_step {
            self.state.desired_step = limit;
        }
        self.state.phase = TransportPhase::Playing;
        // First tick advances immediately
        self.pending = self.state.speed.interval();
        debug!(
            from = self.state.current_step,
            to = self.state.desired_step,
            "playback started"
        );
        self.publish();
    }

    pub fn pause(&mut self) {
        if !self.state.is_playing() {
            return;
        }
        self.state.phase = TransportPhase::Paused;
        self.pending = Duration::ZERO;
        self.publish();
    }

    /// Abandon playback and return to the initial frame. Safe in any phase.
    pub fn stop(&mut self) {
        self.reset();
        self.state.phase = TransportPhase::Stopped;
        self.publish();
        self.state.phase = TransportPhase::Idle;
        self.publish();
    }

    pub fn set_speed(&mut self, tier: u8) -> Result<(), SortError> {
        let speed = SpeedTier::new(tier)?;
        if speed != self.state.speed {
            self.state.speed = speed;
            self.publish();
        }
        Ok(())
    }

    /// Advance playback by `elapsed` wall-clock time.
    ///
    /// Moves at most one frame toward the desired step per call, and only
    /// after a full speed interval has accumulated.
    pub fn tick(&mut self, elapsed: Duration) -> PlaybackState {
        if !self.state.is_playing() {
            return self.state;
        }

        let limit = self.step_limit();
        if limit == 0 {
            self.reset();
            self.publish();
            return self.state;
        }

        if self.state.current_step == self.state.desired_step {
            self.finish_run();
            return self.state;
        }

        let interval = self.state.speed.interval();
        self.pending += elapsed;
        if self.pending < interval {
            return self.state;
        }
        self.pending -= interval;
        if self.pending >= interval {
            self.pending = Duration::ZERO;
        }

        if self.state.current_step < self.state.desired_step {
            self.state.current_step += 1;
        } else {
            self.state.current_step -= 1;
        }
        self.state.logical_step = self
            .current_frame()
            .map(|frame| frame.logical_step)
            .unwrap_or(self.state.current_step);
        trace!(
            current = self.state.current_step,
            desired = self.state.desired_step,
            "advanced frame"
        );

        if self.state.current_step == self.state.desired_step {
            self.finish_run();
        } else {
            self.publish();
        }
        self.state
    }

    /// Apply a command message
    pub fn dispatch(&mut self, command: Command) -> Result<(), SortError> {
        match command {
            Command::Play => self.play(),
            Command::Pause => self.pause(),
            Command::Stop => self.stop(),
            Command::SetDesiredStep(step) => self.set_desired_step(step),
            Command::SetSpeed(tier) => self.set_speed(tier)?,
        }
        Ok(())
    }

    /// Subscribe to state changes; the current state is sent immediately
    pub fn subscribe(&mut self) -> Receiver<PlaybackUpdate> {
        let (tx, rx) = mpsc::channel();
        // A fresh receiver is still alive, so this send cannot fail
        let _ = tx.send(self.update());
        self.observers.push(tx);
        rx
    }

    // ========== Getter methods for UI ==========

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn phase(&self) -> TransportPhase {
        self.state.phase
    }

    pub fn current_step(&self) -> usize {
        self.state.current_step
    }

    pub fn desired_step(&self) -> usize {
        self.state.desired_step
    }

    pub fn logical_step(&self) -> usize {
        self.state.logical_step
    }

    pub fn speed(&self) -> SpeedTier {
        self.state.speed
    }

    /// Maximum valid step; 0 when nothing is loaded
    pub fn step_limit(&self) -> usize {
        self.sequence
            .as_ref()
            .map(FrameSequence::step_limit)
            .unwrap_or(0)
    }

    pub fn sequence(&self) -> Option<&FrameSequence> {
        self.sequence.as_ref()
    }

    pub fn current_frame(&self) -> Option<&Frame> {
        self.sequence
            .as_ref()
            .and_then(|seq| seq.get(self.state.current_step))
    }

    pub fn snapshot(&self) -> Option<ArraySnapshot> {
        self.current_frame().map(|frame| frame.snapshot.clone())
    }

    // ========== Internal helpers ==========

    fn reset(&mut self) {
        self.state.reset();
        self.pending = Duration::ZERO;
    }

    fn finish_run(&mut self) {
        self.state.phase = TransportPhase::Paused;
        self.pending = Duration::ZERO;
        debug!(step = self.state.current_step, "reached desired step");
        self.publish();
    }

    fn update(&self) -> PlaybackUpdate {
        let frame = self.current_frame();
        PlaybackUpdate {
            state: self.state,
            step_limit: self.step_limit(),
            snapshot: frame.map(|f| f.snapshot.clone()),
            operation: frame.map(|f| f.operation),
        }
    }

    fn publish(&mut self) {
        if self.observers.is_empty() {
            return;
        }
        let update = self.update();
        self.observers.retain(|tx| tx.send(update.clone()).is_ok());
    }
}
