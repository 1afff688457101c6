//! Playback state published by the controller

use super::speed::SpeedTier;
use crate::snapshot::{ArraySnapshot, Operation};
use std::fmt;

/// Transport state machine phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransportPhase {
    #[default]
    Idle,
    Playing,
    Paused,
    /// Transient: published once by `stop()` before settling in `Idle`
    Stopped,
}

impl fmt::Display for TransportPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TransportPhase::Idle => "idle",
            TransportPhase::Playing => "playing",
            TransportPhase::Paused => "paused",
            TransportPhase::Stopped => "stopped",
        };
        f.write_str(name)
    }
}

/// The coupled playback counters.
///
/// Both steps stay within `0..=step_limit` of the loaded sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlaybackState {
    pub phase: TransportPhase,
    pub current_step: usize,
    pub desired_step: usize,
    /// Completed algorithm operations at `current_step`
    pub logical_step: usize,
    pub speed: SpeedTier,
}

impl PlaybackState {
    pub fn is_playing(&self) -> bool {
        self.phase == TransportPhase::Playing
    }

    /// Reset counters and phase, keeping the speed
    pub(crate) fn reset(&mut self) {
        *self = PlaybackState {
            speed: self.speed,
            ..PlaybackState::default()
        };
    }
}

/// What observers receive on every state change
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackUpdate {
    pub state: PlaybackState,
    pub step_limit: usize,
    /// `None` while no sequence is loaded
    pub snapshot: Option<ArraySnapshot>,
    pub operation: Option<Operation>,
}

/// Commands accepted by [`PlaybackController::dispatch`](super::PlaybackController::dispatch)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Play,
    Pause,
    Stop,
    SetDesiredStep(usize),
    SetSpeed(u8),
}
