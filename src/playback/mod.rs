//! Seekable, speed-controlled playback of a frame sequence
//!
//! This module provides the transport layer:
//! - [`controller`]: [`PlaybackController`] with play/pause/stop/seek/tick
//! - [`state`]: [`PlaybackState`], [`TransportPhase`], published [`PlaybackUpdate`]s and [`Command`]s
//! - [`speed`]: [`SpeedTier`] and its per-step interval
//!
//! # Tick Model
//!
//! Playback is driven by a host loop calling
//! [`PlaybackController::tick`] with the elapsed wall-clock time. A tick
//! never blocks and never moves more than one frame, so displayed frames are
//! always adjacent to the previous one even under rapid scrubbing.

pub mod controller;
pub mod speed;
pub mod state;

pub use controller::PlaybackController;
pub use speed::SpeedTier;
pub use state::{Command, PlaybackState, PlaybackUpdate, TransportPhase};
