//! # Introduction
//!
//! SorTTY animates sorting algorithms in the terminal. Every comparison and
//! swap a sort performs is recorded up front as a frame; the frame history is
//! then played, paused and scrubbed forward and backward through a terminal
//! UI built with [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Config → Shuffled array → Frame generator → Frame sequence → Playback controller → TUI
//! ```
//!
//! 1. [`array`]: elements with stable identities, `1..=N` construction and
//!    seeded Fisher–Yates shuffling.
//! 2. [`sorting`]: runs a chosen [`sorting::Algorithm`] to completion and
//!    records a [`snapshot::Frame`] for every step.
//! 3. [`snapshot`]: frames, operations and the immutable
//!    [`snapshot::FrameSequence`].
//! 4. [`playback`]: the transport state machine: play, pause, stop, seek,
//!    speed and the `tick` that advances one frame at a time.
//! 5. [`session`]: ties configuration, array and controller together and
//!    rebuilds on every configuration change.
//! 6. [`ui`]: ratatui-based TUI; not part of the stable library API.
//!
//! [`config`] reads TOML and flag settings, and [`headless`] plays a session
//! to the end without a terminal.
//!
//! ## Supported algorithms
//!
//! Bubble, selection, insertion, quick (Lomuto), merge (in place) and heap sort.

pub mod array;
pub mod config;
pub mod constants;
pub mod headless;
pub mod playback;
pub mod session;
pub mod snapshot;
pub mod sorting;
pub mod ui;
