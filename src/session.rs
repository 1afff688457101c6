//! Visualizer session: configuration, initial array and playback
//!
//! A [`Session`] ties the pieces together the way the menu and controls see
//! them. Changing the algorithm, the element count or the shuffle toggle
//! builds a new initial array and frame sequence and hard-resets playback.
//! A change that fails leaves the previous array and sequence in place.

use crate::array::{shuffled_array, Element, SeedStream};
use crate::config::VisualizerConfig;
use crate::playback::{Command, PlaybackController, PlaybackState, PlaybackUpdate, SpeedTier};
use crate::snapshot::{ArraySnapshot, FrameSequence};
use crate::sorting::{self, Algorithm, SortError};
use std::sync::mpsc::Receiver;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

pub struct Session {
    config: VisualizerConfig,
    seeds: SeedStream,
    /// Flipped by every reshuffle request
    shuffle: bool,
    initial: Vec<Element>,
    controller: PlaybackController,
}

impl Session {
    pub fn new(config: VisualizerConfig) -> Result<Self, SortError> {
        let seeds = SeedStream::new(config.seed);
        let mut controller = PlaybackController::new();
        controller.set_speed(config.speed.tier())?;

        let mut session = Session {
            initial: Vec::new(),
            seeds,
            shuffle: false,
            controller,
            config,
        };
        session.rebuild(session.config.algorithm, session.config.elements)?;
        Ok(session)
    }

    /// Select an algorithm by menu key
    pub fn set_algorithm(&mut self, key: &str) -> Result<(), SortError> {
        let algorithm: Algorithm = key.parse()?;
        self.select_algorithm(algorithm)
    }

    pub fn select_algorithm(&mut self, algorithm: Algorithm) -> Result<(), SortError> {
        self.rebuild(Some(algorithm), self.config.elements)
    }

    /// Change the element count, clamped to the allowed range.
    ///
    /// Returns the count actually applied.
    pub fn set_element_count(&mut self, count: usize) -> Result<usize, SortError> {
        let count = self.config.clamp_elements(count);
        if count != self.config.elements {
            self.rebuild(self.config.algorithm, count)?;
        }
        Ok(count)
    }

    /// Flip the shuffle toggle, drawing a new array
    pub fn toggle_shuffle(&mut self) -> Result<(), SortError> {
        let previous = self.seeds.clone();
        self.seeds.advance();
        if let Err(e) = self.rebuild(self.config.algorithm, self.config.elements) {
            self.seeds = previous;
            return Err(e);
        }
        self.shuffle = !self.shuffle;
        Ok(())
    }

    pub fn set_speed(&mut self, tier: u8) -> Result<(), SortError> {
        self.controller.set_speed(tier)?;
        self.config.speed = self.controller.speed();
        Ok(())
    }

    pub fn dispatch(&mut self, command: Command) -> Result<(), SortError> {
        self.controller.dispatch(command)?;
        self.config.speed = self.controller.speed();
        Ok(())
    }

    pub fn tick(&mut self, elapsed: Duration) -> PlaybackState {
        self.controller.tick(elapsed)
    }

    pub fn subscribe(&mut self) -> Receiver<PlaybackUpdate> {
        self.controller.subscribe()
    }

    // ========== Getter methods for UI ==========

    pub fn controller(&self) -> &PlaybackController {
        &self.controller
    }

    pub fn state(&self) -> PlaybackState {
        self.controller.state()
    }

    pub fn config(&self) -> &VisualizerConfig {
        &self.config
    }

    pub fn algorithm(&self) -> Option<Algorithm> {
        self.config.algorithm
    }

    pub fn element_count(&self) -> usize {
        self.config.elements
    }

    pub fn speed(&self) -> SpeedTier {
        self.controller.speed()
    }

    pub fn shuffle_enabled(&self) -> bool {
        self.shuffle
    }

    /// Seed of the current initial array
    pub fn seed(&self) -> u64 {
        self.seeds.current()
    }

    pub fn initial_array(&self) -> &[Element] {
        &self.initial
    }

    pub fn sequence(&self) -> Option<&FrameSequence> {
        self.controller.sequence()
    }

    pub fn step_limit(&self) -> usize {
        self.controller.step_limit()
    }

    /// Array to draw: the current frame, or the initial array when no
    /// algorithm has been chosen yet
    pub fn display_snapshot(&self) -> ArraySnapshot {
        self.controller
            .snapshot()
            .unwrap_or_else(|| Arc::from(self.initial.as_slice()))
    }

    /// Build the array and sequence for new settings, committing only if
    /// generation succeeds
    fn rebuild(&mut self, algorithm: Option<Algorithm>, elements: usize) -> Result<(), SortError> {
        let initial = shuffled_array(elements, self.seeds.current());
        let sequence = algorithm
            .map(|algo| sorting::generate_with_limit(algo, &initial, self.config.frame_limit))
            .transpose()?;

        self.config.algorithm = algorithm;
        self.config.elements = elements;
        self.initial = initial;

        match sequence {
            Some(sequence) => {
                info!(
                    algorithm = algorithm.map(Algorithm::key).unwrap_or("none"),
                    elements,
                    step_limit = sequence.step_limit(),
                    "rebuilt frame sequence"
                );
                self.controller.load(sequence);
            }
            None => {
                debug!(elements, "no algorithm selected");
                self.controller.unload();
            }
        }
        Ok(())
    }
}
