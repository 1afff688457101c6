//! Main TUI application state and logic

use crate::playback::{Command, TransportPhase};
use crate::session::Session;
use crate::sorting::{Algorithm, SortError};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Input poll timeout; also the finest tick granularity
const POLL_INTERVAL: Duration = Duration::from_millis(16);

/// The main application state
pub struct App {
    /// Configuration, initial array and playback controller
    pub session: Session,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// When the controller was last ticked
    pub last_tick: Instant,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    /// Create a new app around a session
    pub fn new(session: Session) -> Self {
        App {
            session,
            should_quit: false,
            status_message: String::from("Ready!"),
            last_tick: Instant::now(),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or(Instant::now()),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.tick();

            // Use poll with timeout so playback keeps ticking without input
            if event::poll(POLL_INTERVAL)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Feed elapsed wall-clock time to the controller
    fn tick(&mut self) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_tick);
        self.last_tick = now;

        let was_playing = self.session.state().is_playing();
        let state = self.session.tick(elapsed);
        if was_playing && state.phase == TransportPhase::Paused {
            self.status_message = if state.current_step == self.session.step_limit() {
                "Sorted!".to_string()
            } else {
                format!("Reached step {}", state.current_step)
            };
        }
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Min(0),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(size);

        let state = self.session.state();
        let step_limit = self.session.step_limit();
        let has_sequence = self.session.sequence().is_some();
        let snapshot = self.session.display_snapshot();
        let operation = self
            .session
            .controller()
            .current_frame()
            .map(|f| f.operation);

        super::panes::render_title_pane(frame, chunks[0], self.session.algorithm());

        super::panes::render_bars_pane(
            frame,
            chunks[1],
            super::panes::BarsRenderData {
                elements: &snapshot,
                operation,
                finished: has_sequence && state.current_step == step_limit,
            },
        );

        super::panes::render_info_pane(
            frame,
            chunks[2],
            super::panes::InfoRenderData {
                elements: self.session.element_count(),
                max_elements: self.session.config().max_elements(),
                speed_label: self.session.speed().to_string(),
                seed: self.session.seed(),
                logical_step: state.logical_step,
                desired_step: state.desired_step,
                step_limit,
            },
        );

        super::panes::render_status_bar(
            frame,
            chunks[3],
            super::panes::StatusRenderData {
                message: &self.status_message,
                current_step: state.current_step,
                step_limit,
                phase: state.phase,
                has_sequence,
            },
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        let state = self.session.state();
        let step_limit = self.session.step_limit();

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            // Number keys scrub to a tenth of the sequence
            KeyCode::Char(c @ '0'..='9') => {
                let tenth = c.to_digit(10).unwrap_or(0) as usize;
                let target = step_limit * tenth / 10;
                self.seek(target);
            }
            KeyCode::Left => {
                self.seek(state.desired_step.saturating_sub(1));
            }
            KeyCode::Right => {
                self.seek(state.desired_step + 1);
            }
            KeyCode::Char(' ') => {
                // Toggle playback (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    if state.is_playing() {
                        self.command(Command::Pause);
                        self.status_message = "Paused".to_string();
                    } else {
                        self.command(Command::Play);
                        self.status_message = if self.session.state().is_playing() {
                            "Playing...".to_string()
                        } else {
                            "Nothing to play".to_string()
                        };
                    }
                }
            }
            KeyCode::Enter => {
                // Run to the end of the sequence
                self.seek(step_limit);
                self.status_message = "Running to end...".to_string();
            }
            KeyCode::Backspace => {
                self.command(Command::Stop);
                self.status_message = "Stopped".to_string();
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                let tier = self.session.speed().faster().tier();
                self.command(Command::SetSpeed(tier));
                self.status_message = format!("Speed: {}", self.session.speed());
            }
            KeyCode::Char('-') | KeyCode::Char('_') => {
                let tier = self.session.speed().slower().tier();
                self.command(Command::SetSpeed(tier));
                self.status_message = format!("Speed: {}", self.session.speed());
            }
            KeyCode::Char('a') => {
                let next = self
                    .session
                    .algorithm()
                    .map(Algorithm::next)
                    .unwrap_or(Algorithm::Bubble);
                self.select_algorithm(next);
            }
            KeyCode::Char('A') => {
                let prev = self
                    .session
                    .algorithm()
                    .map(Algorithm::prev)
                    .unwrap_or(Algorithm::Heap);
                self.select_algorithm(prev);
            }
            KeyCode::Char(']') => {
                let count = self.session.element_count() + 1;
                self.resize(count);
            }
            KeyCode::Char('[') => {
                let count = self.session.element_count().saturating_sub(1);
                self.resize(count);
            }
            KeyCode::Char('r') | KeyCode::Char('R') => match self.session.toggle_shuffle() {
                Ok(()) => self.status_message = "Shuffled".to_string(),
                Err(e) => self.report(e),
            },
            _ => {}
        }
    }

    /// Move the desired step and let playback animate toward it
    fn seek(&mut self, target: usize) {
        self.command(Command::SetDesiredStep(target));
        self.command(Command::Play);
        let state = self.session.state();
        self.status_message =
            if !state.is_playing() && state.current_step == self.session.step_limit() {
                "At the last step, press Backspace to start over".to_string()
            } else {
                format!("Seeking to step {}", state.desired_step)
            };
    }

    fn select_algorithm(&mut self, algorithm: Algorithm) {
        match self.session.select_algorithm(algorithm) {
            Ok(()) => {
                info!(algorithm = algorithm.key(), "algorithm selected");
                self.status_message = format!("{} ready", algorithm.title());
            }
            Err(e) => self.report(e),
        }
    }

    fn resize(&mut self, count: usize) {
        match self.session.set_element_count(count) {
            Ok(applied) => self.status_message = format!("{} elements", applied),
            Err(e) => self.report(e),
        }
    }

    fn command(&mut self, command: Command) {
        if let Err(e) = self.session.dispatch(command) {
            self.report(e);
        }
    }

    fn report(&mut self, error: SortError) {
        warn!(%error, "command rejected");
        self.status_message = format!("Error: {}", error);
    }
}
