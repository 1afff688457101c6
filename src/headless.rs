//! Headless playback
//!
//! Plays the session's sequence to the end on a virtual clock and writes one
//! line per published frame. Useful for scripting and for checking a
//! configuration without a terminal UI.

use crate::array::values_of;
use crate::playback::{Command, PlaybackUpdate, TransportPhase};
use crate::session::Session;
use std::io::{self, Write};
use std::sync::mpsc::Receiver;

/// Play to the end, printing every frame reached. Returns the frame count written.
pub fn run_headless<W: Write>(session: &mut Session, out: &mut W) -> io::Result<usize> {
    let updates = session.subscribe();
    let interval = session.speed().interval();

    let mut written = drain(&updates, out, None)?;
    let mut last_step = Some(0);

    for command in [Command::SetDesiredStep(session.step_limit()), Command::Play] {
        session.dispatch(command).map_err(io::Error::other)?;
    }

    while session.state().is_playing() {
        session.tick(interval);
        let count = drain(&updates, out, last_step)?;
        if count > 0 {
            last_step = Some(session.state().current_step);
        }
        written += count;
    }

    let state = session.state();
    writeln!(
        out,
        "finished: phase={} step={}/{}",
        state.phase,
        state.current_step,
        session.step_limit()
    )?;
    Ok(written)
}

/// Write updates that moved to a new frame
fn drain<W: Write>(
    updates: &Receiver<PlaybackUpdate>,
    out: &mut W,
    mut last_step: Option<usize>,
) -> io::Result<usize> {
    let mut written = 0;
    for update in updates.try_iter() {
        if update.state.phase == TransportPhase::Stopped
            || last_step == Some(update.state.current_step)
        {
            continue;
        }
        last_step = Some(update.state.current_step);
        let (Some(snapshot), Some(operation)) = (&update.snapshot, update.operation) else {
            continue;
        };
        writeln!(
            out,
            "{:>5} {:<22} {:?}",
            update.state.current_step,
            operation.to_string(),
            values_of(snapshot)
        )?;
        written += 1;
    }
    Ok(written)
}
