//! Frame generation
//!
//! This module turns an (algorithm, initial array) pair into a complete
//! [`FrameSequence`]:
//! - [`algorithm`]: the closed set of supported sorts
//! - [`recorder`]: working array that records every comparison and mutation
//! - [`errors`]: [`SortError`]
//!
//! # Execution Model
//!
//! Sorts run to completion up front, not lazily per animation tick. Frame 0
//! is the initial array; each comparison adds a frame with unchanged order and
//! each swap or move adds a frame with the post-mutation snapshot. Generation
//! is pure: the same inputs always produce the same frames.

pub mod algorithm;
mod algorithms;
pub mod errors;
pub mod recorder;

pub use algorithm::Algorithm;
pub use errors::SortError;

use crate::array::Element;
use crate::constants::DEFAULT_FRAME_LIMIT;
use crate::snapshot::FrameSequence;
use recorder::FrameRecorder;
use tracing::debug;

/// Generate the full frame sequence for `algorithm` on `initial`
pub fn generate(algorithm: Algorithm, initial: &[Element]) -> Result<FrameSequence, SortError> {
    generate_with_limit(algorithm, initial, DEFAULT_FRAME_LIMIT)
}

/// Generate with an explicit frame budget.
///
/// Fails with [`SortError::FrameLimitExceeded`] instead of returning a
/// truncated sequence.
pub fn generate_with_limit(
    algorithm: Algorithm,
    initial: &[Element],
    frame_limit: usize,
) -> Result<FrameSequence, SortError> {
    let mut recorder = FrameRecorder::new(initial, frame_limit);
    algorithm.record(&mut recorder)?;
    let sequence = recorder.finish();

    debug!(
        algorithm = algorithm.key(),
        elements = initial.len(),
        frames = sequence.len(),
        "generated frame sequence"
    );
    Ok(sequence)
}

/// Generate from a menu key, e.g. `"bubble"`
pub fn generate_by_key(key: &str, initial: &[Element]) -> Result<FrameSequence, SortError> {
    let algorithm: Algorithm = key.parse()?;
    generate(algorithm, initial)
}
