//! Error types for frame generation and playback
//!
//! [`SortError`] covers the failures the engine reports to its callers. Seeks
//! outside the valid step range are clamped rather than raised, and transport
//! commands issued in the wrong phase are ignored, so neither has a variant.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortError {
    /// Unknown algorithm key passed to the generator
    #[error("Unsupported algorithm '{key}'")]
    UnsupportedAlgorithm { key: String },

    /// Speed tier outside the supported range
    #[error("Invalid speed tier {tier}: must be between 0 and {max}")]
    InvalidSpeed { tier: u8, max: u8 },

    /// Generation produced more frames than the configured budget
    #[error("Frame limit exceeded: sequence would need more than {limit} frames")]
    FrameLimitExceeded { limit: usize },
}
