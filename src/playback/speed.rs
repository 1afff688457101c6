//! Discrete playback speed tiers

use crate::constants::{BASE_STEP_INTERVAL, DEFAULT_SPEED_TIER, SPEED_TIER_COUNT};
use crate::sorting::errors::SortError;
use std::fmt;
use std::time::Duration;

/// Playback speed; tier 0 is the slowest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SpeedTier(u8);

impl SpeedTier {
    pub const SLOW: SpeedTier = SpeedTier(0);
    pub const MEDIUM: SpeedTier = SpeedTier(2);
    pub const FAST: SpeedTier = SpeedTier(SPEED_TIER_COUNT - 1);

    /// Validate a raw tier
    pub fn new(tier: u8) -> Result<Self, SortError> {
        if tier < SPEED_TIER_COUNT {
            Ok(SpeedTier(tier))
        } else {
            Err(SortError::InvalidSpeed {
                tier,
                max: SPEED_TIER_COUNT - 1,
            })
        }
    }

    pub fn tier(self) -> u8 {
        self.0
    }

    /// Delay between two frame advances
    pub fn interval(self) -> Duration {
        BASE_STEP_INTERVAL / (u32::from(self.0) + 1)
    }

    pub fn label(self) -> &'static str {
        match self.0 {
            0 => "Slow",
            1 => "Relaxed",
            2 => "Medium",
            3 => "Brisk",
            _ => "Fast",
        }
    }

    /// One tier faster, saturating at the fastest
    pub fn faster(self) -> Self {
        SpeedTier((self.0 + 1).min(SPEED_TIER_COUNT - 1))
    }

    /// One tier slower, saturating at the slowest
    pub fn slower(self) -> Self {
        SpeedTier(self.0.saturating_sub(1))
    }
}

impl Default for SpeedTier {
    fn default() -> Self {
        SpeedTier(DEFAULT_SPEED_TIER)
    }
}

impl TryFrom<u8> for SpeedTier {
    type Error = SortError;

    fn try_from(tier: u8) -> Result<Self, Self::Error> {
        SpeedTier::new(tier)
    }
}

impl fmt::Display for SpeedTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label(), self.0)
    }
}
