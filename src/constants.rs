// Constants for the sorting visualizer

use std::time::Duration;

/// Smallest array the element-count control allows
pub const MIN_ELEMENTS: usize = 5;

/// Largest array on a full-size terminal
pub const MAX_ELEMENTS: usize = 35;

/// Largest array in compact mode (narrow terminals)
pub const COMPACT_MAX_ELEMENTS: usize = 20;

/// Element count used when nothing is configured
pub const DEFAULT_ELEMENTS: usize = 10;

/// Frame budget for one generated sequence
pub const DEFAULT_FRAME_LIMIT: usize = 100_000;

/// Per-step delay at the slowest speed tier; tier `t` waits `BASE / (t + 1)`
pub const BASE_STEP_INTERVAL: Duration = Duration::from_millis(500);

/// Number of discrete speed tiers (0 = slowest)
pub const SPEED_TIER_COUNT: u8 = 5;

/// Speed tier used when nothing is configured ("Medium")
pub const DEFAULT_SPEED_TIER: u8 = 2;
