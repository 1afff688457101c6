//! Visualizer configuration
//!
//! Settings come from an optional TOML file and from command-line flags.
//! Both are read into a [`ConfigFile`] of optional fields; flags are merged
//! over the file and the result is validated into a [`VisualizerConfig`].
//!
//! ```toml
//! algorithm = "quick"
//! elements = 20
//! speed = 3
//! seed = 42
//! compact = false
//! ```

use crate::constants::{
    COMPACT_MAX_ELEMENTS, DEFAULT_ELEMENTS, DEFAULT_FRAME_LIMIT, MAX_ELEMENTS, MIN_ELEMENTS,
};
use crate::playback::SpeedTier;
use crate::sorting::{Algorithm, SortError};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error(transparent)]
    Sort(#[from] SortError),

    #[error("Invalid configuration: {message}")]
    Invalid { message: String },
}

/// Raw settings as written in a config file or passed as flags
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub algorithm: Option<String>,
    pub elements: Option<usize>,
    pub speed: Option<u8>,
    pub seed: Option<u64>,
    pub compact: Option<bool>,
    pub frame_limit: Option<usize>,
}

impl ConfigFile {
    /// Load settings from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Overlay `other` on top of `self`; set fields in `other` win
    pub fn merge(self, other: ConfigFile) -> ConfigFile {
        ConfigFile {
            algorithm: other.algorithm.or(self.algorithm),
            elements: other.elements.or(self.elements),
            speed: other.speed.or(self.speed),
            seed: other.seed.or(self.seed),
            compact: other.compact.or(self.compact),
            frame_limit: other.frame_limit.or(self.frame_limit),
        }
    }
}

/// Validated settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisualizerConfig {
    /// `None` until the user picks an algorithm
    pub algorithm: Option<Algorithm>,
    pub elements: usize,
    pub speed: SpeedTier,
    pub seed: u64,
    /// Narrow-terminal mode with a lower element cap
    pub compact: bool,
    pub frame_limit: usize,
}

impl VisualizerConfig {
    /// Largest element count allowed in this mode
    pub fn max_elements(&self) -> usize {
        max_elements(self.compact)
    }

    /// Clamp an element count into the allowed range
    pub fn clamp_elements(&self, count: usize) -> usize {
        count.clamp(MIN_ELEMENTS, self.max_elements())
    }

    /// Validate raw settings; a missing seed is drawn at random
    pub fn from_file(file: ConfigFile) -> Result<Self, ConfigError> {
        let compact = file.compact.unwrap_or(false);
        let max = max_elements(compact);

        let elements = file.elements.unwrap_or(DEFAULT_ELEMENTS.min(max));
        if !(MIN_ELEMENTS..=max).contains(&elements) {
            return Err(ConfigError::Invalid {
                message: format!(
                    "elements must be between {} and {}, got {}",
                    MIN_ELEMENTS, max, elements
                ),
            });
        }

        let frame_limit = file.frame_limit.unwrap_or(DEFAULT_FRAME_LIMIT);
        if frame_limit == 0 {
            return Err(ConfigError::Invalid {
                message: "frame_limit must be positive".to_string(),
            });
        }

        let algorithm = file
            .algorithm
            .as_deref()
            .map(str::parse::<Algorithm>)
            .transpose()?;
        let speed = file.speed.map(SpeedTier::new).transpose()?.unwrap_or_default();

        Ok(VisualizerConfig {
            algorithm,
            elements,
            speed,
            seed: file.seed.unwrap_or_else(rand::random),
            compact,
            frame_limit,
        })
    }
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        VisualizerConfig {
            algorithm: None,
            elements: DEFAULT_ELEMENTS,
            speed: SpeedTier::default(),
            seed: 0,
            compact: false,
            frame_limit: DEFAULT_FRAME_LIMIT,
        }
    }
}

fn max_elements(compact: bool) -> usize {
    if compact {
        COMPACT_MAX_ELEMENTS
    } else {
        MAX_ELEMENTS
    }
}
