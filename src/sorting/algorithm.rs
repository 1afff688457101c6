//! Supported sorting strategies
//!
//! [`Algorithm`] is the closed set of sorts the generator knows how to record.
//! Menu keys are parsed with [`str::parse`]; unknown keys produce
//! [`SortError::UnsupportedAlgorithm`].

use crate::sorting::errors::SortError;
use crate::sorting::recorder::FrameRecorder;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bubble,
    Selection,
    Insertion,
    Quick,
    Merge,
    Heap,
}

impl Algorithm {
    /// Every supported algorithm, in menu order
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Bubble,
        Algorithm::Selection,
        Algorithm::Insertion,
        Algorithm::Quick,
        Algorithm::Merge,
        Algorithm::Heap,
    ];

    /// Menu key
    pub fn key(self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble",
            Algorithm::Selection => "selection",
            Algorithm::Insertion => "insertion",
            Algorithm::Quick => "quick",
            Algorithm::Merge => "merge",
            Algorithm::Heap => "heap",
        }
    }

    /// Display title
    pub fn title(self) -> &'static str {
        match self {
            Algorithm::Bubble => "Bubble Sort",
            Algorithm::Selection => "Selection Sort",
            Algorithm::Insertion => "Insertion Sort",
            Algorithm::Quick => "Quick Sort",
            Algorithm::Merge => "Merge Sort",
            Algorithm::Heap => "Heap Sort",
        }
    }

    /// Next algorithm in menu order, wrapping around
    pub fn next(self) -> Self {
        let pos = Self::ALL.iter().position(|a| *a == self).unwrap_or(0);
        Self::ALL[(pos + 1) % Self::ALL.len()]
    }

    /// Previous algorithm in menu order, wrapping around
    pub fn prev(self) -> Self {
        let pos = Self::ALL.iter().position(|a| *a == self).unwrap_or(0);
        Self::ALL[(pos + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Drive the recorder through this algorithm to completion
    pub(crate) fn record(self, recorder: &mut FrameRecorder) -> Result<(), SortError> {
        match self {
            Algorithm::Bubble => recorder.bubble_sort(),
            Algorithm::Selection => recorder.selection_sort(),
            Algorithm::Insertion => recorder.insertion_sort(),
            Algorithm::Quick => recorder.quick_sort(),
            Algorithm::Merge => recorder.merge_sort(),
            Algorithm::Heap => recorder.heap_sort(),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for Algorithm {
    type Err = SortError;

    /// Accepts `bubble`, `Bubble Sort`, `bubble-sort`, `bubblesort`, ...
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .to_ascii_lowercase()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect();
        let name = normalized.strip_suffix("sort").unwrap_or(&normalized);

        Algorithm::ALL
            .into_iter()
            .find(|a| a.key() == name)
            .ok_or_else(|| SortError::UnsupportedAlgorithm { key: s.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keys_and_titles() {
        for algo in Algorithm::ALL {
            assert_eq!(algo.key().parse::<Algorithm>(), Ok(algo));
            assert_eq!(algo.title().parse::<Algorithm>(), Ok(algo));
        }
        assert_eq!("quick-sort".parse::<Algorithm>(), Ok(Algorithm::Quick));
        assert_eq!(" MERGESORT ".parse::<Algorithm>(), Ok(Algorithm::Merge));
    }

    #[test]
    fn test_parse_unknown_key() {
        assert_eq!(
            "bogo".parse::<Algorithm>(),
            Err(SortError::UnsupportedAlgorithm {
                key: "bogo".to_string()
            })
        );
        assert!("sort".parse::<Algorithm>().is_err());
        assert!("".parse::<Algorithm>().is_err());
    }

    #[test]
    fn test_menu_cycle_wraps() {
        assert_eq!(Algorithm::Heap.next(), Algorithm::Bubble);
        assert_eq!(Algorithm::Bubble.prev(), Algorithm::Heap);
        let mut algo = Algorithm::Bubble;
        for _ in 0..Algorithm::ALL.len() {
            algo = algo.next();
        }
        assert_eq!(algo, Algorithm::Bubble);
    }
}
