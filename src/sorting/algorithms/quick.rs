//! Quick sort with a Lomuto partition around the last element.

use crate::sorting::errors::SortError;
use crate::sorting::recorder::FrameRecorder;
use std::cmp::Ordering;

impl FrameRecorder {
    pub(crate) fn quick_sort(&mut self) -> Result<(), SortError> {
        let n = self.len();
        self.quick_sort_range(0, n)
    }

    /// Sort `lo..hi` (exclusive upper bound)
    fn quick_sort_range(&mut self, lo: usize, hi: usize) -> Result<(), SortError> {
        if hi.saturating_sub(lo) < 2 {
            return Ok(());
        }
        let pivot = self.partition(lo, hi)?;
        self.quick_sort_range(lo, pivot)?;
        self.quick_sort_range(pivot + 1, hi)
    }

    /// Partition `lo..hi` and return the pivot's final position.
    ///
    /// The pivot stays at `hi - 1` until the final swap because every swap in
    /// the scan involves positions strictly below it.
    fn partition(&mut self, lo: usize, hi: usize) -> Result<usize, SortError> {
        let pivot = hi - 1;
        let mut store = lo;
        for j in lo..pivot {
            if self.compare(j, pivot)? == Ordering::Less {
                if store != j {
                    self.swap(store, j)?;
                }
                store += 1;
            }
        }
        if store != pivot {
            self.swap(store, pivot)?;
        }
        Ok(store)
    }
}
