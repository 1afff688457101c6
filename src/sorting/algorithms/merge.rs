//! Top-down merge sort, merging in place.
//!
//! A merge never writes through an auxiliary buffer. When the head of the
//! right run is smaller than the head of the left run it is moved in front of
//! the left run, shifting that run one slot to the right. Every recorded
//! snapshot is therefore a permutation of the initial array.

use crate::sorting::errors::SortError;
use crate::sorting::recorder::FrameRecorder;
use std::cmp::Ordering;

impl FrameRecorder {
    pub(crate) fn merge_sort(&mut self) -> Result<(), SortError> {
        let n = self.len();
        self.merge_sort_range(0, n)
    }

    fn merge_sort_range(&mut self, lo: usize, hi: usize) -> Result<(), SortError> {
        if hi.saturating_sub(lo) < 2 {
            return Ok(());
        }
        let mid = lo + (hi - lo) / 2;
        self.merge_sort_range(lo, mid)?;
        self.merge_sort_range(mid, hi)?;
        self.merge_runs(lo, mid, hi)
    }

    /// Merge sorted runs `lo..mid` and `mid..hi`
    fn merge_runs(&mut self, lo: usize, mid: usize, hi: usize) -> Result<(), SortError> {
        let (mut left, mut right) = (lo, mid);
        while left < right && right < hi {
            // Strict comparison keeps equal values in their original order
            if self.compare(left, right)? == Ordering::Greater {
                self.move_to(right, left)?;
                right += 1;
            }
            left += 1;
        }
        Ok(())
    }
}
