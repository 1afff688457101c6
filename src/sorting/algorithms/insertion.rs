//! Insertion sort by adjacent swaps.

use crate::sorting::errors::SortError;
use crate::sorting::recorder::FrameRecorder;
use std::cmp::Ordering;

impl FrameRecorder {
    pub(crate) fn insertion_sort(&mut self) -> Result<(), SortError> {
        for i in 1..self.len() {
            let mut j = i;
            while j > 0 && self.compare(j - 1, j)? == Ordering::Greater {
                self.swap(j - 1, j)?;
                j -= 1;
            }
        }
        Ok(())
    }
}
