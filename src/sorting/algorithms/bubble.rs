//! Bubble sort with early exit on a pass without swaps.

use crate::sorting::errors::SortError;
use crate::sorting::recorder::FrameRecorder;
use std::cmp::Ordering;

impl FrameRecorder {
    pub(crate) fn bubble_sort(&mut self) -> Result<(), SortError> {
        let n = self.len();
        for pass in 0..n.saturating_sub(1) {
            let mut swapped = false;
            for i in 0..n - 1 - pass {
                if self.compare(i, i + 1)? == Ordering::Greater {
                    self.swap(i, i + 1)?;
                    swapped = true;
                }
            }
            if !swapped {
                break;
            }
        }
        Ok(())
    }
}
