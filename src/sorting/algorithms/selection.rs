//! Selection sort: one swap per pass, only when the minimum is out of place.

use crate::sorting::errors::SortError;
use crate::sorting::recorder::FrameRecorder;
use std::cmp::Ordering;

impl FrameRecorder {
    pub(crate) fn selection_sort(&mut self) -> Result<(), SortError> {
        let n = self.len();
        for i in 0..n.saturating_sub(1) {
            let mut min = i;
            for j in i + 1..n {
                if self.compare(j, min)? == Ordering::Less {
                    min = j;
                }
            }
            if min != i {
                self.swap(i, min)?;
            }
        }
        Ok(())
    }
}
