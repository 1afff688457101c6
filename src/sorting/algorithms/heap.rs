//! Heap sort over an implicit max-heap.

use crate::sorting::errors::SortError;
use crate::sorting::recorder::FrameRecorder;
use std::cmp::Ordering;

impl FrameRecorder {
    pub(crate) fn heap_sort(&mut self) -> Result<(), SortError> {
        let n = self.len();
        for start in (0..n / 2).rev() {
            self.sift_down(start, n)?;
        }
        for end in (1..n).rev() {
            self.swap(0, end)?;
            self.sift_down(0, end)?;
        }
        Ok(())
    }

    /// Restore the heap property below `root` within `0..end`
    fn sift_down(&mut self, mut root: usize, end: usize) -> Result<(), SortError> {
        loop {
            let left = 2 * root + 1;
            if left >= end {
                return Ok(());
            }
            let right = left + 1;
            let mut child = left;
            if right < end && self.compare(right, left)? == Ordering::Greater {
                child = right;
            }
            if self.compare(child, root)? != Ordering::Greater {
                return Ok(());
            }
            self.swap(root, child)?;
            root = child;
        }
    }
}
