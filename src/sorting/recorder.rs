// Frame recorder: the working array plus its frame history

use crate::array::Element;
use crate::snapshot::{FrameHistory, FrameSequence, Operation};
use crate::sorting::errors::SortError;
use std::cmp::Ordering;

/// Working array that records a frame for every comparison and mutation.
///
/// Algorithms only touch the array through [`compare`](Self::compare),
/// [`swap`](Self::swap) and [`move_to`](Self::move_to), so the history always
/// reflects every step they take.
pub struct FrameRecorder {
    array: Vec<Element>,
    history: FrameHistory,
}

impl FrameRecorder {
    pub fn new(initial: &[Element], frame_limit: usize) -> Self {
        FrameRecorder {
            array: initial.to_vec(),
            history: FrameHistory::new(initial, frame_limit),
        }
    }

    /// Number of elements being sorted
    pub(crate) fn len(&self) -> usize {
        self.array.len()
    }

    /// Compare the values at positions `i` and `j`, recording a frame
    pub fn compare(&mut self, i: usize, j: usize) -> Result<Ordering, SortError> {
        let (a, b) = (self.array[i], self.array[j]);
        self.take_frame(Operation::Compare { a: a.id, b: b.id })?;
        Ok(a.value.cmp(&b.value))
    }

    /// Swap positions `i` and `j`, recording the result
    pub fn swap(&mut self, i: usize, j: usize) -> Result<(), SortError> {
        let (a, b) = (self.array[i].id, self.array[j].id);
        self.array.swap(i, j);
        self.take_frame(Operation::Swap { a, b })
    }

    /// Move the element at `from` to `to`, shifting the elements in between
    pub fn move_to(&mut self, from: usize, to: usize) -> Result<(), SortError> {
        let element = self.array.remove(from);
        self.array.insert(to, element);
        self.take_frame(Operation::Move {
            id: element.id,
            from,
            to,
        })
    }

    /// Freeze the recorded frames
    pub fn finish(self) -> FrameSequence {
        self.history.finish()
    }

    fn take_frame(&mut self, operation: Operation) -> Result<(), SortError> {
        self.history
            .push(operation, &self.array)
            .map_err(|limit| SortError::FrameLimitExceeded { limit })
    }
}
