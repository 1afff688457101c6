// Frame history for step-by-step playback

use crate::array::{Element, ElementId};
use std::fmt;
use std::sync::Arc;

/// Immutable array contents at one instant
pub type ArraySnapshot = Arc<[Element]>;

/// The algorithm operation that produced a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// The unsorted starting array
    Initial,
    /// Two elements were compared; order is unchanged
    Compare { a: ElementId, b: ElementId },
    /// Two elements exchanged positions
    Swap { a: ElementId, b: ElementId },
    /// One element moved from `from` to `to`, shifting the elements in between
    Move { id: ElementId, from: usize, to: usize },
}

impl Operation {
    /// Ids tagged by this operation
    pub fn touched(&self) -> Vec<ElementId> {
        match *self {
            Operation::Initial => Vec::new(),
            Operation::Compare { a, b } | Operation::Swap { a, b } => vec![a, b],
            Operation::Move { id, .. } => vec![id],
        }
    }

    /// Whether the array order changed in this step
    pub fn is_mutation(&self) -> bool {
        matches!(self, Operation::Swap { .. } | Operation::Move { .. })
    }

    pub fn is_comparison(&self) -> bool {
        matches!(self, Operation::Compare { .. })
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Initial => write!(f, "initial"),
            Operation::Compare { a, b } => write!(f, "compare {} {}", a, b),
            Operation::Swap { a, b } => write!(f, "swap {} {}", a, b),
            Operation::Move { id, from, to } => write!(f, "move {} {}->{}", id, from, to),
        }
    }
}

/// One step of algorithm execution
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub index: usize,
    /// Completed algorithm operations at this frame
    pub logical_step: usize,
    pub operation: Operation,
    pub snapshot: ArraySnapshot,
}

/// Ordered, immutable frames for one (algorithm, initial array) pair
#[derive(Debug, Clone, PartialEq)]
pub struct FrameSequence {
    frames: Arc<[Frame]>,
}

impl FrameSequence {
    /// Get a frame by index
    pub fn get(&self, index: usize) -> Option<&Frame> {
        self.frames.get(index)
    }

    /// All frames in order
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Get the number of frames
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Always false for sequences produced by [`FrameHistory::finish`]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Maximum valid step index
    pub fn step_limit(&self) -> usize {
        self.frames.len().saturating_sub(1)
    }

    pub fn first(&self) -> Option<&Frame> {
        self.frames.first()
    }

    pub fn last(&self) -> Option<&Frame> {
        self.frames.last()
    }

    /// Count of frames whose operation matches `pred`
    pub fn count_where(&self, pred: impl Fn(&Operation) -> bool) -> usize {
        self.frames.iter().filter(|f| pred(&f.operation)).count()
    }
}

/// Accumulates frames while an algorithm runs
#[derive(Debug)]
pub struct FrameHistory {
    frames: Vec<Frame>,
    max_frames: usize,
}

impl FrameHistory {
    /// Start a history holding the initial array as frame 0
    pub fn new(initial: &[Element], max_frames: usize) -> Self {
        let frames = vec![Frame {
            index: 0,
            logical_step: 0,
            operation: Operation::Initial,
            snapshot: Arc::from(initial),
        }];
        FrameHistory { frames, max_frames }
    }

    /// Add a frame to history
    pub fn push(&mut self, operation: Operation, snapshot: &[Element]) -> Result<(), usize> {
        if self.frames.len() >= self.max_frames {
            return Err(self.max_frames);
        }
        let index = self.frames.len();
        self.frames.push(Frame {
            index,
            logical_step: index,
            operation,
            snapshot: Arc::from(snapshot),
        });
        Ok(())
    }

    /// Freeze into an immutable sequence
    pub fn finish(self) -> FrameSequence {
        FrameSequence {
            frames: self.frames.into(),
        }
    }
}
