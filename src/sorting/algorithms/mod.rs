//! Recorded sorting algorithms
//!
//! Each submodule adds an `impl FrameRecorder` method that runs one sort to
//! completion. The methods never touch the array directly; every step goes
//! through the recorder so it lands in the frame history.

mod bubble;
mod heap;
mod insertion;
mod merge;
mod quick;
mod selection;
