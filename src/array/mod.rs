//! Array model for the visualizer
//!
//! This module provides the values that get sorted:
//! - [`element`]: [`Element`] with a stable [`ElementId`] and a magnitude
//! - [`shuffle`]: construction of `1..=N` arrays and seeded Fisher–Yates shuffling
//!
//! # Identity
//!
//! Elements are tracked by id rather than value. Two elements may carry the
//! same magnitude; the renderer still animates each one independently.

pub mod element;
pub mod shuffle;

pub use element::{elements_from_values, is_sorted, values_of, Element, ElementId};
pub use shuffle::{build_array, shuffle, shuffled_array, SeedStream};
