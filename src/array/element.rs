//! Array element representation
//!
//! An [`Element`] pairs a magnitude with a stable [`ElementId`]. The id is the
//! slot the element occupied when the array was built and never changes, so a
//! renderer can follow a value as it moves between positions across frames.

use std::fmt;

/// Stable identity of an element (its slot index at array-build time)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub usize);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A value in the array being sorted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Element {
    pub id: ElementId,
    pub value: u32,
}

impl Element {
    pub fn new(id: usize, value: u32) -> Self {
        Element {
            id: ElementId(id),
            value,
        }
    }
}

/// Build elements from raw magnitudes, assigning ids by slot
pub fn elements_from_values(values: &[u32]) -> Vec<Element> {
    values
        .iter()
        .enumerate()
        .map(|(slot, &value)| Element::new(slot, value))
        .collect()
}

/// Extract the magnitudes in current order
pub fn values_of(elements: &[Element]) -> Vec<u32> {
    elements.iter().map(|e| e.value).collect()
}

/// Check that magnitudes are in non-decreasing order
pub fn is_sorted(elements: &[Element]) -> bool {
    elements.windows(2).all(|pair| pair[0].value <= pair[1].value)
}
