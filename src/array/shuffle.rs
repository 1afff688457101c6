//! Initial array construction and seeded shuffling

use super::element::Element;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Build the ascending array `1..=count`, ids matching slots
pub fn build_array(count: usize) -> Vec<Element> {
    (0..count)
        .map(|slot| Element::new(slot, slot as u32 + 1))
        .collect()
}

/// Fisher–Yates shuffle driven by a seeded generator.
///
/// Ids are reassigned to the new slots afterwards: identity is the slot an
/// element holds in the array handed to the generator, not the slot it had
/// before shuffling.
pub fn shuffle(elements: &mut [Element], seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    elements.shuffle(&mut rng);
    for (slot, element) in elements.iter_mut().enumerate() {
        *element = Element::new(slot, element.value);
    }
}

/// Build a shuffled array of `count` elements for `seed`
pub fn shuffled_array(count: usize, seed: u64) -> Vec<Element> {
    let mut elements = build_array(count);
    shuffle(&mut elements, seed);
    elements
}

/// Deterministic stream of shuffle seeds.
///
/// Each reshuffle request draws the next seed, so two streams created from the
/// same base seed produce the same sequence of arrays.
#[derive(Debug, Clone)]
pub struct SeedStream {
    rng: StdRng,
    current: u64,
}

impl SeedStream {
    pub fn new(base: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(base);
        let current = rng.gen();
        SeedStream { rng, current }
    }

    /// Seed for the current array
    pub fn current(&self) -> u64 {
        self.current
    }

    /// Advance to the next seed and return it
    pub fn advance(&mut self) -> u64 {
        self.current = self.rng.gen();
        self.current
    }
}
