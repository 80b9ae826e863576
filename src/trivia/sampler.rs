//! Random question selection without replacement.

use rand::seq::SliceRandom;

/// Draws store indices in a random order, covering every index exactly
/// once per shuffle cycle before any repeat.
///
/// The last index of one cycle and the first of the next may coincide;
/// that is accepted behavior, not a bug. The sampler is mutated only by
/// the session that owns it, under the session lock.
#[derive(Debug)]
pub struct ShuffleSampler {
    len: usize,
    order: Vec<usize>,
}

impl ShuffleSampler {
    /// Create a sampler over `len` store indices.
    ///
    /// `len` must be non-zero; the session rejects empty stores before
    /// constructing a sampler.
    pub fn new(len: usize) -> Self {
        debug_assert!(len > 0, "sampler over an empty store");
        Self {
            len,
            order: Vec::new(),
        }
    }

    /// Draw the next index, reshuffling when the current cycle is spent.
    pub fn draw(&mut self) -> usize {
        if self.order.is_empty() {
            let mut order: Vec<usize> = (0..self.len).collect();
            order.shuffle(&mut rand::rng());
            self.order = order;
        }
        // The refill above guarantees a non-empty queue for len > 0
        self.order.pop().unwrap()
    }

    /// Number of draws left in the current cycle.
    pub fn remaining(&self) -> usize {
        self.order.len()
    }
}
