//! Random number source injected into the simulation
//!
//! Gameplay only ever needs a uniform integer in a half-open range, so that
//! is the whole interface. Sessions run on a seeded `Pcg32`; tests script the
//! sequence with [`SequenceRandom`].

use rand::Rng;
use rand_pcg::Pcg32;

pub trait RandomSource {
    /// Uniform integer in `[low, high)`. Returns `low` if the range is empty.
    fn range_i32(&mut self, low: i32, high: i32) -> i32;
}

impl RandomSource for Pcg32 {
    fn range_i32(&mut self, low: i32, high: i32) -> i32 {
        if high <= low {
            return low;
        }
        self.random_range(low..high)
    }
}

/// Replays a fixed list of values, cycling when exhausted.
///
/// Each value is folded into the requested range as `low + value mod (high - low)`,
/// so a script of raw offsets works for any range.
#[derive(Debug, Clone)]
pub struct SequenceRandom {
    values: Vec<i32>,
    next: usize,
}

impl SequenceRandom {
    pub fn new(values: impl Into<Vec<i32>>) -> Self {
        Self {
            values: values.into(),
            next: 0,
        }
    }
}

impl RandomSource for SequenceRandom {
    fn range_i32(&mut self, low: i32, high: i32) -> i32 {
        if high <= low || self.values.is_empty() {
            return low;
        }
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        low + value.rem_euclid(high - low)
    }
}
