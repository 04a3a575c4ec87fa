//! The source of randomness behind every match. Anything implementing [Rand] is a
//! [UniformSource]; tests substitute scripted sequences to force specific draws.

use tinyrand::{Rand, Seeded, StdRand};

/// Scale factor mapping the top 53 bits of a `u64` onto [0, 1).
const F64_UNIT: f64 = 1.0 / (1u64 << 53) as f64;

/// Mixed into a seed to select the auxiliary stream.
const AUX_STREAM: u64 = 0x9E37_79B9_7F4A_7C15;

pub trait UniformSource {
    /// A uniformly distributed value in [0, 1).
    fn next_uniform(&mut self) -> f64;

    /// A uniformly distributed integer in [0, `bound`). A zero `bound` behaves as 1.
    fn next_bounded(&mut self, bound: u64) -> u64;
}

impl<R: Rand> UniformSource for R {
    #[inline]
    fn next_uniform(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 * F64_UNIT
    }

    #[inline]
    fn next_bounded(&mut self, bound: u64) -> u64 {
        if bound <= 1 {
            return 0;
        }
        self.next_lim_u64(bound)
    }
}

/// Creates the default source, seeded for reproducibility.
pub fn seeded(seed: u64) -> StdRand {
    StdRand::seed(seed)
}

/// Creates a second source from the same `seed`, for consumers (such as a goal distribution)
/// that must not share draws with [seeded].
pub fn seeded_aux(seed: u64) -> StdRand {
    StdRand::seed(seed ^ AUX_STREAM)
}
