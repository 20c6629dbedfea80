//! Deterministic PRNG based on the Xorshift64 algorithm.
//!
//! Drives node placement, per-node noise seeds and the per-run time phase,
//! so two runs with the same seed lay out and animate identically.

/// Xorshift64 deterministic PRNG. Same seed always produces the same sequence.
///
/// Uses the standard shift parameters (13, 7, 17). Seed of 0 is replaced
/// with a non-zero fallback to avoid the all-zeros fixed point.
#[derive(Debug, Clone)]
pub struct Xorshift64 {
    state: u64,
}

impl Xorshift64 {
    const FALLBACK_SEED: u64 = 0x5EED_DEAD_BEEF_CAFE;

    /// Creates a new PRNG with the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { Self::FALLBACK_SEED } else { seed },
        }
    }

    /// Advances the state and returns the next 64-bit value.
    pub fn next_u64(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }

    /// Returns a uniformly distributed f64 in [0, 1).
    ///
    /// Uses the upper 53 bits of `next_u64()` for full mantissa precision.
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Returns a uniformly distributed f64 in [min, max).
    ///
    /// An empty or inverted range returns `min`.
    pub fn next_range(&mut self, min: f64, max: f64) -> f64 {
        if max <= min {
            return min;
        }
        let v = min + self.next_f64() * (max - min);
        // Rounding can land exactly on `max` for huge ranges.
        if v >= max {
            min
        } else {
            v
        }
    }

    /// Returns a u32 seed, for noise generators keyed on 32 bits.
    pub fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_u64_produces_known_golden_value_for_seed_42() {
        // If this breaks, every seeded layout changes.
        let mut rng = Xorshift64::new(42);
        assert_eq!(rng.next_u64(), 45_454_805_674);
    }

    #[test]
    fn seed_zero_does_not_produce_all_zeros() {
        let mut rng = Xorshift64::new(0);
        assert_ne!(rng.next_u64(), 0);
        assert_ne!(rng.next_u64(), 0);
    }

    #[test]
    fn two_instances_with_same_seed_produce_identical_sequences() {
        let mut a = Xorshift64::new(42);
        let mut b = Xorshift64::new(42);
        for i in 0..1000 {
            assert_eq!(a.next_u64(), b.next_u64(), "diverged at index {i}");
        }
    }

    #[test]
    fn next_f64_always_in_unit_interval() {
        let mut rng = Xorshift64::new(12345);
        for _ in 0..10_000 {
            let v = rng.next_f64();
            assert!((0.0..1.0).contains(&v), "next_f64() = {v}");
        }
    }

    #[test]
    fn next_range_empty_range_returns_min() {
        let mut rng = Xorshift64::new(3);
        assert_eq!(rng.next_range(5.0, 5.0), 5.0);
        assert_eq!(rng.next_range(5.0, 1.0), 5.0);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn next_range_in_bounds_for_any_seed_and_range(
                seed: u64,
                min in -1e6_f64..1e6,
                span in 1e-3_f64..1e6,
            ) {
                let max = min + span;
                let mut rng = Xorshift64::new(seed);
                for _ in 0..100 {
                    let v = rng.next_range(min, max);
                    prop_assert!(v >= min && v < max, "next_range({min}, {max}) = {v}");
                }
            }

            #[test]
            fn next_f64_approximate_uniformity(seed: u64) {
                let mut rng = Xorshift64::new(seed);
                let mut buckets = [0u32; 10];
                for _ in 0..10_000 {
                    let idx = (rng.next_f64() * 10.0).min(9.0) as usize;
                    buckets[idx] += 1;
                }
                for (i, &count) in buckets.iter().enumerate() {
                    prop_assert!(count >= 500, "bucket {i} has only {count} values");
                }
            }
        }
    }
}
