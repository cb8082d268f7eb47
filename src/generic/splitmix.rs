//! A simple pseudorandom number generator.
//!
//! Specifically, an implementation of SplitMix64 --- the output function of Steele, Lea, and
//! Flood's SplittableRandom, as given in the reference C at <https://prng.di.unimi.it/splitmix64.c>
//! --- implemented to satisfy the [RngCore] trait.[^note]
//!
//! SplitMix64 was chosen as the default source of (pseudo)random numbers as it is small, fast,
//! and the whole of its state is the seed, which keeps seeded solves easy to reason about.
//!
//! Each [context](crate::context) stores a source of rng, and the context is generic over
//! anything which satisfies [rand::Rng].
//! So, revising the paramater of the context is all that's needed for a different source of rng.
//!
//! [^note]: SplitMix64 is also the generator suggested for seeding the xoshiro family, and so is
//! well exercised in the wild.

use rand_core::{impls, RngCore, SeedableRng};

/// The counter which is the whole of the generator's state.
#[derive(Default)]
pub struct MinimalSplitMix64 {
    state: u64,
}

impl RngCore for MinimalSplitMix64 {
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E3779B97F4A7C15);

        let mut mix = self.state;
        mix = (mix ^ (mix >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
        mix = (mix ^ (mix >> 27)).wrapping_mul(0x94D049BB133111EB);
        mix ^ (mix >> 31)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }
}

impl SeedableRng for MinimalSplitMix64 {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Self {
            state: u64::from_le_bytes(seed),
        }
    }
}

#[cfg(test)]
mod splitmix_tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let mut this = MinimalSplitMix64::from_seed(7_u64.to_le_bytes());
        let mut that = MinimalSplitMix64::from_seed(7_u64.to_le_bytes());

        for _ in 0..64 {
            assert_eq!(this.next_u64(), that.next_u64());
        }
    }

    #[test]
    fn distinct_seeds_distinct_sequences() {
        let mut this = MinimalSplitMix64::from_seed(1_u64.to_le_bytes());
        let mut that = MinimalSplitMix64::from_seed(2_u64.to_le_bytes());

        let these = (0..8).map(|_| this.next_u64()).collect::<Vec<_>>();
        let those = (0..8).map(|_| that.next_u64()).collect::<Vec<_>>();
        assert_ne!(these, those);
    }
}
