//! Uniform random points in the sampling hypercube (replay tokens included).
//!
//! Purpose
//! - Provide a small, deterministic sampler for points of the cube `[-1,1]^d` used by the Monte Carlo volume estimator. The sampler is parameterized by dimension, reproducible, and returns a dense coordinate vector ready for classification.
//!
//! Model
//! - Each coordinate is drawn independently and uniformly from the closed
//!   interval [-1, 1]; dimension 0 yields the empty vector.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use nalgebra::DVector;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub(crate) fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a random point of the hypercube `[-1, 1]^dimension`.
///
/// Coordinates are independent and uniform on the closed interval; the only
/// side effect is advancing `rng`. Dimension 0 returns the empty vector.
pub fn draw_cube_point<R: Rng>(dimension: usize, rng: &mut R) -> DVector<f64> {
    DVector::from_fn(dimension, |_, _| rng.gen_range(-1.0..=1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reproducible_draw() {
        let tok = ReplayToken { seed: 42, index: 7 };
        let p1 = draw_cube_point(6, &mut tok.to_std_rng());
        let p2 = draw_cube_point(6, &mut tok.to_std_rng());
        assert_eq!(p1.len(), 6);
        assert!((p1 - p2).norm() < 1e-15);
    }

    #[test]
    fn distinct_indexes_give_distinct_streams() {
        let a = ReplayToken { seed: 42, index: 0 };
        let b = ReplayToken { seed: 42, index: 1 };
        let pa = draw_cube_point(8, &mut a.to_std_rng());
        let pb = draw_cube_point(8, &mut b.to_std_rng());
        assert!((pa - pb).norm() > 1e-12);
    }

    #[test]
    fn coordinates_stay_in_cube() {
        let tok = ReplayToken { seed: 1, index: 123 };
        let mut rng = tok.to_std_rng();
        for dimension in [1usize, 2, 5, 16] {
            let p = draw_cube_point(dimension, &mut rng);
            assert_eq!(p.len(), dimension);
            assert!(p.iter().all(|x| (-1.0..=1.0).contains(x)));
        }
    }

    #[test]
    fn dimension_zero_is_empty() {
        let tok = ReplayToken { seed: 9, index: 0 };
        let p = draw_cube_point(0, &mut tok.to_std_rng());
        assert_eq!(p.len(), 0);
    }
}
