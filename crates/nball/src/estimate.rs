//! Monte Carlo volume estimates for unit n-balls.
//!
//! Purpose
//! - Measure the volume of the unit d-ball by sampling the enclosing cube
//!   `[-1,1]^d` uniformly and rescaling the hit ratio by the cube volume.
//! - Dimensions 0 and 1 have exact volumes (1 and 2) and bypass the
//!   stochastic path entirely.
//!
//! Model
//! - `vol(ball) ≈ (hits / samples) * vol(cube)`, with hits counted by
//!   `in_unit_ball` over `draw_cube_point` draws. Standard error shrinks as
//!   `1/sqrt(samples)`.
//! - A sweep derives one replay token per dimension from a single seed, so
//!   any entry of the series can be regenerated in isolation.

use std::fmt;

use rand::Rng;

use crate::ball::{cube_volume, in_unit_ball};
use crate::sample::{draw_cube_point, ReplayToken};

/// Errors surfaced by the estimator.
#[derive(Debug, PartialEq, Eq)]
pub enum EstimateError {
    /// Sampling was requested with an empty sample budget.
    ZeroSampleSize { dimension: usize },
}

impl fmt::Display for EstimateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EstimateError::ZeroSampleSize { dimension } => write!(
                f,
                "cannot estimate the {dimension}-ball volume from zero samples"
            ),
        }
    }
}

impl std::error::Error for EstimateError {}

/// One entry of an estimate series.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DimensionVolume {
    pub dimension: usize,
    pub volume: f64,
}

/// Estimate the volume of the unit `dimension`-ball from `sample_size` draws.
///
/// Dimensions 0 and 1 return their exact volumes without touching the
/// generator; `sample_size` is only validated on the sampling path, where it
/// must be positive. The result always lies in `[0, cube_volume(dimension)]`.
pub fn estimate_volume<R: Rng>(
    dimension: usize,
    sample_size: usize,
    rng: &mut R,
) -> Result<f64, EstimateError> {
    if dimension < 2 {
        // vol = 1 for the 0-ball (a point), 2 for the 1-ball (the interval [-1,1]).
        return Ok((dimension + 1) as f64);
    }
    if sample_size == 0 {
        return Err(EstimateError::ZeroSampleSize { dimension });
    }
    let mut hits = 0usize;
    for _ in 0..sample_size {
        if in_unit_ball(&draw_cube_point(dimension, rng)) {
            hits += 1;
        }
    }
    let ratio = hits as f64 / sample_size as f64;
    Ok(ratio * cube_volume(dimension))
}

/// Same estimate with the generator derived from a replay token.
pub fn estimate_volume_replay(
    dimension: usize,
    sample_size: usize,
    tok: ReplayToken,
) -> Result<f64, EstimateError> {
    let mut rng = tok.to_std_rng();
    estimate_volume(dimension, sample_size, &mut rng)
}

/// Estimate all dimensions `0..max_dimension` with `sample_size` draws each.
///
/// Each dimension samples from the stream `ReplayToken { seed, index: d }`,
/// independent of the others, so a single entry can be replayed without
/// re-running the rest of the series. Validation happens before any
/// sampling: a zero sample budget fails up front iff the sweep would reach
/// a sampling dimension. `max_dimension == 0` yields the empty series.
pub fn sweep(
    max_dimension: usize,
    sample_size: usize,
    seed: u64,
) -> Result<Vec<DimensionVolume>, EstimateError> {
    if sample_size == 0 && max_dimension > 2 {
        return Err(EstimateError::ZeroSampleSize { dimension: 2 });
    }
    let mut series = Vec::with_capacity(max_dimension);
    for dimension in 0..max_dimension {
        let tok = ReplayToken {
            seed,
            index: dimension as u64,
        };
        let volume = estimate_volume_replay(dimension, sample_size, tok)?;
        series.push(DimensionVolume { dimension, volume });
    }
    Ok(series)
}
