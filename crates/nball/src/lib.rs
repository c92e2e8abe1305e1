//! Monte Carlo estimation of unit n-ball volumes.
//!
//! The estimator draws uniform points from the enclosing hypercube
//! `[-1, 1]^d`, classifies each draw against the unit ball, and rescales the
//! hit ratio by the cube volume `2^d`. Dimensions 0 and 1 are closed-form
//! and bypass sampling.
//!
//! Reproducibility
//! - All entropy flows through injected `rand` generators or replay tokens;
//!   there is no ambient process-wide RNG state.

pub mod ball;
pub mod estimate;
pub mod sample;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::ball::{cube_volume, in_unit_ball};
    pub use crate::estimate::{
        estimate_volume, estimate_volume_replay, sweep, DimensionVolume, EstimateError,
    };
    pub use crate::sample::{draw_cube_point, ReplayToken};
}
