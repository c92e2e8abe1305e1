//! Unit-ball membership and the enclosing-cube volume.
//!
//! - `in_unit_ball`: strict membership predicate, the hit test of the
//!   Monte Carlo loop.
//! - `cube_volume`: volume of the sampling domain `[-1,1]^d`, the rescaling
//!   factor that turns a hit ratio into a ball volume.

use nalgebra::DVector;

/// True iff `point` lies strictly inside the unit ball.
///
/// Boundary points (squared norm exactly 1) count as outside. The empty
/// point is inside: its squared norm is the vacuous sum 0.
#[inline]
pub fn in_unit_ball(point: &DVector<f64>) -> bool {
    point.norm_squared() < 1.0
}

/// Volume `2^dimension` of the sampling hypercube `[-1, 1]^dimension`.
#[inline]
pub fn cube_volume(dimension: usize) -> f64 {
    2f64.powi(dimension as i32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::dvector;

    #[test]
    fn interior_and_exterior_points() {
        assert!(in_unit_ball(&dvector![0.0, 0.0, 0.0]));
        assert!(in_unit_ball(&dvector![0.5, 0.5, 0.5]));
        assert!(!in_unit_ball(&dvector![0.9, 0.9]));
    }

    #[test]
    fn boundary_is_outside() {
        assert!(!in_unit_ball(&dvector![1.0]));
        assert!(!in_unit_ball(&dvector![0.6, 0.8]));
    }

    #[test]
    fn empty_point_is_inside() {
        assert!(in_unit_ball(&DVector::zeros(0)));
    }

    #[test]
    fn cube_volume_doubles_per_dimension() {
        assert_eq!(cube_volume(0), 1.0);
        assert_eq!(cube_volume(1), 2.0);
        assert_eq!(cube_volume(10), 1024.0);
    }
}
