//! Uniform sampling of a hyperbolic disk.

use std::f64::consts::TAU;

use ndarray::Array2;
use rand::Rng;

use crate::{Error, Result};

/// Scatter `n` points uniformly inside a disk of radius `radius` in the
/// 2D hyperbolic plane with curvature `curvature`, returned as (r, θ) rows
/// in the native representation (r is the hyperbolic distance to the
/// origin, θ ∈ [0, 2π)).
///
/// Closed-form inverse CDF, no rejection: the area element inside radius r
/// grows like cosh(a·r) − 1, so
/// `r = acosh(u · (cosh(a·R) − 1) + 1) / a` with u uniform in [0, 1)
/// produces correctly distributed radii. The angle is uniform.
pub fn hyperbolic_disk<R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
    radius: f64,
    curvature: f64,
) -> Result<Array2<f64>> {
    if !radius.is_finite() || radius <= 0.0 {
        return Err(Error::InvalidParameter(format!(
            "Hyperbolic disk radius must be positive and finite, got {radius}"
        )));
    }
    if !curvature.is_finite() || curvature <= 0.0 {
        return Err(Error::InvalidParameter(format!(
            "Hyperbolic curvature must be positive and finite, got {curvature}"
        )));
    }

    let disk_area = (radius * curvature).cosh() - 1.0;
    let mut coords = Array2::zeros((n, 2));
    for mut row in coords.rows_mut() {
        let u = rng.random::<f64>();
        row[0] = (u * disk_area + 1.0).acosh() / curvature;
        row[1] = rng.random::<f64>() * TAU;
    }
    Ok(coords)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn radii_stay_inside_the_disk() {
        let mut rng = StdRng::seed_from_u64(21);
        let coords = hyperbolic_disk(&mut rng, 200, 3.0, 1.0).unwrap();
        assert_eq!(coords.dim(), (200, 2));
        for row in coords.rows() {
            assert!(row[0] >= 0.0 && row[0] < 3.0);
            assert!(row[1] >= 0.0 && row[1] < TAU);
        }
    }

    #[test]
    fn curvature_rescales_radii() {
        let coords = hyperbolic_disk(&mut StdRng::seed_from_u64(4), 50, 2.0, 2.0).unwrap();
        for row in coords.rows() {
            assert!(row[0] < 2.0);
        }
    }

    #[test]
    fn mass_concentrates_near_the_rim() {
        // cosh growth pushes most of the area outward: for R = 5, a = 1,
        // well over half the points should land in the outer unit shell.
        let mut rng = StdRng::seed_from_u64(8);
        let coords = hyperbolic_disk(&mut rng, 400, 5.0, 1.0).unwrap();
        let outer = coords.rows().into_iter().filter(|row| row[0] > 4.0).count();
        assert!(outer > 200, "only {outer}/400 points in the outer shell");
    }

    #[test]
    fn invalid_parameters_are_rejected() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(hyperbolic_disk(&mut rng, 10, 0.0, 1.0).is_err());
        assert!(hyperbolic_disk(&mut rng, 10, -1.0, 1.0).is_err());
        assert!(hyperbolic_disk(&mut rng, 10, 1.0, 0.0).is_err());
        assert!(hyperbolic_disk(&mut rng, 10, f64::NAN, 1.0).is_err());
    }
}
