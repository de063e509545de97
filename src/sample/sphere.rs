//! Uniform sampling on the surface of a d-sphere.

use ndarray::Array2;
use rand::Rng;
use rand_distr::StandardNormal;

use crate::coords::cartesian_to_angular;
use crate::{Error, Result};

/// Sample `n` points uniformly from the surface of the unit D-sphere,
/// returned as Cartesian coordinates (n × D+1).
///
/// Gaussian projection: a vector of D+1 independent standard normals is
/// spherically symmetric, so normalizing it to unit length is exact uniform
/// sampling — no rejection step.
pub fn sphere_surface_cartesian<R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
    d: usize,
) -> Result<Array2<f64>> {
    if d < 1 {
        return Err(Error::InvalidParameter(
            "Sphere dimension D must be at least 1".into(),
        ));
    }
    let mut coords = Array2::zeros((n, d + 1));
    for mut row in coords.rows_mut() {
        let mut norm_sq: f64 = 0.0;
        // A zero draw has probability 0 but would divide by zero; redraw.
        while norm_sq == 0.0 {
            for c in row.iter_mut() {
                *c = rng.sample(StandardNormal);
                norm_sq += *c * *c;
            }
        }
        let norm = norm_sq.sqrt();
        row.mapv_inplace(|c| c / norm);
    }
    Ok(coords)
}

/// Sample `n` points uniformly from the surface of the unit D-sphere,
/// returned as angular coordinates (n × D).
pub fn sphere_surface_angular<R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
    d: usize,
) -> Result<Array2<f64>> {
    let cartesian = sphere_surface_cartesian(rng, n, d)?;
    let mut coords = Array2::zeros((n, d));
    for (mut out, row) in coords.rows_mut().into_iter().zip(cartesian.rows()) {
        let angles = cartesian_to_angular(&row.to_vec());
        for (dst, src) in out.iter_mut().zip(&angles) {
            *dst = *src;
        }
    }
    Ok(coords)
}

// ============================================================================
// Tests
// ============================================================================
