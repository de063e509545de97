//! Riemannian metrics: Euclidean and spherical.

use crate::Result;
use crate::coords::angular_to_cartesian;

use super::check_dims;

/// Squared Euclidean distance between `x` and `y`.
///
/// Deliberately not square-rooted: callers use it for ranking and ordering,
/// where the monotone transform buys nothing.
pub fn euclidean(x: &[f64], y: &[f64]) -> Result<f64> {
    check_dims(x, y)?;
    Ok(x.iter().zip(y).map(|(a, b)| (a - b) * (a - b)).sum())
}

/// Geodesic angle between two points on the unit d-sphere.
///
/// `x` and `y` are angular coordinates: the first d−1 angles in (0, π), the
/// last in (0, 2π). Both are lifted to Cartesian space and the angle is
/// `acos(x · y)`, with the dot product clamped to [-1, 1] so floating drift
/// cannot produce NaN.
pub fn spherical(x: &[f64], y: &[f64]) -> Result<f64> {
    check_dims(x, y)?;
    let xc = angular_to_cartesian(x);
    let yc = angular_to_cartesian(y);
    let cos_psi: f64 = xc.iter().zip(&yc).map(|(a, b)| a * b).sum();
    Ok(cos_psi.clamp(-1.0, 1.0).acos())
}

// ============================================================================
// Tests
// ============================================================================
