//! Lorentzian metrics: Minkowski (flat and periodic) and de Sitter.
//!
//! Coordinate convention: index 0 is the time coordinate, indices 1.. are
//! spatial. Signature is (−,+,+,…,+), so a negative separation means the
//! pair is timelike (causally connectable) and a positive one spacelike.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

use super::{check_dims, spherical};

// ============================================================================
// Causality predicates
// ============================================================================

/// Strictly timelike: the predicate the graph builder uses for edges.
/// Lightlike pairs (separation exactly 0) are excluded.
#[inline]
pub fn is_timelike(separation: f64) -> bool {
    separation < 0.0
}

/// Timelike or lightlike: the predicate interval samplers use for
/// acceptance. Kept separate from [`is_timelike`] on purpose — edges exclude
/// null geodesics, acceptance does not, and unifying the two would change
/// observable behavior.
#[inline]
pub fn is_causal(separation: f64) -> bool {
    separation <= 0.0
}

// ============================================================================
// PeriodicBox
// ============================================================================

/// Periodic boundary spec: one entry per spatial dimension (time excluded),
/// each either a finite period length or `None` for no wraparound. Spatial
/// dimensions beyond the stored entries default to unbounded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodicBox(Vec<Option<f64>>);

impl PeriodicBox {
    /// Build a boundary spec, rejecting non-positive or non-finite periods.
    pub fn new(periods: Vec<Option<f64>>) -> Result<Self> {
        for (i, period) in periods.iter().enumerate() {
            if let Some(length) = period {
                if !length.is_finite() || *length <= 0.0 {
                    return Err(Error::InvalidParameter(format!(
                        "Periodic length for spatial dimension {i} must be positive and finite, got {length}"
                    )));
                }
            }
        }
        Ok(Self(periods))
    }

    /// Period of the given spatial dimension (0 = first spatial axis),
    /// `None` when unbounded.
    pub fn period(&self, spatial_dim: usize) -> Option<f64> {
        self.0.get(spatial_dim).copied().flatten()
    }
}

/// Nearest-image squared difference along one axis with period `length`:
/// the minimum over the unwrapped image and its two periodic translates.
#[inline]
fn wrapped_sq_diff(delta: f64, length: f64) -> f64 {
    let plain = delta * delta;
    let up = (delta + length) * (delta + length);
    let down = (delta - length) * (delta - length);
    plain.min(up).min(down)
}

// ============================================================================
// Metrics
// ============================================================================

/// Minkowski separation between `x` and `y`: Σ spatial Δ² − Δt².
pub fn minkowski(x: &[f64], y: &[f64]) -> Result<f64> {
    check_dims(x, y)?;
    let dt = x[0] - y[0];
    let spatial: f64 = x[1..].iter().zip(&y[1..]).map(|(a, b)| (a - b) * (a - b)).sum();
    Ok(spatial - dt * dt)
}

/// Minkowski separation with nearest-image wraparound in every spatial
/// dimension carrying a finite period.
///
/// Equals [`minkowski`] exactly when the boundary has no finite periods.
pub fn minkowski_periodic(x: &[f64], y: &[f64], boundary: &PeriodicBox) -> Result<f64> {
    check_dims(x, y)?;
    let dt = x[0] - y[0];
    let mut spatial = 0.0;
    for (d, (a, b)) in x[1..].iter().zip(&y[1..]).enumerate() {
        let delta = a - b;
        spatial += match boundary.period(d) {
            Some(length) => wrapped_sq_diff(delta, length),
            None => delta * delta,
        };
    }
    Ok(spatial - dt * dt)
}

/// de Sitter separation in conformal coordinates: the spatial parts are
/// angular coordinates on a d-sphere, and the separation is the squared
/// spherical angle minus Δt².
pub fn de_sitter(x: &[f64], y: &[f64]) -> Result<f64> {
    check_dims(x, y)?;
    let dt = x[0] - y[0];
    let psi = spherical(&x[1..], &y[1..])?;
    Ok(psi * psi - dt * dt)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn pure_timelike_unit_separation() {
        assert_eq!(minkowski(&[0.0, 0.0], &[1.0, 0.0]).unwrap(), -1.0);
    }

    #[test]
    fn pure_spacelike_unit_separation() {
        assert_eq!(minkowski(&[0.0, 0.0], &[0.0, 1.0]).unwrap(), 1.0);
    }

    #[test]
    fn equal_time_pairs_are_never_timelike() {
        let x = [2.0, 0.1, -3.0];
        let y = [2.0, 5.0, 0.7];
        assert!(minkowski(&x, &y).unwrap() >= 0.0);
    }

    #[test]
    fn minkowski_rejects_mismatched_lengths() {
        assert!(minkowski(&[0.0, 0.0, 0.0], &[0.0, 0.0]).is_err());
    }

    #[test]
    fn unbounded_periodic_equals_plain() {
        let boundary = PeriodicBox::new(vec![None, None]).unwrap();
        let x = [0.2, 1.7, -0.4];
        let y = [0.9, 0.3, 2.2];
        assert_eq!(
            minkowski_periodic(&x, &y, &boundary).unwrap(),
            minkowski(&x, &y).unwrap(),
        );
    }

    #[test]
    fn short_boundary_spec_defaults_to_unbounded() {
        // Boundary covers only the first spatial dimension
        let boundary = PeriodicBox::new(vec![Some(1.0)]).unwrap();
        let x = [0.0, 0.0, 0.0];
        let y = [0.0, 0.9, 0.9];
        // First axis wraps 0.9 -> 0.1, second stays 0.9
        let expected = 0.1_f64 * 0.1 + 0.9 * 0.9;
        assert!((minkowski_periodic(&x, &y, &boundary).unwrap() - expected).abs() < 1e-12);
    }

    #[test]
    fn wrapped_difference_takes_nearest_image() {
        let delta = 0.8;
        let length = 1.0;
        let wrapped = wrapped_sq_diff(delta, length);
        assert!((wrapped - 0.04).abs() < 1e-12);
        assert!(wrapped <= delta * delta);
    }

    #[test]
    fn periodic_box_rejects_non_positive_periods() {
        assert!(PeriodicBox::new(vec![Some(0.0)]).is_err());
        assert!(PeriodicBox::new(vec![Some(-1.0)]).is_err());
        assert!(PeriodicBox::new(vec![Some(f64::INFINITY)]).is_err());
    }

    #[test]
    fn de_sitter_equal_points_is_zero() {
        let x = [0.5, 0.3, 1.1];
        assert!(de_sitter(&x, &x).unwrap().abs() < 1e-12);
    }

    #[test]
    fn de_sitter_pure_time_separation_is_timelike() {
        let x = [0.0, 0.4, 0.9];
        let y = [0.7, 0.4, 0.9];
        let s = de_sitter(&x, &y).unwrap();
        assert!((s + 0.49).abs() < 1e-9);
        assert!(is_timelike(s));
    }

    #[test]
    fn causality_predicates_differ_only_on_lightlike() {
        assert!(is_timelike(-0.5) && is_causal(-0.5));
        assert!(!is_timelike(0.0) && is_causal(0.0));
        assert!(!is_timelike(0.5) && !is_causal(0.5));
    }
}
