//! # Metric Evaluators
//!
//! Scalar separations between pairs of points under a named metric family.
//! Riemannian metrics (Euclidean, spherical) return non-negative distances;
//! Lorentzian metrics (Minkowski, de Sitter) return signed separations whose
//! sign classifies the pair: negative = timelike, zero = lightlike,
//! positive = spacelike.
//!
//! Every evaluator requires both points to have the same dimension and
//! returns [`Error::DimensionMismatch`] otherwise.

pub mod riemannian;
pub mod lorentzian;

pub use riemannian::{euclidean, spherical};
pub use lorentzian::{PeriodicBox, de_sitter, is_causal, is_timelike, minkowski, minkowski_periodic};

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Length precondition shared by all metric evaluators.
#[inline]
pub(crate) fn check_dims(x: &[f64], y: &[f64]) -> Result<()> {
    if x.len() != y.len() {
        return Err(Error::DimensionMismatch { left: x.len(), right: y.len() });
    }
    Ok(())
}

// ============================================================================
// Metric — the closed variant set
// ============================================================================

/// A named separation function, polymorphic over the supported geometries.
///
/// The Lorentzian variants are *separations*, not distances: they can be
/// negative and are not symmetric-positive-definite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Metric {
    /// Squared Euclidean distance (no square root — used for ranking).
    Euclidean,
    /// Geodesic angle between two points given in angular coordinates
    /// on the unit d-sphere.
    Spherical,
    /// Flat spacetime separation, (−,+,+,…,+) signature.
    Minkowski,
    /// Minkowski with nearest-image wraparound in the spatial dimensions
    /// carrying a finite period.
    MinkowskiPeriodic(PeriodicBox),
    /// de Sitter separation in conformal coordinates: the spatial term is
    /// the squared spherical angle of the spatial parts.
    DeSitter,
}

impl Metric {
    /// Evaluate the separation between two points.
    pub fn separation(&self, x: &[f64], y: &[f64]) -> Result<f64> {
        match self {
            Metric::Euclidean => euclidean(x, y),
            Metric::Spherical => spherical(x, y),
            Metric::Minkowski => minkowski(x, y),
            Metric::MinkowskiPeriodic(boundary) => minkowski_periodic(x, y, boundary),
            Metric::DeSitter => de_sitter(x, y),
        }
    }
}

// ============================================================================
// Separation matrix
// ============================================================================

/// Evaluate `metric` on every ordered pair of rows of `coords`, including
/// self-pairs. O(N²) metric calls; the result is rebuildable from its
/// inputs and never cached here.
pub fn sq_separations(coords: &Array2<f64>, metric: &Metric) -> Result<Array2<f64>> {
    let n = coords.nrows();
    let rows: Vec<Vec<f64>> = coords.rows().into_iter().map(|r| r.to_vec()).collect();
    let mut sep = Array2::zeros((n, n));
    for i in 0..n {
        for j in 0..n {
            sep[[i, j]] = metric.separation(&rows[i], &rows[j])?;
        }
    }
    Ok(sep)
}

// ============================================================================
// Tests
// ============================================================================
