//! Uniform sampling of a causal interval in de Sitter spacetime.
//!
//! Rejection method after Meyer (1988): scatter candidates in the flat
//! Minkowski interval, then thin them against the conformal volume factor
//! σ = (1 + KT²·S/4)^(−D), where S is the candidate's separation from the
//! origin. The factor is bounded on the interval by σ_max = (1 − KT²/4)^(−D),
//! which makes exact rejection possible.

use ndarray::Array2;
use rand::Rng;
use tracing::{debug, trace};

use crate::{Error, Result};

use super::minkowski::minkowski_interval;
use super::{IntervalOptions, SampleMethod, check_interval_params};

/// Scatter `n` points uniformly into a causal interval of D-dimensional
/// de Sitter spacetime in conformal coordinates, with curvature-scale
/// parameter `kt2` = K·T². Requires `0 < kt2 < 4`.
///
/// Candidates come from [`minkowski_interval`] in batches of `n`, spatially
/// recentred around 0, and survive with probability σ/σ_max. Batches repeat
/// until `n` points have accumulated; the result is truncated to exactly
/// `n` rows. With `fix_ends` the first row is forced to the origin and the
/// second to (1, 0, …, 0) after sampling.
///
/// This sampler's convention is free ends; pass
/// [`IntervalOptions::de_sitter_defaults`] rather than the `Default` options,
/// which carry the Minkowski sampler's pinned-ends convention.
pub fn de_sitter_interval<R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
    d: usize,
    kt2: f64,
    opts: &IntervalOptions,
) -> Result<Array2<f64>> {
    match opts.method {
        SampleMethod::Scatter => de_sitter_interval_scatter(rng, n, d, kt2, opts),
        SampleMethod::Map => Err(Error::NotImplemented(
            "de_sitter_interval with SampleMethod::Map",
        )),
    }
}

fn de_sitter_interval_scatter<R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
    d: usize,
    kt2: f64,
    opts: &IntervalOptions,
) -> Result<Array2<f64>> {
    check_interval_params(n, d, opts)?;
    if !(kt2 > 0.0 && kt2 < 4.0) {
        return Err(Error::InvalidParameter(format!(
            "KT² must lie strictly between 0 and 4, got {kt2}"
        )));
    }

    // Maximum of the conformal factor over the interval; attained where the
    // separation from the origin is most negative (S = −1).
    let sigma_max = (1.0 - 0.25 * kt2).powi(-(d as i32));

    let mut accepted: Vec<f64> = Vec::with_capacity(n * d);
    let mut kept = 0usize;
    let mut batches = 0u64;
    while kept < n {
        let mut batch = minkowski_interval(rng, n, d, opts)?;
        // Recentre the spatial coordinates around 0
        for mut row in batch.rows_mut() {
            for c in row.iter_mut().skip(1) {
                *c -= 0.5;
            }
        }
        let mut batch_kept = 0usize;
        for row in batch.rows() {
            let t = row[0];
            let spatial_sq: f64 = row.iter().skip(1).map(|c| c * c).sum();
            let s = spatial_sq - t * t;
            let sigma = (1.0 + 0.25 * kt2 * s).powi(-(d as i32));
            if rng.random::<f64>() * sigma_max < sigma {
                accepted.extend(row.iter().copied());
                kept += 1;
                batch_kept += 1;
            }
        }
        batches += 1;
        trace!(batches, batch_kept, kept, "de Sitter rejection batch");
        if let Some(max) = opts.max_attempts {
            if batches * n as u64 > max && kept < n {
                return Err(Error::RejectionOverrun { attempts: batches * n as u64 });
            }
        }
    }

    accepted.truncate(n * d);
    let mut coords = Array2::from_shape_vec((n, d), accepted)
        .map_err(|e| Error::InvalidParameter(e.to_string()))?;

    if opts.fix_ends {
        coords.row_mut(0).fill(0.0);
        coords.row_mut(1).fill(0.0);
        coords[[1, 0]] = 1.0;
    }

    debug!(n, d, kt2, batches, "scattered de Sitter interval");
    Ok(coords)
}

// ============================================================================
// Tests
// ============================================================================
