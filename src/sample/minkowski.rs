//! Uniform sampling of a causal interval in flat spacetime.

use ndarray::{Array1, Array2};
use rand::Rng;
use tracing::debug;

use crate::metric::{is_causal, minkowski};
use crate::{Error, Result};

use super::{IntervalOptions, SampleMethod, check_interval_params, count_attempt};

/// Start point of the unit interval: t = 0, spatial center of the cube.
pub(crate) fn interval_start(d: usize) -> Array1<f64> {
    let mut a = Array1::from_elem(d, 0.5);
    a[0] = 0.0;
    a
}

/// End point of the unit interval: t = 1, spatial center of the cube.
pub(crate) fn interval_end(d: usize) -> Array1<f64> {
    let mut b = Array1::from_elem(d, 0.5);
    b[0] = 1.0;
    b
}

/// Scatter `n` points uniformly into the causal interval between
/// `(0, 0.5, …)` and `(1, 0.5, …)` in D-dimensional Minkowski space.
///
/// Rejection method: each point is redrawn from the unit cube until it is
/// causally after the start AND causally before the end (non-spacelike from
/// both, separation ≤ 0). With `fix_ends` rows 0 and 1 hold the interval
/// endpoints verbatim.
///
/// The acceptance rate decays roughly like 2^−D, so this is slow in high
/// dimension; see [`IntervalOptions::max_attempts`].
pub fn minkowski_interval<R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
    d: usize,
    opts: &IntervalOptions,
) -> Result<Array2<f64>> {
    match opts.method {
        SampleMethod::Scatter => minkowski_interval_scatter(rng, n, d, opts),
        SampleMethod::Map => Err(Error::NotImplemented(
            "minkowski_interval with SampleMethod::Map",
        )),
    }
}

fn minkowski_interval_scatter<R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
    d: usize,
    opts: &IntervalOptions,
) -> Result<Array2<f64>> {
    check_interval_params(n, d, opts)?;

    let a = interval_start(d);
    let b = interval_end(d);
    let a_slice = a.as_slice().unwrap_or(&[]);
    let b_slice = b.as_slice().unwrap_or(&[]);

    let mut coords = Array2::zeros((n, d));
    let i_start = if opts.fix_ends {
        coords.row_mut(0).assign(&a);
        coords.row_mut(1).assign(&b);
        2
    } else {
        0
    };

    let mut attempts: u64 = 0;
    let mut point = vec![0.0; d];
    for i in i_start..n {
        loop {
            count_attempt(&mut attempts, opts.max_attempts)?;
            for c in &mut point {
                *c = rng.random::<f64>();
            }
            let after_start = is_causal(minkowski(a_slice, &point)?);
            let before_end = is_causal(minkowski(&point, b_slice)?);
            if after_start && before_end {
                break;
            }
        }
        coords.row_mut(i).assign(&Array1::from_vec(point.clone()));
    }

    debug!(n, d, attempts, "scattered Minkowski interval");
    Ok(coords)
}

// ============================================================================
// Tests
// ============================================================================
