//! Angular ↔ Cartesian conversion on the unit d-sphere.
//!
//! Standard hyperspherical parametrization: D angles, the first D−1 in
//! (0, π) and the last in (0, 2π), map to D+1 Cartesian coordinates at
//! radius 1. Spacetime dimensions here are small (2–4), so conversion
//! buffers are stack-allocated `SmallVec`s.

use std::f64::consts::TAU;

use smallvec::{SmallVec, smallvec};

/// Stack-allocated coordinate buffer. Spills to the heap above 4 dimensions.
pub type CoordVec = SmallVec<[f64; 4]>;

/// Convert D angular coordinates to D+1 Cartesian coordinates, radius 1.
///
/// Component i is scaled by `cos(a[i])` and every later component by
/// `sin(a[i])`; the order matters — cos must land on component i before the
/// same angle's sin touches the tail.
pub fn angular_to_cartesian(a: &[f64]) -> CoordVec {
    let d = a.len();
    let mut x: CoordVec = smallvec![1.0; d + 1];
    for (i, &angle) in a.iter().enumerate() {
        x[i] *= angle.cos();
        for xj in &mut x[i + 1..] {
            *xj *= angle.sin();
        }
    }
    x
}

/// Convert D+1 Cartesian coordinates on the unit sphere to D angles.
///
/// Inverse of [`angular_to_cartesian`] for points at radius 1. The ratio fed
/// to `acos` is clamped to [-1, 1] so floating drift off the sphere cannot
/// produce NaN. When the final Cartesian coordinate is negative the last
/// angle is reflected into (π, 2π), which is what makes the parametrization
/// cover the whole sphere.
pub fn cartesian_to_angular(x: &[f64]) -> CoordVec {
    let d = x.len().saturating_sub(1);
    let mut a: CoordVec = smallvec![0.0; d];
    for i in 0..d {
        let tail_norm = x[i..].iter().map(|v| v * v).sum::<f64>().sqrt();
        a[i] = (x[i] / tail_norm).clamp(-1.0, 1.0).acos();
    }
    if d > 0 && x[d] < 0.0 {
        a[d - 1] = TAU - a[d - 1];
    }
    a
}

// ============================================================================
// Tests
// ============================================================================
