//! # Point Samplers
//!
//! Generate N×D coordinate matrices distributed according to a target
//! ensemble. Every sampler takes a caller-supplied [`rand::Rng`] so a seeded
//! generator reproduces the exact same matrix — there is no ambient global
//! randomness anywhere in this crate.
//!
//! The interval samplers are rejection methods and can loop for a long time
//! in high dimension (the unit-cube acceptance rate shrinks like ~2^−D).
//! They run unbounded by default; callers that need a guarantee of
//! termination opt in via [`IntervalOptions::with_max_attempts`].

pub mod minkowski;
pub mod sphere;
pub mod hyperbolic;
pub mod de_sitter;

pub use minkowski::minkowski_interval;
pub use sphere::{sphere_surface_angular, sphere_surface_cartesian};
pub use hyperbolic::hyperbolic_disk;
pub use de_sitter::de_sitter_interval;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

// ============================================================================
// SampleMethod
// ============================================================================

/// Strategy for placing points inside a causal interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SampleMethod {
    /// Throw points into the unit cube and keep those inside the interval.
    /// Exact but slow for large D.
    Scatter,
    /// Map the unit cube onto the interval respecting volume elements.
    /// Permanently unavailable: requesting it yields [`Error::NotImplemented`].
    Map,
}

// ============================================================================
// IntervalOptions
// ============================================================================

/// Options shared by the Minkowski and de Sitter interval samplers.
///
/// The two samplers have different conventional defaults: [`Default`] is the
/// Minkowski convention (pinned ends), [`IntervalOptions::de_sitter_defaults`]
/// the de Sitter one (free ends).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntervalOptions {
    /// Pin the first two rows to the interval's start and end points.
    pub fix_ends: bool,
    /// Sampling strategy.
    pub method: SampleMethod,
    /// Attempt cap for the rejection loop. `None` (the default) loops
    /// until acceptance, however long that takes; a cap turns slow
    /// convergence into [`Error::RejectionOverrun`].
    pub max_attempts: Option<u64>,
}

impl Default for IntervalOptions {
    fn default() -> Self {
        Self {
            fix_ends: true,
            method: SampleMethod::Scatter,
            max_attempts: None,
        }
    }
}

impl IntervalOptions {
    /// Conventional options for [`de_sitter_interval`]: like [`Default`]
    /// but with free ends, so a single point is a valid request.
    pub fn de_sitter_defaults() -> Self {
        Self { fix_ends: false, ..Self::default() }
    }

    pub fn with_fix_ends(mut self, fix_ends: bool) -> Self {
        self.fix_ends = fix_ends;
        self
    }

    pub fn with_method(mut self, method: SampleMethod) -> Self {
        self.method = method;
        self
    }

    pub fn with_max_attempts(mut self, max_attempts: u64) -> Self {
        self.max_attempts = Some(max_attempts);
        self
    }
}

/// Shared parameter checks for the interval samplers.
pub(crate) fn check_interval_params(n: usize, d: usize, opts: &IntervalOptions) -> Result<()> {
    if d < 1 {
        return Err(Error::InvalidParameter(
            "Spacetime dimension D must be at least 1".into(),
        ));
    }
    if opts.fix_ends && n < 2 {
        return Err(Error::InvalidParameter(format!(
            "fix_ends requires at least 2 points, got N = {n}"
        )));
    }
    Ok(())
}

/// Bump an attempt counter against an optional cap.
#[inline]
pub(crate) fn count_attempt(attempts: &mut u64, cap: Option<u64>) -> Result<()> {
    *attempts += 1;
    if let Some(max) = cap {
        if *attempts > max {
            return Err(Error::RejectionOverrun { attempts: *attempts });
        }
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
