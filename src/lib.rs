//! # causet-rs — Causal Set Graphs in Rust
//!
//! Random geometric graphs ("causal sets") embedded in model spacetimes
//! (Minkowski, de Sitter) and Riemannian manifolds (Euclidean, spherical,
//! hyperbolic), for causal set quantum gravity research.
//!
//! ## Design Principles
//!
//! 1. **Typed geometry**: metrics are a closed enum, not strings — adding a
//!    variant is a compile-time-checked decision
//! 2. **Clean DTOs**: `Node`, `NodeId`, `CausalSetGraph` cross all boundaries
//! 3. **Explicit randomness**: every sampler and the Bernoulli edge-inclusion
//!    step take a caller-supplied `Rng`, so a seeded generator reproduces the
//!    exact same coordinates and edge list
//! 4. **Errors, not asserts**: precondition failures surface as typed
//!    `Error` variants callers can branch on
//!
//! ## Quick Start
//!
//! ```rust
//! use causet_rs::{causal_set_graph, minkowski_interval, GraphOptions, IntervalOptions};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! # fn example() -> causet_rs::Result<()> {
//! let mut rng = StdRng::seed_from_u64(42);
//!
//! // Scatter 50 points into a causal interval of 2D Minkowski space
//! let coords = minkowski_interval(&mut rng, 50, 2, &IntervalOptions::default())?;
//!
//! // Build the causal DAG: directed edges between timelike-separated pairs
//! let graph = causal_set_graph(&mut rng, &coords, &GraphOptions::default())?;
//!
//! for (src, dst) in graph.edges() {
//!     println!("{src} -> {dst}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Geometries
//!
//! | Metric | Kind | Separation |
//! |--------|------|------------|
//! | Euclidean | Riemannian | squared Euclidean distance |
//! | Spherical | Riemannian | geodesic angle on the unit d-sphere |
//! | Minkowski | Lorentzian | spatial² − Δt² (−,+,+,…,+ signature) |
//! | MinkowskiPeriodic | Lorentzian | nearest-image spatial² − Δt² |
//! | DeSitter | Lorentzian | spherical angle² − Δt² (conformal coords) |

// ============================================================================
// Modules
// ============================================================================

pub mod coords;
pub mod metric;
pub mod sample;
pub mod graph;

// ============================================================================
// Re-exports: Coordinate conversion
// ============================================================================

pub use coords::{angular_to_cartesian, cartesian_to_angular};

// ============================================================================
// Re-exports: Metrics
// ============================================================================

pub use metric::{
    Metric, PeriodicBox, sq_separations,
    euclidean, spherical, minkowski, minkowski_periodic, de_sitter,
    is_causal, is_timelike,
};

// ============================================================================
// Re-exports: Samplers
// ============================================================================

pub use sample::{
    SampleMethod, IntervalOptions,
    minkowski_interval, de_sitter_interval,
    sphere_surface_cartesian, sphere_surface_angular,
    hyperbolic_disk,
};

// ============================================================================
// Re-exports: Causal graph
// ============================================================================

pub use graph::{CausalSetGraph, GraphOptions, Node, NodeId, causal_set_graph};

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Two point vectors handed to a metric differ in length.
    #[error("Dimension mismatch: left point has {left} coordinates, right has {right}")]
    DimensionMismatch { left: usize, right: usize },

    /// A numeric precondition was violated (e.g. KT² outside (0, 4)).
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// A deliberately unimplemented code path was requested.
    #[error("Not implemented: {0}")]
    NotImplemented(&'static str),

    /// A rejection-sampling loop hit its caller-supplied attempt cap.
    #[error("Rejection sampling exceeded {attempts} attempts without acceptance")]
    RejectionOverrun { attempts: u64 },
}

pub type Result<T> = std::result::Result<T, Error>;
