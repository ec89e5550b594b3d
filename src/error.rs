//! Error types for graph construction, solving and benchmarking.

use thiserror::Error;

/// Errors raised by the APSP engine.
///
/// Every variant is a caller contract violation or an environment failure;
/// the relaxation itself is total once the weights have passed
/// [`DistanceMatrix::check_headroom`](crate::DistanceMatrix::check_headroom).
#[derive(Debug, Error)]
pub enum ApspError {
    /// A graph needs at least one vertex.
    #[error("graph must have at least one vertex")]
    EmptyGraph,

    /// Edge endpoint outside `0..vertices`.
    #[error("vertex {vertex} out of range for a graph with {vertices} vertices")]
    VertexOutOfRange { vertex: usize, vertices: usize },

    /// Parallel solver asked to run with zero workers.
    #[error("worker count must be at least 1")]
    InvalidWorkerCount,

    /// Edge density outside `[0, 1]` (or NaN).
    #[error("edge density must be within [0, 1], got {0}")]
    InvalidDensity(f64),

    /// Weight range is empty or reaches the unreachable sentinel.
    #[error("weight range must be non-empty and strictly below the unreachable sentinel")]
    InvalidWeightRange,

    /// Thread sweep with `min > max`.
    #[error("thread range {min}..={max} is empty")]
    InvalidThreadRange { min: usize, max: usize },

    /// Edge weights are large enough that a shortest path could reach the
    /// unreachable sentinel of the weight type.
    #[error("edge weights up to {max_weight} over {vertices} vertices overflow the weight type")]
    WeightOverflow { max_weight: u128, vertices: usize },

    /// The rayon pool for a parallel solve could not be built.
    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    /// A parallel run disagreed with the sequential baseline.
    #[error("parallel result with {threads} threads differs from the sequential baseline")]
    Mismatch { threads: usize },

    /// Writing a report failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for APSP operations.
pub type Result<T> = std::result::Result<T, ApspError>;
