//! Dense all-pairs shortest paths (Floyd-Warshall) with a sequential
//! baseline, a rayon-parallel solver and a speedup sweep.
//!
//! ```
//! use fw_apsp::{ApspSolver, DenseGraph, Parallel, Sequential};
//!
//! let g = DenseGraph::<i64>::from_edges(3, &[(0, 1, 5), (1, 2, 3)]).unwrap();
//! let seq = Sequential.solve(&g).unwrap();
//! let par = Parallel::new(4).unwrap().solve(&g).unwrap();
//! assert_eq!(seq.dist.distance(0, 2), Some(8));
//! assert_eq!(seq.dist.distance(2, 0), None);
//! assert_eq!(seq.dist, par.dist);
//! ```

pub mod bench;
pub mod dense;
pub mod error;
pub mod generate;
pub mod graph;
pub mod parallel;
pub mod progress;
pub mod report;
pub mod sequential;
pub mod traits;
pub mod weight;

pub use bench::{run, run_with_source, speedup, BenchConfig, BenchReport, Sample, BENCH_PROGRESS};
pub use dense::DistanceMatrix;
pub use error::{ApspError, Result};
pub use generate::{RandomGraph, DEFAULT_WEIGHTS};
pub use graph::DenseGraph;
pub use parallel::{floyd_warshall_par, Parallel};
pub use progress::SOLVE_PROGRESS;
pub use sequential::{floyd_warshall, Sequential};
pub use traits::{ApspSolver, GraphSource, Solution};
pub use weight::Weight;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use super::{
        floyd_warshall, floyd_warshall_par, ApspSolver, BenchConfig, DenseGraph, DistanceMatrix,
        GraphSource, Parallel, RandomGraph, Sequential, Solution, Weight, DEFAULT_WEIGHTS,
    };
}
