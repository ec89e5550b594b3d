use std::time::Duration;

use crate::dense::DistanceMatrix;
use crate::error::Result;
use crate::graph::DenseGraph;
use crate::weight::Weight;

/// Output of one APSP run.
#[derive(Clone, Debug)]
pub struct Solution<W = i64> {
    /// Shortest known cost between every ordered pair.
    pub dist: DistanceMatrix<W>,
    /// Wall-clock time of the relaxation loops only (no copy-in).
    pub elapsed: Duration,
}

/// All-pairs shortest path solver.
pub trait ApspSolver<W: Weight> {
    /// Short label used in reports.
    fn name(&self) -> String;

    /// Solve on an independent snapshot of `graph`; the graph is left untouched.
    fn solve(&self, graph: &DenseGraph<W>) -> Result<Solution<W>>;
}

/// Something that can produce a graph with a given vertex count.
///
/// The benchmark driver takes its graph through this seam, so a seeded
/// random generator and a hand-built graph are interchangeable.
pub trait GraphSource<W: Weight> {
    fn generate(&mut self, vertices: usize) -> Result<DenseGraph<W>>;
}

impl<W, F> GraphSource<W> for F
where
    W: Weight,
    F: FnMut(usize) -> Result<DenseGraph<W>>,
{
    fn generate(&mut self, vertices: usize) -> Result<DenseGraph<W>> {
        self(vertices)
    }
}
