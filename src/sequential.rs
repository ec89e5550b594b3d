use std::time::Instant;

use crate::dense::DistanceMatrix;
use crate::error::Result;
use crate::graph::DenseGraph;
use crate::progress::PassProgress;
use crate::traits::{ApspSolver, Solution};
use crate::weight::{relax_row, Weight};

/// Single-threaded Floyd-Warshall. Timing baseline and correctness oracle.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sequential;

impl<W: Weight> ApspSolver<W> for Sequential {
    fn name(&self) -> String {
        "sequential".to_string()
    }

    fn solve(&self, graph: &DenseGraph<W>) -> Result<Solution<W>> {
        let mut dist = graph.snapshot();
        dist.check_headroom()?;
        let t0 = Instant::now();
        relax_all(&mut dist);
        let elapsed = t0.elapsed();
        Ok(Solution { dist, elapsed })
    }
}

/// Relax `dist` in place: pass `k` lets every `i -> j` path route through
/// vertices `0..=k`. Passes run in increasing `k`, each one complete before
/// the next starts. Negative weights are fine; negative cycles are not
/// detected and yield arbitrarily low finite costs for the affected pairs.
///
/// Fails without touching `dist` when its weights could overflow; see
/// [`DistanceMatrix::check_headroom`].
pub fn floyd_warshall<W: Weight>(dist: &mut DistanceMatrix<W>) -> Result<()> {
    dist.check_headroom()?;
    relax_all(dist);
    Ok(())
}

fn relax_all<W: Weight>(dist: &mut DistanceMatrix<W>) {
    let n = dist.vertex_count();
    let progress = PassProgress::new(n, 1);
    let mut pivot = Vec::with_capacity(n);
    for k in 0..n {
        pivot.clear();
        pivot.extend_from_slice(dist.row(k));
        for row in dist.rows_mut() {
            relax_row(row, k, &pivot);
        }
        progress.pass_done(k);
    }
    progress.finish();
}
