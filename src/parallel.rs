use std::num::NonZeroUsize;
use std::time::Instant;

use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::dense::DistanceMatrix;
use crate::error::{ApspError, Result};
use crate::graph::DenseGraph;
use crate::progress::PassProgress;
use crate::traits::{ApspSolver, Solution};
use crate::weight::{relax_row, Weight};

/// Floyd-Warshall with each pass fanned out over a fixed number of workers.
///
/// The solver owns a dedicated rayon pool of exactly `threads` workers, so
/// runs with different worker counts never share threads with each other or
/// with the global pool. Pool construction happens here, outside the timed
/// region of [`solve`](ApspSolver::solve).
pub struct Parallel {
    threads: NonZeroUsize,
    pool: ThreadPool,
}

impl Parallel {
    pub fn new(threads: usize) -> Result<Self> {
        let threads = NonZeroUsize::new(threads).ok_or(ApspError::InvalidWorkerCount)?;
        let pool = ThreadPoolBuilder::new()
            .num_threads(threads.get())
            .thread_name(|i| format!("fw-worker-{i}"))
            .build()?;
        Ok(Self { threads, pool })
    }

    pub fn threads(&self) -> NonZeroUsize {
        self.threads
    }
}

impl std::fmt::Debug for Parallel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Parallel").field("threads", &self.threads).finish()
    }
}

impl<W: Weight> ApspSolver<W> for Parallel {
    fn name(&self) -> String {
        format!("parallel-{}", self.threads)
    }

    fn solve(&self, graph: &DenseGraph<W>) -> Result<Solution<W>> {
        let mut dist = graph.snapshot();
        dist.check_headroom()?;
        let t0 = Instant::now();
        relax_all_par(&mut dist, &self.pool);
        let elapsed = t0.elapsed();
        Ok(Solution { dist, elapsed })
    }
}

/// Parallel in-place relaxation on `pool`.
///
/// The `k` loop stays sequential. Within pass `k` the rows are cut into one
/// contiguous block per worker; a block is only ever written by the task
/// that owns it, and every task reads row `k` from a copy taken before the
/// pass. The end of each `for_each` joins all tasks before pass `k + 1`.
/// The result is identical to [`floyd_warshall`](crate::floyd_warshall)
/// for any worker count, errors included.
pub fn floyd_warshall_par<W: Weight>(dist: &mut DistanceMatrix<W>, pool: &ThreadPool) -> Result<()> {
    dist.check_headroom()?;
    relax_all_par(dist, pool);
    Ok(())
}

fn relax_all_par<W: Weight>(dist: &mut DistanceMatrix<W>, pool: &ThreadPool) {
    let n = dist.vertex_count();
    if n == 0 {
        return;
    }
    let workers = pool.current_num_threads().max(1);
    let rows_per_block = n.div_ceil(workers);
    let progress = PassProgress::new(n, workers);

    let mut pivot = Vec::with_capacity(n);
    pool.install(|| {
        for k in 0..n {
            pivot.clear();
            pivot.extend_from_slice(dist.row(k));
            let pivot = &pivot;
            dist.as_mut_slice()
                .par_chunks_mut(rows_per_block * n)
                .for_each(|block| {
                    for row in block.chunks_mut(n) {
                        relax_row(row, k, pivot);
                    }
                });
            progress.pass_done(k);
        }
    });
    progress.finish();
}
