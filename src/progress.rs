use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

/// Set to `true` to make solves print pass progress to stderr.
pub static SOLVE_PROGRESS: AtomicBool = AtomicBool::new(false);

/// Pass counter shared by the sequential and parallel kernels.
///
/// Both kernels report after every pass and once at the end, so a
/// progress-enabled sweep pays the same stderr cost on either side of the
/// speedup ratio.
pub(crate) struct PassProgress {
    n: usize,
    workers: usize,
    interval: usize,
    start: Option<Instant>,
}

impl PassProgress {
    pub(crate) fn new(n: usize, workers: usize) -> Self {
        Self {
            n,
            workers,
            interval: (n / 200).max(1), // ~0.5% granularity
            start: SOLVE_PROGRESS.load(Ordering::Relaxed).then(Instant::now),
        }
    }

    fn due(&self, done: usize) -> bool {
        done % self.interval == 0 || done == self.n
    }

    #[inline]
    pub(crate) fn pass_done(&self, k: usize) {
        let Some(start) = self.start else { return };
        let done = k + 1;
        if !self.due(done) {
            return;
        }
        let n = self.n;
        let pps = done as f64 / start.elapsed().as_secs_f64();
        let eta = (n - done) as f64 / pps;
        eprint!("\r  passes: {done}/{n} ({:.1}%)  {pps:.0} passes/s  ETA {eta:.1}s   ",
            done as f64 / n as f64 * 100.0);
    }

    pub(crate) fn finish(&self) {
        if let Some(start) = self.start {
            eprintln!("\r  passes: done in {:.2}s on {} workers                    ",
                start.elapsed().as_secs_f64(), self.workers);
        }
    }
}
