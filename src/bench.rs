//! Speedup sweep: one sequential baseline, then one parallel run per
//! worker count.

use std::num::NonZeroUsize;
use std::ops::RangeInclusive;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use rand::prelude::StdRng;
use rand::SeedableRng;

use crate::error::{ApspError, Result};
use crate::generate::{RandomGraph, DEFAULT_WEIGHTS};
use crate::parallel::Parallel;
use crate::sequential::Sequential;
use crate::traits::{ApspSolver, GraphSource, Solution};
use crate::weight::Weight;

/// Set to `true` to make the sweep print per-run progress to stderr.
pub static BENCH_PROGRESS: AtomicBool = AtomicBool::new(false);

/// Sweep parameters. `Default` reproduces the classic setup: 1000 vertices,
/// density 0.5, weights 1..=100, 1 to 8 threads.
#[derive(Clone, Debug, PartialEq)]
pub struct BenchConfig {
    pub vertices: usize,
    pub density: f64,
    pub weights: RangeInclusive<i64>,
    pub min_threads: usize,
    pub max_threads: usize,
    pub seed: u64,
    /// Compare every parallel matrix against the baseline.
    pub verify: bool,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            vertices: 1000,
            density: 0.5,
            weights: DEFAULT_WEIGHTS,
            min_threads: 1,
            max_threads: 8,
            seed: 0,
            verify: false,
        }
    }
}

impl BenchConfig {
    pub fn validate(&self) -> Result<()> {
        if self.vertices == 0 {
            return Err(ApspError::EmptyGraph);
        }
        if !(0.0..=1.0).contains(&self.density) {
            return Err(ApspError::InvalidDensity(self.density));
        }
        if self.weights.is_empty() || !self.weights.end().is_finite() {
            return Err(ApspError::InvalidWeightRange);
        }
        if self.min_threads == 0 {
            return Err(ApspError::InvalidWorkerCount);
        }
        if self.min_threads > self.max_threads {
            return Err(ApspError::InvalidThreadRange { min: self.min_threads, max: self.max_threads });
        }
        Ok(())
    }

    pub fn thread_counts(&self) -> RangeInclusive<usize> {
        self.min_threads..=self.max_threads
    }
}

/// One measured parallel run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    pub threads: NonZeroUsize,
    pub elapsed: Duration,
    /// `baseline / elapsed`
    pub speedup: f64,
}

/// Result of a full sweep.
#[derive(Clone, Debug)]
pub struct BenchReport<W = i64> {
    pub vertices: usize,
    pub edges: usize,
    pub baseline: Solution<W>,
    pub samples: Vec<Sample>,
}

impl<W> BenchReport<W> {
    /// Sample with the highest speedup.
    pub fn best(&self) -> Option<&Sample> {
        self.samples.iter().max_by(|a, b| a.speedup.total_cmp(&b.speedup))
    }
}

/// `baseline / elapsed`, with both clamped to 1ns so the ratio is always
/// finite and positive.
pub fn speedup(baseline: Duration, elapsed: Duration) -> f64 {
    let tick = Duration::from_nanos(1);
    baseline.max(tick).as_secs_f64() / elapsed.max(tick).as_secs_f64()
}

/// Run the sweep on a random graph seeded from `config.seed`.
pub fn run(config: &BenchConfig) -> Result<BenchReport<i64>> {
    config.validate()?;
    let mut source = RandomGraph::new(
        StdRng::seed_from_u64(config.seed),
        config.density,
        config.weights.clone(),
    )?;
    run_with_source(config, &mut source)
}

/// Run the sweep on whatever graph `source` produces for `config.vertices`.
///
/// Only `vertices`, the thread range and `verify` are read from `config`;
/// density, weights and seed belong to the source.
pub fn run_with_source<W: Weight>(
    config: &BenchConfig,
    source: &mut impl GraphSource<W>,
) -> Result<BenchReport<W>> {
    config.validate()?;
    let progress = BENCH_PROGRESS.load(Ordering::Relaxed);

    let t0 = Instant::now();
    let graph = source.generate(config.vertices)?;
    let vertices = graph.vertex_count();
    let edges = graph.edge_count();
    if progress {
        eprintln!("graph: {vertices} vertices, {edges} edges, {} bytes in {:.1}ms",
            graph.matrix().estimate_memory_usage(), t0.elapsed().as_secs_f64() * 1e3);
    }

    let baseline = Sequential.solve(&graph)?;
    if progress {
        eprintln!("baseline: {:.3}ms", baseline.elapsed.as_secs_f64() * 1e3);
    }

    let mut samples = Vec::with_capacity(config.thread_counts().count());
    for threads in config.thread_counts() {
        let solver = Parallel::new(threads)?;
        let run = solver.solve(&graph)?;
        if config.verify && run.dist != baseline.dist {
            return Err(ApspError::Mismatch { threads });
        }
        let sample = Sample {
            threads: solver.threads(),
            elapsed: run.elapsed,
            speedup: speedup(baseline.elapsed, run.elapsed),
        };
        if progress {
            eprintln!("Threads: {threads} Speedup: {:.5} ({:.3}ms)",
                sample.speedup, sample.elapsed.as_secs_f64() * 1e3);
        }
        samples.push(sample);
    }

    Ok(BenchReport { vertices, edges, baseline, samples })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::DenseGraph;
    use crate::sequential::floyd_warshall;

    fn small_config() -> BenchConfig {
        BenchConfig {
            vertices: 60,
            density: 0.3,
            max_threads: 4,
            seed: 42,
            verify: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_default_config() {
        let c = BenchConfig::default();
        assert_eq!(c.vertices, 1000);
        assert_eq!(c.density, 0.5);
        assert_eq!(c.weights, 1..=100);
        assert_eq!(c.thread_counts(), 1..=8);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_config() {
        let bad = |f: fn(&mut BenchConfig)| {
            let mut c = small_config();
            f(&mut c);
            c.validate().unwrap_err()
        };
        assert!(matches!(bad(|c| c.vertices = 0), ApspError::EmptyGraph));
        assert!(matches!(bad(|c| c.density = -0.1), ApspError::InvalidDensity(_)));
        assert!(matches!(bad(|c| c.min_threads = 0), ApspError::InvalidWorkerCount));
        assert!(matches!(
            bad(|c| { c.min_threads = 5; c.max_threads = 2; }),
            ApspError::InvalidThreadRange { min: 5, max: 2 }
        ));
        assert!(matches!(bad(|c| c.weights = 1..=i64::MAX), ApspError::InvalidWeightRange));
    }

    #[test]
    fn test_one_sample_per_thread_count_in_order() {
        let report = run(&small_config()).unwrap();
        let threads: Vec<usize> = report.samples.iter().map(|s| s.threads.get()).collect();
        assert_eq!(threads, vec![1, 2, 3, 4]);
        for s in &report.samples {
            assert!(s.speedup.is_finite() && s.speedup > 0.0, "speedup {}", s.speedup);
        }
        assert_eq!(report.vertices, 60);
        assert!(report.best().is_some());
    }

    #[test]
    fn test_thread_range_offset() {
        let config = BenchConfig { min_threads: 3, max_threads: 5, ..small_config() };
        let report = run(&config).unwrap();
        let threads: Vec<usize> = report.samples.iter().map(|s| s.threads.get()).collect();
        assert_eq!(threads, vec![3, 4, 5]);
    }

    #[test]
    fn test_seeded_runs_reproduce_baseline() {
        let a = run(&small_config()).unwrap();
        let b = run(&small_config()).unwrap();
        assert_eq!(a.baseline.dist, b.baseline.dist);
        assert_eq!(a.edges, b.edges);
    }

    #[test]
    fn test_injected_source() {
        let mut calls = 0;
        let mut source = |n: usize| {
            calls += 1;
            DenseGraph::<i64>::from_edges(n, &[(0, 1, 5), (1, 2, 3)])
        };
        let config = BenchConfig { vertices: 3, max_threads: 2, verify: true, ..Default::default() };
        let report = run_with_source(&config, &mut source).unwrap();
        assert_eq!(calls, 1);
        assert_eq!(report.edges, 2);
        assert_eq!(report.baseline.dist.get(0, 2), 8);
        assert_eq!(report.baseline.dist.get(2, 0), i64::MAX);
        assert_eq!(report.samples.len(), 2);
    }

    #[test]
    fn test_baseline_matrix_is_full_solution() {
        let config = small_config();
        let report = run(&config).unwrap();
        let mut src = RandomGraph::new(StdRng::seed_from_u64(config.seed), config.density, config.weights.clone()).unwrap();
        let mut expected = src.generate(config.vertices).unwrap().snapshot();
        floyd_warshall(&mut expected).unwrap();
        assert_eq!(report.baseline.dist, expected);
    }

    #[test]
    fn test_source_errors_propagate() {
        let mut source = |_: usize| DenseGraph::<i64>::from_edges(2, &[(0, 7, 1)]);
        let config = BenchConfig { vertices: 2, max_threads: 1, ..Default::default() };
        assert!(matches!(
            run_with_source(&config, &mut source),
            Err(ApspError::VertexOutOfRange { vertex: 7, .. })
        ));
    }

    #[test]
    fn test_overflowing_weights_fail_the_sweep() {
        let mut source = |n: usize| DenseGraph::<u8>::from_edges(n, &[(0, 1, 200), (1, 2, 100)]);
        let config = BenchConfig { vertices: 3, max_threads: 2, ..Default::default() };
        assert!(matches!(
            run_with_source(&config, &mut source),
            Err(ApspError::WeightOverflow { .. })
        ));
    }

    #[test]
    fn test_speedup_is_finite_for_zero_durations() {
        assert_eq!(speedup(Duration::ZERO, Duration::ZERO), 1.0);
        assert_eq!(speedup(Duration::from_millis(10), Duration::from_millis(5)), 2.0);
        let s = speedup(Duration::from_millis(3), Duration::ZERO);
        assert!(s.is_finite() && s > 0.0);
    }

    #[test]
    fn test_best_sample() {
        let mk = |threads, speedup| Sample {
            threads: NonZeroUsize::new(threads).unwrap(),
            elapsed: Duration::from_millis(1),
            speedup,
        };
        let g = DenseGraph::<i64>::new(1).unwrap();
        let report = BenchReport {
            vertices: 1,
            edges: 0,
            baseline: Sequential.solve(&g).unwrap(),
            samples: vec![mk(1, 0.9), mk(2, 1.8), mk(3, 1.2)],
        };
        assert_eq!(report.best().unwrap().threads.get(), 2);
    }

    #[test]
    #[cfg(feature = "long-tests")]
    fn test_full_default_sweep() {
        let config = BenchConfig { seed: 1000, verify: true, ..Default::default() };
        let report = run(&config).unwrap();
        assert_eq!(report.samples.len(), 8);
        for s in &report.samples {
            assert!(s.speedup.is_finite() && s.speedup > 0.0);
        }
    }
}
