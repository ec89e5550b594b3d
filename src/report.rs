//! Plain-text and CSV rendering of sweep results.

use std::io::{self, Write};

use crate::bench::{BenchReport, Sample};
use crate::dense::DistanceMatrix;
use crate::weight::Weight;

pub fn write_matrix<W: Weight>(out: &mut impl Write, dist: &DistanceMatrix<W>) -> io::Result<()> {
    writeln!(out, "The Distance matrix for Floyd-Warshall:")?;
    write!(out, "{dist}")
}

pub fn write_speedups(out: &mut impl Write, samples: &[Sample]) -> io::Result<()> {
    for s in samples {
        writeln!(out, "Threads: {} Speedup: {:.5}", s.threads, s.speedup)?;
    }
    write!(out, "\nThread Counts: ")?;
    for s in samples {
        write!(out, "{} ", s.threads)?;
    }
    write!(out, "\nSpeedups: ")?;
    for s in samples {
        write!(out, "{:.5} ", s.speedup)?;
    }
    writeln!(out)
}

/// `threads,elapsed_ms,speedup`, baseline first as `threads = 0`.
pub fn write_csv<W>(out: &mut impl Write, report: &BenchReport<W>) -> io::Result<()> {
    writeln!(out, "threads,elapsed_ms,speedup")?;
    writeln!(out, "0,{:.6},1.0", report.baseline.elapsed.as_secs_f64() * 1e3)?;
    for s in &report.samples {
        writeln!(out, "{},{:.6},{:.6}", s.threads, s.elapsed.as_secs_f64() * 1e3, s.speedup)?;
    }
    Ok(())
}

/// One-paragraph summary of a sweep.
pub fn write_summary<W>(out: &mut impl Write, report: &BenchReport<W>) -> io::Result<()> {
    writeln!(out, "Graph: {} vertices, {} edges", report.vertices, report.edges)?;
    writeln!(out, "Sequential: {:.3}ms", report.baseline.elapsed.as_secs_f64() * 1e3)?;
    if let Some(best) = report.best() {
        writeln!(out, "Best: {} threads, {:.3}ms, speedup {:.3}",
            best.threads, best.elapsed.as_secs_f64() * 1e3, best.speedup)?;
    }
    Ok(())
}
