use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::atomic::Ordering;

use clap::{Parser, Subcommand};
use rand::prelude::StdRng;
use rand::SeedableRng;

use fw_apsp::{
    report, ApspSolver, BenchConfig, GraphSource, Parallel, RandomGraph, Result, Sequential,
    BENCH_PROGRESS, DEFAULT_WEIGHTS, SOLVE_PROGRESS,
};

#[derive(Parser)]
#[command(name = "fw-apsp")]
#[command(about = "Floyd-Warshall all-pairs shortest paths: sequential vs parallel speedup")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the sequential baseline, then one parallel run per thread count
    Bench {
        /// Number of vertices
        #[arg(long, default_value = "1000")]
        vertices: usize,

        /// Probability that a directed edge exists
        #[arg(long, default_value = "0.5")]
        density: f64,

        /// Smallest thread count of the sweep
        #[arg(long, default_value = "1")]
        min_threads: usize,

        /// Largest thread count of the sweep (inclusive)
        #[arg(long, default_value = "8")]
        max_threads: usize,

        /// Random seed (fresh one if omitted)
        #[arg(long)]
        seed: Option<u64>,

        /// Print the baseline distance matrix
        #[arg(long)]
        print_matrix: bool,

        /// Write threads,elapsed_ms,speedup rows to this file
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Check every parallel result against the baseline
        #[arg(long)]
        verify: bool,

        /// Progress on stderr
        #[arg(long)]
        progress: bool,
    },

    /// Solve one random graph and print its distance matrix
    Solve {
        /// Number of vertices
        #[arg(long, default_value = "8")]
        vertices: usize,

        /// Probability that a directed edge exists
        #[arg(long, default_value = "0.5")]
        density: f64,

        /// Random seed (fresh one if omitted)
        #[arg(long)]
        seed: Option<u64>,

        /// Use the parallel solver with this many threads
        #[arg(long)]
        threads: Option<usize>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match command {
        Commands::Bench {
            vertices, density, min_threads, max_threads, seed, print_matrix, csv, verify, progress,
        } => {
            BENCH_PROGRESS.store(progress, Ordering::Relaxed);
            SOLVE_PROGRESS.store(progress, Ordering::Relaxed);
            let seed = seed.unwrap_or_else(rand::random);
            let config = BenchConfig {
                vertices,
                density,
                weights: DEFAULT_WEIGHTS,
                min_threads,
                max_threads,
                seed,
                verify,
            };
            writeln!(out, "Graph generated with {vertices} nodes and ~{}% connection probability (seed {seed}).",
                density * 100.0)?;
            out.flush()?;

            let result = fw_apsp::run(&config)?;
            if print_matrix {
                report::write_matrix(&mut out, &result.baseline.dist)?;
            }
            report::write_speedups(&mut out, &result.samples)?;
            writeln!(out)?;
            report::write_summary(&mut out, &result)?;
            if let Some(path) = csv {
                let mut file = BufWriter::new(File::create(&path)?);
                report::write_csv(&mut file, &result)?;
                file.flush()?;
                writeln!(out, "Wrote {}", path.display())?;
            }
        }

        Commands::Solve { vertices, density, seed, threads } => {
            let seed = seed.unwrap_or_else(rand::random);
            let mut source = RandomGraph::new(StdRng::seed_from_u64(seed), density, DEFAULT_WEIGHTS)?;
            let graph = source.generate(vertices)?;
            let solver: Box<dyn ApspSolver<i64>> = match threads {
                Some(t) => Box::new(Parallel::new(t)?),
                None => Box::new(Sequential),
            };
            let solution = solver.solve(&graph)?;
            writeln!(out, "Graph: {vertices} vertices, {} edges (seed {seed})", graph.edge_count())?;
            report::write_matrix(&mut out, &solution.dist)?;
            writeln!(out, "{}: {:.3}ms", solver.name(), solution.elapsed.as_secs_f64() * 1e3)?;
        }
    }

    out.flush()?;
    Ok(())
}
