//! colbench CLI: drive batch sources over benchmark data files.

use clap::{Parser, Subcommand, ValueEnum};
use colbench_core::config::BenchConfig;
use colbench_core::paths::data_file_path;
use colbench_core::split::{enumerate_splits, FileFormat};
use colbench_source::{BatchSource, TableReader};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "colbench")]
#[command(about = "Columnar batch-source benchmark driver", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SourceArg {
    Materialized,
    Streaming,
}

#[derive(Subcommand)]
enum Commands {
    /// Drain a table file through a batch source and report timings
    Run {
        /// Test-data file (relative names resolve against the data dir)
        #[arg(short, long)]
        file: String,

        /// Consumption strategy
        #[arg(long, value_enum, default_value = "streaming")]
        source: SourceArg,

        /// Directory that relative file names resolve against
        #[arg(long)]
        data_dir: Option<String>,

        /// Times each worker drains the file
        #[arg(long, default_value = "1")]
        iterations: usize,

        /// Worker threads, one source each
        #[arg(long, default_value = "1")]
        threads: usize,

        /// Pin worker i to CPU (cpu + i)
        #[arg(long)]
        cpu: Option<usize>,

        /// Rows per batch (reader default otherwise)
        #[arg(long)]
        batch_size: Option<usize>,

        /// Print per-batch row counts
        #[arg(long)]
        print_result: bool,
    },

    /// Enumerate the splits of a dataset directory
    Splits {
        /// Dataset directory
        #[arg(short, long)]
        dir: PathBuf,

        /// File format to enumerate (parquet, orc)
        #[arg(long, default_value = "parquet")]
        format: FileFormat,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Run {
            file,
            source,
            data_dir,
            iterations,
            threads,
            cpu,
            batch_size,
            print_result,
        } => {
            let mut cfg = BenchConfig::default();
            if let Some(dir) = data_dir {
                cfg.data_dir = dir;
            }
            cfg.iterations = iterations;
            cfg.threads = threads;
            cfg.cpu = cpu;
            cfg.batch_size_hint = batch_size;
            cfg.print_result = print_result;
            run_bench(&cfg, &file, source)
        }
        Commands::Splits { dir, format } => run_splits(&dir, format),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run_bench(cfg: &BenchConfig, file: &str, source: SourceArg) -> colbench_core::Result<()> {
    let path = data_file_path(cfg, file)?;

    let workers: Vec<_> = (0..cfg.threads.max(1))
        .map(|i| {
            let path = path.clone();
            let cfg = cfg.clone();
            std::thread::spawn(move || worker(&cfg, &path, source, i))
        })
        .collect();

    collect_workers(workers)
}

/// Join the workers, propagating their errors with their original
/// classification. A panic is a driver bug, not one of the data-path error
/// classes, so it aborts the run directly.
fn collect_workers(
    workers: Vec<std::thread::JoinHandle<colbench_core::Result<()>>>,
) -> colbench_core::Result<()> {
    for handle in workers {
        match handle.join() {
            Ok(result) => result?,
            Err(_) => {
                eprintln!("error: worker thread panicked");
                std::process::exit(1);
            }
        }
    }
    Ok(())
}

fn worker(
    cfg: &BenchConfig,
    path: &std::path::Path,
    source: SourceArg,
    index: usize,
) -> colbench_core::Result<()> {
    if let Some(base) = cfg.cpu {
        pin_to_cpu(base + index);
    }

    for iteration in 0..cfg.iterations.max(1) {
        let start = Instant::now();
        let mut reader = TableReader::open(path)?;
        if let Some(rows) = cfg.batch_size_hint {
            reader = reader.with_batch_size(rows);
        }
        let mut src = match source {
            SourceArg::Materialized => BatchSource::materialized_from(reader)?,
            SourceArg::Streaming => BatchSource::streaming_from(reader)?,
        };
        let opened = start.elapsed();

        let mut batches = 0usize;
        let mut rows = 0usize;
        while let Some(batch) = src.pull()? {
            batches += 1;
            rows += batch.num_rows();
            if cfg.print_result {
                println!("worker {index}: batch {batches}: {} rows", batch.num_rows());
            }
        }
        let elapsed = start.elapsed();
        println!(
            "worker {index} iter {iteration}: {rows} rows in {batches} batches, \
             open {:?}, total {:?}",
            opened, elapsed
        );
    }
    Ok(())
}

fn pin_to_cpu(index: usize) {
    let pinned = core_affinity::get_core_ids()
        .and_then(|ids| ids.into_iter().find(|id| id.id == index))
        .map(core_affinity::set_for_current)
        .unwrap_or(false);
    if !pinned {
        eprintln!("warning: could not pin to cpu {index}");
    }
}

fn run_splits(dir: &std::path::Path, format: FileFormat) -> colbench_core::Result<()> {
    let info = enumerate_splits(dir, format)?;
    let json = serde_json::to_string_pretty(&info)
        .map_err(|e| colbench_core::Error::Config(format!("serialize splits: {e}")))?;
    println!("{json}");
    Ok(())
}
