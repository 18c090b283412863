use std::collections::BTreeMap;

use anyhow::Context;
use clap::{ArgAction, Parser};
use serde::Serialize;

use pathmaze::alloc::TrackingAllocator;
use pathmaze::{Algorithm, BatchReport, RunOptions, Summary, logger, render};

#[global_allocator]
static GLOBAL: TrackingAllocator = TrackingAllocator;

/// Generate a maze and race path-finding algorithms over it.
#[derive(Parser, Debug)]
#[command(name = "pathmaze", version, about)]
struct Args {
    /// Maze height in cells.
    #[arg(long, default_value_t = 10, allow_negative_numbers = true)]
    rows: i32,

    /// Maze width in cells.
    #[arg(long, default_value_t = 10, allow_negative_numbers = true)]
    cols: i32,

    /// Square maze; overrides --rows and --cols.
    #[arg(long, allow_negative_numbers = true)]
    size: Option<i32>,

    /// Perfect maze (one route) or a maze with loops.
    #[arg(
        long,
        value_name = "true|false|1|0",
        value_parser = pathmaze::parse_flag,
        action = ArgAction::Set,
        default_value = "true"
    )]
    single_path: bool,

    /// Seed for a reproducible maze.
    #[arg(long)]
    seed: Option<u64>,

    /// Run only this algorithm (dijkstra, astar, bfs, dfs, wallFollower).
    #[arg(long)]
    algorithm: Option<String>,

    /// Print ASCII pictures instead of JSON.
    #[arg(long)]
    render: bool,

    /// Benchmark N single-path and N multi-path mazes.
    #[arg(long, value_name = "N")]
    bench: Option<usize>,

    /// Pretty-print JSON output.
    #[arg(long)]
    pretty: bool,

    /// More logging; repeat for more detail.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BenchOutput<'a> {
    #[serde(flatten)]
    report: &'a BatchReport,
    single_path_mean: BTreeMap<Algorithm, Summary>,
    multi_path_mean: BTreeMap<Algorithm, Summary>,
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> anyhow::Result<()> {
    let out = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{out}");
    Ok(())
}

fn print_run(run: &pathmaze::AlgorithmRun) {
    let m = &run.metrics;
    println!(
        "{}: visited {} ({:.1}%), path {}, {:.3} ms",
        run.algorithm,
        m.visited_nodes,
        m.visited_percentage,
        m.path_length,
        m.elapsed_secs() * 1000.0
    );
    if !run.reached() {
        println!("(end not reachable)");
    }
    print!("{}", render(run));
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let env = std::env::var(logger::ENV_VAR).ok();
    logger::init(logger::level(args.verbose, env.as_deref()))?;

    let (rows, cols) = match args.size {
        Some(n) => (n, n),
        None => (args.rows, args.cols),
    };
    let options = RunOptions {
        seed: args.seed,
        ..RunOptions::default()
    };

    if let Some(count) = args.bench {
        let report = pathmaze::run_batch(rows, cols, count, &options)
            .with_context(|| format!("benchmarking {count} mazes of {rows}x{cols}"))?;
        return print_json(
            &BenchOutput {
                single_path_mean: report.summary(true),
                multi_path_mean: report.summary(false),
                report: &report,
            },
            args.pretty,
        );
    }

    if let Some(name) = &args.algorithm {
        let run = pathmaze::run_named(rows, cols, args.single_path, name, &options)
            .with_context(|| format!("running {name} on a {rows}x{cols} maze"))?;
        if args.render {
            print_run(&run);
            return Ok(());
        }
        return print_json(&run, args.pretty);
    }

    let report = pathmaze::run_all(rows, cols, args.single_path, &options)
        .with_context(|| format!("running a {rows}x{cols} maze"))?;
    if args.render {
        for run in report.runs.values() {
            print_run(run);
            println!();
        }
        return Ok(());
    }
    print_json(&report, args.pretty)
}
