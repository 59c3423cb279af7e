use std::io::{stderr, IsTerminal};
use std::path::PathBuf;
use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};
use rayon::prelude::*;
use npuzzle_solver::report::{render_pretty, render_text, SolutionReport};
use npuzzle_solver::util::read_puzzle;
use npuzzle_solver::{solve_with, Puzzle, SolveOptions, SolveResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Every state on the path as plain rows
    Text,
    /// Box drawn grids with the move letters
    Pretty,
    /// One JSON report per puzzle
    Json,
}

#[derive(Parser)]
#[command(author, version, about = "Solve sliding-tile puzzles optimally with A* search", long_about = None)]
struct Cli {
    /// Puzzle files holding one grid each, rows on separate lines
    #[arg(value_name = "FILE", required_unless_present = "puzzles")]
    files: Vec<PathBuf>,
    /// Puzzle in one-line form, e.g. 3,3,1,2,3,4,0,6,7,5,8
    #[arg(long = "puzzle", value_name = "SERIALIZED")]
    puzzles: Vec<String>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// Stop a search after generating this many states
    #[arg(long, value_name = "NUM")]
    max_states: Option<usize>,
    /// With the pretty format, also draw each start tile's Manhattan distance
    #[arg(long)]
    distances: bool,
    /// Hide the progress bar shown when solving several puzzles
    #[arg(long)]
    no_progress: bool,
    /// Log search statistics to stderr
    #[arg(short, long)]
    verbose: bool,
}

struct Job {
    source: String,
    puzzle: Result<Puzzle>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();

    let jobs = load_jobs(&cli);
    let options = SolveOptions {
        max_states: cli.max_states,
    };

    let progress = if jobs.len() > 1 && !cli.no_progress && stderr().is_terminal() {
        let pb = ProgressBar::new(jobs.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} puzzles")?
                .progress_chars("##-"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let results: Vec<Result<(Puzzle, SolveResult)>> = jobs
        .par_iter()
        .map_init(
            || progress.clone(),
            |pb, job| {
                let outcome = match &job.puzzle {
                    Ok(puzzle) => Ok((puzzle.clone(), solve_with(puzzle, &options))),
                    Err(err) => Err(anyhow::anyhow!("{:#}", err)),
                };
                pb.inc(1);
                outcome
            },
        )
        .collect();
    progress.finish_and_clear();

    let mut reports: Vec<SolutionReport> = vec![];
    let mut failures = 0;

    for (job, result) in jobs.iter().zip(results) {
        match result {
            Ok((start, solved)) => {
                info!(
                    "{}: {} after {} states in {:?}",
                    job.source,
                    solved.outcome.label(),
                    solved.states,
                    solved.elapsed
                );
                match cli.format {
                    OutputFormat::Text => print_section(&job.source, &render_text(&solved), jobs.len()),
                    OutputFormat::Pretty => print_section(&job.source, &render_pretty(&start, &solved, cli.distances), jobs.len()),
                    OutputFormat::Json => reports.push(SolutionReport::new(&job.source, &start, &solved)),
                }
            },
            Err(err) => {
                failures += 1;
                eprintln!("{} {}: {:#}", "error:".red().bold(), job.source, err);
            }
        }
    }

    if cli.format == OutputFormat::Json {
        let json = if jobs.len() == 1 && reports.len() == 1 {
            serde_json::to_string_pretty(&reports[0])?
        } else {
            serde_json::to_string_pretty(&reports)?
        };
        println!("{}", json);
    }

    if failures > 0 {
        bail!("{} of {} puzzles could not be loaded", failures, jobs.len());
    }

    Ok(())
}

fn load_jobs(cli: &Cli) -> Vec<Job> {
    let from_files = cli.files.iter().map(|path| Job {
        source: path.display().to_string(),
        puzzle: read_puzzle(path).with_context(|| format!("failed to load {}", path.display())),
    });

    let inline = cli.puzzles.iter().map(|serialized| Job {
        source: serialized.clone(),
        puzzle: serialized
            .parse::<Puzzle>()
            .with_context(|| format!("failed to parse puzzle {:?}", serialized)),
    });

    let jobs: Vec<Job> = from_files.chain(inline).collect();
    if jobs.is_empty() {
        warn!("no puzzles given");
    }
    jobs
}

fn print_section(source: &str, body: &str, total: usize) {
    if total > 1 {
        println!("{}", format!("== {}", source).bold());
    }
    println!("{}", body);
    if total > 1 {
        println!();
    }
}
