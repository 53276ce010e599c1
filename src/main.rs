//! CLI entry point for the pour solver.
//!
//! Usage:
//!   pour-solver solve <puzzle.json> [options]
//!   pour-solver solve --stdin [options]
//!   pour-solver solve --target 6 --capacities 4,9 [options]
//!
//! Options:
//!   --json    Emit a machine-readable JSON summary instead of solution text

mod moves;
mod puzzle;
mod solver;
mod state;

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use puzzle::PuzzleConfig;
use solver::{solve, SolverResult};

#[derive(Parser)]
#[command(name = "pour-solver")]
#[command(about = "Breadth-first shortest-path solver for water pouring puzzles")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find every shortest move sequence reaching the target volume
    Solve {
        /// Path to puzzle JSON file (use --stdin to read from stdin)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Read puzzle JSON from stdin instead of a file
        #[arg(long)]
        stdin: bool,

        /// Target volume (alternative to a JSON puzzle, with --capacities)
        #[arg(long)]
        target: Option<u32>,

        /// Comma-separated glass capacities, e.g. 4,9
        #[arg(long, value_delimiter = ',')]
        capacities: Option<Vec<u32>>,

        /// Print a JSON summary instead of solution text
        #[arg(long)]
        json: bool,
    },
}

/// Output format for --json runs
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SolveOutput {
    solutions_found: usize,
    tries: usize,
    states_expanded: usize,
    solutions: Vec<SolutionOutput>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SolutionOutput {
    tries: usize,
    moves: usize,
    steps: Vec<String>,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Solve {
            file,
            stdin,
            target,
            capacities,
            json,
        } => {
            let puzzle = load_puzzle(file, stdin, target, capacities);

            if let Err(e) = puzzle.validate() {
                eprintln!("Invalid puzzle: {}", e);
                std::process::exit(1);
            }

            let result = solve(&puzzle);

            if json {
                let output = format_result(&result);
                println!("{}", serde_json::to_string_pretty(&output).unwrap());
            } else {
                print_solutions(&result);
            }
        }
    }
}

/// Build the puzzle from inline flags, a JSON file, or stdin.
fn load_puzzle(
    file: Option<PathBuf>,
    stdin: bool,
    target: Option<u32>,
    capacities: Option<Vec<u32>>,
) -> PuzzleConfig {
    if target.is_some() != capacities.is_some() {
        eprintln!("Error: --target and --capacities must be used together");
        std::process::exit(1);
    }
    let source_count = [target.is_some(), stdin, file.is_some()]
        .iter()
        .filter(|&&s| s)
        .count();
    if source_count > 1 {
        eprintln!("Error: Provide only one of a puzzle file, --stdin, or --target with --capacities");
        std::process::exit(1);
    }
    if let (Some(target), Some(capacities)) = (target, capacities) {
        return PuzzleConfig::new(target, capacities);
    }

    let json_content = if stdin {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .expect("Failed to read from stdin");
        buffer
    } else if let Some(path) = file {
        fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("Failed to read file {:?}: {}", path, e))
    } else {
        eprintln!("Error: Must provide a puzzle file, --stdin, or --target with --capacities");
        std::process::exit(1);
    };

    match serde_json::from_str(&json_content) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error parsing puzzle JSON: {}", e);
            std::process::exit(1);
        }
    }
}

/// Print each solution in discovery order, then the run totals.
fn print_solutions(result: &SolverResult) {
    for solution in &result.solutions {
        println!("Found solution! {} tries", solution.tries);
        for (i, step) in solution.steps.iter().enumerate() {
            println!("step {}: {}", i + 1, step);
        }
    }
    println!("{} solutions, {} tries", result.solutions_found, result.tries);
}

fn format_result(result: &SolverResult) -> SolveOutput {
    SolveOutput {
        solutions_found: result.solutions_found,
        tries: result.tries,
        states_expanded: result.states_expanded,
        solutions: result
            .solutions
            .iter()
            .map(|s| SolutionOutput {
                tries: s.tries,
                moves: s.move_count(),
                steps: s.steps.clone(),
            })
            .collect(),
    }
}
