//! Example demonstrating puzzle generation.
//!
//! Generates a single puzzle and prints the seed, the problem, the
//! solution, and the grading.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle
//! ```
//!
//! Pick the board size, symmetry, and grading:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --box-size 2 --symmetry diagonal --grading hard
//! ```
//!
//! Reproduce a puzzle from its seed:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --seed <64-hex-chars>
//! ```

use std::process;

use clap::Parser;
use sudogen_core::{Dimension, Grading, SymbolType, Symmetry};
use sudogen_generator::{GeneratorRequest, GradingTarget, PuzzleGenerator, PuzzleSeed};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Box size of the board: 2 (4x4), 3 (9x9), or 4 (16x16).
    #[arg(long, value_name = "SIZE", default_value_t = 3)]
    box_size: u8,

    /// Symbol set identifier (digits, letters).
    #[arg(long, value_name = "SYMBOLS", default_value = "digits")]
    symbols: String,

    /// Symmetry identifier (none, rotational-180, vertical-mirror,
    /// horizontal-mirror, diagonal, anti-diagonal).
    #[arg(long, value_name = "SYMMETRY", default_value = "rotational-180")]
    symmetry: String,

    /// Grading identifier (easy, moderate, hard, expert, diabolic), or
    /// "random" to accept the first attempt.
    #[arg(long, value_name = "GRADING", default_value = "random")]
    grading: String,

    /// Hex seed for reproducible generation.
    #[arg(long, value_name = "SEED")]
    seed: Option<String>,

    /// Generate an empty board instead of a puzzle.
    #[arg(long)]
    empty: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let dimension = match Dimension::from_box_size(args.box_size) {
        Ok(dimension) => dimension,
        Err(err) => exit_with(&err),
    };
    let symbol_type = match SymbolType::from_identifier(&args.symbols) {
        Ok(symbol_type) => symbol_type,
        Err(err) => exit_with(&err),
    };
    let symmetry = match Symmetry::from_identifier(&args.symmetry) {
        Ok(symmetry) => symmetry,
        Err(err) => exit_with(&err),
    };
    let target = if args.grading == "random" {
        GradingTarget::Random
    } else {
        match Grading::from_identifier(&args.grading) {
            Ok(grading) => GradingTarget::Graded(grading),
            Err(err) => exit_with(&err),
        }
    };
    let seed = match &args.seed {
        Some(text) => match text.parse::<PuzzleSeed>() {
            Ok(seed) => seed,
            Err(err) => exit_with(&err),
        },
        None => PuzzleSeed::random(),
    };

    let request = GeneratorRequest {
        dimension,
        symbol_type,
        symmetry,
        target,
        empty_grid: args.empty,
    };
    let generator = PuzzleGenerator::new();
    let generated = match generator.generate_with_seed(&request, seed) {
        Ok(generated) => generated,
        Err(err) => exit_with(&err),
    };

    println!("Seed:");
    println!("  {}", generated.seed);
    println!();
    println!("Problem ({} givens):", generated.puzzle.given_count());
    print_indented(&generated.puzzle.to_grid().to_string());
    if let Some(solution) = &generated.solution {
        println!();
        println!("Solution:");
        print_indented(&solution.to_string());
    }
    println!();
    println!("Grading:");
    println!("  {}", generated.puzzle.grading());
}

fn print_indented(grid: &str) {
    for line in grid.lines() {
        println!("  {line}");
    }
}

fn exit_with(err: &dyn std::error::Error) -> ! {
    eprintln!("{err}");
    process::exit(2);
}
