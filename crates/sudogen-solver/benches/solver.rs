//! Benchmarks for the backtracking solver and the technique ladder.
//!
//! Both benchmarks run against the same fixed 9×9 puzzle so results are
//! comparable across runs:
//!
//! - **`backtrack_solve`**: full backtracking solution search.
//! - **`backtrack_count`**: solution counting with the uniqueness cap of 2,
//!   the operation the generator pays for on every removal.
//! - **`ladder_solve`**: the technique ladder as driven by the grader.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench solver
//! ```

use std::hint;

use criterion::{Criterion, criterion_group, criterion_main};
use sudogen_core::Grid;
use sudogen_solver::{BacktrackSolver, TechniqueGrid, TechniqueSolver};

const PUZZLE: &str = "\
    53_ _7_ ___
    6__ 195 ___
    _98 ___ _6_
    8__ _6_ __3
    4__ 8_3 __1
    7__ _2_ __6
    _6_ ___ 28_
    ___ 419 __5
    ___ _8_ _79";

fn bench_backtrack(c: &mut Criterion) {
    let grid: Grid = PUZZLE.parse().unwrap();
    let solver = BacktrackSolver::new();

    c.bench_function("backtrack_solve", |b| {
        b.iter(|| solver.solve(hint::black_box(&grid)));
    });
    c.bench_function("backtrack_count", |b| {
        b.iter(|| solver.count_solutions(hint::black_box(&grid), 2));
    });
}

fn bench_ladder(c: &mut Criterion) {
    let grid: Grid = PUZZLE.parse().unwrap();
    let solver = TechniqueSolver::with_full_ladder();

    c.bench_function("ladder_solve", |b| {
        b.iter(|| {
            let mut scratch = TechniqueGrid::from_grid(hint::black_box(&grid));
            solver.solve(&mut scratch)
        });
    });
}

criterion_group!(benches, bench_backtrack, bench_ladder);
criterion_main!(benches);
