use criterion::*;

#[cfg(unix)]
use pprof::criterion::{Output, PProfProfiler};

use iago_othello::{Board, Location};
use iago_solver::solve_game;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Play seeded random moves from the start until `empties` squares remain,
/// so every run solves the same positions.
fn endgame_position(seed: u64, empties: u32) -> Board {
    let mut rng = StdRng::seed_from_u64(seed);

    'games: loop {
        let mut board = Board::default();

        while board.count_empties() > empties {
            let moves = board.get_moves();
            if moves.is_empty() {
                if board.just_passed {
                    continue 'games;
                }
                board = board.pass();
                continue;
            }

            let candidates: Vec<Location> = moves.collect();
            board = board.apply_move(candidates[rng.gen_range(0..candidates.len())]);
        }

        if !board.get_moves().is_empty() {
            return board;
        }
    }
}

fn criterion_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve");
    group.sample_size(20);

    for empties in [10, 12, 14] {
        let board = endgame_position(1234, empties);
        group.bench_with_input(
            BenchmarkId::from_parameter(empties),
            &board,
            |b, &board| b.iter(|| solve_game(black_box(board.player), black_box(board.opp))),
        );
    }

    group.finish();
}

#[cfg(unix)]
criterion_group! {
    name = solve;
    config = Criterion::default().with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)));
    targets = criterion_solve
}

#[cfg(not(unix))]
criterion_group! {
    name = solve;
    config = Criterion::default();
    targets = criterion_solve
}

criterion_main!(solve);
