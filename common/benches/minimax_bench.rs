use criterion::{Criterion, SamplingMode, criterion_group, criterion_main};
use std::hint::black_box;
use std::time::Duration;
use tictactoe_common::games::tictactoe::{Mark, Position, TicTacToeGameState, select_scored_move};

fn bench_single_move_empty_board() {
    let mut state = TicTacToeGameState::with_human_mark(Mark::O).unwrap();
    black_box(select_scored_move(&mut state.board, state.human_mark, state.computer_mark).unwrap());
}

fn bench_single_move_after_opening() {
    let mut state = TicTacToeGameState::with_human_mark(Mark::X).unwrap();
    state.play_human(Position::new(1, 1)).unwrap();
    black_box(select_scored_move(&mut state.board, state.human_mark, state.computer_mark).unwrap());
}

fn bench_single_move_mid_game() {
    let mut state = TicTacToeGameState::with_human_mark(Mark::X).unwrap();
    for (human, computer) in [((0, 0), (1, 1)), ((2, 2), (0, 2))] {
        state.play_human(Position::new(human.0, human.1)).unwrap();
        state.place_mark(Mark::O, Position::new(computer.0, computer.1)).unwrap();
    }
    state.play_human(Position::new(2, 0)).unwrap();
    black_box(select_scored_move(&mut state.board, state.human_mark, state.computer_mark).unwrap());
}

fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");

    group
        .sampling_mode(SamplingMode::Flat)
        .sample_size(10)
        .measurement_time(Duration::from_secs(30));

    group.bench_function("single_move_empty", |b| {
        b.iter(bench_single_move_empty_board)
    });

    group.bench_function("single_move_after_opening", |b| {
        b.iter(bench_single_move_after_opening)
    });

    group.bench_function("single_move_mid_game", |b| {
        b.iter(bench_single_move_mid_game)
    });

    group.finish();
}

criterion_group!(benches, minimax_bench);
criterion_main!(benches);
