//! Benchmarks for move generation.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use chess_movegen::board::{generate_moves, Board, Color};

const POSITIONS: &[(&str, &str)] = &[
    ("startpos", "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"),
    (
        "middlegame",
        "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4",
    ),
    (
        "kiwipete",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    ),
    ("open_queens", "3qk3/8/8/8/8/8/8/3QK3 w - - 0 1"),
];

fn bench_side_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("moves_for_color");

    for &(name, fen) in POSITIONS {
        let board = Board::from_fen(fen);
        group.bench_with_input(BenchmarkId::new("white", name), &board, |b, board| {
            b.iter(|| black_box(board.moves_for_color(Color::White)))
        });
    }

    group.finish();
}

fn bench_single_piece(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_piece");
    let board = Board::from_fen("3qk3/8/8/8/8/8/8/3QK3 w - - 0 1");

    for piece in board.pieces() {
        group.bench_function(format!("{}", piece.square), |b| {
            b.iter(|| black_box(generate_moves(black_box(&piece), &board)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_side_moves, bench_single_piece);
criterion_main!(benches);
