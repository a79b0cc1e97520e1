use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use rust_reversi::{
    AnyOpenSpace, CaptureMost, Color, GameView, Geometry, HexReversi, Reversi, SquareReversi,
    Strategy,
};
use std::hint::black_box;

/// Play `plies` random legal turns from the opening to reach a midgame position.
fn midgame<G: Geometry>(mut game: Reversi<G>, plies: usize) -> Reversi<G> {
    let mut random = AnyOpenSpace::new(42);
    for _ in 0..plies {
        if game.is_over() {
            break;
        }
        let player = game.active_player();
        match random.choose_move(&game, player) {
            Ok(at) => {
                let _ = game.apply_move(player, at);
            }
            Err(_) => {
                let _ = game.skip(player);
            }
        }
    }
    game
}

fn bench_capture_most(c: &mut Criterion) {
    let hex = midgame(HexReversi::new(11).unwrap(), 20);
    c.bench_function("capture_most/hex11", |b| {
        b.iter(|| black_box(CaptureMost.choose_move(&hex, hex.active_player())))
    });

    let square = midgame(SquareReversi::new(8).unwrap(), 20);
    c.bench_function("capture_most/square8", |b| {
        b.iter(|| black_box(CaptureMost.choose_move(&square, square.active_player())))
    });
}

fn bench_legal_moves(c: &mut Criterion) {
    let hex = midgame(HexReversi::new(11).unwrap(), 20);
    c.bench_function("legal_moves/hex11", |b| b.iter(|| black_box(hex.legal_moves())));
}

fn bench_snapshot_move(c: &mut Criterion) {
    let square = midgame(SquareReversi::new(8).unwrap(), 10);
    let at = square.legal_moves()[0];
    let player = square.active_player();
    c.bench_function("simulate_move/square8", |b| {
        b.iter_batched(
            || SquareReversi::simulate(&square.board(), square.side_length(), player),
            |mut sim| black_box(sim.apply_move(player, at)),
            BatchSize::SmallInput,
        )
    });
}

fn bench_opening(c: &mut Criterion) {
    c.bench_function("new/hex11", |b| b.iter(|| black_box(HexReversi::new(11))));
    c.bench_function("score/hex11", |b| {
        let game = HexReversi::new(11).unwrap();
        b.iter(|| black_box(game.score(Color::Black)))
    });
}

criterion_group!(benches, bench_capture_most, bench_legal_moves, bench_snapshot_move, bench_opening);
criterion_main!(benches);
