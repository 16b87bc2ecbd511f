use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tetris_classic::core::{collides, project_ghost, try_rotate, Board, Engine, GameSnapshot, Piece};
use tetris_classic::types::{BlockColor, GameAction, GamePhase, PieceKind, BOARD_WIDTH};

fn bench_tick(c: &mut Criterion) {
    let mut engine = Engine::new(12345, 0);
    engine.apply_action(GameAction::Start);

    c.bench_function("engine_advance", |b| {
        b.iter(|| {
            engine.advance();
            if engine.phase() == GamePhase::GameOver {
                engine.apply_action(GameAction::Start);
            }
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("compact_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            // Fill bottom 4 rows
            for y in 18..22 {
                for x in 0..BOARD_WIDTH as i8 {
                    board.set_cell(x, y, BlockColor::Cyan);
                }
            }
            let rows = board.full_rows();
            black_box(board.compact_after_removing(&rows));
        })
    });
}

fn bench_hard_drop(c: &mut Criterion) {
    let mut engine = Engine::new(12345, 0);
    engine.apply_action(GameAction::Start);

    c.bench_function("hard_drop", |b| {
        b.iter(|| {
            match engine.phase() {
                GamePhase::Playing => {
                    engine.apply_action(GameAction::HardDrop);
                }
                GamePhase::LineClearAnimation => engine.advance(),
                _ => {
                    engine.apply_action(GameAction::Start);
                }
            }
        })
    });
}

fn bench_ghost_projection(c: &mut Criterion) {
    let board = Board::new();
    let mut piece = Piece::new(PieceKind::T);
    piece.home();

    c.bench_function("project_ghost", |b| {
        b.iter(|| black_box(project_ghost(black_box(&board), black_box(&piece))))
    });
}

fn bench_try_rotate(c: &mut Criterion) {
    let board = Board::new();
    let mut piece = Piece::new(PieceKind::L);
    piece.home();

    c.bench_function("try_rotate", |b| {
        b.iter(|| black_box(try_rotate(&piece, |p| collides(&board, p))))
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let mut engine = Engine::new(12345, 0);
    engine.apply_action(GameAction::Start);
    let mut snap = GameSnapshot::default();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| {
            engine.snapshot_into(&mut snap);
            black_box(&snap);
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_hard_drop,
    bench_ghost_projection,
    bench_try_rotate,
    bench_snapshot
);
criterion_main!(benches);
