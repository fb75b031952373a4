use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockfall::core::{clear_lines, GameState, Grid};
use blockfall::engine::{EngineConfig, Session};
use blockfall::term::{FrameBuffer, GameView, Viewport};
use blockfall::types::{GameAction, Phase, COLS, EMPTY, ROWS};

fn bench_gravity_step(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("gravity_step", |b| {
        b.iter(|| {
            black_box(state.gravity_step());
            if state.phase() == Phase::GameOver {
                state.restart();
            }
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    let mut rows = [[EMPTY; COLS]; ROWS];
    for row in rows.iter_mut().skip(ROWS - 4) {
        *row = [1; COLS];
    }
    let grid = Grid::from_rows(rows);

    c.bench_function("clear_4_lines", |b| {
        b.iter(|| clear_lines(black_box(&grid)))
    });
}

fn bench_try_move(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    let mut dx = 1;

    c.bench_function("try_move", |b| {
        b.iter(|| {
            if !state.try_move(black_box(dx), 0) {
                dx = -dx;
            }
        })
    });
}

fn bench_try_rotate(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("try_rotate", |b| {
        b.iter(|| {
            state.try_rotate();
        })
    });
}

fn bench_session_advance(c: &mut Criterion) {
    let mut session = Session::new(EngineConfig::default().with_seed(12345));

    c.bench_function("session_advance_50ms", |b| {
        b.iter(|| {
            session.push_input(GameAction::MoveLeft);
            session.advance(black_box(50));
            if session.state().active().is_none() {
                session.restart();
            }
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let snap = GameState::new(12345).snapshot();
    let view = GameView::default();
    let mut fb = FrameBuffer::new(80, 24);

    c.bench_function("render_into_80x24", |b| {
        b.iter(|| view.render_into(black_box(&snap), Viewport::new(80, 24), &mut fb))
    });
}

criterion_group!(
    benches,
    bench_gravity_step,
    bench_line_clear,
    bench_try_move,
    bench_try_rotate,
    bench_session_advance,
    bench_render
);
criterion_main!(benches);
