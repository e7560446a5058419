use criterion::{black_box, criterion_group, criterion_main, Criterion};

use gravity_four::{check_winner, settle, BoardState, Coord, Grid, Gravity, Player};

/// A half-filled, run-free board: the worst case for settling (every tile
/// moves on a tilt) and a realistic one for win scanning.
fn staggered_grid() -> Grid {
    let mut grid = Grid::standard();
    for col in 0..7 {
        let depth = 1 + (col * 3) % 5;
        for row in (6 - depth)..6 {
            let player = if (row + 2 * col) % 4 < 2 {
                Player::Red
            } else {
                Player::Yellow
            };
            grid.set(Coord::new(row, col), Some(player));
        }
    }
    grid
}

fn bench_settle(c: &mut Criterion) {
    let grid = staggered_grid();

    c.bench_function("settle_right", |b| {
        b.iter(|| {
            let mut g = grid.clone();
            settle(&mut g, Gravity::Right);
            black_box(g)
        })
    });
}

fn bench_check_winner(c: &mut Criterion) {
    let grid = staggered_grid();

    c.bench_function("check_winner", |b| {
        b.iter(|| black_box(check_winner(black_box(&grid), Gravity::Down)))
    });
}

fn bench_full_turn(c: &mut Criterion) {
    let state = BoardState::with_starting_player(Player::Red)
        .apply_move(3)
        .apply_move(2)
        .apply_move(3);

    c.bench_function("apply_move", |b| {
        b.iter(|| black_box(state.apply_move(black_box(4))))
    });

    c.bench_function("change_gravity", |b| {
        b.iter(|| black_box(state.change_gravity(black_box(Gravity::Left))))
    });
}

criterion_group!(benches, bench_settle, bench_check_winner, bench_full_turn);
criterion_main!(benches);
