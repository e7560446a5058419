//! Outcome resolution tests.
//!
//! Covers the draw rules and the uniform win-over-exhaustion policy on
//! boards the detector can only reach after gravity rearrangements.

use gravity_four::{
    check_winner, BoardState, Coord, GameResult, Grid, Gravity, Player,
};

/// Build a standard grid from six rows of `R`, `Y`, and `.` characters.
fn grid_from(rows: [&str; 6]) -> Grid {
    let mut grid = Grid::standard();
    for (row, line) in rows.iter().enumerate() {
        assert_eq!(line.len(), 7);
        for (col, ch) in line.chars().enumerate() {
            let cell = match ch {
                'R' => Some(Player::Red),
                'Y' => Some(Player::Yellow),
                _ => None,
            };
            grid.set(Coord::new(row, col), cell);
        }
    }
    grid
}

/// A full board with no four-in-a-row anywhere: colors follow
/// `(row + 2 * col) % 4`, which caps runs at two in every orientation.
fn full_board_without_runs() -> Grid {
    grid_from([
        "RYRYRYR",
        "RYRYRYR",
        "YRYRYRY",
        "YRYRYRY",
        "RYRYRYR",
        "RYRYRYR",
    ])
}

/// Test that a full board with no runs is a draw with no highlighted
/// tiles.
#[test]
fn test_full_board_without_runs_is_a_draw() {
    let grid = full_board_without_runs();

    let outcome = check_winner(&grid, Gravity::Down).expect("no lane left to drop into");
    assert_eq!(outcome.result, GameResult::Draw);
    assert!(outcome.tiles.is_empty());
}

/// Test the same board through the state layer: the rebuilt state is
/// terminal and frozen.
#[test]
fn test_exhaustion_draw_freezes_the_state() {
    let game = BoardState::from_parts(full_board_without_runs(), Player::Red, Gravity::Down);

    assert!(game.is_terminal());
    assert!(game.droppable_lanes().is_empty());
    assert_eq!(game.change_gravity(Gravity::Left), game);
}

/// Test that a partially filled board with no runs is still ongoing.
#[test]
fn test_open_board_without_runs_is_ongoing() {
    let grid = grid_from([
        ".......",
        ".......",
        ".......",
        ".......",
        "..RY...",
        ".YRRY..",
    ]);

    assert_eq!(check_winner(&grid, Gravity::Down), None);
}

/// Test that a board whose columns are full is exhausted under vertical
/// gravity but playable under horizontal gravity.
#[test]
fn test_exhaustion_depends_on_the_gravity_axis() {
    // The run-free pattern with column 6 emptied: row lanes all have
    // space, and column lanes are full except the last.
    let grid = grid_from([
        "RYRYRY.",
        "RYRYRY.",
        "YRYRYR.",
        "YRYRYR.",
        "RYRYRY.",
        "RYRYRY.",
    ]);

    // A column is open, so vertical play continues.
    assert_eq!(check_winner(&grid, Gravity::Down), None);
    // Every row has space too.
    assert_eq!(check_winner(&grid, Gravity::Left), None);
}

/// Test that a completed run wins even when no lane can accept another
/// tile. The draw-by-exhaustion rule applies only when no run exists, and
/// it applies identically to both players.
#[test]
fn test_yellow_run_on_a_full_board_still_wins() {
    // The run-free full board with column 0's lower half turned yellow.
    let grid = grid_from([
        "RYRYRYR",
        "RYRYRYR",
        "YRYRYRY",
        "YRYRYRY",
        "YYRYRYR",
        "YYRYRYR",
    ]);

    let outcome = check_winner(&grid, Gravity::Down).unwrap();
    assert_eq!(outcome.result, GameResult::Winner(Player::Yellow));
    assert_eq!(
        outcome.tiles,
        vec![
            Coord::new(2, 0),
            Coord::new(3, 0),
            Coord::new(4, 0),
            Coord::new(5, 0),
        ]
    );
}

/// Mirror of the yellow case: the rule is symmetric.
#[test]
fn test_red_run_on_a_full_board_still_wins() {
    let grid = grid_from([
        "YRYRYRY",
        "YRYRYRY",
        "RYRYRYR",
        "RYRYRYR",
        "RRYRYRY",
        "RRYRYRY",
    ]);

    let outcome = check_winner(&grid, Gravity::Down).unwrap();
    assert_eq!(outcome.result, GameResult::Winner(Player::Red));
    assert_eq!(
        outcome.tiles,
        vec![
            Coord::new(2, 0),
            Coord::new(3, 0),
            Coord::new(4, 0),
            Coord::new(5, 0),
        ]
    );
}

/// Test that simultaneous runs for both players resolve to a draw with
/// every run highlighted.
#[test]
fn test_simultaneous_runs_draw_with_all_tiles() {
    let grid = grid_from([
        ".......",
        ".......",
        "R.....Y",
        "R.....Y",
        "R.....Y",
        "R.....Y",
    ]);

    let outcome = check_winner(&grid, Gravity::Down).unwrap();
    assert_eq!(outcome.result, GameResult::Draw);
    assert_eq!(outcome.tiles.len(), 8);
    assert!(outcome.tiles.contains(&Coord::new(2, 0)));
    assert!(outcome.tiles.contains(&Coord::new(5, 6)));
}

/// Test that a gravity change producing runs for both players at once
/// ends the game as a draw.
#[test]
fn test_tilt_into_simultaneous_runs_is_a_draw() {
    // Four red tiles spaced along the bottom row, each carrying a yellow
    // tile. Tilting left packs both rows against the wall, completing a
    // red four and a yellow four in the same transition.
    let grid = grid_from([
        ".......",
        ".......",
        ".......",
        ".......",
        "Y.Y.Y.Y",
        "R.R.R.R",
    ]);
    let game = BoardState::from_parts(grid, Player::Red, Gravity::Down);
    assert!(game.outcome().is_none());

    let after = game.change_gravity(Gravity::Left);

    let outcome = after.outcome().unwrap();
    assert_eq!(outcome.result, GameResult::Draw);
    assert_eq!(outcome.tiles.len(), 8);
    assert!(outcome.tiles.contains(&Coord::new(4, 0)));
    assert!(outcome.tiles.contains(&Coord::new(5, 3)));
}
