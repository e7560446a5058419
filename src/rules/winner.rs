//! Four-in-a-row scanning and outcome resolution.
//!
//! ## Scan
//!
//! Every window of four consecutive cells is checked in four orientations:
//! vertical, horizontal, diagonal down-right, diagonal down-left. The
//! orientations are a displacement-vector table, the same mechanism used
//! for gravity, so a window is just four steps from a start coordinate.
//!
//! ## Resolution
//!
//! A gravity change can rearrange the whole board at once, so more than
//! one run may appear in a single transition:
//!
//! - runs for both players → draw, with the union of all run coordinates;
//! - runs for exactly one player → that player wins. A completed run beats
//!   a draw-by-exhaustion for either player;
//! - no runs → the game continues while any lane can accept a tile, and is
//!   a draw (with no highlighted tiles) once none can.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::Grid;
use crate::core::Player;
use crate::geometry::{Coord, Gravity};

/// Tiles needed in a line to win.
pub const RUN_LENGTH: usize = 4;

/// Line orientations scanned for runs: vertical, horizontal, diagonal
/// down-right, diagonal down-left. The upward diagonals are the same lines
/// read from the other end.
const LINE_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

/// A single matched run of four tiles.
type Run = SmallVec<[Coord; RUN_LENGTH]>;

/// Result of a finished game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// A single winner.
    Winner(Player),
    /// No winner: simultaneous runs for both players, or no lane left to
    /// drop into.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        matches!(self, GameResult::Winner(winner) if *winner == player)
    }
}

/// Terminal outcome: the result plus the winning-line coordinates.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    /// Who won, or a draw.
    pub result: GameResult,

    /// The deduplicated union of every matched run, in scan order.
    /// Empty for a draw by lane exhaustion.
    pub tiles: Vec<Coord>,
}

impl Outcome {
    fn win(player: Player, tiles: Vec<Coord>) -> Self {
        Self {
            result: GameResult::Winner(player),
            tiles,
        }
    }

    fn draw(tiles: Vec<Coord>) -> Self {
        Self {
            result: GameResult::Draw,
            tiles,
        }
    }
}

/// Scan the grid for a terminal outcome.
///
/// Returns `None` while the game is still playable. `gravity` determines
/// which lanes are checked for exhaustion.
#[must_use]
pub fn check_winner(grid: &Grid, gravity: Gravity) -> Option<Outcome> {
    let mut runs: Vec<(Player, Run)> = Vec::new();

    for &step in &LINE_DIRECTIONS {
        for start in grid.coords() {
            if let Some(run) = run_at(grid, start, step) {
                runs.push(run);
            }
        }
    }

    let red_run = runs.iter().any(|(player, _)| *player == Player::Red);
    let yellow_run = runs.iter().any(|(player, _)| *player == Player::Yellow);

    match (red_run, yellow_run) {
        (true, true) => Some(Outcome::draw(union_tiles(&runs))),
        (true, false) => Some(Outcome::win(Player::Red, union_tiles(&runs))),
        (false, true) => Some(Outcome::win(Player::Yellow, union_tiles(&runs))),
        (false, false) => {
            let droppable = (0..grid.lane_count(gravity))
                .any(|lane| grid.lane_has_space(gravity, lane));
            if droppable {
                None
            } else {
                Some(Outcome::draw(Vec::new()))
            }
        }
    }
}

/// The run of four same-player tiles starting at `start` and extending
/// along `step`, if there is one.
fn run_at(grid: &Grid, start: Coord, step: (i8, i8)) -> Option<(Player, Run)> {
    let player = grid.get(start)?;

    let mut run = Run::new();
    run.push(start);

    let mut at = start;
    for _ in 1..RUN_LENGTH {
        let next = at.offset(step, grid.rows(), grid.cols())?;
        if grid.get(next) != Some(player) {
            return None;
        }
        run.push(next);
        at = next;
    }

    Some((player, run))
}

/// Union of all run coordinates, deduplicated, preserving scan order.
/// Overlapping runs (five or more in a line) share coordinates.
fn union_tiles(runs: &[(Player, Run)]) -> Vec<Coord> {
    let mut seen = FxHashSet::default();
    let mut tiles = Vec::new();

    for (_, run) in runs {
        for &coord in run {
            if seen.insert(coord) {
                tiles.push(coord);
            }
        }
    }

    tiles
}
