//! Game state snapshots and transition operations.
//!
//! ## BoardState
//!
//! The atomic snapshot of a game: grid, active player, gravity direction,
//! and terminal outcome. Snapshots are immutable; every transition takes
//! `&self` and returns a brand-new value, so a consumer may retain old
//! snapshots indefinitely. Cloning is cheap because the grid's cell
//! storage is persistent.
//!
//! ## Transition model
//!
//! Transitions are total. Requests that are illegal but harmless (a drop
//! into a full lane, any request on a finished game, a gravity change to
//! the current direction) return an unchanged copy instead of an error,
//! so a UI cannot corrupt the game by clicking. The one caller contract is
//! lane addressing: a lane index outside the current gravity axis panics.
//!
//! ## Turn structure
//!
//! A turn is either a drop or a gravity change; both flip the active
//! player. The outcome is recomputed after every effective transition,
//! because a gravity change can create or destroy winning lines for either
//! player at once.

use serde::{Deserialize, Serialize};

use super::player::Player;
use super::rng::GameRng;
use crate::board::{settle, Grid};
use crate::geometry::{Coord, Gravity};
use crate::rules::{check_winner, Outcome};

/// Immutable game snapshot.
///
/// ```
/// use gravity_four::{BoardState, GameRng};
///
/// let mut rng = GameRng::new(7);
/// let game = BoardState::new(&mut rng);
/// let after = game.apply_move(0);
///
/// assert_eq!(after.active_player(), game.active_player().other());
/// assert_eq!(after.grid().occupied(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardState {
    grid: Grid,
    active_player: Player,
    gravity: Gravity,
    outcome: Option<Outcome>,
}

impl BoardState {
    /// Create a fresh game: empty standard grid, gravity down, starting
    /// player chosen 50/50 from the injected RNG.
    #[must_use]
    pub fn new(rng: &mut GameRng) -> Self {
        let starting = if rng.gen_bool(0.5) {
            Player::Red
        } else {
            Player::Yellow
        };
        Self::with_starting_player(starting)
    }

    /// Create a fresh game with a known starting player.
    #[must_use]
    pub fn with_starting_player(player: Player) -> Self {
        Self::from_parts(Grid::standard(), player, Gravity::Down)
    }

    /// Rebuild a state from raw parts, recomputing the outcome.
    ///
    /// Any state handed to a consumer carries a correct outcome, so a grid
    /// arriving from outside (a test fixture, a deserialized snapshot) is
    /// re-evaluated here.
    #[must_use]
    pub fn from_parts(grid: Grid, active_player: Player, gravity: Gravity) -> Self {
        let outcome = check_winner(&grid, gravity);
        Self {
            grid,
            active_player,
            gravity,
            outcome,
        }
    }

    // === Accessors ===

    /// The board grid.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn active_player(&self) -> Player {
        self.active_player
    }

    /// The current gravity direction.
    #[must_use]
    pub fn gravity(&self) -> Gravity {
        self.gravity
    }

    /// The terminal outcome, or `None` while the game is ongoing.
    #[must_use]
    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    /// True once the game has ended; terminal states reject transitions.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    // === Lane queries ===

    /// Number of lanes under the current gravity.
    #[must_use]
    pub fn lane_count(&self) -> usize {
        self.grid.lane_count(self.gravity)
    }

    /// True iff `lane` can accept another tile.
    ///
    /// `lane` must be in range for the current gravity axis.
    #[must_use]
    pub fn can_drop(&self, lane: usize) -> bool {
        self.grid.lane_has_space(self.gravity, lane)
    }

    /// Lanes that currently accept a tile, for enabling UI controls.
    #[must_use]
    pub fn droppable_lanes(&self) -> Vec<usize> {
        (0..self.lane_count())
            .filter(|&lane| self.can_drop(lane))
            .collect()
    }

    /// Where a tile dropped into `lane` would land, for hover previews.
    ///
    /// Returns `None` when the lane is full.
    #[must_use]
    pub fn drop_cell(&self, lane: usize) -> Option<Coord> {
        self.grid.drop_cell(self.gravity, lane)
    }

    // === Transitions ===

    /// Drop the active player's tile into `lane`.
    ///
    /// The tile lands in the empty cell nearest the far wall in the pull
    /// direction. Flips the active player and recomputes the outcome.
    /// No-op (unchanged copy) when the game is over or the lane is full.
    #[must_use]
    pub fn apply_move(&self, lane: usize) -> BoardState {
        if self.is_terminal() || !self.can_drop(lane) {
            return self.clone();
        }

        let target = self
            .grid
            .drop_cell(self.gravity, lane)
            .expect("droppable lane has an empty cell");

        let mut grid = self.grid.clone();
        grid.set(target, Some(self.active_player));

        Self::from_parts(grid, self.active_player.other(), self.gravity)
    }

    /// Drop addressed by cell rather than lane.
    ///
    /// Resolves the lane from the gravity axis (the column when gravity is
    /// vertical, the row when horizontal) and delegates to [`apply_move`].
    /// This is the natural call for a UI that knows which cell was clicked.
    ///
    /// [`apply_move`]: BoardState::apply_move
    #[must_use]
    pub fn add_tile(&self, row: usize, col: usize) -> BoardState {
        let lane = if self.gravity.is_vertical() { col } else { row };
        self.apply_move(lane)
    }

    /// Rotate gravity and re-settle every tile along the new vector.
    ///
    /// Changing gravity costs a turn: the active player flips and the
    /// outcome is recomputed against the settled grid. Selecting the
    /// current direction is a no-op and does not consume a turn, and a
    /// finished game is never re-settled.
    #[must_use]
    pub fn change_gravity(&self, direction: Gravity) -> BoardState {
        if direction == self.gravity || self.is_terminal() {
            return self.clone();
        }

        let mut grid = self.grid.clone();
        settle(&mut grid, direction);

        Self::from_parts(grid, self.active_player.other(), direction)
    }
}
