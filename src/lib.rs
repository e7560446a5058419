//! # gravity-four
//!
//! A two-player connection game engine where a player may, instead of
//! dropping a tile, rotate the direction of gravity. All placed tiles then
//! slide and re-settle along the new axis, which can create or destroy
//! winning lines.
//!
//! ## Design Principles
//!
//! 1. **Immutable Snapshots**: every transition takes `&self` and returns a
//!    brand-new [`BoardState`]. The grid is backed by `im` persistent
//!    vectors, so snapshots share structure instead of deep-copying.
//!
//! 2. **Total Transitions**: illegal but harmless requests (dropping into a
//!    full lane, acting on a finished game, re-selecting the current gravity)
//!    return an unchanged copy rather than an error. A UI cannot corrupt the
//!    game by clicking.
//!
//! 3. **Geometry As Data**: gravity directions and win-line orientations are
//!    displacement-vector tables, consumed identically by tile placement,
//!    settling, and win scanning.
//!
//! 4. **Injectable Randomness**: the only random event, the 50/50
//!    starting-player choice, draws from a caller-supplied [`GameRng`] so
//!    tests and replays can seed it.
//!
//! ## Modules
//!
//! - `core`: players, RNG, the `BoardState` snapshot and its transitions
//! - `geometry`: gravity vectors and board coordinates
//! - `board`: persistent grid storage, lanes, settling simulation
//! - `rules`: four-in-a-row scanning and outcome resolution
//!
//! ## Example
//!
//! ```
//! use gravity_four::{BoardState, GameRng, Gravity};
//!
//! let mut rng = GameRng::new(42);
//! let game = BoardState::new(&mut rng);
//!
//! // Drop a tile into column 3, then tilt the board to the right.
//! let game = game.apply_move(3);
//! let game = game.change_gravity(Gravity::Right);
//!
//! assert!(game.outcome().is_none());
//! ```

pub mod board;
pub mod core;
pub mod geometry;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{BoardState, GameRng, GameRngState, Player};

pub use crate::board::{is_settled, settle, Grid, STANDARD_COLS, STANDARD_ROWS};

pub use crate::geometry::{Coord, Gravity};

pub use crate::rules::{check_winner, GameResult, Outcome, RUN_LENGTH};
