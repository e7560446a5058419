//! Core engine types: players, RNG, and state snapshots.
//!
//! Everything in this module is plain data. The engine holds no internal
//! mutable state between calls; a game lives entirely in the `BoardState`
//! values passed around.

pub mod player;
pub mod rng;
pub mod state;

pub use player::Player;
pub use rng::{GameRng, GameRngState};
pub use state::BoardState;
