//! Win detection and outcome resolution.

pub mod winner;

pub use winner::{check_winner, GameResult, Outcome, RUN_LENGTH};
