//! Board storage and tile settling.

pub mod grid;
pub mod settle;

pub use grid::{Grid, STANDARD_COLS, STANDARD_ROWS};
pub use settle::{is_settled, settle};
