//! Gravity directions and their displacement vectors.

use serde::{Deserialize, Serialize};

/// Unit displacement (row delta, column delta) per direction, indexed by
/// discriminant.
const VECTORS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, -1), (0, 1)];

/// The direction gravity pulls tiles.
///
/// `Down` is the conventional Connect-Four pull; the other three arise from
/// gravity-change moves. Each direction has a unit displacement vector:
/// Down=(+1,0), Up=(-1,0), Left=(0,-1), Right=(0,+1), with row 0 at the top
/// of the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gravity {
    Down,
    Up,
    Left,
    Right,
}

impl Gravity {
    /// All directions, in declaration order.
    pub const ALL: [Gravity; 4] = [Gravity::Down, Gravity::Up, Gravity::Left, Gravity::Right];

    /// Unit displacement vector (row delta, column delta).
    #[must_use]
    pub const fn vector(self) -> (i8, i8) {
        VECTORS[self as usize]
    }

    /// True when the pull runs along columns (Down/Up).
    ///
    /// Lanes are columns under vertical gravity and rows under horizontal
    /// gravity.
    #[must_use]
    pub const fn is_vertical(self) -> bool {
        self.vector().1 == 0
    }

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Gravity::Down => "Down",
            Gravity::Up => "Up",
            Gravity::Left => "Left",
            Gravity::Right => "Right",
        }
    }
}

impl std::fmt::Display for Gravity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
