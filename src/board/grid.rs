//! Persistent cell grid.
//!
//! ## Storage
//!
//! Cells live in a flat, row-major `im::Vector`, so cloning a grid for the
//! next snapshot shares structure instead of copying every cell. A cell is
//! `Option<Player>`: `None` is empty.
//!
//! ## Lanes
//!
//! A lane is the line a dropped tile travels along under the current
//! gravity: a column when gravity is vertical, a row when horizontal. The
//! grid answers lane queries (capacity, landing cell) for any direction;
//! it does not know whose turn it is.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::Player;
use crate::geometry::{Coord, Gravity};

/// Standard board height.
pub const STANDARD_ROWS: usize = 6;
/// Standard board width.
pub const STANDARD_COLS: usize = 7;

/// Fixed-size cell grid with persistent storage.
///
/// Dimensions are set at creation and never change.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vector<Option<Player>>,
}

impl Grid {
    /// Create an empty grid.
    ///
    /// Both dimensions must be non-zero; a zero-sized board is a caller
    /// contract violation.
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(rows > 0 && cols > 0, "Grid dimensions must be non-zero");

        Self {
            rows,
            cols,
            cells: std::iter::repeat(None).take(rows * cols).collect(),
        }
    }

    /// Create an empty standard 6×7 grid.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(STANDARD_ROWS, STANDARD_COLS)
    }

    /// Board height.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Board width.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    fn index(&self, coord: Coord) -> usize {
        assert!(
            coord.row < self.rows && coord.col < self.cols,
            "coordinate out of bounds"
        );
        coord.row * self.cols + coord.col
    }

    /// Get the cell at `coord`.
    #[must_use]
    pub fn get(&self, coord: Coord) -> Option<Player> {
        self.cells[self.index(coord)]
    }

    /// Set the cell at `coord`.
    pub fn set(&mut self, coord: Coord, cell: Option<Player>) {
        let index = self.index(coord);
        self.cells.set(index, cell);
    }

    /// Iterate over all coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> {
        let cols = self.cols;
        (0..self.rows).flat_map(move |row| (0..cols).map(move |col| Coord::new(row, col)))
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// True when no cell is empty.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    // === Lanes ===

    /// Number of lanes under `gravity`: one per column when the pull is
    /// vertical, one per row when horizontal.
    #[must_use]
    pub fn lane_count(&self, gravity: Gravity) -> usize {
        if gravity.is_vertical() {
            self.cols
        } else {
            self.rows
        }
    }

    /// Iterate over the cells of a lane, in axis order.
    ///
    /// `lane` must be in range for the gravity axis.
    pub fn lane_coords(&self, gravity: Gravity, lane: usize) -> impl Iterator<Item = Coord> {
        assert!(
            lane < self.lane_count(gravity),
            "lane index out of range for the current gravity axis"
        );

        let vertical = gravity.is_vertical();
        let len = if vertical { self.rows } else { self.cols };
        (0..len).map(move |i| {
            if vertical {
                Coord::new(i, lane)
            } else {
                Coord::new(lane, i)
            }
        })
    }

    /// True iff the lane has at least one empty cell.
    #[must_use]
    pub fn lane_has_space(&self, gravity: Gravity, lane: usize) -> bool {
        self.lane_coords(gravity, lane)
            .any(|coord| self.get(coord).is_none())
    }

    /// The cell where a tile dropped into `lane` lands: the first empty
    /// cell scanning from the far wall back against the pull direction.
    ///
    /// Returns `None` when the lane is full.
    #[must_use]
    pub fn drop_cell(&self, gravity: Gravity, lane: usize) -> Option<Coord> {
        let (row_delta, col_delta) = gravity.vector();
        let pull = if gravity.is_vertical() {
            row_delta
        } else {
            col_delta
        };

        let lane_cells: Vec<Coord> = self.lane_coords(gravity, lane).collect();
        if pull > 0 {
            lane_cells
                .into_iter()
                .rev()
                .find(|&coord| self.get(coord).is_none())
        } else {
            lane_cells
                .into_iter()
                .find(|&coord| self.get(coord).is_none())
        }
    }
}
