//! Tile settling under a gravity vector.
//!
//! After a gravity change every tile must slide to its new resting place.
//! Settling runs full-board passes in row-major order; within a pass each
//! occupied cell slides step-by-step along the gravity vector while the
//! adjacent cell is in bounds and empty. A single pass is not enough: a
//! tile freed by another tile's slide may itself need to move, so passes
//! repeat until one completes with zero moves.
//!
//! Tiles halt against the first occupied cell or the wall and never pass
//! through or swap with one another, so the fixed point does not depend on
//! the scan order; the fixed row-major order only makes intermediate
//! states reproducible.

use crate::board::Grid;
use crate::geometry::Gravity;

/// Slide every tile along the gravity vector until nothing can move.
pub fn settle(grid: &mut Grid, gravity: Gravity) {
    let step = gravity.vector();
    let scan: Vec<_> = grid.coords().collect();

    loop {
        let mut moved = false;

        for &start in &scan {
            let player = match grid.get(start) {
                Some(player) => player,
                None => continue,
            };

            let mut at = start;
            while let Some(next) = at.offset(step, grid.rows(), grid.cols()) {
                if grid.get(next).is_some() {
                    break;
                }
                grid.set(next, Some(player));
                grid.set(at, None);
                at = next;
                moved = true;
            }
        }

        if !moved {
            break;
        }
    }
}

/// True when no tile can slide along the gravity vector.
#[must_use]
pub fn is_settled(grid: &Grid, gravity: Gravity) -> bool {
    let step = gravity.vector();

    grid.coords().all(|coord| {
        grid.get(coord).is_none()
            || match coord.offset(step, grid.rows(), grid.cols()) {
                Some(next) => grid.get(next).is_some(),
                None => true,
            }
    })
}
