//! Board geometry: gravity directions and coordinates.
//!
//! Directions map to unit displacement vectors through a lookup table, so
//! tile placement, settling, and win scanning all consume the same data
//! instead of branching on the direction at every use site.

pub mod coord;
pub mod direction;

pub use coord::Coord;
pub use direction::Gravity;
