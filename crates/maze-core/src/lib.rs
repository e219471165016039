//! **maze-core** — value types shared by the maze path planner.
//!
//! This crate provides the grid cell coordinate [`Coord`], the immutable
//! occupancy [`Grid`] and the [`InvalidInputError`] raised when a grid or a
//! search endpoint is malformed.

pub mod error;
pub mod geom;
pub mod grid;

pub use error::{Endpoint, InvalidInputError};
pub use geom::Coord;
pub use grid::{Grid, OPEN};
