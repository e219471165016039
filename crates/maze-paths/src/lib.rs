//! Shortest paths on 4-connected occupancy grids.
//!
//! This crate implements A* search specialised for grids where every step
//! costs one and movement is up, down, left or right only. The Manhattan
//! heuristic is exact on an empty grid and never overestimates, so the
//! first time a cell is taken off the frontier its cost is already optimal
//! and it is never reopened.
//!
//! - [`find_path`] is the one-call entry point.
//! - [`AStar`] carries a [`SearchConfig`] (e.g. an expansion limit) and
//!   returns a [`SearchReport`] with the outcome and expansion count.
//!
//! Each call owns its open and closed sets; the [`Grid`](maze_core::Grid) is
//! only borrowed, so searches on shared grids can run in parallel.

mod astar;
mod config;
mod distance;
mod neighbors;
mod node;
mod sets;

pub use astar::{AStar, Outcome, SearchReport, find_path, find_path_in};
pub use config::SearchConfig;
pub use distance::manhattan;
pub use neighbors::Neighbors;
