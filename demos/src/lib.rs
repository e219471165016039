//! Console view of a maze and a path through it.
//!
//! Used by the `maze` binary; kept in a library so the layout is testable.

use std::collections::HashSet;
use std::fmt::Write;

use maze_core::{Coord, Grid};

/// The labyrinth the `maze` binary solves when no file is given.
pub const LABYRINTH: [[i32; 5]; 5] = [
    [1, 0, 1, 1, 1],
    [0, 1, 1, 0, 1],
    [0, 0, 0, 1, 0],
    [1, 1, 0, 0, 1],
    [1, 0, 1, 0, 0],
];

/// Draw `grid` with `path` overlaid, two characters per cell.
///
/// `S` marks the start, `G` the goal, `*` other path cells and `X` blocked
/// cells; open cells are blank. The grid itself is left untouched.
pub fn render(grid: &Grid, path: &[Coord], start: Coord, goal: Coord) -> String {
    let on_path: HashSet<Coord> = path.iter().copied().collect();
    let mut out = String::with_capacity(grid.rows() * (grid.cols() * 2 + 1));
    for (c, v) in grid.iter() {
        let mark = if c == start {
            "S "
        } else if c == goal {
            "G "
        } else if on_path.contains(&c) {
            "* "
        } else if v == maze_core::OPEN {
            "  "
        } else {
            "X "
        };
        out.push_str(mark);
        if c.col + 1 == grid.cols() {
            out.push('\n');
        }
    }
    out
}

/// Format a path as `[(r, c), (r, c), ...]`.
pub fn format_path(path: &[Coord]) -> String {
    let mut out = String::from("[");
    for (i, c) in path.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        // Writing to a String cannot fail.
        let _ = write!(out, "{c}");
    }
    out.push(']');
    out
}
