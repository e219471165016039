use std::cmp::Ordering;

use maze_core::Coord;

/// A discovered cell together with its costs and the cell it was reached
/// from.
///
/// Nodes are never updated in place: a cheaper route to the same cell
/// produces a fresh node that supersedes the old one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SearchNode {
    pub(crate) coord: Coord,
    /// Steps taken from the start.
    pub(crate) g: usize,
    /// Manhattan estimate of the steps left to the goal.
    pub(crate) h: usize,
    /// `None` only for the start node.
    pub(crate) parent: Option<Coord>,
}

impl SearchNode {
    pub(crate) fn new(coord: Coord, g: usize, h: usize, parent: Option<Coord>) -> Self {
        Self {
            coord,
            g,
            h,
            parent,
        }
    }

    /// Estimated total path cost through this node.
    #[inline]
    pub(crate) fn f(&self) -> usize {
        self.g + self.h
    }
}

impl Ord for SearchNode {
    /// Priority order for the open set: lower `f` first, then lower `h`
    /// (deeper nodes), then the row-major smaller cell.
    ///
    /// Reversed so that `BinaryHeap` (a max-heap) pops the best node first.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f()
            .cmp(&self.f())
            .then_with(|| other.h.cmp(&self.h))
            .then_with(|| other.coord.cmp(&self.coord))
            .then_with(|| other.parent.cmp(&self.parent))
    }
}

impl PartialOrd for SearchNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
