use maze_core::Coord;

/// Cached neighbour computation helper.
///
/// Enumerates the cardinal (4-way) neighbours of a cell, filtered by a
/// predicate, into a reused buffer.
pub struct Neighbors {
    buf: Vec<Coord>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(4),
        }
    }

    /// Return the up, down, left and right neighbours of `c`, keeping only
    /// those for which `keep` returns `true`.
    pub fn cardinal(&mut self, c: Coord, keep: impl Fn(Coord) -> bool) -> &[Coord] {
        self.buf.clear();
        self.buf.extend(c.neighbors_4().filter(|&n| keep(n)));
        &self.buf
    }
}
