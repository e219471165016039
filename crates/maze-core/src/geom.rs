//! Cell coordinates: [`Coord`].
//!
//! Rows grow downwards and columns grow rightwards, so a coordinate reads the
//! same way a maze is written out line by line.

use std::fmt;

// ---------------------------------------------------------------------------
// Coord
// ---------------------------------------------------------------------------

/// A grid cell position as a `(row, col)` pair.
///
/// Equality, hashing and ordering are by value. Ordering is row-major, which
/// is also the order [`Grid::iter`](crate::Grid::iter) visits cells in.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    /// Top-left cell (0, 0).
    pub const ORIGIN: Self = Self { row: 0, col: 0 };

    /// Create a new coordinate.
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The axis-aligned neighbours in the order up, down, left, right.
    ///
    /// Neighbours that would have a negative row or column are skipped; the
    /// upper bounds are the caller's business since a `Coord` knows nothing
    /// about grid dimensions.
    #[inline]
    pub fn neighbors_4(self) -> impl Iterator<Item = Coord> {
        [
            self.row.checked_sub(1).map(|r| Self::new(r, self.col)),
            self.row.checked_add(1).map(|r| Self::new(r, self.col)),
            self.col.checked_sub(1).map(|c| Self::new(self.row, c)),
            self.col.checked_add(1).map(|c| Self::new(self.row, c)),
        ]
        .into_iter()
        .flatten()
    }

    /// Whether `other` is exactly one step away along exactly one axis.
    #[inline]
    pub fn is_adjacent(self, other: Coord) -> bool {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col) == 1
    }

    /// The coordinate as a `[row, col]` array.
    #[inline]
    pub const fn to_array(self) -> [usize; 2] {
        [self.row, self.col]
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl From<[usize; 2]> for Coord {
    fn from([row, col]: [usize; 2]) -> Self {
        Self::new(row, col)
    }
}

impl From<Coord> for [usize; 2] {
    fn from(c: Coord) -> Self {
        c.to_array()
    }
}

impl From<Coord> for (usize, usize) {
    fn from(c: Coord) -> Self {
        (c.row, c.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn equal_by_value() {
        assert_eq!(Coord::new(1, 2), Coord::new(1, 2));
        assert_ne!(Coord::new(1, 2), Coord::new(3, 4));

        let mut set = HashSet::new();
        set.insert(Coord::new(1, 2));
        assert!(set.contains(&Coord::from((1, 2))));
    }

    #[test]
    fn to_array_and_back() {
        let c = Coord::new(1, 2);
        assert_eq!(c.to_array(), [1, 2]);
        assert_eq!(Coord::from([1, 2]), c);
    }

    #[test]
    fn display_matches_pair_notation() {
        assert_eq!(Coord::new(4, 0).to_string(), "(4, 0)");
    }

    #[test]
    fn ordering_is_row_major() {
        assert!(Coord::new(0, 9) < Coord::new(1, 0));
        assert!(Coord::new(2, 1) < Coord::new(2, 3));
    }

    #[test]
    fn neighbors_skip_negative() {
        let n: Vec<_> = Coord::ORIGIN.neighbors_4().collect();
        assert_eq!(n, vec![Coord::new(1, 0), Coord::new(0, 1)]);

        let n: Vec<_> = Coord::new(3, 3).neighbors_4().collect();
        assert_eq!(
            n,
            vec![
                Coord::new(2, 3),
                Coord::new(4, 3),
                Coord::new(3, 2),
                Coord::new(3, 4),
            ]
        );
        assert!(n.iter().all(|&p| p.is_adjacent(Coord::new(3, 3))));
    }

    #[test]
    fn adjacency_excludes_diagonals_and_self() {
        let c = Coord::new(2, 2);
        assert!(c.is_adjacent(Coord::new(2, 3)));
        assert!(!c.is_adjacent(Coord::new(3, 3)));
        assert!(!c.is_adjacent(c));
    }
}
