//! An immutable occupancy grid.
//!
//! Each cell holds an `i32`: `0` is passable, any other value is blocked.
//! A [`Grid`] is validated once on construction (non-empty, rectangular) and
//! never changes afterwards, so searches can borrow it freely.

use std::str::FromStr;

use crate::error::{Endpoint, InvalidInputError};
use crate::Coord;

/// Cell value for a passable cell.
pub const OPEN: i32 = 0;

/// A rectangular 2D grid of cell values stored in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Vec<i32>>", into = "Vec<Vec<i32>>")
)]
pub struct Grid {
    cells: Vec<i32>,
    rows: usize,
    cols: usize,
}

impl Grid {
    /// Build a grid from a sequence of rows.
    ///
    /// Fails if there are no rows, the first row is empty, or any row's
    /// length differs from the first.
    pub fn from_rows<I, R>(rows: I) -> Result<Self, InvalidInputError>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[i32]>,
    {
        let mut cells = Vec::new();
        let mut cols = 0;
        let mut n_rows = 0;
        for (i, row) in rows.into_iter().enumerate() {
            let row = row.as_ref();
            if i == 0 {
                cols = row.len();
            } else if row.len() != cols {
                return Err(InvalidInputError::RaggedGrid {
                    row: i,
                    expected: cols,
                    found: row.len(),
                });
            }
            cells.extend_from_slice(row);
            n_rows += 1;
        }
        if n_rows == 0 || cols == 0 {
            return Err(InvalidInputError::EmptyGrid);
        }
        Ok(Self {
            cells,
            rows: n_rows,
            cols,
        })
    }

    /// Create an all-passable grid.
    pub fn open(rows: usize, cols: usize) -> Result<Self, InvalidInputError> {
        if rows == 0 || cols == 0 {
            return Err(InvalidInputError::EmptyGrid);
        }
        let len = rows
            .checked_mul(cols)
            .ok_or(InvalidInputError::TooLarge { rows, cols })?;
        Ok(Self {
            cells: vec![OPEN; len],
            rows,
            cols,
        })
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`: construction rejects empty grids.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `c` lies inside the grid.
    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        c.row < self.rows && c.col < self.cols
    }

    /// Flat row-major index of `c`, or `None` if out of bounds.
    #[inline]
    pub fn index(&self, c: Coord) -> Option<usize> {
        self.contains(c).then(|| c.row * self.cols + c.col)
    }

    /// Coordinate of a flat row-major index.
    #[inline]
    pub fn coord(&self, idx: usize) -> Coord {
        Coord::new(idx / self.cols, idx % self.cols)
    }

    /// The cell value at `c`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, c: Coord) -> Option<i32> {
        self.index(c).map(|i| self.cells[i])
    }

    /// Whether `c` is inside the grid and holds [`OPEN`].
    #[inline]
    pub fn is_passable(&self, c: Coord) -> bool {
        self.at(c) == Some(OPEN)
    }

    /// Reject a search endpoint that lies outside the grid.
    pub fn check_bounds(&self, c: Coord, endpoint: Endpoint) -> Result<(), InvalidInputError> {
        if self.contains(c) {
            Ok(())
        } else {
            Err(InvalidInputError::OutOfBounds {
                endpoint,
                coord: c,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// Iterate over `(Coord, value)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, i32)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &v)| (self.coord(i), v))
    }

    /// Copy the grid back out as nested rows.
    pub fn to_rows(&self) -> Vec<Vec<i32>> {
        self.cells.chunks(self.cols).map(<[i32]>::to_vec).collect()
    }
}

impl TryFrom<Vec<Vec<i32>>> for Grid {
    type Error = InvalidInputError;

    fn try_from(rows: Vec<Vec<i32>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl From<Grid> for Vec<Vec<i32>> {
    fn from(g: Grid) -> Self {
        g.to_rows()
    }
}

impl FromStr for Grid {
    type Err = InvalidInputError;

    /// Parse whitespace-separated integers, one row per non-blank line.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rows = Vec::new();
        for (n, line) in s.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let row = line
                .split_whitespace()
                .map(|tok| {
                    tok.parse::<i32>().map_err(|_| InvalidInputError::BadCell {
                        line: n + 1,
                        token: tok.to_string(),
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            rows.push(row);
        }
        Self::from_rows(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_and_size() {
        let g = Grid::from_rows([[0, 1, 0], [1, 0, 0]]).unwrap();
        assert_eq!(g.rows(), 2);
        assert_eq!(g.cols(), 3);
        assert_eq!(g.len(), 6);
        assert_eq!(g.at(Coord::new(0, 1)), Some(1));
        assert_eq!(g.at(Coord::new(1, 2)), Some(0));
        assert_eq!(g.at(Coord::new(2, 0)), None);
    }

    #[test]
    fn rejects_empty() {
        let none: [[i32; 0]; 0] = [];
        assert_eq!(Grid::from_rows(none), Err(InvalidInputError::EmptyGrid));
        assert_eq!(
            Grid::from_rows(vec![Vec::<i32>::new()]),
            Err(InvalidInputError::EmptyGrid)
        );
        assert_eq!(Grid::open(0, 4), Err(InvalidInputError::EmptyGrid));
    }

    #[test]
    fn open_rejects_overflowing_size() {
        let rows = 1usize << (usize::BITS - 1);
        assert_eq!(
            Grid::open(rows, 2),
            Err(InvalidInputError::TooLarge { rows, cols: 2 })
        );
        assert_eq!(
            Grid::open(usize::MAX, usize::MAX),
            Err(InvalidInputError::TooLarge {
                rows: usize::MAX,
                cols: usize::MAX
            })
        );
    }

    #[test]
    fn rejects_ragged() {
        let err = Grid::from_rows(vec![vec![0, 0, 0], vec![0, 0]]).unwrap_err();
        assert_eq!(
            err,
            InvalidInputError::RaggedGrid {
                row: 1,
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn passable_means_zero_and_in_bounds() {
        let g = Grid::from_rows([[0, 7], [-1, 0]]).unwrap();
        assert!(g.is_passable(Coord::new(0, 0)));
        assert!(!g.is_passable(Coord::new(0, 1)));
        assert!(!g.is_passable(Coord::new(1, 0)));
        assert!(!g.is_passable(Coord::new(5, 5)));
    }

    #[test]
    fn check_bounds_names_endpoint() {
        let g = Grid::open(2, 2).unwrap();
        assert!(g.check_bounds(Coord::new(1, 1), Endpoint::Start).is_ok());
        assert_eq!(
            g.check_bounds(Coord::new(2, 0), Endpoint::Start),
            Err(InvalidInputError::OutOfBounds {
                endpoint: Endpoint::Start,
                coord: Coord::new(2, 0),
                rows: 2,
                cols: 2,
            })
        );
    }

    #[test]
    fn parse_text() {
        let g: Grid = "1 0 1\n\n0 0 0\n".parse().unwrap();
        assert_eq!(g.to_rows(), vec![vec![1, 0, 1], vec![0, 0, 0]]);

        let err = "0 0\n0 x".parse::<Grid>().unwrap_err();
        assert_eq!(
            err,
            InvalidInputError::BadCell {
                line: 2,
                token: "x".into()
            }
        );
        assert!(matches!(
            "0 0\n0".parse::<Grid>(),
            Err(InvalidInputError::RaggedGrid { row: 1, .. })
        ));
    }

    #[test]
    fn iter_row_major() {
        let g = Grid::from_rows([[0, 5], [6, 0]]).unwrap();
        let items: Vec<_> = g.iter().collect();
        assert_eq!(items[1], (Coord::new(0, 1), 5));
        assert_eq!(items[2], (Coord::new(1, 0), 6));
        assert_eq!(g.index(Coord::new(1, 1)), Some(3));
        assert_eq!(g.coord(3), Coord::new(1, 1));
    }
}
