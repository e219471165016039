use maze_core::{Coord, Endpoint, Grid, InvalidInputError};

use crate::config::SearchConfig;
use crate::distance::manhattan;
use crate::neighbors::Neighbors;
use crate::node::SearchNode;
use crate::sets::{ClosedSet, OpenSet};

/// How a search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// The goal was reached; the path is non-empty.
    Found,
    /// The frontier ran dry without reaching the goal.
    Unreachable,
    /// The configured expansion limit was hit first.
    BudgetExhausted,
}

/// Result of an [`AStar::search`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchReport {
    /// Cells from start to goal inclusive, or empty if no path was found.
    pub path: Vec<Coord>,
    pub outcome: Outcome,
    /// Number of nodes moved to the closed set.
    pub expanded: usize,
}

impl SearchReport {
    /// Whether a path was found.
    #[inline]
    pub fn is_found(&self) -> bool {
        self.outcome == Outcome::Found
    }

    /// Number of steps in the path, if one was found.
    pub fn cost(&self) -> Option<usize> {
        self.is_found().then(|| self.path.len() - 1)
    }
}

/// A* search over a 4-connected [`Grid`] with unit step cost and the
/// Manhattan heuristic.
///
/// The engine itself only holds configuration; every call to
/// [`search`](Self::search) owns its own open and closed sets, so one engine
/// can serve any number of grids, from any number of threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct AStar {
    config: SearchConfig,
}

impl AStar {
    /// An engine with the default (unlimited) configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// An engine with the given configuration.
    pub fn with_config(config: SearchConfig) -> Self {
        Self { config }
    }

    /// The engine's configuration.
    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// Find a shortest path from `start` to `goal`.
    ///
    /// Both endpoints must lie inside `grid`. The start cell may itself be
    /// blocked (the walker is already standing there); every other cell on
    /// the path is passable. Ties between equally promising nodes are broken
    /// by lower heuristic, then by row-major order, so results are
    /// reproducible.
    pub fn search(
        &self,
        grid: &Grid,
        start: Coord,
        goal: Coord,
    ) -> Result<SearchReport, InvalidInputError> {
        grid.check_bounds(start, Endpoint::Start)?;
        grid.check_bounds(goal, Endpoint::Goal)?;

        log::debug!(
            "astar: {start} -> {goal} on {}x{} grid",
            grid.rows(),
            grid.cols()
        );

        let mut open = OpenSet::new();
        let mut closed = ClosedSet::new();
        let mut nbuf = Neighbors::new();

        open.offer(SearchNode::new(start, 0, manhattan(start, goal), None));

        let report = 'search: loop {
            let Some(current) = open.pop() else {
                break 'search SearchReport {
                    path: Vec::new(),
                    outcome: Outcome::Unreachable,
                    expanded: closed.len(),
                };
            };

            if current.coord == goal {
                break 'search SearchReport {
                    path: closed.path_to(current),
                    outcome: Outcome::Found,
                    expanded: closed.len(),
                };
            }

            if self
                .config
                .max_expansions()
                .is_some_and(|max| closed.len() >= max)
            {
                break 'search SearchReport {
                    path: Vec::new(),
                    outcome: Outcome::BudgetExhausted,
                    expanded: closed.len(),
                };
            }

            log::trace!(
                "astar: expand {} g={} h={} open={}",
                current.coord,
                current.g,
                current.h,
                open.len()
            );
            closed.insert(current);

            let g = current.g + 1;
            for &n in nbuf.cardinal(current.coord, |n| grid.is_passable(n)) {
                if closed.contains(n) {
                    continue;
                }
                open.offer(SearchNode::new(n, g, manhattan(n, goal), Some(current.coord)));
            }
        };

        log::debug!(
            "astar: {:?} after {} expansions, path length {}",
            report.outcome,
            report.expanded,
            report.path.len()
        );
        Ok(report)
    }
}

/// Compute a shortest 4-connected path from `start` to `goal`.
///
/// Returns the cells from `start` to `goal` inclusive, `[start]` when the two
/// are equal, or an empty vector when the goal cannot be reached. Fails only
/// when an endpoint lies outside the grid.
///
/// # Example
///
/// ```
/// use maze_core::{Coord, Grid};
/// use maze_paths::find_path;
///
/// let grid: Grid = "0 0 0\n1 1 0\n0 0 0".parse().unwrap();
/// let path = find_path(&grid, Coord::new(0, 0), Coord::new(2, 0)).unwrap();
/// assert_eq!(path.len(), 7);
/// ```
pub fn find_path(grid: &Grid, start: Coord, goal: Coord) -> Result<Vec<Coord>, InvalidInputError> {
    AStar::new().search(grid, start, goal).map(|r| r.path)
}

/// Like [`find_path`], but over raw rows of cell values.
///
/// The rows are validated (non-empty, rectangular) before searching.
pub fn find_path_in<R: AsRef<[i32]>>(
    rows: &[R],
    start: Coord,
    goal: Coord,
) -> Result<Vec<Coord>, InvalidInputError> {
    let grid = Grid::from_rows(rows)?;
    find_path(&grid, start, goal)
}
