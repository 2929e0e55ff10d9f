use grid_util::point::Point;

use crate::pathing_grid::PathingGrid;
use crate::solver::{uninformed_search, GridSolver};
use crate::traversal::Discipline;
use crate::SearchOutcome;

/// Depth-first search with a stack frontier. The returned path is valid but in general not a
/// shortest one.
#[derive(Clone, Copy, Debug, Default)]
pub struct DfsSolver;

impl GridSolver for DfsSolver {
    fn search(&self, grid: &PathingGrid, start: Point, goal: Point) -> SearchOutcome<Point> {
        uninformed_search(grid, start, goal, Discipline::Lifo)
    }
}
