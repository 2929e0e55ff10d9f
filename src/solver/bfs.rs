use grid_util::point::Point;

use crate::pathing_grid::PathingGrid;
use crate::solver::{uninformed_search, GridSolver};
use crate::traversal::Discipline;
use crate::SearchOutcome;

/// Breadth-first search. Cells are marked as seen when they are queued, which makes the returned
/// path a shortest one on the unit-cost grid.
#[derive(Clone, Copy, Debug, Default)]
pub struct BfsSolver;

impl GridSolver for BfsSolver {
    fn search(&self, grid: &PathingGrid, start: Point, goal: Point) -> SearchOutcome<Point> {
        uninformed_search(grid, start, goal, Discipline::Fifo)
    }
}
