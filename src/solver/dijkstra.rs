use grid_util::point::Point;
use smallvec::SmallVec;

use crate::pathing_grid::PathingGrid;
use crate::solver::{BestFirstSolver, GridSolver};
use crate::{SearchOutcome, N_SMALLVEC_SIZE};

/// Uniform-cost search: the best-first engine with a zero heuristic, so the frontier is ordered
/// purely by the cost from the start.
#[derive(Clone, Copy, Debug, Default)]
pub struct DijkstraSolver;

impl BestFirstSolver for DijkstraSolver {
    type Successors = SmallVec<[(Point, i32); N_SMALLVEC_SIZE]>;

    fn successors(&self, grid: &PathingGrid, node: &Point, _: &Point) -> Self::Successors {
        grid.neighborhood_points_and_cost(node)
    }

    fn heuristic(&self, _: &Point, _: &Point) -> i32 {
        0
    }
}

impl GridSolver for DijkstraSolver {
    fn search(&self, grid: &PathingGrid, start: Point, goal: Point) -> SearchOutcome<Point> {
        self.best_first_search(grid, start, goal)
    }
}
