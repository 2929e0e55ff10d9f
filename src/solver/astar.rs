use grid_util::point::Point;
use smallvec::SmallVec;

use crate::pathing_grid::PathingGrid;
use crate::solver::{BestFirstSolver, GridSolver};
use crate::{SearchOutcome, N_SMALLVEC_SIZE};

/// A* on the 4-grid with the Manhattan distance as heuristic.
#[derive(Clone, Copy, Debug, Default)]
pub struct AstarSolver;

impl BestFirstSolver for AstarSolver {
    type Successors = SmallVec<[(Point, i32); N_SMALLVEC_SIZE]>;

    fn successors(&self, grid: &PathingGrid, node: &Point, _goal: &Point) -> Self::Successors {
        grid.neighborhood_points_and_cost(node)
    }

    fn heuristic(&self, p1: &Point, p2: &Point) -> i32 {
        p1.manhattan_distance(p2)
    }
}

impl GridSolver for AstarSolver {
    fn search(&self, grid: &PathingGrid, start: Point, goal: Point) -> SearchOutcome<Point> {
        self.best_first_search(grid, start, goal)
    }
}
