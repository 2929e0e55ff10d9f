use grid_util::point::Point;
use smallvec::SmallVec;

use crate::pathing_grid::PathingGrid;
use crate::solver::{BestFirstSolver, GridSolver};
use crate::{SearchOutcome, N_SMALLVEC_SIZE};

/// A* variant which relaxes the successors of every expanded cell in order of increasing
/// heuristic value. The sort is stable, so cells with equal heuristic keep the east, south,
/// west, north order. Only the insertion order into the frontier differs from [AstarSolver],
/// which can change how ties are broken but not the length of the returned path.
///
/// [AstarSolver]: crate::solver::astar::AstarSolver
#[derive(Clone, Copy, Debug, Default)]
pub struct AOStarSolver;

impl BestFirstSolver for AOStarSolver {
    type Successors = SmallVec<[(Point, i32); N_SMALLVEC_SIZE]>;

    fn successors(&self, grid: &PathingGrid, node: &Point, goal: &Point) -> Self::Successors {
        let mut successors = grid.neighborhood_points_and_cost(node);
        successors.sort_by_key(|(p, _)| self.heuristic(p, goal));
        successors
    }

    fn heuristic(&self, p1: &Point, p2: &Point) -> i32 {
        p1.manhattan_distance(p2)
    }
}

impl GridSolver for AOStarSolver {
    fn search(&self, grid: &PathingGrid, start: Point, goal: Point) -> SearchOutcome<Point> {
        self.best_first_search(grid, start, goal)
    }
}
