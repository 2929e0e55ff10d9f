use crate::best_first::best_first;
use crate::error::SearchError;
use crate::pathing_grid::PathingGrid;
use crate::traversal::{traverse, Discipline};
use crate::{SearchOutcome, N_SMALLVEC_SIZE};
use core::fmt;
use grid_util::point::Point;
use smallvec::SmallVec;
use std::str::FromStr;

pub mod aostar;
pub mod astar;
pub mod bfs;
pub mod dfs;
pub mod dijkstra;

use aostar::AOStarSolver;
use astar::AstarSolver;
use bfs::BfsSolver;
use dfs::DfsSolver;
use dijkstra::DijkstraSolver;

/// A strategy that searches a [PathingGrid] from a start to a goal cell.
pub trait GridSolver {
    /// Returns the path from `start` to `goal` if one was found, together with the cells in the
    /// order they were expanded. An empty grid yields no path and an empty trace.
    fn search(&self, grid: &PathingGrid, start: Point, goal: Point) -> SearchOutcome<Point>;
}

/// Solvers driven by the shared best-first engine, which differ only in their heuristic and
/// in the order in which successors are relaxed.
///
/// The heuristic and the successor ordering are evaluated against the goal clamped to the
/// border of the grid (see [PathingGrid::clamp_to_border]), which keeps estimates small for
/// goals far outside the grid without changing them for goals on it.
pub trait BestFirstSolver {
    type Successors: IntoIterator<Item = (Point, i32)>;

    fn heuristic(&self, p1: &Point, p2: &Point) -> i32;

    fn successors(&self, grid: &PathingGrid, node: &Point, goal: &Point) -> Self::Successors;

    fn best_first_search(
        &self,
        grid: &PathingGrid,
        start: Point,
        goal: Point,
    ) -> SearchOutcome<Point> {
        if grid.is_empty() {
            return SearchOutcome::default();
        }
        let target = grid.clamp_to_border(goal);
        best_first(
            &start,
            |node| self.successors(grid, node, &target),
            |point| self.heuristic(point, &target),
            |point| *point == goal,
        )
    }
}

/// Runs breadth- or depth-first traversal over the walkable cells of the grid.
pub(crate) fn uninformed_search(
    grid: &PathingGrid,
    start: Point,
    goal: Point,
    discipline: Discipline,
) -> SearchOutcome<Point> {
    if grid.is_empty() {
        return SearchOutcome::default();
    }
    traverse(
        &start,
        discipline,
        |node| -> SmallVec<[Point; N_SMALLVEC_SIZE]> {
            grid.neighborhood_points(node)
                .into_iter()
                .filter(|p| grid.can_move_to(*p))
                .collect()
        },
        |point| *point == goal,
    )
}

/// The selectable search strategies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Algorithm {
    #[default]
    Astar,
    AOStar,
    Dijkstra,
    Bfs,
    Dfs,
}

impl Algorithm {
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Astar,
        Algorithm::AOStar,
        Algorithm::Dijkstra,
        Algorithm::Bfs,
        Algorithm::Dfs,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Astar => "astar",
            Algorithm::AOStar => "aostar",
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::Bfs => "bfs",
            Algorithm::Dfs => "dfs",
        }
    }

    /// Whether the strategy always returns a shortest path on a unit-cost grid.
    pub fn is_optimal(self) -> bool {
        !matches!(self, Algorithm::Dfs)
    }

    pub fn solver(self) -> &'static dyn GridSolver {
        match self {
            Algorithm::Astar => &AstarSolver,
            Algorithm::AOStar => &AOStarSolver,
            Algorithm::Dijkstra => &DijkstraSolver,
            Algorithm::Bfs => &BfsSolver,
            Algorithm::Dfs => &DfsSolver,
        }
    }

    pub fn search(self, grid: &PathingGrid, start: Point, goal: Point) -> SearchOutcome<Point> {
        self.solver().search(grid, start, goal)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parses an algorithm name, ignoring ASCII case.
impl FromStr for Algorithm {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|alg| alg.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| SearchError::UnknownAlgorithm { name: s.to_owned() })
    }
}
