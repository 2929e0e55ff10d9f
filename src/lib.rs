//! # grid_search
//!
//! Shortest-path search on 4-connected, uniform-cost occupancy grids. Five strategies share one
//! grid model and one node arena:
//!
//! - [A*](solver::astar::AstarSolver) with the Manhattan distance as heuristic,
//! - [AO*](solver::aostar::AOStarSolver), A* relaxing successors in heuristic order,
//! - [Dijkstra](solver::dijkstra::DijkstraSolver), A* with a zero heuristic,
//! - [breadth-first](solver::bfs::BfsSolver) and [depth-first](solver::dfs::DfsSolver) search.
//!
//! Every search reports the order in which cells were expanded next to the path it found. On top
//! of that, [find_alternates] derives distinct alternate routes by blocking cells of known routes
//! on copies of the grid, and the [request] module exposes both calls through a JSON contract.
mod best_first;
pub mod alternates;
pub mod error;
pub mod path;
pub mod pathing_grid;
pub mod request;
pub mod solver;
mod traversal;

use fxhash::FxBuildHasher;
use indexmap::{IndexMap, IndexSet};
use log::{info, warn};
use rand::Rng;

pub use alternates::{AlternatesConfig, MultiPathOutcome};
pub use error::{GridError, SearchError};
pub use grid_util::point::Point;
pub use pathing_grid::PathingGrid;
pub use solver::{Algorithm, GridSolver};

pub(crate) type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;
pub(crate) type FxIndexSet<K> = IndexSet<K, FxBuildHasher>;

/// Cost of a single move between adjacent cells.
pub const C: i32 = 1;
/// Inline capacity of neighbour lists, the size of the von Neumann neighbourhood.
pub const N_SMALLVEC_SIZE: usize = 4;

/// Result of a single search: the path from start to goal if one was found and the nodes in the
/// order they were expanded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchOutcome<N> {
    pub path: Option<Vec<N>>,
    pub visited: Vec<N>,
}

impl<N> Default for SearchOutcome<N> {
    fn default() -> Self {
        SearchOutcome {
            path: None,
            visited: Vec::new(),
        }
    }
}

/// Searches `grid` from `start` to `goal` with the strategy named `algorithm` (`astar`, `aostar`,
/// `dijkstra`, `bfs` or `dfs`, ignoring case). Unknown names are rejected.
pub fn search(
    grid: &PathingGrid,
    start: Point,
    goal: Point,
    algorithm: &str,
) -> Result<SearchOutcome<Point>, SearchError> {
    let algorithm: Algorithm = algorithm.parse()?;
    let outcome = algorithm.search(grid, start, goal);
    match &outcome.path {
        Some(path) => info!(
            "{}: path of {} cells from {} to {} after {} expansions",
            algorithm,
            path.len(),
            start,
            goal,
            outcome.visited.len()
        ),
        None => info!(
            "{}: {} is not reachable from {} after {} expansions",
            algorithm,
            goal,
            start,
            outcome.visited.len()
        ),
    }
    Ok(outcome)
}

/// Finds a primary path with the strategy named `algorithm` and up to `config.max_alternates`
/// distinct alternates, see [alternates::find_alternates]. Unlike [search], an unknown algorithm
/// name is not an error here: it falls back to A*.
pub fn find_alternates<R: Rng + ?Sized>(
    grid: &PathingGrid,
    start: Point,
    goal: Point,
    algorithm: &str,
    config: &AlternatesConfig,
    rng: &mut R,
) -> MultiPathOutcome {
    let algorithm = algorithm.parse().unwrap_or_else(|err| {
        warn!("{}, falling back to {}", err, Algorithm::default());
        Algorithm::default()
    });
    alternates::find_alternates(algorithm.solver(), grid, start, goal, config, rng)
}
