//! Alternate routes by perturbation: block one interior cell of a known route on a copy of the
//! grid and search again.
use grid_util::point::Point;
use log::{debug, info};
use rand::Rng;

use crate::pathing_grid::PathingGrid;
use crate::solver::GridSolver;
use crate::FxIndexSet;

pub const DEFAULT_MAX_ALTERNATES: usize = 3;
pub const DEFAULT_MAX_ATTEMPTS: usize = 20;

/// Bounds for [find_alternates].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AlternatesConfig {
    /// Number of alternates wanted in addition to the primary path.
    pub max_alternates: usize,
    /// Number of perturbed searches after which the generator gives up.
    pub max_attempts: usize,
}

impl AlternatesConfig {
    pub fn new(max_alternates: usize) -> AlternatesConfig {
        AlternatesConfig {
            max_alternates,
            ..AlternatesConfig::default()
        }
    }
}

impl Default for AlternatesConfig {
    fn default() -> AlternatesConfig {
        AlternatesConfig {
            max_alternates: DEFAULT_MAX_ALTERNATES,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

/// Result of [find_alternates]: the primary path followed by the alternates, or [None] if not
/// even a primary path exists, and the expansion order of the primary search.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MultiPathOutcome {
    pub paths: Option<Vec<Vec<Point>>>,
    pub visited: Vec<Point>,
}

/// Interior cells (all but the first and last) of every given path, in first-seen order.
fn interior_points(paths: &[Vec<Point>]) -> FxIndexSet<Point> {
    paths
        .iter()
        .filter(|path| path.len() > 2)
        .flat_map(|path| path[1..path.len() - 1].iter().copied())
        .collect()
}

/// Searches once with `solver` and then tries up to `config.max_attempts` times to find further
/// distinct routes. Each attempt picks one interior cell of the routes collected so far at
/// random, blocks it on a fresh copy of `grid` and searches again. Routes already collected are
/// discarded. The alternates are returned after the primary path, shortest first.
///
/// Finding fewer than `config.max_alternates` alternates is not a failure.
pub fn find_alternates<S, R>(
    solver: &S,
    grid: &PathingGrid,
    start: Point,
    goal: Point,
    config: &AlternatesConfig,
    rng: &mut R,
) -> MultiPathOutcome
where
    S: GridSolver + ?Sized,
    R: Rng + ?Sized,
{
    let primary = solver.search(grid, start, goal);
    let Some(primary_path) = primary.path else {
        info!("No path from {} to {}, no alternates to derive", start, goal);
        return MultiPathOutcome {
            paths: None,
            visited: primary.visited,
        };
    };

    // Components decide reachability exactly when both endpoints are open cells
    let use_components = grid.can_move_to(start) && grid.can_move_to(goal);
    let mut paths = vec![primary_path];
    let mut attempts = 0;
    while paths.len() - 1 < config.max_alternates && attempts < config.max_attempts {
        attempts += 1;
        let candidates = interior_points(&paths);
        if candidates.is_empty() {
            break;
        }
        let Some(&blocked) = candidates.get_index(rng.gen_range(0..candidates.len())) else {
            break;
        };
        let mut perturbed = grid.clone();
        perturbed.set_blocked(blocked, true);
        if use_components {
            perturbed.update();
            if perturbed.unreachable(&start, &goal) {
                debug!("Attempt {}: blocking {} disconnects the goal", attempts, blocked);
                continue;
            }
        }
        match solver.search(&perturbed, start, goal).path {
            Some(path) if !paths.contains(&path) => {
                debug!(
                    "Attempt {}: blocking {} gives a new route of {} cells",
                    attempts,
                    blocked,
                    path.len()
                );
                paths.push(path);
            }
            _ => debug!("Attempt {}: blocking {} gives no new route", attempts, blocked),
        }
    }

    paths[1..].sort_by_key(Vec::len);
    paths.truncate(config.max_alternates + 1);
    info!(
        "Found {} alternate paths from {} to {} in {} attempts",
        paths.len() - 1,
        start,
        goal,
        attempts
    );
    MultiPathOutcome {
        paths: Some(paths),
        visited: primary.visited,
    }
}
