//! Typed errors for grid construction and algorithm selection.
//!
//! A search that does not reach its goal is not an error: it is reported as a
//! `None` path in [`SearchOutcome`](crate::SearchOutcome).

use core::fmt;

/// Failure to build a [`PathingGrid`](crate::pathing_grid::PathingGrid) from rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A row does not have the same length as the first row.
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ragged {
                row,
                expected,
                found,
            } => write!(
                f,
                "grid is not rectangular: row {row} has {found} cells, expected {expected}"
            ),
        }
    }
}

impl std::error::Error for GridError {}

/// Failure to resolve a search strategy by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The name is not one of `astar`, `aostar`, `dijkstra`, `bfs` or `dfs`.
    UnknownAlgorithm { name: String },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownAlgorithm { name } => write!(f, "unknown algorithm: {name:?}"),
        }
    }
}

impl std::error::Error for SearchError {}
