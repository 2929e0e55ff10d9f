use crate::FxIndexMap;
use grid_util::point::Point;
use itertools::Itertools;
use std::hash::Hash;

/// Walks the parent links stored in the arena from `start` back to the root and returns the
/// visited keys root-first. The root is the entry whose parent index is out of range.
pub(crate) fn reverse_path<N, V, F>(
    parents: &FxIndexMap<N, V>,
    mut parent: F,
    start: usize,
) -> Vec<N>
where
    N: Eq + Hash + Clone,
    F: FnMut(&V) -> usize,
{
    let mut path: Vec<N> = Vec::new();
    let mut i = start;
    while let Some((node, value)) = parents.get_index(i) {
        path.push(node.clone());
        i = parent(value);
    }
    path.reverse();
    path
}

/// True if every consecutive pair of points differs by exactly one unit along exactly one axis.
pub fn is_contiguous(path: &[Point]) -> bool {
    path.iter()
        .tuple_windows()
        .all(|(a, b)| a.manhattan_distance(b) == 1)
}
