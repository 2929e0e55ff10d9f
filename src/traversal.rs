use indexmap::map::Entry::Vacant;
use std::collections::VecDeque;
use std::hash::Hash;

use crate::path::reverse_path;
use crate::{FxIndexMap, SearchOutcome};

/// Which end of the frontier is expanded next.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Discipline {
    /// First in, first out: breadth-first order.
    Fifo,
    /// Last in, first out: depth-first order.
    Lifo,
}

/// Uninformed traversal from `start` until a node satisfying `success` is taken from the
/// frontier.
///
/// A node enters the arena, and is thereby marked as seen, the moment it is added to the
/// frontier, so no node is queued twice and its parent is whichever node discovered it first.
pub fn traverse<N, FN, IN, FS>(
    start: &N,
    discipline: Discipline,
    mut successors: FN,
    mut success: FS,
) -> SearchOutcome<N>
where
    N: Eq + Hash + Clone,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = N>,
    FS: FnMut(&N) -> bool,
{
    let mut parents: FxIndexMap<N, usize> = FxIndexMap::default();
    parents.insert(start.clone(), usize::MAX);
    let mut frontier = VecDeque::from([0]);
    let mut visited = Vec::new();
    loop {
        let next = match discipline {
            Discipline::Fifo => frontier.pop_front(),
            Discipline::Lifo => frontier.pop_back(),
        };
        let Some(index) = next else {
            break;
        };
        let successors = {
            let Some((node, _)) = parents.get_index(index) else {
                continue;
            };
            visited.push(node.clone());
            if success(node) {
                let path = reverse_path(&parents, |&p| p, index);
                return SearchOutcome {
                    path: Some(path),
                    visited,
                };
            }
            successors(node)
        };
        for successor in successors {
            if let Vacant(e) = parents.entry(successor) {
                frontier.push_back(e.index());
                e.insert(index);
            }
        }
    }
    SearchOutcome {
        path: None,
        visited,
    }
}
