//! This module implements a variant of
//! [pathfinding's astar function](https://docs.rs/pathfinding/latest/pathfinding/directed/astar/index.html)
//! which additionally records the order in which nodes are expanded and never reopens a closed
//! node.
use indexmap::map::Entry::{Occupied, Vacant};
use num_traits::Zero;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;

use crate::path::reverse_path;
use crate::{FxIndexMap, SearchOutcome};

struct SmallestCostHolder<K> {
    estimated_cost: K,
    cost: K,
    index: usize,
}

impl<K: PartialEq> Eq for SmallestCostHolder<K> {}

impl<K: PartialEq> PartialEq for SmallestCostHolder<K> {
    fn eq(&self, other: &Self) -> bool {
        self.estimated_cost.eq(&other.estimated_cost) && self.cost.eq(&other.cost)
    }
}

impl<K: Ord> PartialOrd for SmallestCostHolder<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord> Ord for SmallestCostHolder<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Smallest estimated cost first. Among equal estimates the larger cost, i.e. the smaller
        // heuristic, wins.
        match other.estimated_cost.cmp(&self.estimated_cost) {
            Ordering::Equal => self.cost.cmp(&other.cost),
            s => s,
        }
    }
}

/// Best known way to reach a node: arena index of the parent, cost from the start and whether
/// the node has been expanded.
struct NodeRecord<C> {
    parent: usize,
    cost: C,
    closed: bool,
}

/// Best-first search from `start` until a node satisfying `success` is popped.
///
/// Nodes live in an arena keyed by node identity; frontier entries refer to arena slots. A cheaper
/// route to an open node overwrites its record and pushes a fresh entry, leaving the old one stale.
/// Stale entries and entries for closed nodes are dropped when popped and do not appear in the
/// returned trace. The start entry carries a zero estimate, matching a start node without
/// heuristic.
pub fn best_first<N, C, FN, IN, FH, FS>(
    start: &N,
    mut successors: FN,
    mut heuristic: FH,
    mut success: FS,
) -> SearchOutcome<N>
where
    N: Eq + Hash + Clone,
    C: Zero + Ord + Copy,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = (N, C)>,
    FH: FnMut(&N) -> C,
    FS: FnMut(&N) -> bool,
{
    let mut to_see = BinaryHeap::new();
    to_see.push(SmallestCostHolder {
        estimated_cost: Zero::zero(),
        cost: Zero::zero(),
        index: 0,
    });
    let mut parents: FxIndexMap<N, NodeRecord<C>> = FxIndexMap::default();
    parents.insert(
        start.clone(),
        NodeRecord {
            parent: usize::MAX,
            cost: Zero::zero(),
            closed: false,
        },
    );
    let mut visited = Vec::new();
    while let Some(SmallestCostHolder { cost, index, .. }) = to_see.pop() {
        let successors = {
            let Some((node, record)) = parents.get_index_mut(index) else {
                continue;
            };
            // We may have inserted a node several times into the binary heap if we found
            // a better way to access it. Only the entry matching the record is live.
            if record.closed || cost > record.cost {
                continue;
            }
            record.closed = true;
            visited.push(node.clone());
            if success(node) {
                let path = reverse_path(&parents, |r| r.parent, index);
                return SearchOutcome {
                    path: Some(path),
                    visited,
                };
            }
            successors(node)
        };
        for (successor, move_cost) in successors {
            let new_cost = cost + move_cost;
            let h;
            let n;
            match parents.entry(successor) {
                Vacant(e) => {
                    h = heuristic(e.key());
                    n = e.index();
                    e.insert(NodeRecord {
                        parent: index,
                        cost: new_cost,
                        closed: false,
                    });
                }
                Occupied(mut e) => {
                    if e.get().closed || e.get().cost <= new_cost {
                        continue;
                    }
                    h = heuristic(e.key());
                    n = e.index();
                    e.insert(NodeRecord {
                        parent: index,
                        cost: new_cost,
                        closed: false,
                    });
                }
            }

            to_see.push(SmallestCostHolder {
                estimated_cost: new_cost + h,
                cost: new_cost,
                index: n,
            });
        }
    }
    SearchOutcome {
        path: None,
        visited,
    }
}
