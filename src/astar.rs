//! A* search loop over an implicit unit-cost graph. The parents of expanded
//! nodes live in an insertion-ordered [IndexMap] so that frontier entries can
//! refer to their node by index, path reconstruction can walk parent links
//! without cloning keys around, and equally-estimated entries pop in
//! first-discovered order.

use fxhash::FxBuildHasher;
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use itertools::unfold;
use log::warn;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// A frontier entry: the estimated total cost `f = g + h`, the accumulated
/// cost `g` and the index of the node in the parents map.
struct FrontierEntry {
    estimated_cost: f32,
    cost: i32,
    index: usize,
}

impl Eq for FrontierEntry {}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Pop order: lowest estimated cost first, then lowest accumulated
        // cost, then discovery order. [BinaryHeap] is a max-heap, so the
        // comparisons are reversed.
        other
            .estimated_cost
            .total_cmp(&self.estimated_cost)
            .then_with(|| other.cost.cmp(&self.cost))
            .then_with(|| other.index.cmp(&self.index))
    }
}

fn reverse_path<N, V, F>(parents: &FxIndexMap<N, V>, mut parent: F, start: usize) -> Vec<N>
where
    N: Eq + Hash + Clone,
    F: FnMut(&V) -> usize,
{
    let mut path: Vec<N> = unfold(start, |i| {
        parents.get_index(*i).map(|(node, value)| {
            *i = parent(value);
            node.clone()
        })
    })
    .collect();
    path.reverse();
    path
}

/// Runs A* from `start` over the graph induced by `successors`, where every
/// edge costs one move, until a node satisfying `success` is popped as the
/// current best or the frontier is exhausted. Returns the node sequence from
/// `start` to the successful node inclusive, along with its cost.
///
/// A node can sit in the heap several times if better routes to it keep
/// being discovered; stale entries are skipped when popped rather than
/// removed on relaxation.
pub(crate) fn astar_search<N, FN, IN, FH, FS>(
    start: &N,
    mut successors: FN,
    mut heuristic: FH,
    mut success: FS,
) -> Option<(Vec<N>, i32)>
where
    N: Eq + Hash + Clone,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = N>,
    FH: FnMut(&N) -> f32,
    FS: FnMut(&N) -> bool,
{
    let mut frontier = BinaryHeap::new();
    frontier.push(FrontierEntry {
        estimated_cost: 0.0,
        cost: 0,
        index: 0,
    });
    let mut parents: FxIndexMap<N, (usize, i32)> = FxIndexMap::default();
    parents.insert(start.clone(), (usize::MAX, 0));
    while let Some(FrontierEntry { cost, index, .. }) = frontier.pop() {
        let successors = {
            let (node, &(_, best_cost)) = parents.get_index(index).unwrap();
            if success(node) {
                let path = reverse_path(&parents, |&(p, _)| p, index);
                return Some((path, cost));
            }
            if cost > best_cost {
                continue;
            }
            successors(node)
        };
        for successor in successors {
            let new_cost = cost + 1;
            let h; // heuristic(&successor)
            let n; // index for successor
            match parents.entry(successor) {
                Vacant(e) => {
                    h = heuristic(e.key());
                    n = e.index();
                    e.insert((index, new_cost));
                }
                Occupied(mut e) => {
                    if e.get().1 > new_cost {
                        h = heuristic(e.key());
                        n = e.index();
                        e.insert((index, new_cost));
                    } else {
                        continue;
                    }
                }
            }

            frontier.push(FrontierEntry {
                estimated_cost: new_cost as f32 + h,
                cost: new_cost,
                index: n,
            });
        }
    }
    warn!("frontier exhausted before a goal was reached");
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frontier_pop_order_is_deterministic() {
        let mut heap = BinaryHeap::new();
        for (estimated_cost, cost, index) in
            [(2.0, 1, 0), (1.0, 1, 3), (1.0, 0, 2), (1.0, 0, 1)]
        {
            heap.push(FrontierEntry {
                estimated_cost,
                cost,
                index,
            });
        }
        let order: Vec<usize> = std::iter::from_fn(|| heap.pop().map(|e| e.index)).collect();
        // f ascending, then g ascending, then discovery index ascending.
        assert_eq!(order, vec![1, 2, 3, 0]);
    }

    #[test]
    fn searches_a_line_graph() {
        // 0 - 1 - 2 - 3 with no branching.
        let result = astar_search(
            &0i32,
            |&n| if n < 3 { vec![n + 1] } else { vec![] },
            |&n| (3 - n) as f32,
            |&n| n == 3,
        );
        assert_eq!(result, Some((vec![0, 1, 2, 3], 3)));
    }

    #[test]
    fn start_satisfying_success_yields_singleton() {
        let result = astar_search(&7i32, |_| Vec::new(), |_| 0.0, |&n| n == 7);
        assert_eq!(result, Some((vec![7], 0)));
    }

    #[test]
    fn exhausted_frontier_yields_none() {
        let result = astar_search(&0i32, |_| Vec::<i32>::new(), |_| 0.0, |&n| n == 1);
        assert_eq!(result, None);
    }
}
