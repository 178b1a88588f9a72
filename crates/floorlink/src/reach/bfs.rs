//! Adjacency construction and breadth-first search.

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use serde::{Deserialize, Serialize};

use crate::layout::Unit;
use crate::link::{can_talk, Anchor};
use crate::locks::Lock;
use crate::params::Params;

/// Result of one BFS run.
///
/// Invariants:
/// - `root ∈ visited`;
/// - every key of `predecessor` is in `visited` and is not `root`;
/// - `order` lists `visited` in dequeue order, starting with `root`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reachability {
    pub root: usize,
    pub visited: BTreeSet<usize>,
    /// child → parent
    pub predecessor: BTreeMap<usize, usize>,
    pub order: Vec<usize>,
}

impl Reachability {
    #[inline]
    pub fn is_reachable(&self, node: usize) -> bool {
        self.visited.contains(&node)
    }

    #[inline]
    pub fn parent(&self, node: usize) -> Option<usize> {
        self.predecessor.get(&node).copied()
    }

    /// Tree path `root, …, node`, or `None` if `node` is unreachable.
    pub fn path_to(&self, node: usize) -> Option<Vec<usize>> {
        if !self.is_reachable(node) {
            return None;
        }
        let mut path = vec![node];
        let mut cur = node;
        while let Some(p) = self.parent(cur) {
            path.push(p);
            cur = p;
        }
        path.reverse();
        Some(path)
    }

    /// Hop count from the root along the tree.
    pub fn depth(&self, node: usize) -> Option<usize> {
        self.path_to(node).map(|p| p.len() - 1)
    }

    /// Nodes in `0..n` not reached from the root, ascending.
    pub fn unreachable(&self, n: usize) -> Vec<usize> {
        (0..n).filter(|i| !self.visited.contains(i)).collect()
    }

    /// Tree edges `(parent, child)` in discovery order.
    pub fn tree_edges(&self) -> Vec<(usize, usize)> {
        self.order
            .iter()
            .filter_map(|&c| self.parent(c).map(|p| (p, c)))
            .collect()
    }
}

/// `adj[i]` lists every `j ≠ i` (ascending) with `can_talk(locks[i], locks[j])`.
pub fn adjacency(locks: &[Lock], units: &[Unit], params: &Params) -> Vec<Vec<usize>> {
    (0..locks.len())
        .map(|i| {
            (0..locks.len())
                .filter(|&j| j != i)
                .filter(|&j| {
                    can_talk(Anchor::from(&locks[i]), Anchor::from(&locks[j]), units, params)
                })
                .collect()
        })
        .collect()
}

/// FIFO breadth-first search from `root`. `None` if `root` is out of range.
pub fn bfs(adj: &[Vec<usize>], root: usize) -> Option<Reachability> {
    if root >= adj.len() {
        return None;
    }
    let mut visited = BTreeSet::from([root]);
    let mut predecessor = BTreeMap::new();
    let mut order = Vec::with_capacity(adj.len());
    let mut queue = VecDeque::from([root]);
    while let Some(cur) = queue.pop_front() {
        order.push(cur);
        for &next in &adj[cur] {
            if visited.insert(next) {
                predecessor.insert(next, cur);
                queue.push_back(next);
            }
        }
    }
    Some(Reachability {
        root,
        visited,
        predecessor,
        order,
    })
}

/// Adjacency + BFS in one call. `None` if `root` is out of range.
pub fn build_reachability(
    locks: &[Lock],
    units: &[Unit],
    params: &Params,
    root: usize,
) -> Option<Reachability> {
    if root >= locks.len() {
        tracing::debug!(root, locks = locks.len(), "reachability root out of range");
        return None;
    }
    let adj = adjacency(locks, units, params);
    let res = bfs(&adj, root)?;
    tracing::debug!(
        root,
        visited = res.visited.len(),
        unreachable = locks.len() - res.visited.len(),
        "reachability computed"
    );
    Some(res)
}
