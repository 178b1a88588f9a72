//! Proximity-graph construction (exhaustive or k-nearest).

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::score::{quality, Tier};
use crate::layout::Unit;
use crate::link::{evaluate_link, Anchor};
use crate::locks::Lock;
use crate::params::Params;

/// Neighbours kept per lock in the limited mode.
pub const NEAREST_K: usize = 3;

/// Which pairs become edges.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GraphMode {
    /// Every unordered pair that can talk.
    Exhaustive,
    /// Each lock keeps its `k` nearest partners that can talk; an edge survives
    /// if either endpoint selected it.
    Nearest(usize),
}

impl Default for GraphMode {
    fn default() -> Self {
        GraphMode::Nearest(NEAREST_K)
    }
}

impl GraphMode {
    /// The host UI's "limit to nearest" toggle.
    pub fn from_limit_nearest(limit: bool) -> Self {
        if limit {
            GraphMode::default()
        } else {
            GraphMode::Exhaustive
        }
    }
}

/// Undirected edge between two locks, `a < b`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProximityEdge {
    pub a: usize,
    pub b: usize,
    pub distance: f64,
    pub crossings: usize,
    pub quality: f64,
    pub tier: Tier,
}

impl ProximityEdge {
    fn new(i: usize, j: usize, distance: f64, crossings: usize, params: &Params) -> Self {
        let q = quality(distance, crossings, params);
        Self {
            a: i.min(j),
            b: i.max(j),
            distance,
            crossings,
            quality: q,
            tier: Tier::from_quality(q),
        }
    }
}

/// A partner that passed the predicate, seen from one lock.
#[derive(Clone, Copy, Debug)]
struct Candidate {
    j: usize,
    distance: f64,
    crossings: usize,
}

/// Build the proximity graph over `locks`.
///
/// Deterministic for identical inputs: exhaustive edges come out in `(a, b)`
/// order, k-nearest edges in first-selection order.
pub fn build_proximity_graph(
    locks: &[Lock],
    units: &[Unit],
    params: &Params,
    mode: GraphMode,
) -> Vec<ProximityEdge> {
    let edges = match mode {
        GraphMode::Exhaustive => build_exhaustive(locks, units, params),
        GraphMode::Nearest(k) => build_nearest(locks, units, params, k),
    };
    tracing::debug!(locks = locks.len(), edges = edges.len(), ?mode, "proximity graph built");
    edges
}

fn build_exhaustive(locks: &[Lock], units: &[Unit], params: &Params) -> Vec<ProximityEdge> {
    let mut edges = Vec::new();
    for i in 0..locks.len() {
        for j in (i + 1)..locks.len() {
            let r = evaluate_link(Anchor::from(&locks[i]), Anchor::from(&locks[j]), units, params);
            if r.connected {
                edges.push(ProximityEdge::new(i, j, r.distance, r.crossings, params));
            }
        }
    }
    edges
}

/// Partners of lock `i` that can talk, nearest first (ties keep index order).
fn candidates(i: usize, locks: &[Lock], units: &[Unit], params: &Params) -> Vec<Candidate> {
    let mut out: Vec<Candidate> = (0..locks.len())
        .filter(|&j| j != i)
        .filter_map(|j| {
            let r = evaluate_link(Anchor::from(&locks[i]), Anchor::from(&locks[j]), units, params);
            r.connected.then_some(Candidate {
                j,
                distance: r.distance,
                crossings: r.crossings,
            })
        })
        .collect();
    // Stable sort: equal distances stay in index order.
    out.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    out
}

fn build_nearest(locks: &[Lock], units: &[Unit], params: &Params, k: usize) -> Vec<ProximityEdge> {
    let mut seen: HashSet<(usize, usize)> = HashSet::new();
    let mut edges = Vec::new();
    for i in 0..locks.len() {
        for c in candidates(i, locks, units, params).into_iter().take(k) {
            let key = (i.min(c.j), i.max(c.j));
            if seen.insert(key) {
                edges.push(ProximityEdge::new(i, c.j, c.distance, c.crossings, params));
            }
        }
    }
    edges
}
