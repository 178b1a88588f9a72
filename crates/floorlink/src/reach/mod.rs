//! Reachability analyzer: BFS spanning tree over the can-talk relation.
//!
//! Purpose
//! - From a chosen root lock, find every lock reachable through chains of
//!   links, and a predecessor map describing one BFS tree over them.
//!
//! Semantics
//! - Adjacency is evaluated per ordered pair `(i, j)`; the predicate is
//!   symmetric, so the relation is too.
//! - The tree gives hop-count shortest paths, not geometric or
//!   quality-weighted ones.
//! - An out-of-range root produces no result; `ReachabilityState` keeps the
//!   previous result in that case.

mod bfs;
mod state;

pub use bfs::{adjacency, bfs, build_reachability, Reachability};
pub use state::ReachabilityState;
