//! Proximity graph over derived locks.
//!
//! Purpose
//! - Turn the pairwise can-talk predicate into an undirected edge list the host
//!   UI can draw, with a quality score and tier per edge.
//!
//! Modes
//! - `GraphMode::Exhaustive`: all passing pairs.
//! - `GraphMode::Nearest(k)`: per lock, its `k` nearest passing partners; the
//!   union is de-duplicated by unordered pair. An edge may therefore be kept
//!   even though only one endpoint ranked the other among its nearest.
//!
//! The graph is rebuilt from scratch on every call; nothing is patched in place.

mod build;
mod score;

pub use build::{build_proximity_graph, GraphMode, ProximityEdge, NEAREST_K};
pub use score::{quality, Tier};
