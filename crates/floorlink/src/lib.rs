//! Floor-plan connectivity engine.
//!
//! Given a facility layout of rectangular and right-triangular units with
//! doors, locks and access points, decide which anchors can talk through the
//! building and summarise the result as a proximity graph and a BFS
//! reachability tree.
//!
//! Data flows one way:
//! layout → `locks::derive_locks` → `link::can_talk` → `graph` / `reach` / `ap`.
//!
//! API Policy
//! - Every entry point is a pure function over an immutable layout snapshot.
//! - Nothing is cached; each call recomputes from scratch.
//! - Logging goes through `tracing`; the crate never installs a subscriber.

pub mod ap;
pub mod api;
pub mod geom;
pub mod graph;
pub mod layout;
pub mod link;
pub mod locks;
pub mod params;
pub mod reach;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::ap::{score_ap_links, ApLink};
    pub use crate::graph::{build_proximity_graph, GraphMode, ProximityEdge, Tier};
    pub use crate::layout::{AccessPoint, Door, Layout, Orientation, Shape, Side, Unit};
    pub use crate::link::{can_talk, evaluate_link, Anchor, LinkReport};
    pub use crate::locks::{derive_locks, Lock};
    pub use crate::params::{Params, ParamsError, PX_PER_FOOT};
    pub use crate::reach::{build_reachability, Reachability, ReachabilityState};
    pub use nalgebra::Vector2 as Vec2;
}
