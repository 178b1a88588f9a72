//! Boundary of the engine as seen by the host application.
//!
//! - `derive_locks(units) -> Vec<Lock>`
//! - `can_talk(a, b, units, params) -> bool`
//! - `build_proximity_graph(locks, units, params, mode) -> Vec<ProximityEdge>`
//! - `build_reachability(locks, units, params, root) -> Option<Reachability>`
//! - `score_ap_links(ap, locks, units, params) -> Vec<ApLink>`
//!
//! Everything here is a re-export; the implementations live in their modules.

pub use crate::ap::{score_ap_links, ApLink};
pub use crate::graph::{build_proximity_graph, GraphMode, ProximityEdge, Tier, NEAREST_K};
pub use crate::layout::{AccessPoint, Door, Layout, Orientation, Shape, Side, Unit};
pub use crate::link::{can_talk, evaluate_link, Anchor, LinkReport, Reach};
pub use crate::locks::{derive_locks, lock_for_door, Lock};
pub use crate::params::{Params, ParamsError, PX_PER_FOOT};
pub use crate::reach::{build_reachability, Reachability, ReachabilityState};
