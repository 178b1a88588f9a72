//! Connectivity predicate ("can-talk").
//!
//! A link between two anchors holds when the distance fits the allowed range
//! seen from *both* ends. Each end's range starts from a base (in-cone or
//! out-of-cone for locks, the configured range for access points) and loses
//! `cross_penalty` for every distinct unit the connecting segment passes
//! through. Units containing either endpoint never count as obstructions.
//!
//! Anchors with an undefined normal never connect.

mod anchor;
mod obstruction;
mod predicate;

pub use anchor::{in_cone, Anchor};
pub use obstruction::{count_crossings, endpoint_units};
pub use predicate::{can_talk, evaluate_link, LinkReport, Reach};

#[cfg(test)]
mod tests;
