//! Access-point coverage: which locks an AP reaches and how well.

use serde::{Deserialize, Serialize};

use crate::graph::{quality, Tier};
use crate::layout::{AccessPoint, Unit};
use crate::link::{evaluate_link, Anchor};
use crate::locks::Lock;
use crate::params::Params;

/// One lock reachable from an access point.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApLink {
    /// Index into the lock list.
    pub lock: usize,
    pub distance: f64,
    pub crossings: usize,
    pub quality: f64,
    pub tier: Tier,
}

/// Score every lock that can talk with `ap`, nearest first (ties by lock index).
pub fn score_ap_links(
    ap: &AccessPoint,
    locks: &[Lock],
    units: &[Unit],
    params: &Params,
) -> Vec<ApLink> {
    let mut links: Vec<ApLink> = locks
        .iter()
        .enumerate()
        .filter_map(|(i, lock)| {
            let r = evaluate_link(Anchor::from(ap), Anchor::from(lock), units, params);
            if !r.connected {
                return None;
            }
            let q = quality(r.distance, r.crossings, params);
            Some(ApLink {
                lock: i,
                distance: r.distance,
                crossings: r.crossings,
                quality: q,
                tier: Tier::from_quality(q),
            })
        })
        .collect();
    links.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    tracing::debug!(ap = %ap.id, links = links.len(), "access point scored");
    links
}
