//! The can-talk predicate and its diagnostic report.

use serde::Serialize;

use super::anchor::{in_cone, Anchor};
use super::obstruction::count_crossings;
use crate::layout::Unit;
use crate::params::Params;

/// Allowed range from one side of a link toward the other.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Reach {
    /// Pixels, already reduced by the obstruction penalty.
    pub range: f64,
    /// Cone verdict for directional anchors; `None` for access points.
    pub in_cone: Option<bool>,
}

/// Everything the predicate computed for one pair.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct LinkReport {
    pub distance: f64,
    pub crossings: usize,
    pub penalty_px: f64,
    /// `None` when `a` has no defined normal.
    pub a_to_b: Option<Reach>,
    /// `None` when `b` has no defined normal.
    pub b_to_a: Option<Reach>,
    pub connected: bool,
}

/// Range `from` grants toward `to` after `penalty` pixels of obstruction.
///
/// Locks use their cone; an access point grants its configured range toward a
/// lock, and toward another access point additionally the penalised in-cone
/// base (both sides are omnidirectional, so nothing else bounds the link).
/// `None` when `from` is a lock without a normal.
fn reach(from: Anchor<'_>, to: Anchor<'_>, penalty: f64, params: &Params) -> Option<Reach> {
    match from {
        Anchor::Lock(lock) => {
            let normal = lock.normal()?;
            let cone = in_cone(normal, to.pos() - lock.pos, params.cos_half_cone());
            let base = if cone {
                params.base_in_cone_px()
            } else {
                params.base_out_cone_px()
            };
            Some(Reach {
                range: (base - penalty).max(0.0),
                in_cone: Some(cone),
            })
        }
        Anchor::AccessPoint(ap) => {
            let range = match to {
                Anchor::Lock(_) => ap.range,
                Anchor::AccessPoint(_) => {
                    ap.range.min((params.base_in_cone_px() - penalty).max(0.0))
                }
            };
            Some(Reach {
                range,
                in_cone: None,
            })
        }
    }
}

/// Evaluate a link in both directions.
pub fn evaluate_link(a: Anchor<'_>, b: Anchor<'_>, units: &[Unit], params: &Params) -> LinkReport {
    let (pa, pb) = (a.pos(), b.pos());
    let distance = (pb - pa).norm();
    let crossings = count_crossings(pa, pb, units);
    let penalty_px = crossings as f64 * params.cross_penalty_px();
    let a_to_b = reach(a, b, penalty_px, params);
    let b_to_a = reach(b, a, penalty_px, params);
    let connected = match (a_to_b, b_to_a) {
        (Some(ab), Some(ba)) => distance <= ab.range && distance <= ba.range,
        _ => false,
    };
    if !connected {
        tracing::trace!(
            distance,
            crossings,
            defined = a_to_b.is_some() && b_to_a.is_some(),
            "link rejected"
        );
    }
    LinkReport {
        distance,
        crossings,
        penalty_px,
        a_to_b,
        b_to_a,
        connected,
    }
}

/// True iff both directions admit the distance. Fails closed on undefined normals.
#[inline]
pub fn can_talk(a: Anchor<'_>, b: Anchor<'_>, units: &[Unit], params: &Params) -> bool {
    evaluate_link(a, b, units, params).connected
}
