//! Link quality and its three display tiers.

use serde::{Deserialize, Serialize};

use crate::params::Params;

/// Display tier of a link quality.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Green,
    Orange,
    Red,
}

impl Tier {
    /// `> 0.75` green, `> 0.40` orange, otherwise red.
    pub fn from_quality(q: f64) -> Self {
        if q > 0.75 {
            Tier::Green
        } else if q > 0.40 {
            Tier::Orange
        } else {
            Tier::Red
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Tier::Green => "green",
            Tier::Orange => "orange",
            Tier::Red => "red",
        }
    }
}

#[inline]
fn clamp01(x: f64) -> f64 {
    x.clamp(0.0, 1.0)
}

/// Quality in `[0, 1]`: the weaker of the distance score and the obstruction
/// score, both normalised by the in-cone range.
///
/// A non-positive in-cone range scores 0.
pub fn quality(distance: f64, crossings: usize, params: &Params) -> f64 {
    let base = params.base_in_cone_px();
    if base.is_nan() || base <= 0.0 {
        return 0.0;
    }
    let dist_score = 1.0 - clamp01(distance / base);
    let obs_score = 1.0 - clamp01(crossings as f64 * params.cross_penalty_px() / base);
    dist_score.min(obs_score)
}
