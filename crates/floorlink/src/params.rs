//! Global tunables for the link model.
//!
//! Distances in `Params` are in feet; layouts live in pixel space. Every
//! comparison goes through the `*_px()` accessors.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Fixed conversion factor: a 10 ft unit is drawn 50 px wide.
pub const PX_PER_FOOT: f64 = 5.0;

/// Link model tunables.
///
/// Invariants (checked by `validate`, not by the builders):
/// - all fields finite;
/// - `base_in_cone`, `base_out_cone`, `cross_penalty` non-negative;
/// - `half_cone_deg ∈ (0, 180]`;
/// - `base_out_cone ≤ base_in_cone`, so no link is longer than the in-cone range.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Params {
    /// Maximum range toward a target inside the cone (ft).
    pub base_in_cone: f64,
    /// Maximum range toward a target outside the cone (ft).
    pub base_out_cone: f64,
    /// Range lost per obstructing unit (ft).
    pub cross_penalty: f64,
    /// Half-angle of the directional cone (degrees).
    pub half_cone_deg: f64,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            base_in_cone: 150.0,
            base_out_cone: 75.0,
            cross_penalty: 50.0,
            half_cone_deg: 30.0,
        }
    }
}

impl Params {
    #[inline]
    pub fn base_in_cone_px(&self) -> f64 {
        self.base_in_cone * PX_PER_FOOT
    }
    #[inline]
    pub fn base_out_cone_px(&self) -> f64 {
        self.base_out_cone * PX_PER_FOOT
    }
    #[inline]
    pub fn cross_penalty_px(&self) -> f64 {
        self.cross_penalty * PX_PER_FOOT
    }
    #[inline]
    pub fn cos_half_cone(&self) -> f64 {
        self.half_cone_deg.to_radians().cos()
    }

    /// Check the documented invariants.
    pub fn validate(&self) -> Result<(), ParamsError> {
        let fields = [
            ("baseInCone", self.base_in_cone),
            ("baseOutCone", self.base_out_cone),
            ("crossPenalty", self.cross_penalty),
            ("halfConeDeg", self.half_cone_deg),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(ParamsError::NonFinite { field, value });
            }
        }
        for &(field, value) in &fields[..3] {
            if value < 0.0 {
                return Err(ParamsError::Negative { field, value });
            }
        }
        if !(self.half_cone_deg > 0.0 && self.half_cone_deg <= 180.0) {
            return Err(ParamsError::ConeAngle(self.half_cone_deg));
        }
        if self.base_out_cone > self.base_in_cone {
            return Err(ParamsError::OutConeExceedsInCone {
                in_cone: self.base_in_cone,
                out_cone: self.base_out_cone,
            });
        }
        Ok(())
    }
}

/// Invalid `Params`.
#[derive(Clone, Debug, PartialEq)]
pub enum ParamsError {
    /// A field is NaN or infinite.
    NonFinite { field: &'static str, value: f64 },
    /// A distance field is below zero.
    Negative { field: &'static str, value: f64 },
    /// `halfConeDeg` outside `(0, 180]`.
    ConeAngle(f64),
    /// `baseOutCone` larger than `baseInCone`.
    OutConeExceedsInCone { in_cone: f64, out_cone: f64 },
}

impl fmt::Display for ParamsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite { field, value } => write!(f, "{field} must be finite, got {value}"),
            Self::Negative { field, value } => {
                write!(f, "{field} must be non-negative, got {value}")
            }
            Self::ConeAngle(deg) => write!(f, "halfConeDeg must be in (0, 180], got {deg}"),
            Self::OutConeExceedsInCone { in_cone, out_cone } => write!(
                f,
                "baseOutCone ({out_cone}) must not exceed baseInCone ({in_cone})"
            ),
        }
    }
}

impl std::error::Error for ParamsError {}
