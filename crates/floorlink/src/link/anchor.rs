//! Communication anchors: directional locks and omnidirectional access points.

use nalgebra::Vector2;

use crate::layout::AccessPoint;
use crate::locks::Lock;

/// Either end of a link.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Anchor<'a> {
    Lock(&'a Lock),
    AccessPoint(&'a AccessPoint),
}

impl<'a> Anchor<'a> {
    #[inline]
    pub fn pos(&self) -> Vector2<f64> {
        match self {
            Anchor::Lock(l) => l.pos,
            Anchor::AccessPoint(ap) => ap.pos(),
        }
    }
}

impl<'a> From<&'a Lock> for Anchor<'a> {
    fn from(l: &'a Lock) -> Self {
        Anchor::Lock(l)
    }
}

impl<'a> From<&'a AccessPoint> for Anchor<'a> {
    fn from(ap: &'a AccessPoint) -> Self {
        Anchor::AccessPoint(ap)
    }
}

/// True if `to` lies in the cone of half-angle `acos(cos_half)` around `normal`.
///
/// Requires a strictly positive projection, so a zero-length `to` is out of cone.
#[inline]
pub fn in_cone(normal: Vector2<f64>, to: Vector2<f64>, cos_half: f64) -> bool {
    let dot = to.dot(&normal);
    dot > 0.0 && dot / to.norm() >= cos_half
}
