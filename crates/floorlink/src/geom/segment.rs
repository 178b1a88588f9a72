//! Segment primitives: orientation, on-segment, and segment–segment intersection.

use nalgebra::Vector2;

/// Twice the signed area of the triangle `(p, q, r)`.
///
/// Positive when `p → q → r` turns counterclockwise in a y-up frame (clockwise on
/// screen, where y grows downward). Only the sign and zero are used here.
#[inline]
pub fn orient(p: Vector2<f64>, q: Vector2<f64>, r: Vector2<f64>) -> f64 {
    (q.x - p.x) * (r.y - p.y) - (q.y - p.y) * (r.x - p.x)
}

/// True if `p` lies in the bounding box of segment `a–b` (inclusive).
///
/// Only meaningful once collinearity of `a, b, p` is established.
#[inline]
pub fn on_segment(a: Vector2<f64>, b: Vector2<f64>, p: Vector2<f64>) -> bool {
    a.x.min(b.x) <= p.x && p.x <= a.x.max(b.x) && a.y.min(b.y) <= p.y && p.y <= a.y.max(b.y)
}

/// Closed segment intersection `a–b` vs `c–d`.
///
/// Touching endpoints and collinear overlap count as intersecting. Collinear
/// cases are decided by explicit containment checks, never by a general-position
/// assumption.
pub fn segments_intersect(
    a: Vector2<f64>,
    b: Vector2<f64>,
    c: Vector2<f64>,
    d: Vector2<f64>,
) -> bool {
    let o1 = orient(a, b, c);
    let o2 = orient(a, b, d);
    let o3 = orient(c, d, a);
    let o4 = orient(c, d, b);

    if o1 == 0.0 && on_segment(a, b, c) {
        return true;
    }
    if o2 == 0.0 && on_segment(a, b, d) {
        return true;
    }
    if o3 == 0.0 && on_segment(c, d, a) {
        return true;
    }
    if o4 == 0.0 && on_segment(c, d, b) {
        return true;
    }

    (o1 > 0.0) != (o2 > 0.0) && (o3 > 0.0) != (o4 > 0.0)
}
