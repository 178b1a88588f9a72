//! Unit footprint predicates: containment and segment obstruction.
//!
//! Rectangles are tested against a footprint shrunk by a margin so that a lock
//! sitting exactly on its own wall does not register as crossing a neighbour
//! that shares the wall. Triangles are tested at full size.

use nalgebra::Vector2;

use super::segment::segments_intersect;
use crate::layout::{Orientation, Shape, Unit};

/// Inward shrink applied to rectangles before obstruction tests (pixels).
pub const RECT_MARGIN: f64 = 1.0;

/// Slack on barycentric coordinates so points on a triangle edge stay inside
/// despite rounding in the signed-area divisions.
const BARY_EPS: f64 = 1e-9;

/// Inclusive bounds test `x ≤ px ≤ x+w`, `y ≤ py ≤ y+h`.
#[inline]
pub fn point_in_rect(p: Vector2<f64>, unit: &Unit) -> bool {
    unit.x <= p.x && p.x <= unit.x + unit.width && unit.y <= p.y && p.y <= unit.y + unit.height
}

/// World-space corners `[right_angle, other1, other2]` of a right-triangle unit.
pub fn triangle_corners(unit: &Unit) -> [Vector2<f64>; 3] {
    let (w, h) = (unit.width, unit.height);
    let local = match unit.orientation() {
        Orientation::Nw => [(0.0, 0.0), (w, 0.0), (0.0, h)],
        Orientation::Ne => [(w, 0.0), (0.0, 0.0), (w, h)],
        Orientation::Se => [(w, h), (w, 0.0), (0.0, h)],
        Orientation::Sw => [(0.0, h), (0.0, 0.0), (w, h)],
    };
    let o = unit.origin();
    local.map(|(lx, ly)| o + Vector2::new(lx, ly))
}

/// Barycentric sign test against the unit's triangle (boundary inclusive).
///
/// Pre: positive width and height. A zero-area triangle yields `false`.
pub fn point_in_triangle(p: Vector2<f64>, unit: &Unit) -> bool {
    let [a, b, c] = triangle_corners(unit);
    let area2 = (b - a).perp(&(c - a));
    if area2 == 0.0 {
        return false;
    }
    let s = (c - a).perp(&(p - a)) / -area2;
    let t = (b - a).perp(&(p - a)) / area2;
    s >= -BARY_EPS && t >= -BARY_EPS && s + t <= 1.0 + BARY_EPS
}

/// Shape-dispatched containment.
#[inline]
pub fn point_in_unit(p: Vector2<f64>, unit: &Unit) -> bool {
    match unit.shape {
        Shape::Rectangle => point_in_rect(p, unit),
        Shape::RightTriangle => point_in_triangle(p, unit),
    }
}

/// Segment vs the unit's rectangle shrunk inward by `margin` on every side.
pub fn segment_intersects_rect(
    p1: Vector2<f64>,
    p2: Vector2<f64>,
    unit: &Unit,
    margin: f64,
) -> bool {
    let min_x = unit.x + margin;
    let min_y = unit.y + margin;
    let max_x = unit.x + unit.width - margin;
    let max_y = unit.y + unit.height - margin;

    // Both endpoints beyond the same side.
    if (p1.x < min_x && p2.x < min_x)
        || (p1.x > max_x && p2.x > max_x)
        || (p1.y < min_y && p2.y < min_y)
        || (p1.y > max_y && p2.y > max_y)
    {
        return false;
    }

    let corners = [
        Vector2::new(min_x, min_y),
        Vector2::new(max_x, min_y),
        Vector2::new(max_x, max_y),
        Vector2::new(min_x, max_y),
    ];
    (0..4).any(|k| segments_intersect(p1, p2, corners[k], corners[(k + 1) % 4]))
}

/// Segment vs the three edges of the unit's triangle (no margin).
pub fn segment_intersects_triangle(p1: Vector2<f64>, p2: Vector2<f64>, unit: &Unit) -> bool {
    let corners = triangle_corners(unit);
    (0..3).any(|k| segments_intersect(p1, p2, corners[k], corners[(k + 1) % 3]))
}

/// Shape-dispatched obstruction test (rectangles use `RECT_MARGIN`).
#[inline]
pub fn segment_intersects_unit(p1: Vector2<f64>, p2: Vector2<f64>, unit: &Unit) -> bool {
    match unit.shape {
        Shape::Rectangle => segment_intersects_rect(p1, p2, unit, RECT_MARGIN),
        Shape::RightTriangle => segment_intersects_triangle(p1, p2, unit),
    }
}

/// Area centroid of the unit's footprint (world space).
pub fn centroid(unit: &Unit) -> Vector2<f64> {
    match unit.shape {
        Shape::Rectangle => unit.origin() + Vector2::new(unit.width, unit.height) * 0.5,
        Shape::RightTriangle => {
            let [a, b, c] = triangle_corners(unit);
            (a + b + c) / 3.0
        }
    }
}
