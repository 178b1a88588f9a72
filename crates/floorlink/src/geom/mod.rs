//! Geometry kernel for obstruction counting.
//!
//! Purpose
//! - Pure, boundary-inclusive predicates over unit footprints: containment,
//!   segment–segment, segment–rectangle (margin-shrunk) and segment–triangle.
//! - Inclusive touches keep obstruction counting conservative.
//!
//! Conventions
//! - Pixel space, y grows downward (screen coordinates).
//! - Points are `nalgebra::Vector2<f64>`; footprints are `layout::Unit`.
//! - Degenerate (zero-area) footprints are an unchecked precondition.

mod segment;
mod shapes;

pub use segment::{on_segment, orient, segments_intersect};
pub use shapes::{
    centroid, point_in_rect, point_in_triangle, point_in_unit, segment_intersects_rect,
    segment_intersects_triangle, segment_intersects_unit, triangle_corners, RECT_MARGIN,
};
