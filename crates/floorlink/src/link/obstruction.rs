//! Obstruction counting between two anchor positions.

use nalgebra::Vector2;

use crate::geom::{point_in_unit, segment_intersects_unit};
use crate::layout::Unit;

/// Indices of units whose footprint contains either endpoint.
pub fn endpoint_units(p1: Vector2<f64>, p2: Vector2<f64>, units: &[Unit]) -> Vec<usize> {
    units
        .iter()
        .enumerate()
        .filter(|(_, u)| point_in_unit(p1, u) || point_in_unit(p2, u))
        .map(|(i, _)| i)
        .collect()
}

/// Number of distinct non-endpoint units the segment `p1–p2` passes through.
///
/// A unit counts once however many of its edges the segment meets.
pub fn count_crossings(p1: Vector2<f64>, p2: Vector2<f64>, units: &[Unit]) -> usize {
    let own = endpoint_units(p1, p2, units);
    units
        .iter()
        .enumerate()
        .filter(|(i, _)| !own.contains(i))
        .filter(|(_, u)| segment_intersects_unit(p1, p2, u))
        .count()
}
