//! Lock locator: locked doors → directional anchors in world space.
//!
//! Model
//! - A door is drawn as a bar covering `DOOR_BAR_FRACTION` of its side,
//!   `DOOR_BAR_THICKNESS` thick, centered on the wall line.
//! - The lock sits 80% along the bar for bottom/left doors and 20% along for
//!   top/right doors, half a bar thickness across (i.e. on the wall line).
//! - Hypotenuse locks sit on the hypotenuse, `1/HYPOTENUSE_INSET` of the
//!   bounding box in from the corner that follows the right angle clockwise.
//! - The normal is the outward unit vector of the side.

use std::f64::consts::FRAC_1_SQRT_2;

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::layout::{Door, Orientation, Shape, Side, Unit};

pub const DOOR_BAR_FRACTION: f64 = 0.8;
pub const DOOR_BAR_THICKNESS: f64 = 4.0;
pub const HYPOTENUSE_INSET: f64 = 4.2;

/// Directional anchor derived from a locked door.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Lock {
    /// World position (pixels).
    pub pos: Vector2<f64>,
    pub side: Side,
    /// Owning triangle's orientation; required for a hypotenuse normal.
    pub orientation: Option<Orientation>,
    /// Index of the owning unit in the layout's unit list.
    pub unit: usize,
    /// Index of the door within its unit.
    pub door: usize,
}

impl Lock {
    /// Outward unit normal, or `None` when the side has no defined direction
    /// (a hypotenuse lock without a triangle orientation).
    pub fn normal(&self) -> Option<Vector2<f64>> {
        match self.side {
            Side::Top => Some(Vector2::new(0.0, -1.0)),
            Side::Bottom => Some(Vector2::new(0.0, 1.0)),
            Side::Left => Some(Vector2::new(-1.0, 0.0)),
            Side::Right => Some(Vector2::new(1.0, 0.0)),
            Side::Hypotenuse => self.orientation.map(hypotenuse_normal),
        }
    }
}

/// Outward normal of a right triangle's hypotenuse.
pub fn hypotenuse_normal(o: Orientation) -> Vector2<f64> {
    let (sx, sy) = match o {
        Orientation::Nw => (1.0, 1.0),
        Orientation::Ne => (-1.0, 1.0),
        Orientation::Se => (-1.0, -1.0),
        Orientation::Sw => (1.0, -1.0),
    };
    Vector2::new(sx * FRAC_1_SQRT_2, sy * FRAC_1_SQRT_2)
}

/// Lock position for a door on an axis-aligned side, relative to the unit origin.
fn leg_offset(side: Side, w: f64, h: f64) -> Option<Vector2<f64>> {
    let bw = w * DOOR_BAR_FRACTION;
    let bh = h * DOOR_BAR_FRACTION;
    // The bar straddles the wall; its centreline is the wall line itself.
    let rel = match side {
        Side::Top => Vector2::new((w - bw) / 2.0 + bw * 0.2, 0.0),
        Side::Bottom => Vector2::new((w - bw) / 2.0 + bw * 0.8, h),
        Side::Left => Vector2::new(0.0, (h - bh) / 2.0 + bh * 0.8),
        Side::Right => Vector2::new(w, (h - bh) / 2.0 + bh * 0.2),
        Side::Hypotenuse => return None,
    };
    Some(rel)
}

/// Hypotenuse lock position relative to the unit origin.
fn hypotenuse_offset(o: Orientation, w: f64, h: f64) -> Vector2<f64> {
    let (iw, ih) = (w / HYPOTENUSE_INSET, h / HYPOTENUSE_INSET);
    match o {
        Orientation::Nw => Vector2::new(w - iw, ih),
        Orientation::Ne => Vector2::new(w - iw, h - ih),
        Orientation::Se => Vector2::new(iw, h - ih),
        Orientation::Sw => Vector2::new(iw, ih),
    }
}

/// Lock for one door, or `None` if the door is unlocked or its side is not
/// valid for the unit's shape.
pub fn lock_for_door(
    unit_index: usize,
    unit: &Unit,
    door_index: usize,
    door: &Door,
) -> Option<Lock> {
    if !door.locked {
        return None;
    }
    if !unit.accepts_side(door.side) {
        tracing::warn!(
            unit = %unit.id,
            side = door.side.as_str(),
            shape = ?unit.shape,
            orientation = unit.orientation().as_str(),
            "door side not valid for unit; no lock"
        );
        return None;
    }
    let (w, h) = (unit.width, unit.height);
    let (rel, orientation) = match unit.shape {
        Shape::Rectangle => (leg_offset(door.side, w, h)?, None),
        Shape::RightTriangle => {
            let o = unit.orientation();
            let rel = match door.side {
                Side::Hypotenuse => hypotenuse_offset(o, w, h),
                side => leg_offset(side, w, h)?,
            };
            (rel, Some(o))
        }
    };
    Some(Lock {
        pos: unit.origin() + rel,
        side: door.side,
        orientation,
        unit: unit_index,
        door: door_index,
    })
}

/// All locks of a layout, in unit order then door order.
pub fn derive_locks(units: &[Unit]) -> Vec<Lock> {
    units
        .iter()
        .enumerate()
        .flat_map(|(ui, unit)| {
            unit.doors
                .iter()
                .enumerate()
                .filter_map(move |(di, door)| lock_for_door(ui, unit, di, door))
        })
        .collect()
}
