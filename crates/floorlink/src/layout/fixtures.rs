//! Small hand-built layouts shared by unit tests.

use super::{AccessPoint, Door, Layout, Side, Unit};

/// Two 50×50 units stacked vertically with a 100 px gap; the upper one has a
/// locked bottom door, the lower one a locked top door, so the locks face
/// each other across the gap.
pub fn facing_pair() -> Vec<Unit> {
    vec![
        Unit::rect("upper", 0.0, 0.0, 50.0, 50.0).with_door(Door::locked(Side::Bottom)),
        Unit::rect("lower", 0.0, 150.0, 50.0, 50.0).with_door(Door::locked(Side::Top)),
    ]
}

/// A 50×25 unit sitting in the gap of `facing_pair`, across the line of sight.
pub fn blocker() -> Unit {
    Unit::rect("blocker", 0.0, 75.0, 50.0, 25.0)
}

/// `facing_pair` with `blocker` appended.
pub fn blocked_pair() -> Vec<Unit> {
    let mut units = facing_pair();
    units.push(blocker());
    units
}

/// A row of `n` 50×50 units along y = 0, spaced `pitch` apart, each with a
/// locked bottom door, plus a single access point below the row.
pub fn corridor(n: usize, pitch: f64) -> Layout {
    let units = (0..n)
        .map(|k| {
            Unit::rect(format!("u{k}"), k as f64 * pitch, 0.0, 50.0, 50.0)
                .with_door(Door::locked(Side::Bottom))
        })
        .collect();
    Layout {
        units,
        access_points: vec![AccessPoint::new("ap", 25.0, 200.0, 400.0)],
    }
}
