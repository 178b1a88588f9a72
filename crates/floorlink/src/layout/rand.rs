//! Random facility layouts (grid-jittered units + replay tokens).
//!
//! Purpose
//! - Deterministic sampler for property tests and benchmarks. Units are placed
//!   one per grid cell so footprints never overlap; sizes, shapes, door sides
//!   and lock flags are drawn per cell.
//!
//! Model
//! - `cols × rows` cells of `cell` pixels. A cell is occupied with probability
//!   `fill`. The unit inside is snapped to `GRID_SIZE` and at least one grid
//!   unit wide and tall.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::{AccessPoint, Door, Layout, Orientation, Side, Unit, GRID_SIZE};

/// Sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct LayoutCfg {
    pub cols: usize,
    pub rows: usize,
    /// Cell edge length in pixels; at least `2 * GRID_SIZE` is useful.
    pub cell: f64,
    /// Probability a cell holds a unit.
    pub fill: f64,
    /// Probability an occupied cell holds a right triangle.
    pub triangle_frac: f64,
    /// Maximum doors per unit (at least one is drawn).
    pub max_doors: usize,
    /// Probability a door is locked.
    pub locked_frac: f64,
    pub access_points: usize,
    pub ap_range: f64,
}

impl Default for LayoutCfg {
    fn default() -> Self {
        Self {
            cols: 6,
            rows: 4,
            cell: 100.0,
            fill: 0.8,
            triangle_frac: 0.25,
            max_doors: 2,
            locked_frac: 0.7,
            access_points: 2,
            ap_range: 300.0,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finaliser.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

fn snap_down(v: f64) -> f64 {
    (v / GRID_SIZE).floor() * GRID_SIZE
}

/// Draw a layout. Units keep their cell's row-major order.
pub fn draw_layout(cfg: LayoutCfg, tok: ReplayToken) -> Layout {
    let mut rng = tok.to_std_rng();
    let cell = cfg.cell.max(2.0 * GRID_SIZE);
    let max_side = snap_down(cell - GRID_SIZE).max(GRID_SIZE);
    let mut units = Vec::new();
    for r in 0..cfg.rows {
        for c in 0..cfg.cols {
            if !rng.gen_bool(cfg.fill.clamp(0.0, 1.0)) {
                continue;
            }
            let steps = (max_side / GRID_SIZE) as u32;
            let w = GRID_SIZE * rng.gen_range(1..=steps) as f64;
            let h = GRID_SIZE * rng.gen_range(1..=steps) as f64;
            let x = c as f64 * cell + snap_down((cell - w) * rng.gen::<f64>());
            let y = r as f64 * cell + snap_down((cell - h) * rng.gen::<f64>());
            let id = format!("r{r}c{c}");
            let mut unit = if rng.gen_bool(cfg.triangle_frac.clamp(0.0, 1.0)) {
                let o = Orientation::ALL[rng.gen_range(0..4)];
                Unit::triangle(id, o, x, y, w, h)
            } else {
                Unit::rect(id, x, y, w, h)
            };
            let sides: Vec<Side> = [
                Side::Top,
                Side::Right,
                Side::Bottom,
                Side::Left,
                Side::Hypotenuse,
            ]
            .into_iter()
            .filter(|s| unit.accepts_side(*s))
            .collect();
            let n_doors = rng.gen_range(1..=cfg.max_doors.max(1));
            for _ in 0..n_doors {
                let side = sides[rng.gen_range(0..sides.len())];
                let locked = rng.gen_bool(cfg.locked_frac.clamp(0.0, 1.0));
                unit.doors.push(Door { side, locked });
            }
            units.push(unit);
        }
    }
    let (span_x, span_y) = (cfg.cols as f64 * cell, cfg.rows as f64 * cell);
    let access_points = (0..cfg.access_points)
        .map(|k| {
            AccessPoint::new(
                format!("ap{k}"),
                rng.gen::<f64>() * span_x,
                rng.gen::<f64>() * span_y,
                cfg.ap_range,
            )
        })
        .collect();
    Layout {
        units,
        access_points,
    }
}
