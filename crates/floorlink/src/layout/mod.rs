//! Layout snapshot consumed by the engine.
//!
//! The host UI owns and mutates the layout; every engine call takes an
//! immutable snapshot and recomputes locks from it.

pub mod rand;
mod types;

pub use types::{
    AccessPoint, Door, Layout, Orientation, ParseLayoutError, Shape, Side, Unit, GRID_SIZE,
};

#[cfg(test)]
pub(crate) mod fixtures;

use crate::ap::{score_ap_links, ApLink};
use crate::graph::{build_proximity_graph, GraphMode, ProximityEdge};
use crate::locks::{derive_locks, Lock};
use crate::params::Params;
use crate::reach::{build_reachability, Reachability};

impl Layout {
    /// Locks derived from the current units.
    pub fn locks(&self) -> Vec<Lock> {
        derive_locks(&self.units)
    }

    pub fn proximity_graph(&self, params: &Params, mode: GraphMode) -> Vec<ProximityEdge> {
        build_proximity_graph(&self.locks(), &self.units, params, mode)
    }

    pub fn reachability(&self, params: &Params, root: usize) -> Option<Reachability> {
        build_reachability(&self.locks(), &self.units, params, root)
    }

    /// Per access point (layout order), the locks it reaches.
    pub fn ap_links(&self, params: &Params) -> Vec<Vec<ApLink>> {
        let locks = self.locks();
        self.access_points
            .iter()
            .map(|ap| score_ap_links(ap, &locks, &self.units, params))
            .collect()
    }
}
