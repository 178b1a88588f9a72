//! Last-result holder with no-op semantics for invalid roots.

use super::bfs::{build_reachability, Reachability};
use crate::layout::Unit;
use crate::locks::Lock;
use crate::params::Params;

/// Keeps the most recent reachability result for a host view.
///
/// A recompute with a missing or out-of-range root leaves the previous
/// result in place; only `clear` drops it.
#[derive(Clone, Debug, Default)]
pub struct ReachabilityState {
    current: Option<Reachability>,
}

impl ReachabilityState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&Reachability> {
        self.current.as_ref()
    }

    /// Replace the result wholesale. Returns `false` (and changes nothing)
    /// when `root` is `None` or not a valid lock index.
    pub fn recompute(
        &mut self,
        locks: &[Lock],
        units: &[Unit],
        params: &Params,
        root: Option<usize>,
    ) -> bool {
        let Some(root) = root else {
            return false;
        };
        match build_reachability(locks, units, params, root) {
            Some(res) => {
                self.current = Some(res);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.current = None;
    }
}
