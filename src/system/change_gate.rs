//! Version-stamped change detection
//!
//! Each gated input on a text object carries a monotonically increasing
//! stamp. The gate memoizes the stamps it last saw per object and lets
//! the batch skip objects whose stamps are unchanged, which bounds
//! per-tick work to what actually changed.

use std::collections::HashMap;

use crate::text_object::TextObjectId;

/// Monotonically increasing version stamp for one input
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct VersionStamp(u64);

impl VersionStamp {
    /// Advance the stamp
    pub fn bump(&mut self) {
        self.0 = self.0.wrapping_add(1);
    }
}

/// Stamps of all gated inputs for one text object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VersionVector {
    /// Text buffer stamp
    pub text: VersionStamp,
    /// Style descriptor stamp
    pub style: VersionStamp,
    /// Base color stamp
    pub color: VersionStamp,
    /// Color multiplier stamp
    pub color_multiplier: VersionStamp,
    /// Placement (container rect, transform scale, depth) stamp
    pub bounds: VersionStamp,
}

impl VersionVector {
    /// True when any input that feeds the mesh pass changed
    pub fn mesh_inputs_differ(&self, other: &Self) -> bool {
        self != other
    }

    /// True when an input that feeds the intrinsic bounds pass changed
    ///
    /// The bounds pass only reads the text and style; color and
    /// placement changes do not invalidate it.
    pub fn bounds_inputs_differ(&self, other: &Self) -> bool {
        self.text != other.text || self.style != other.style
    }
}

/// Decide whether a stage must re-run for the given stamps
///
/// Pure memoization predicate: recompute exactly when the current stamps
/// differ from the ones recorded at the last successful run.
pub fn should_recompute(current: &VersionVector, last_seen: &VersionVector) -> bool {
    current.mesh_inputs_differ(last_seen)
}

/// Memoization table mapping object ids to their last-seen stamps
#[derive(Debug, Default)]
pub struct ChangeGate {
    seen: HashMap<TextObjectId, VersionVector>,
}

impl ChangeGate {
    /// Create an empty gate
    pub fn new() -> Self {
        Self::default()
    }

    /// Stamps recorded at the object's last successful run, if any
    pub fn last_seen(&self, id: TextObjectId) -> Option<&VersionVector> {
        self.seen.get(&id)
    }

    /// Record a successful run for the object
    pub fn mark_clean(&mut self, id: TextObjectId, versions: VersionVector) {
        self.seen.insert(id, versions);
    }

    /// Drop the record for a removed object
    pub fn forget(&mut self, id: TextObjectId) {
        self.seen.remove(&id);
    }

    /// Number of tracked objects
    pub fn tracked(&self) -> usize {
        self.seen.len()
    }
}
