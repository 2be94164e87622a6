//! Data-parallel text batch
//!
//! Processes a slice of independent text objects once per tick. A serial
//! gate pass collects the objects whose inputs changed; the rebuild pass
//! then runs over the slice, in parallel for large batches, with each
//! worker exclusively owning one object's buffers and sharing the font
//! registry read-only. Per object the stage order is fixed: metrics
//! lookup, line breaking, alignment, quad generation; the intrinsic
//! bounds pass is gated separately on text and style only.

use std::collections::HashSet;

use rayon::prelude::*;

use crate::font::FontRegistry;
use crate::text_object::{TextObject, TextObjectId};

use super::{should_recompute, ChangeGate, TextSystemConfig};

/// Work counters for one batch run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BatchStats {
    /// Objects whose intrinsic bounds were re-derived
    pub bounds_rebuilt: usize,
    /// Objects whose mesh was rebuilt
    pub meshes_rebuilt: usize,
    /// Objects skipped by the change gate
    pub skipped: usize,
    /// Objects skipped because their font handle was stale
    pub missing_font: usize,
}

/// Batched driver for the text layout pipeline
#[derive(Debug, Default)]
pub struct TextMeshSystem {
    gate: ChangeGate,
    config: TextSystemConfig,
}

impl TextMeshSystem {
    /// Create a system with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a system with explicit configuration
    pub fn with_config(config: TextSystemConfig) -> Self {
        Self {
            gate: ChangeGate::new(),
            config,
        }
    }

    /// Forget a removed object so its gate entry does not leak
    pub fn forget(&mut self, id: TextObjectId) {
        self.gate.forget(id);
    }

    /// Run one tick over the given objects
    ///
    /// Unchanged objects are skipped entirely. Objects whose font handle
    /// does not resolve are left untouched and stay dirty, so they are
    /// retried once the font appears in the registry.
    pub fn run(&mut self, objects: &mut [TextObject], fonts: &FontRegistry) -> BatchStats {
        let mut dirty_mesh: HashSet<TextObjectId> = HashSet::new();
        let mut dirty_bounds: HashSet<TextObjectId> = HashSet::new();

        for object in objects.iter() {
            match self.gate.last_seen(object.id()) {
                None => {
                    dirty_mesh.insert(object.id());
                    dirty_bounds.insert(object.id());
                }
                Some(seen) => {
                    if should_recompute(object.versions(), seen) {
                        dirty_mesh.insert(object.id());
                    }
                    if object.versions().bounds_inputs_differ(seen) {
                        dirty_bounds.insert(object.id());
                    }
                }
            }
        }

        let mut stats = BatchStats {
            skipped: objects.len() - dirty_mesh.len(),
            ..BatchStats::default()
        };

        if dirty_mesh.is_empty() && dirty_bounds.is_empty() {
            return stats;
        }

        let rebuild = |object: &mut TextObject| -> (usize, usize, usize) {
            let Some(face) = fonts.get(object.font()) else {
                if dirty_mesh.contains(&object.id()) {
                    log::warn!(
                        "Text object {:?} references a stale font handle; skipping rebuild",
                        object.id()
                    );
                    return (0, 0, 1);
                }
                return (0, 0, 0);
            };
            let mut built = (0, 0, 0);
            if dirty_bounds.contains(&object.id()) {
                object.rebuild_bounds(face);
                built.0 = 1;
            }
            if dirty_mesh.contains(&object.id()) {
                object.rebuild_mesh(face);
                built.1 = 1;
            }
            built
        };

        let use_pool = self.config.parallel && objects.len() >= self.config.parallel_threshold;
        let (bounds_rebuilt, meshes_rebuilt, missing_font) = if use_pool {
            objects
                .par_iter_mut()
                .map(rebuild)
                .reduce(|| (0, 0, 0), |a, b| (a.0 + b.0, a.1 + b.1, a.2 + b.2))
        } else {
            objects
                .iter_mut()
                .map(rebuild)
                .fold((0, 0, 0), |a, b| (a.0 + b.0, a.1 + b.1, a.2 + b.2))
        };
        stats.bounds_rebuilt = bounds_rebuilt;
        stats.meshes_rebuilt = meshes_rebuilt;
        stats.missing_font = missing_font;

        // Record successful runs; objects with a stale font stay dirty.
        for object in objects.iter() {
            let was_dirty = dirty_mesh.contains(&object.id()) || dirty_bounds.contains(&object.id());
            if was_dirty && fonts.get(object.font()).is_some() {
                self.gate.mark_clean(object.id(), *object.versions());
            }
        }

        log::debug!(
            "Text batch: {} meshes, {} bounds rebuilt, {} skipped, {} missing font",
            stats.meshes_rebuilt,
            stats.bounds_rebuilt,
            stats.skipped,
            stats.missing_font
        );

        stats
    }
}
