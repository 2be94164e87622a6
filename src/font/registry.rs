//! Font registry
//!
//! Owns the metrics + glyph table pair for every imported font and hands
//! out stable handles. The registry replaces any ambient process-wide
//! font cache: callers pass it by reference into the batch, and all
//! workers share it read-only.

use slotmap::{new_key_type, SlotMap};

use super::{FontMetrics, GlyphTable};

new_key_type! {
    /// Stable handle to a registered font
    pub struct FontHandle;
}

/// A registered font: face metrics plus its glyph table
#[derive(Debug, Clone)]
pub struct FontFace {
    /// Face-wide vertical metrics and style parameters
    pub metrics: FontMetrics,
    /// Dense per-glyph lookup table
    pub glyphs: GlyphTable,
}

/// Registry of fonts available to text objects
#[derive(Debug, Default)]
pub struct FontRegistry {
    fonts: SlotMap<FontHandle, FontFace>,
}

impl FontRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a font and return its handle
    pub fn insert(&mut self, metrics: FontMetrics, glyphs: GlyphTable) -> FontHandle {
        log::info!(
            "Registered font: {} glyphs, {}pt, atlas {}x{}",
            glyphs.glyph_count(),
            metrics.point_size,
            metrics.atlas_size.x,
            metrics.atlas_size.y
        );
        self.fonts.insert(FontFace { metrics, glyphs })
    }

    /// Look up a font by handle
    pub fn get(&self, handle: FontHandle) -> Option<&FontFace> {
        self.fonts.get(handle)
    }

    /// Remove a font, returning its data if the handle was live
    pub fn remove(&mut self, handle: FontHandle) -> Option<FontFace> {
        self.fonts.remove(handle)
    }

    /// Number of registered fonts
    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    /// True when no fonts are registered
    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::{AtlasRect, Glyph, GlyphMetrics};
    use crate::foundation::math::Vec2;

    fn face() -> (FontMetrics, GlyphTable) {
        let metrics = FontMetrics {
            line_height: 12.0,
            ascent_line: 10.0,
            baseline: 0.0,
            cap_line: 9.0,
            descent_line: -2.0,
            mean_line: 7.0,
            point_size: 10.0,
            bold_spacing: 7.0,
            normal_spacing: 0.0,
            bold_style: 0.75,
            normal_style: 0.0,
            atlas_size: Vec2::new(256.0, 256.0),
        };
        let table = GlyphTable::from_glyphs([Glyph {
            code: b'a'.into(),
            scale: 1.0,
            rect: AtlasRect {
                x: 0.0,
                y: 0.0,
                width: 8.0,
                height: 10.0,
            },
            metrics: GlyphMetrics {
                width: 8.0,
                height: 10.0,
                bearing_x: 1.0,
                bearing_y: 9.0,
                advance: 10.0,
            },
        }])
        .expect("table");
        (metrics, table)
    }

    #[test]
    fn test_insert_and_lookup() {
        let mut registry = FontRegistry::new();
        let (metrics, table) = face();
        let handle = registry.insert(metrics, table);

        let found = registry.get(handle).expect("font");
        assert_eq!(found.glyphs.glyph_count(), 1);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_stale_handle_after_remove() {
        let mut registry = FontRegistry::new();
        let (metrics, table) = face();
        let handle = registry.insert(metrics, table);

        assert!(registry.remove(handle).is_some());
        assert!(registry.get(handle).is_none());
        assert!(registry.is_empty());
    }
}
