//! Dense glyph lookup table
//!
//! Maps UTF-16 code units to per-glyph atlas placement and metrics.
//! The table is built once per font by the import step and only read
//! afterwards.

use crate::foundation::math::Vec2;

/// Result type for font operations
pub type FontResult<T> = Result<T, FontError>;

/// Errors that can occur during font operations
#[derive(Debug, thiserror::Error)]
pub enum FontError {
    /// Requested code unit has no glyph in the table
    #[error("Glyph for code unit {0:#06x} not found")]
    GlyphNotFound(u16),

    /// The glyph set handed to the table builder was empty
    #[error("Cannot build a glyph table from an empty glyph set")]
    EmptyGlyphSet,
}

/// Placement of a glyph inside the font atlas, in atlas pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtlasRect {
    /// Left edge in atlas pixels
    pub x: f32,
    /// Bottom edge in atlas pixels
    pub y: f32,
    /// Width in atlas pixels
    pub width: f32,
    /// Height in atlas pixels
    pub height: f32,
}

/// Design-space metrics for a single glyph
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphMetrics {
    /// Ink width of the glyph box
    pub width: f32,
    /// Ink height of the glyph box
    pub height: f32,
    /// Horizontal offset from the pen position to the glyph box
    pub bearing_x: f32,
    /// Vertical offset from the baseline to the top of the glyph box
    pub bearing_y: f32,
    /// Pen advance after this glyph
    pub advance: f32,
}

/// Per-character rendering data for one font
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glyph {
    /// UTF-16 code unit this glyph renders
    pub code: u16,
    /// Render scale applied when the glyph was rasterized into the atlas
    pub scale: f32,
    /// Placement in the atlas texture
    pub rect: AtlasRect,
    /// Layout metrics
    pub metrics: GlyphMetrics,
}

impl Glyph {
    /// Glyph box size as a vector
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.metrics.width, self.metrics.height)
    }
}

/// Dense glyph table indexed by UTF-16 code unit
///
/// Lookup is O(1) by direct indexing and always bounds-checked: a code
/// unit past the table's end or one without a mapped glyph yields `None`
/// rather than reading adjacent slots.
#[derive(Debug, Clone)]
pub struct GlyphTable {
    slots: Vec<Option<Glyph>>,
    glyph_count: usize,
}

impl GlyphTable {
    /// Build a table from a set of glyphs
    ///
    /// The table is sized to the highest mapped code unit, so build cost
    /// and memory are O(max code). Later duplicates overwrite earlier
    /// entries for the same code unit.
    pub fn from_glyphs(glyphs: impl IntoIterator<Item = Glyph>) -> FontResult<Self> {
        let glyphs: Vec<Glyph> = glyphs.into_iter().collect();
        let max_code = glyphs
            .iter()
            .map(|g| g.code)
            .max()
            .ok_or(FontError::EmptyGlyphSet)?;

        let mut slots = vec![None; usize::from(max_code) + 1];
        for glyph in glyphs {
            slots[usize::from(glyph.code)] = Some(glyph);
        }
        let glyph_count = slots.iter().filter(|s| s.is_some()).count();

        log::debug!(
            "Built glyph table: {} glyphs, {} slots",
            glyph_count,
            slots.len()
        );

        Ok(Self { slots, glyph_count })
    }

    /// Look up the glyph for a code unit
    ///
    /// Returns `None` for unmapped or out-of-range code units.
    pub fn get(&self, code: u16) -> Option<&Glyph> {
        self.slots.get(usize::from(code)).and_then(Option::as_ref)
    }

    /// Look up the glyph for a code unit, failing explicitly when missing
    pub fn lookup(&self, code: u16) -> FontResult<&Glyph> {
        self.get(code).ok_or(FontError::GlyphNotFound(code))
    }

    /// Number of mapped glyphs
    pub fn glyph_count(&self) -> usize {
        self.glyph_count
    }

    /// Number of slots (highest mapped code unit + 1)
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn glyph(code: u16, advance: f32) -> Glyph {
        Glyph {
            code,
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
                advance,
            },
        }
    }

    #[test]
    fn test_lookup_hits_and_misses() {
        let table = GlyphTable::from_glyphs([glyph(b'a'.into(), 10.0), glyph(b'c'.into(), 12.0)])
            .expect("table");

        assert_eq!(table.get(b'a'.into()).unwrap().metrics.advance, 10.0);
        assert_eq!(table.get(b'c'.into()).unwrap().metrics.advance, 12.0);

        // Mapped range but no glyph
        assert!(table.get(b'b'.into()).is_none());
        // Past the end of the table
        assert!(table.get(u16::MAX).is_none());
    }

    #[test]
    fn test_lookup_error_carries_code() {
        let table = GlyphTable::from_glyphs([glyph(b'a'.into(), 10.0)]).expect("table");
        let err = table.lookup(0x4E00).unwrap_err();
        assert!(matches!(err, FontError::GlyphNotFound(0x4E00)));
    }

    #[test]
    fn test_table_sized_to_max_code() {
        let table = GlyphTable::from_glyphs([glyph(b'a'.into(), 10.0), glyph(200, 5.0)]).expect("table");
        assert_eq!(table.slot_count(), 201);
        assert_eq!(table.glyph_count(), 2);
    }

    #[test]
    fn test_empty_glyph_set_rejected() {
        let result = GlyphTable::from_glyphs([]);
        assert!(matches!(result, Err(FontError::EmptyGlyphSet)));
    }
}
