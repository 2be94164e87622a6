//! Intrinsic (unwrapped) content sizing
//!
//! Produces a coarse 2D size for a text buffer from glyph metrics alone,
//! with no line breaking. The result feeds culling and placement bounds;
//! it is not a layout measurement and deliberately ignores the wrap
//! width used by the line breaker.

use crate::font::GlyphTable;
use crate::foundation::math::Vec2;

/// Accumulate the intrinsic size of a text buffer
///
/// For every resolvable glyph this sums three contributions, all scaled
/// by `canvas_scale`: the bearing-adjusted minimum offset, the padded
/// glyph box, and the style-adjusted advance. Unmapped code units are
/// skipped.
pub fn content_size(
    text: &[u16],
    table: &GlyphTable,
    style_padding: f32,
    space_multiplier: f32,
    canvas_scale: Vec2,
) -> Vec2 {
    let mut size = Vec2::zeros();
    for &unit in text {
        let Some(glyph) = table.get(unit) else {
            continue;
        };
        let m = &glyph.metrics;
        size += Vec2::new(
            m.bearing_x - style_padding,
            m.bearing_y - m.height - style_padding,
        )
        .component_mul(&canvas_scale);
        size += Vec2::new(
            m.width + style_padding * 2.0,
            m.height + style_padding * 2.0,
        )
        .component_mul(&canvas_scale);
        size += Vec2::new(m.advance * space_multiplier, 0.0).component_mul(&canvas_scale);
    }
    size
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::{AtlasRect, Glyph, GlyphMetrics};
    use approx::assert_relative_eq;

    fn table() -> GlyphTable {
        GlyphTable::from_glyphs([Glyph {
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
        .expect("table")
    }

    #[test]
    fn test_single_glyph_contributions() {
        let size = content_size(&[b'a'.into()], &table(), 1.25, 1.0, Vec2::new(1.0, 1.0));
        // x: (bearing_x - pad) + (width + 2 pad) + advance
        assert_relative_eq!(size.x, (1.0 - 1.25) + (8.0 + 2.5) + 10.0);
        // y: (bearing_y - height - pad) + (height + 2 pad)
        assert_relative_eq!(size.y, (9.0 - 10.0 - 1.25) + (10.0 + 2.5));
    }

    #[test]
    fn test_empty_text_is_zero() {
        let size = content_size(&[], &table(), 1.25, 1.0, Vec2::new(1.0, 1.0));
        assert_relative_eq!(size.x, 0.0);
        assert_relative_eq!(size.y, 0.0);
    }

    #[test]
    fn test_unmapped_units_skipped() {
        let mapped = content_size(&[b'a'.into()], &table(), 1.25, 1.0, Vec2::new(1.0, 1.0));
        let mixed = content_size(
            &[b'a'.into(), b'!'.into()],
            &table(),
            1.25,
            1.0,
            Vec2::new(1.0, 1.0),
        );
        assert_relative_eq!(mapped.x, mixed.x);
    }

    #[test]
    fn test_canvas_scale_applies_per_axis() {
        let unit = content_size(&[b'a'.into()], &table(), 0.0, 1.0, Vec2::new(1.0, 1.0));
        let scaled = content_size(&[b'a'.into()], &table(), 0.0, 1.0, Vec2::new(2.0, 3.0));
        assert_relative_eq!(scaled.x, unit.x * 2.0);
        assert_relative_eq!(scaled.y, unit.y * 3.0);
    }
}
