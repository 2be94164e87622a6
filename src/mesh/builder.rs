//! Glyph quad builder
//!
//! Walks a text buffer with its precomputed line boundaries and emits
//! four vertices per character. The pen resets to each line's aligned
//! start; unresolved glyphs produce a degenerate zeroed quad so the
//! buffer contents are always fully defined.

use bytemuck::Zeroable;

use crate::font::{FontMetrics, GlyphTable};
use crate::foundation::math::{Rect, Vec2};
use crate::layout::{aligned_block_start, aligned_line_x, line_y, TextLine, TextStyle};

use super::{TextVertex, QUAD_NORMAL, VERTICES_PER_CHAR};

/// Build one textured quad per character into `vertices`
///
/// `lines` must come from the line breaker run against the same buffer,
/// style and container. The buffer is resized only when the character
/// count changed; afterwards `vertices.len() == 4 * text.len()` always
/// holds. `depth` is the z coordinate stamped on every vertex and
/// `color` the final per-vertex RGBA (base color already multiplied).
pub fn build_glyph_quads(
    text: &[u16],
    lines: &[TextLine],
    font: &FontMetrics,
    table: &GlyphTable,
    style: &TextStyle,
    rect: &Rect,
    canvas_scale: Vec2,
    depth: f32,
    color: [f32; 4],
    vertices: &mut Vec<TextVertex>,
) {
    let wanted = text.len() * VERTICES_PER_CHAR;
    if vertices.len() != wanted {
        vertices.resize(wanted, TextVertex::zeroed());
    }

    let style_padding = font.style_padding(style.bold);
    let space_multiplier = font.style_space_multiplier(style.bold);

    #[allow(clippy::cast_precision_loss)]
    let block_height = lines.len() as f32 * font.line_height * canvas_scale.y;
    let block_start = aligned_block_start(rect, font, block_height, canvas_scale, style.alignment);

    let mut pen = block_start;
    let mut line_idx = 0;

    for (i, &unit) in text.iter().enumerate() {
        while line_idx < lines.len() && i == lines[line_idx].offset {
            pen = Vec2::new(
                aligned_line_x(rect, lines[line_idx].width, style.alignment),
                line_y(block_start, font, canvas_scale, line_idx),
            );
            line_idx += 1;
        }

        let base = i * VERTICES_PER_CHAR;
        let Some(glyph) = table.get(unit) else {
            // Missing glyph: a zeroed quad keeps the buffer defined and
            // rasterizes to nothing. The pen does not advance.
            for vertex in &mut vertices[base..base + VERTICES_PER_CHAR] {
                *vertex = TextVertex::zeroed();
            }
            continue;
        };
        let m = &glyph.metrics;

        // Bold flips the glyph-scale channel to signal an outward
        // emboldening offset to the rasterizer.
        let uv1_scale = if style.bold {
            -canvas_scale
        } else {
            canvas_scale
        };
        let uv1 = [glyph.scale * uv1_scale.x, glyph.scale * uv1_scale.y];

        let v_min = [
            pen.x + (m.bearing_x - style_padding) * canvas_scale.x,
            pen.y + (m.bearing_y - m.height - style_padding) * canvas_scale.y,
            depth,
        ];
        let v_max = [
            v_min[0] + (m.width + style_padding * 2.0) * canvas_scale.x,
            v_min[1] + (m.height + style_padding * 2.0) * canvas_scale.y,
            depth,
        ];

        // Atlas rectangle expanded by the same padding, normalized.
        let uv_min = [
            (glyph.rect.x - style_padding) / font.atlas_size.x,
            (glyph.rect.y - style_padding) / font.atlas_size.y,
        ];
        let uv_max = [
            (glyph.rect.x + glyph.rect.width + style_padding) / font.atlas_size.x,
            (glyph.rect.y + glyph.rect.height + style_padding) / font.atlas_size.y,
        ];

        vertices[base] = TextVertex {
            position: v_min,
            normal: QUAD_NORMAL,
            uv0: uv_min,
            uv1,
            color,
        };
        vertices[base + 1] = TextVertex {
            position: [v_max[0], v_min[1], depth],
            normal: QUAD_NORMAL,
            uv0: [uv_max[0], uv_min[1]],
            uv1,
            color,
        };
        vertices[base + 2] = TextVertex {
            position: v_max,
            normal: QUAD_NORMAL,
            uv0: uv_max,
            uv1,
            color,
        };
        vertices[base + 3] = TextVertex {
            position: [v_min[0], v_max[1], depth],
            normal: QUAD_NORMAL,
            uv0: [uv_min[0], uv_max[1]],
            uv1,
            color,
        };

        pen.x += m.advance * space_multiplier * canvas_scale.x;
    }
}
