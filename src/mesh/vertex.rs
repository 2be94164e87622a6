//! Text vertex format
//!
//! One quad (four vertices) per character. The layout is `#[repr(C)]`
//! and `bytemuck`-compatible so the buffer can be uploaded to the GPU
//! without conversion.

use bytemuck::{Pod, Zeroable};

/// Normal shared by every text quad; quads face the -Z viewer.
pub const QUAD_NORMAL: [f32; 3] = [0.0, 0.0, -1.0];

/// Number of vertices emitted per character
pub const VERTICES_PER_CHAR: usize = 4;

/// A single text vertex
///
/// `uv0` addresses the font atlas; `uv1` carries the glyph-local scale
/// vector used by downstream effects (negated on both axes for bold as
/// the rasterizer's emboldening hint).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct TextVertex {
    /// Position in layout space
    pub position: [f32; 3],
    /// Facing normal, constant across the quad
    pub normal: [f32; 3],
    /// Atlas texture coordinate
    pub uv0: [f32; 2],
    /// Glyph-local scale channel
    pub uv1: [f32; 2],
    /// RGBA vertex color (base color x multiplier)
    pub color: [f32; 4],
}

/// Index pattern for one quad as two counter-clockwise triangles
///
/// `base` is the index of the quad's first vertex. Matches the winding
/// produced by the quad builder (min, x-max, max, y-max corner order).
pub fn quad_indices(base: u32) -> [u32; 6] {
    [base, base + 2, base + 1, base, base + 3, base + 2]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_layout_is_tightly_packed() {
        // 3 + 3 + 2 + 2 + 4 floats, no padding
        assert_eq!(
            std::mem::size_of::<TextVertex>(),
            std::mem::size_of::<f32>() * 14
        );
    }

    #[test]
    fn test_quad_indices_cover_four_vertices() {
        let indices = quad_indices(8);
        assert_eq!(indices, [8, 10, 9, 8, 11, 10]);
        for i in indices {
            assert!((8..12).contains(&i));
        }
    }
}
