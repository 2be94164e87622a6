//! Text object: the per-instance unit of work
//!
//! A `TextObject` owns its UTF-16 buffer, style, colors, placement and
//! the derived vertex buffer. Every setter bumps the matching version
//! stamp so the batch system can skip objects whose inputs did not
//! change since the last run.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::font::{FontFace, FontHandle};
use crate::foundation::math::{Rect, Vec2, Vec4};
use crate::layout::{break_lines, content_size, TextLine, TextStyle};
use crate::mesh::{build_glyph_quads, TextVertex};
use crate::system::VersionVector;

static NEXT_OBJECT_ID: AtomicU64 = AtomicU64::new(1);

/// Stable identity of a text object, used as the change-gate key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TextObjectId(u64);

/// A piece of text with its style, placement and generated mesh
#[derive(Debug)]
pub struct TextObject {
    id: TextObjectId,
    font: FontHandle,
    text: Vec<u16>,
    style: TextStyle,
    color: Vec4,
    color_multiplier: Vec4,
    /// Caller-supplied layout rectangle. This is the wrap width source;
    /// it is never derived from previously rendered bounds, so container
    /// changes take effect on the same tick they are set.
    bounds: Rect,
    transform_scale: Vec2,
    depth: f32,
    lines: Vec<TextLine>,
    vertices: Vec<TextVertex>,
    content_bounds: Rect,
    versions: VersionVector,
}

impl TextObject {
    /// Create an empty text object rendered with the given font
    pub fn new(font: FontHandle) -> Self {
        Self {
            id: TextObjectId(NEXT_OBJECT_ID.fetch_add(1, Ordering::Relaxed)),
            font,
            text: Vec::new(),
            style: TextStyle::default(),
            color: Vec4::new(1.0, 1.0, 1.0, 1.0),
            color_multiplier: Vec4::new(1.0, 1.0, 1.0, 1.0),
            bounds: Rect::default(),
            transform_scale: Vec2::new(1.0, 1.0),
            depth: 0.0,
            lines: Vec::new(),
            vertices: Vec::new(),
            content_bounds: Rect::default(),
            versions: VersionVector::default(),
        }
    }

    /// Object identity
    pub fn id(&self) -> TextObjectId {
        self.id
    }

    /// Font this object renders with
    pub fn font(&self) -> FontHandle {
        self.font
    }

    /// Replace the font and invalidate derived data
    pub fn set_font(&mut self, font: FontHandle) {
        self.font = font;
        // Glyph metrics changed wholesale; both passes must re-run.
        self.versions.text.bump();
        self.versions.style.bump();
    }

    /// Current UTF-16 buffer
    pub fn text(&self) -> &[u16] {
        &self.text
    }

    /// Replace the text from a string slice
    pub fn set_text(&mut self, text: &str) {
        self.text.clear();
        self.text.extend(text.encode_utf16());
        self.versions.text.bump();
    }

    /// Replace the text from raw UTF-16 code units
    pub fn set_text_utf16(&mut self, text: Vec<u16>) {
        self.text = text;
        self.versions.text.bump();
    }

    /// Current style
    pub fn style(&self) -> &TextStyle {
        &self.style
    }

    /// Replace the style descriptor
    pub fn set_style(&mut self, style: TextStyle) {
        self.style = style;
        self.versions.style.bump();
    }

    /// Base color
    pub fn color(&self) -> Vec4 {
        self.color
    }

    /// Set the base RGBA color
    pub fn set_color(&mut self, color: Vec4) {
        self.color = color;
        self.versions.color.bump();
    }

    /// Color multiplier
    pub fn color_multiplier(&self) -> Vec4 {
        self.color_multiplier
    }

    /// Set the RGBA color multiplier
    ///
    /// Kept separate from the base color so fades can be driven without
    /// touching it; the mesh uses `base x multiplier`.
    pub fn set_color_multiplier(&mut self, multiplier: Vec4) {
        self.color_multiplier = multiplier;
        self.versions.color_multiplier.bump();
    }

    /// Final per-vertex color: base x multiplier, component-wise
    pub fn final_color(&self) -> Vec4 {
        self.color.component_mul(&self.color_multiplier)
    }

    /// Container rectangle used for wrapping and alignment
    pub fn bounds(&self) -> &Rect {
        &self.bounds
    }

    /// Transform scale supplied by the placement system
    pub fn transform_scale(&self) -> Vec2 {
        self.transform_scale
    }

    /// Update placement: container rect, transform scale and depth
    pub fn set_placement(&mut self, bounds: Rect, transform_scale: Vec2, depth: f32) {
        self.bounds = bounds;
        self.transform_scale = transform_scale;
        self.depth = depth;
        self.versions.bounds.bump();
    }

    /// Lines produced by the most recent mesh rebuild
    pub fn lines(&self) -> &[TextLine] {
        &self.lines
    }

    /// Vertex buffer produced by the most recent mesh rebuild
    pub fn vertices(&self) -> &[TextVertex] {
        &self.vertices
    }

    /// Intrinsic content bounds from the most recent bounds rebuild
    ///
    /// Centered on the object's origin; independent of the wrap width.
    pub fn content_bounds(&self) -> &Rect {
        &self.content_bounds
    }

    /// Current input version stamps
    pub fn versions(&self) -> &VersionVector {
        &self.versions
    }

    /// Re-run line breaking, alignment and quad generation
    ///
    /// Normally driven by the batch system through the change gate, but
    /// callable directly when a caller wants an unconditional rebuild.
    pub fn rebuild_mesh(&mut self, face: &FontFace) {
        let scale = face.metrics.canvas_scale(self.style.size, self.transform_scale);
        let space_multiplier = face.metrics.style_space_multiplier(self.style.bold);

        break_lines(
            &self.text,
            &face.glyphs,
            self.bounds.width(),
            space_multiplier,
            scale.x,
            &mut self.lines,
        );

        let color = self.final_color();
        build_glyph_quads(
            &self.text,
            &self.lines,
            &face.metrics,
            &face.glyphs,
            &self.style,
            &self.bounds,
            scale,
            self.depth,
            [color.x, color.y, color.z, color.w],
            &mut self.vertices,
        );
    }

    /// Re-derive the intrinsic content bounds
    pub fn rebuild_bounds(&mut self, face: &FontFace) {
        let scale = face.metrics.canvas_scale(self.style.size, self.transform_scale);
        let size = content_size(
            &self.text,
            &face.glyphs,
            face.metrics.style_padding(self.style.bold),
            face.metrics.style_space_multiplier(self.style.bold),
            scale,
        );
        self.content_bounds = Rect::new(Vec2::zeros(), size * 0.5);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handle() -> FontHandle {
        FontHandle::default()
    }

    #[test]
    fn test_ids_are_unique() {
        let a = TextObject::new(handle());
        let b = TextObject::new(handle());
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_setters_bump_matching_stamp() {
        let mut object = TextObject::new(handle());
        let initial = *object.versions();

        object.set_text("hi");
        assert_ne!(object.versions().text, initial.text);
        assert_eq!(object.versions().style, initial.style);

        object.set_style(TextStyle::default());
        assert_ne!(object.versions().style, initial.style);

        object.set_color(Vec4::new(1.0, 0.0, 0.0, 1.0));
        assert_ne!(object.versions().color, initial.color);

        object.set_color_multiplier(Vec4::new(1.0, 1.0, 1.0, 0.5));
        assert_ne!(object.versions().color_multiplier, initial.color_multiplier);

        object.set_placement(Rect::default(), Vec2::new(1.0, 1.0), 0.0);
        assert_ne!(object.versions().bounds, initial.bounds);
    }

    #[test]
    fn test_final_color_combines_multiplier() {
        let mut object = TextObject::new(handle());
        object.set_color(Vec4::new(1.0, 0.5, 0.25, 1.0));
        object.set_color_multiplier(Vec4::new(0.5, 0.5, 0.5, 0.5));
        let color = object.final_color();
        assert_eq!(color, Vec4::new(0.5, 0.25, 0.125, 0.5));
    }

    #[test]
    fn test_set_text_encodes_utf16() {
        let mut object = TextObject::new(handle());
        object.set_text("ab");
        assert_eq!(object.text(), &[u16::from(b'a'), u16::from(b'b')]);
    }
}
