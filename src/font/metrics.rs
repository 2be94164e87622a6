//! Per-font face metrics
//!
//! One `FontMetrics` record exists per imported font and is immutable
//! after creation. It carries the vertical metrics used for line and
//! block placement plus the style parameters that feed the spacing and
//! padding formulas.

use crate::foundation::math::Vec2;

/// Conversion factor from font design units to layout units
///
/// Applied on top of `size / point_size` when deriving the canvas scale.
pub const CANVAS_SCALE_FACTOR: f32 = 0.1;

/// Face-wide font metrics
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontMetrics {
    /// Distance between consecutive baselines
    pub line_height: f32,
    /// Ascender height above the baseline
    pub ascent_line: f32,
    /// Baseline position in design units
    pub baseline: f32,
    /// Cap height above the baseline
    pub cap_line: f32,
    /// Descender depth below the baseline (typically negative)
    pub descent_line: f32,
    /// x-height above the baseline
    pub mean_line: f32,
    /// Design point size the atlas was generated at
    pub point_size: f32,
    /// Extra spacing between bold glyphs, in percent
    pub bold_spacing: f32,
    /// Extra spacing between regular glyphs, in percent
    pub normal_spacing: f32,
    /// Bold style weight, feeds the quad padding formula
    pub bold_style: f32,
    /// Regular style weight, feeds the quad padding formula
    pub normal_style: f32,
    /// Atlas texture dimensions in pixels
    pub atlas_size: Vec2,
}

impl FontMetrics {
    /// Symmetric padding added around each glyph quad
    ///
    /// The padding gives the rasterizer headroom for outlines and
    /// antialiasing beyond the raw glyph box.
    pub fn style_padding(&self, bold: bool) -> f32 {
        let weight = if bold { self.bold_style } else { self.normal_style };
        1.25 + weight / 4.0
    }

    /// Multiplier applied to every glyph advance for the given weight
    pub fn style_space_multiplier(&self, bold: bool) -> f32 {
        let spacing = if bold { self.bold_spacing } else { self.normal_spacing };
        1.0 + spacing * 0.01
    }

    /// Conversion from design units to layout units
    ///
    /// Combines the requested style size, the object's transform scale and
    /// the face's design point size.
    pub fn canvas_scale(&self, style_size: f32, transform_scale: Vec2) -> Vec2 {
        transform_scale * (style_size / self.point_size * CANVAS_SCALE_FACTOR)
    }
}
