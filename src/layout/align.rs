//! Line and block alignment
//!
//! Computes the horizontal start of each line and the vertical start of
//! the whole text block inside the container rectangle.

use bitflags::bitflags;
use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use crate::font::FontMetrics;
use crate::foundation::math::{Rect, Vec2};

bitflags! {
    /// Nine-way text alignment encoded as a bitmask
    ///
    /// The low nibble carries the horizontal flags, the second byte the
    /// vertical flags; one of each combines into the nine placements.
    /// Serializes as the raw bitmask.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Alignment: u16 {
        /// Align lines to the container's left edge
        const LEFT = 0x0001;
        /// Center lines horizontally
        const CENTER = 0x0002;
        /// Align lines to the container's right edge
        const RIGHT = 0x0004;
        /// Align the block to the container's top edge
        const TOP = 0x0100;
        /// Center the block vertically
        const MIDDLE = 0x0200;
        /// Align the block to the container's bottom edge
        const BOTTOM = 0x0400;

        /// Top-left placement
        const TOP_LEFT = Self::TOP.bits() | Self::LEFT.bits();
        /// Top-center placement
        const TOP_CENTER = Self::TOP.bits() | Self::CENTER.bits();
        /// Top-right placement
        const TOP_RIGHT = Self::TOP.bits() | Self::RIGHT.bits();
        /// Middle-left placement
        const MIDDLE_LEFT = Self::MIDDLE.bits() | Self::LEFT.bits();
        /// Dead-center placement
        const MIDDLE_CENTER = Self::MIDDLE.bits() | Self::CENTER.bits();
        /// Middle-right placement
        const MIDDLE_RIGHT = Self::MIDDLE.bits() | Self::RIGHT.bits();
        /// Bottom-left placement
        const BOTTOM_LEFT = Self::BOTTOM.bits() | Self::LEFT.bits();
        /// Bottom-center placement
        const BOTTOM_CENTER = Self::BOTTOM.bits() | Self::CENTER.bits();
        /// Bottom-right placement
        const BOTTOM_RIGHT = Self::BOTTOM.bits() | Self::RIGHT.bits();
    }
}

impl Default for Alignment {
    fn default() -> Self {
        Self::TOP_LEFT
    }
}

impl Serialize for Alignment {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u16(self.bits())
    }
}

impl<'de> Deserialize<'de> for Alignment {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bits = u16::deserialize(deserializer)?;
        Self::from_bits(bits)
            .ok_or_else(|| de::Error::custom(format!("invalid alignment bits {bits:#06x}")))
    }
}

/// Horizontal start x for one line of the given width
pub fn aligned_line_x(rect: &Rect, line_width: f32, alignment: Alignment) -> f32 {
    let min = rect.min();
    if alignment.contains(Alignment::RIGHT) {
        return min.x + rect.width() - line_width;
    }
    if alignment.contains(Alignment::CENTER) {
        return min.x + rect.width() * 0.5 - line_width * 0.5;
    }
    min.x
}

/// Start position (first line's pen origin) for a whole text block
///
/// `block_height` is the total height of all lines at the given canvas
/// scale. An alignment without any recognized vertical flag falls back
/// to top placement.
pub fn aligned_block_start(
    rect: &Rect,
    font: &FontMetrics,
    block_height: f32,
    scale: Vec2,
    alignment: Alignment,
) -> Vec2 {
    let min = rect.min();
    let max = rect.max();

    let start_y = if alignment.contains(Alignment::BOTTOM) {
        min.y - font.descent_line * scale.y + block_height - font.line_height * scale.y
    } else if alignment.contains(Alignment::MIDDLE) {
        block_height * 0.5 - font.ascent_line * scale.y
    } else {
        // TOP, or no vertical flag at all
        max.y - font.ascent_line * scale.y
    };

    Vec2::new(min.x, start_y)
}

/// Vertical pen position for the line at `index`, counting down from the
/// block start
pub fn line_y(start: Vec2, font: &FontMetrics, scale: Vec2, index: usize) -> f32 {
    #[allow(clippy::cast_precision_loss)]
    let index = index as f32;
    start.y - font.line_height * scale.y * index
}
