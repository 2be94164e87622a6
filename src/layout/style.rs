//! Text style descriptor

use serde::{Deserialize, Serialize};

use super::Alignment;

/// Style applied to a whole text object
///
/// `italic` is carried in the descriptor for downstream material
/// selection; quad geometry is unaffected by it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Requested render size, in the same units as the font's point size
    pub size: f32,
    /// Combined horizontal + vertical alignment flags
    pub alignment: Alignment,
    /// Bold weight: widens spacing and quad padding, flips the
    /// glyph-scale UV channel as the rasterizer's outline hint
    pub bold: bool,
    /// Italic slant flag
    pub italic: bool,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            size: 10.0,
            alignment: Alignment::TOP_LEFT,
            bold: false,
            italic: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_serde_round_trip() {
        let style = TextStyle {
            size: 24.0,
            alignment: Alignment::MIDDLE_CENTER,
            bold: true,
            italic: false,
        };
        let json = serde_json::to_string(&style).expect("serialize");
        let back: TextStyle = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, style);
    }
}
