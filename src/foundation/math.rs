//! Math utilities and types
//!
//! Provides the fundamental math types used by layout and mesh generation.

pub use nalgebra::{Vector2, Vector3, Vector4};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4D vector type (also used for RGBA colors)
pub type Vec4 = Vector4<f32>;

/// 2D axis-aligned rectangle stored as center + extents (half-size)
///
/// This is the container shape handed in by the placement system: a
/// center point with half-extents on each axis. Layout code mostly works
/// with the derived `min`/`max` corners and `size`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Center of the rectangle
    pub center: Vec2,

    /// Half-size on each axis
    pub extents: Vec2,
}

impl Rect {
    /// Create a rectangle from center and extents
    pub fn new(center: Vec2, extents: Vec2) -> Self {
        Self { center, extents }
    }

    /// Create a rectangle from min and max corners
    pub fn from_min_max(min: Vec2, max: Vec2) -> Self {
        Self {
            center: (min + max) * 0.5,
            extents: (max - min) * 0.5,
        }
    }

    /// Minimum (bottom-left) corner
    pub fn min(&self) -> Vec2 {
        self.center - self.extents
    }

    /// Maximum (top-right) corner
    pub fn max(&self) -> Vec2 {
        self.center + self.extents
    }

    /// Full size on both axes
    pub fn size(&self) -> Vec2 {
        self.extents * 2.0
    }

    /// Full width
    pub fn width(&self) -> f32 {
        self.extents.x * 2.0
    }

    /// Full height
    pub fn height(&self) -> f32 {
        self.extents.y * 2.0
    }
}

impl Default for Rect {
    fn default() -> Self {
        Self {
            center: Vec2::zeros(),
            extents: Vec2::zeros(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rect_corners() {
        let rect = Rect::new(Vec2::new(10.0, 5.0), Vec2::new(4.0, 3.0));
        assert_relative_eq!(rect.min().x, 6.0);
        assert_relative_eq!(rect.min().y, 2.0);
        assert_relative_eq!(rect.max().x, 14.0);
        assert_relative_eq!(rect.max().y, 8.0);
        assert_relative_eq!(rect.width(), 8.0);
        assert_relative_eq!(rect.height(), 6.0);
    }

    #[test]
    fn test_rect_from_min_max_round_trip() {
        let rect = Rect::from_min_max(Vec2::new(-2.0, -1.0), Vec2::new(6.0, 3.0));
        assert_relative_eq!(rect.center.x, 2.0);
        assert_relative_eq!(rect.center.y, 1.0);
        assert_relative_eq!(rect.extents.x, 4.0);
        assert_relative_eq!(rect.extents.y, 2.0);
    }
}
