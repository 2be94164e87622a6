//! # text-mesh
//!
//! Batched text layout and glyph-quad mesh generation for atlas-based
//! font rendering.
//!
//! Given a UTF-16 buffer, a font's glyph table, a style and a container
//! rectangle, the crate breaks the text into lines with greedy
//! word-boundary wrapping, aligns them inside the container, and emits a
//! flat vertex buffer with one textured quad per character. A separate
//! pass derives an intrinsic (unwrapped) content size for culling and
//! placement. The batch system drives both passes across many
//! independent text objects per tick, gated by version stamps so only
//! changed objects are recomputed.
//!
//! Font import, scene placement and GPU submission are external
//! collaborators: this crate only reads the font tables and placement
//! they provide and only produces vertex data.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use text_mesh::prelude::*;
//!
//! # fn metrics() -> FontMetrics { unimplemented!() }
//! # fn glyphs() -> GlyphTable { unimplemented!() }
//! let mut fonts = FontRegistry::new();
//! let font = fonts.insert(metrics(), glyphs());
//!
//! let mut label = TextObject::new(font);
//! label.set_text("hello world");
//! label.set_placement(
//!     Rect::new(Vec2::zeros(), Vec2::new(50.0, 20.0)),
//!     Vec2::new(1.0, 1.0),
//!     0.0,
//! );
//!
//! let mut system = TextMeshSystem::new();
//! let mut objects = vec![label];
//! system.run(&mut objects, &fonts);
//! let vertices = objects[0].vertices(); // 4 per character
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod font;
pub mod foundation;
pub mod layout;
pub mod mesh;
pub mod system;
mod text_object;

pub use text_object::{TextObject, TextObjectId};

/// Common imports for crate users
pub mod prelude {
    pub use crate::{
        font::{FontError, FontHandle, FontMetrics, FontRegistry, Glyph, GlyphTable},
        foundation::math::{Rect, Vec2, Vec3, Vec4},
        layout::{Alignment, TextLine, TextStyle},
        mesh::{quad_indices, TextVertex},
        system::{BatchStats, TextMeshSystem, TextSystemConfig},
        TextObject, TextObjectId,
    };
}
