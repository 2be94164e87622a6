//! Glyph quad mesh generation
//!
//! Turns line-broken, aligned text into a flat vertex buffer of one
//! textured quad per character, ready for render submission.

pub mod builder;
pub mod vertex;

pub use builder::*;
pub use vertex::*;
