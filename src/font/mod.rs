//! Font-side data: glyph tables, face metrics, and the font registry
//!
//! Everything in this module is produced once by the font import step and
//! is read-only afterwards, so it can be shared freely across layout
//! workers.

pub mod glyph_table;
pub mod metrics;
pub mod registry;

pub use glyph_table::*;
pub use metrics::*;
pub use registry::*;
