//! Text layout: line breaking, alignment, and intrinsic sizing
//!
//! All functions in this module are pure transforms over the font tables
//! and a text buffer; they hold no state of their own.

pub mod align;
pub mod content_size;
pub mod line_break;
pub mod style;

pub use align::*;
pub use content_size::*;
pub use line_break::*;
pub use style::*;
