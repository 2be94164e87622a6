//! Batch scheduling and change gating
//!
//! Drives the layout pipeline over many independent text objects per
//! tick, skipping objects whose version-stamped inputs are unchanged.

pub mod batch;
pub mod change_gate;
pub mod config;

pub use batch::*;
pub use change_gate::*;
pub use config::*;
