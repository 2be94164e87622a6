//! Foundation utilities: math types and logging support

pub mod logging;
pub mod math;
