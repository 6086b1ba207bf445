//! CLI library components for the tabby table manipulator.

pub mod logging;
pub mod pipeline;
pub mod present;
pub mod types;
