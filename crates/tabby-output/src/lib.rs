//! Table writing for the tabby table manipulator.
//!
//! Serializes a [`Table`](tabby_model::Table) to the format implied by the
//! destination extension. Output is staged in a temporary file next to the
//! destination and renamed into place only once it is complete, so a failed
//! write never leaves a truncated file behind.

mod delimited;
mod error;
mod workbook;
mod writer;

pub use error::{OutputError, Result};
pub use writer::{output_path, write_table};
