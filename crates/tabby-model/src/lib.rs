//! Core data model for the tabby table manipulator.
//!
//! Every stage of the pipeline works on the same in-memory [`Table`]:
//! an ordered header plus rows of string cells aligned with it. Numeric
//! interpretation happens on demand in the transform crate, never here.
//!
//! # Module Organization
//!
//! - [`table`]: The `Table` type and its shape invariants
//! - [`missing`]: Sentinels that denote absent data
//! - [`format`]: File format detection from extensions
//! - [`column`]: Column classification results
//! - [`redact`]: Gate for cell values in log output

pub mod column;
pub mod error;
pub mod format;
pub mod missing;
pub mod redact;
pub mod table;

pub use column::ColumnType;
pub use error::{Result, TableError};
pub use format::FileFormat;
pub use missing::{MISSING_SENTINELS, is_missing};
pub use redact::{REDACTED_VALUE, log_data_enabled, redact_value, set_log_data_enabled};
pub use table::{Dimensions, Table};
