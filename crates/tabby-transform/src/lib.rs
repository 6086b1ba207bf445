//! In-memory table transformations.
//!
//! # Overview
//!
//! This crate provides:
//! - **Classification**: Decide whether a column holds numeric data
//! - **Value editing**: Exact find/replace in one column or all of them
//! - **Imputation**: Fill missing sentinels with a column mean or mode
//!
//! # Example
//!
//! ```ignore
//! use tabby_transform::{ColumnTarget, change_values, classify_column, impute_missing};
//!
//! change_values(&mut table, &ColumnTarget::from("Age"), "-", "NaN")?;
//! let report = impute_missing(&mut table)?;
//! let kind = classify_column(&table, "Age")?;
//! ```
//!
//! All operations are linear scans that mutate the table in place.

mod classify;
mod edit;
mod error;
mod impute;

pub mod numeric;

pub use classify::{classify_column, classify_columns};
pub use edit::{ColumnTarget, change_values};
pub use error::{Result, TransformError};
pub use impute::{ColumnImputation, ImputationReport, ImputeStrategy, impute_missing};
