//! Missing-value imputation.
//!
//! Every column is filled independently. Columns whose non-missing values
//! are all digit literals get the arithmetic mean; any other column gets its
//! mode. Fill values are computed for all columns before any cell changes,
//! so a failing column leaves the table untouched.

use std::collections::HashMap;
use std::fmt;

use tabby_model::{Table, is_missing, redact_value};
use tracing::{debug, info};

use crate::error::{Result, TransformError};
use crate::numeric::{format_mean, is_digit_literal};

/// How a column's fill value was derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImputeStrategy {
    /// Arithmetic mean of digit-only values.
    Mean,
    /// Most frequent value, earliest first on ties.
    Mode,
}

impl fmt::Display for ImputeStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImputeStrategy::Mean => write!(f, "mean"),
            ImputeStrategy::Mode => write!(f, "mode"),
        }
    }
}

/// Outcome of imputing one column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnImputation {
    pub column: String,
    pub strategy: ImputeStrategy,
    pub fill_value: String,
    /// Number of missing cells replaced.
    pub filled: usize,
}

/// Per-column outcomes, in header order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImputationReport {
    pub columns: Vec<ColumnImputation>,
}

impl ImputationReport {
    pub fn total_filled(&self) -> usize {
        self.columns.iter().map(|column| column.filled).sum()
    }
}

/// Fill every missing cell with its column's mean or mode.
///
/// # Errors
///
/// Returns [`TransformError::NoDataForImputation`] naming the first column
/// that has data rows but no non-missing values. A table without data rows
/// is returned unchanged.
pub fn impute_missing(table: &mut Table) -> Result<ImputationReport> {
    let mut report = ImputationReport::default();
    if table.is_empty() {
        debug!("table has no data rows, nothing to impute");
        return Ok(report);
    }

    let mut plans = Vec::with_capacity(table.column_count());
    for (index, column) in table.columns().iter().enumerate() {
        let (strategy, fill_value) = plan_column(table, index, column)?;
        plans.push((index, column.clone(), strategy, fill_value));
    }

    for (index, column, strategy, fill_value) in plans {
        let mut filled = 0usize;
        for cell in table.column_cells_mut(index) {
            if is_missing(cell) {
                cell.clone_from(&fill_value);
                filled += 1;
            }
        }
        debug!(
            column = %column,
            strategy = %strategy,
            fill_value = redact_value(&fill_value),
            filled,
            "imputed column"
        );
        report.columns.push(ColumnImputation {
            column,
            strategy,
            fill_value,
            filled,
        });
    }
    info!(
        columns = report.columns.len(),
        filled = report.total_filled(),
        "imputation complete"
    );
    Ok(report)
}

fn plan_column(table: &Table, index: usize, column: &str) -> Result<(ImputeStrategy, String)> {
    let present: Vec<&str> = table
        .column_values(index)
        .filter(|value| !is_missing(value))
        .collect();
    let no_data = || TransformError::NoDataForImputation {
        column: column.to_string(),
    };
    if present.is_empty() {
        return Err(no_data());
    }
    if present.iter().all(|value| is_digit_literal(value)) {
        Ok((ImputeStrategy::Mean, format_mean(mean_of_digits(&present))))
    } else {
        let mode = most_frequent(&present).ok_or_else(no_data)?;
        Ok((ImputeStrategy::Mode, mode.to_string()))
    }
}

/// Mean of digit-only strings.
///
/// Sums exactly while the total fits in a `u128`, then falls back to
/// floating point accumulation.
fn mean_of_digits(values: &[&str]) -> f64 {
    let count = values.len() as f64;
    let exact = values.iter().try_fold(0u128, |sum, value| {
        value.parse::<u128>().ok().and_then(|n| sum.checked_add(n))
    });
    match exact {
        Some(sum) => sum as f64 / count,
        None => {
            values
                .iter()
                .filter_map(|value| value.parse::<f64>().ok())
                .sum::<f64>()
                / count
        }
    }
}

/// Most frequent value; ties go to the value encountered first.
fn most_frequent<'a>(values: &[&'a str]) -> Option<&'a str> {
    let mut counts: HashMap<&str, usize> = HashMap::with_capacity(values.len());
    for value in values {
        *counts.entry(*value).or_default() += 1;
    }
    let mut best: Option<(&'a str, usize)> = None;
    for &value in values {
        let count = counts.get(value).copied().unwrap_or_default();
        if best.is_none_or(|(_, best_count)| count > best_count) {
            best = Some((value, count));
        }
    }
    best.map(|(value, _)| value)
}
