use std::path::PathBuf;

use tabby_model::Table;
use tabby_transform::{ColumnTarget, ImputationReport};

/// One literal substitution requested on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueChange {
    pub target: ColumnTarget,
    pub old_value: String,
    pub new_value: String,
}

/// Stages to run for a single invocation.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub input: PathBuf,
    /// Output name without extension; the input's extension is appended.
    pub output: Option<String>,
    pub change: Option<ValueChange>,
    pub impute: bool,
}

#[derive(Debug)]
pub struct RunResult {
    pub table: Table,
    pub written: Option<PathBuf>,
    pub replaced: Option<usize>,
    pub imputation: Option<ImputationReport>,
}
