//! Stage orchestration: load, edit, impute, write.

use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info, info_span};

use tabby_ingest::{detect_format, read_table_as};
use tabby_model::redact_value;
use tabby_output::{output_path, write_table};
use tabby_transform::{change_values, impute_missing};

use crate::types::{RunOptions, RunResult};

/// Run every requested stage in order and return the final table.
///
/// Any failure aborts the run; nothing is written unless every earlier
/// stage succeeded.
pub fn run(options: &RunOptions) -> Result<RunResult> {
    let input = &options.input;
    let run_span = info_span!("run", input = %input.display());
    let _run_guard = run_span.enter();
    let start = Instant::now();

    // =========================================================================
    // Stage 1: Load
    // =========================================================================
    let load_context = || format!("load table from {}", input.display());
    let format = detect_format(input).with_context(load_context)?;
    let mut table = read_table_as(input, format).with_context(load_context)?;

    // =========================================================================
    // Stage 2: Change values
    // =========================================================================
    let replaced = match &options.change {
        Some(change) => {
            let span = info_span!("change", column = %change.target);
            let _guard = span.enter();
            let replaced = change_values(
                &mut table,
                &change.target,
                &change.old_value,
                &change.new_value,
            )
            .with_context(|| format!("change values in column '{}'", change.target))?;
            info!(
                old = redact_value(&change.old_value),
                new = redact_value(&change.new_value),
                replaced,
                "values changed"
            );
            Some(replaced)
        }
        None => None,
    };

    // =========================================================================
    // Stage 3: Impute missing values
    // =========================================================================
    let imputation = if options.impute {
        let span = info_span!("impute");
        let _guard = span.enter();
        Some(impute_missing(&mut table).context("impute missing values")?)
    } else {
        None
    };

    // =========================================================================
    // Stage 4: Write
    // =========================================================================
    let written = match &options.output {
        Some(name) => {
            let path = output_path(name, format);
            write_table(&table, &path)
                .with_context(|| format!("save table to {}", path.display()))?;
            info!(path = %path.display(), "output written");
            Some(path)
        }
        None => None,
    };

    debug!(duration_ms = start.elapsed().as_millis(), "run complete");
    Ok(RunResult {
        table,
        written,
        replaced,
        imputation,
    })
}
