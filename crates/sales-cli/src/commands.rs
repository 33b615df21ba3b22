use std::path::Path;

use anyhow::{Context, Result};
use tracing::error;

use sales_cli::pipeline::{TransformError, TransformOptions, TransformOutcome, transform};
use sales_ingest::IngestOptions;

use crate::cli::Cli;

const BYTES_PER_MIB: u64 = 1024 * 1024;

pub fn run_clean(cli: &Cli) -> Result<TransformOutcome> {
    let options = TransformOptions {
        ingest: IngestOptions {
            max_file_size: cli.max_input_mb.saturating_mul(BYTES_PER_MIB),
        },
        generated_at: None,
    };
    transform(&cli.input, &cli.output, &options)
        .inspect_err(|err| log_failure(err, &cli.input, &cli.output))
        .with_context(|| format!("could not clean {}", cli.input.display()))
}

fn log_failure(err: &TransformError, input: &Path, output: &Path) {
    match err {
        TransformError::Load(source) => {
            error!(input = %input.display(), error = %source, "load failed");
        }
        TransformError::Schema { source, .. } => {
            error!(input = %input.display(), missing = ?source.missing, "schema mismatch");
        }
        TransformError::Write(source) => {
            error!(output = %output.display(), error = %source, "write failed");
        }
    }
}
