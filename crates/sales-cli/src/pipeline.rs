//! Sales export cleaning pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Load**: Read the whole source table into memory
//! 2. **Project**: Select and rename the mapped columns
//! 3. **Clean**: Drop rows without codes, normalize dates, numbers, and text
//! 4. **Summarize**: Compute distinct counts and invoice-level sales
//! 5. **Write**: Persist the document atomically as pretty JSON
//!
//! Any failure aborts the run; nothing is written unless every stage succeeds.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use chrono::NaiveDateTime;
use thiserror::Error;
use tracing::{info, info_span, warn};

use sales_ingest::{IngestError, IngestOptions, SchemaError, SourceTable, load_source_table};
use sales_model::{FieldMap, OutputDocument};
use sales_output::{OutputError, WrittenFile, write_json_atomic};
use sales_transform::{CleanedRows, CleaningReport, build_document, clean_rows, local_timestamp};

/// Default input path when none is given.
pub const DEFAULT_INPUT: &str = "export result.xlsx";

/// Default output path when none is given.
pub const DEFAULT_OUTPUT: &str = "cleaned_data.json";

/// A fatal pipeline failure.
#[derive(Debug, Error)]
pub enum TransformError {
    /// The source file is missing, unreadable, or not a supported table.
    #[error("failed to load source table")]
    Load(#[from] IngestError),

    /// Expected source columns are absent.
    #[error("unexpected layout in {path}")]
    Schema {
        path: PathBuf,
        #[source]
        source: SchemaError,
    },

    /// The output file could not be written.
    #[error("failed to write output document")]
    Write(#[from] OutputError),
}

/// Options for one pipeline run.
#[derive(Debug, Clone, Default)]
pub struct TransformOptions {
    pub ingest: IngestOptions,
    /// Fixed `generated_at` timestamp; the current local time when `None`.
    pub generated_at: Option<NaiveDateTime>,
}

/// Everything a successful run produced.
#[derive(Debug)]
pub struct TransformOutcome {
    pub input: PathBuf,
    pub document: OutputDocument,
    pub report: CleaningReport,
    pub written: WrittenFile,
    pub duration: Duration,
}

/// Projects, cleans, and summarizes a loaded table.
///
/// Pure with respect to the filesystem; `path` is only used for error context.
pub fn prepare_document(
    table: &SourceTable,
    path: &Path,
    generated_at: NaiveDateTime,
) -> Result<(OutputDocument, CleaningReport), TransformError> {
    let rows = info_span!("project")
        .in_scope(|| table.project(&FieldMap::sales_export()))
        .map_err(|source| TransformError::Schema {
            path: path.to_path_buf(),
            source,
        })?;

    let CleanedRows { records, report } = info_span!("clean").in_scope(|| {
        let start = Instant::now();
        let cleaned = clean_rows(&rows);
        info!(
            input_rows = cleaned.report.input_rows,
            kept_rows = cleaned.report.kept_rows,
            missing_customer_code = cleaned.report.missing_customer_code,
            missing_product_code = cleaned.report.missing_product_code,
            unparsed_dates = cleaned.report.unparsed_dates,
            defaulted_numbers = cleaned.report.defaulted_numbers,
            duration_ms = start.elapsed().as_millis(),
            "cleaning complete"
        );
        cleaned
    });
    if report.input_rows > 0 && report.kept_rows == 0 {
        warn!(
            input_rows = report.input_rows,
            "every row lacked a customer or product code"
        );
    }

    let document = build_document(records, generated_at);
    let metadata = &document.metadata;
    info!(
        total_records = metadata.total_records,
        unique_customers = metadata.unique_customers,
        unique_products = metadata.unique_products,
        unique_invoices = metadata.unique_invoices,
        total_sales = metadata.total_sales,
        "statistics computed"
    );
    Ok((document, report))
}

/// Runs the full pipeline: read `input`, write the document to `output`.
pub fn transform(
    input: &Path,
    output: &Path,
    options: &TransformOptions,
) -> Result<TransformOutcome, TransformError> {
    let span = info_span!(
        "transform",
        input = %input.display(),
        output = %output.display()
    );
    let _guard = span.enter();
    let start = Instant::now();

    let table = info_span!("load").in_scope(|| load_source_table(input, &options.ingest))?;
    let generated_at = options.generated_at.unwrap_or_else(local_timestamp);
    let (document, report) = prepare_document(&table, input, generated_at)?;
    drop(table);

    let written = info_span!("write").in_scope(|| write_json_atomic(&document, output))?;
    let duration = start.elapsed();
    info!(
        records = document.metadata.total_records,
        size_kb = %format!("{:.2}", written.bytes as f64 / 1024.0),
        duration_ms = duration.as_millis(),
        "transform complete"
    );

    Ok(TransformOutcome {
        input: input.to_path_buf(),
        document,
        report,
        written,
        duration,
    })
}
