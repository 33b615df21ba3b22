//! CLI argument definitions for the sales export cleaner.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;
use sales_cli::pipeline::{DEFAULT_INPUT, DEFAULT_OUTPUT};

#[derive(Parser)]
#[command(
    name = "sales-cleaner",
    version,
    about = "Clean a sales invoice export into a compact JSON document",
    long_about = "Clean a sales invoice export into a compact JSON document.\n\n\
                  Reads the first sheet of the export (xlsx, xls, xlsb, ods, or csv),\n\
                  keeps the invoice, customer, product, and delivery columns, drops\n\
                  rows without customer or product codes, and writes the records\n\
                  together with summary statistics."
)]
pub struct Cli {
    /// Path to the raw export.
    #[arg(value_name = "INPUT", default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Path of the JSON document to write.
    #[arg(value_name = "OUTPUT", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Reject inputs larger than this many MiB.
    #[arg(long = "max-input-mb", value_name = "MB", default_value_t = 50)]
    pub max_input_mb: u64,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for warnings only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn paths_default_to_export_names() {
        let cli = Cli::try_parse_from(["sales-cleaner"]).expect("parse");
        assert_eq!(cli.input, PathBuf::from(DEFAULT_INPUT));
        assert_eq!(cli.output, PathBuf::from(DEFAULT_OUTPUT));
        assert_eq!(cli.max_input_mb, 50);
        assert!(cli.log_level.is_none());
    }

    #[test]
    fn positional_paths_override_defaults() {
        let cli = Cli::try_parse_from(["sales-cleaner", "in.csv", "out/data.json", "-v"])
            .expect("parse");
        assert_eq!(cli.input, PathBuf::from("in.csv"));
        assert_eq!(cli.output, PathBuf::from("out/data.json"));
        assert!(cli.verbosity.is_present());
    }
}
