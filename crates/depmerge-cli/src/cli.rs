//! CLI argument definitions for depmerge.

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use clap::{ColorChoice, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use tracing::level_filters::LevelFilter;

use depmerge_report::ReportFormat;

use crate::logging::{LogConfig, LogFormat};

#[derive(Parser)]
#[command(
    name = "depmerge",
    version,
    about = "Canonicalize option/dependent XML and report what changed",
    long_about = "Canonicalize an option/dependent XML document.\n\n\
                  Values are deduplicated, every value receives the union of its\n\
                  dependents, and values sharing a dependent set are merged into\n\
                  one option. A change report traces every value back to its\n\
                  original group."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Prefix log events with a timestamp.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Include the module path of each log event.
    #[arg(long = "log-target", global = true)]
    pub log_target: bool,
}

impl Cli {
    /// Logging configuration from the global flags.
    ///
    /// An explicit `--log-level` beats `-v`/`-q`, and either one disables the
    /// `RUST_LOG` override.
    pub fn log_config(&self) -> LogConfig {
        let level_flag_given = self.verbosity.is_present() || self.log_level.is_some();
        let level = self
            .log_level
            .map_or_else(|| self.verbosity.tracing_level_filter(), LevelFilter::from);
        let ansi = match self.color.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => self.log_file.is_none() && io::stderr().is_terminal(),
        };
        LogConfig {
            use_env_filter: !level_flag_given,
            ..LogConfig::default()
        }
        .with_level_filter(level)
        .with_format(self.log_format.into())
        .with_log_file(self.log_file.clone())
        .with_timestamps(self.log_timestamps)
        .with_target(self.log_target)
        .with_ansi(ansi)
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Canonicalize an option document and write the change report.
    Canonicalize(CanonicalizeArgs),

    /// Build a change report from an original document and its canonical form.
    Reconcile(ReconcileArgs),
}

#[derive(Parser)]
pub struct CanonicalizeArgs {
    /// Path to the option XML document.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output directory for generated files (default: <INPUT_DIR>/output).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Change report format.
    #[arg(long = "report-format", value_enum, default_value = "csv")]
    pub report_format: ReportFormatArg,

    /// Skip writing the change report.
    #[arg(long = "no-report")]
    pub no_report: bool,

    /// Canonicalize and summarize without writing any file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Print the first N lines of the canonical XML.
    #[arg(long = "preview", value_name = "LINES")]
    pub preview: Option<usize>,

    /// Print every report row as a table.
    #[arg(long = "show-rows")]
    pub show_rows: bool,

    /// Spaces per nesting level in the canonical XML (0 for a single line).
    #[arg(long = "indent", value_name = "SPACES", default_value_t = 2)]
    pub indent: usize,

    /// Start the canonical XML with an `<?xml ...?>` declaration.
    #[arg(long = "xml-declaration")]
    pub xml_declaration: bool,
}

#[derive(Parser)]
pub struct ReconcileArgs {
    /// Path to the original option XML document.
    #[arg(value_name = "ORIGINAL")]
    pub original: PathBuf,

    /// Path to the canonical option XML document.
    #[arg(value_name = "CANONICAL")]
    pub canonical: PathBuf,

    /// Report path (default: date-stamped name next to CANONICAL).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Change report format.
    #[arg(long = "report-format", value_enum, default_value = "csv")]
    pub report_format: ReportFormatArg,

    /// Print every report row as a table.
    #[arg(long = "show-rows")]
    pub show_rows: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormatArg {
    Csv,
    Json,
}

impl From<ReportFormatArg> for ReportFormat {
    fn from(value: ReportFormatArg) -> Self {
        match value {
            ReportFormatArg::Csv => ReportFormat::Csv,
            ReportFormatArg::Json => ReportFormat::Json,
        }
    }
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

impl From<LogLevelArg> for LevelFilter {
    fn from(value: LogLevelArg) -> Self {
        match value {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        }
    }
}

impl From<LogFormatArg> for LogFormat {
    fn from(value: LogFormatArg) -> Self {
        match value {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}
