//! CLI argument definitions for the hyg-signals tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "hyg-signals",
    version,
    about = "HYG Signals - validate, sort and render bond-pair trading signals",
    long_about = "Validate bond-pair arbitrage signal records, format them for \
                  display and render a sorted signal table.\n\n\
                  Reads KatanaSignalEngine JSON or enhanced-CSV files; invalid \
                  records are logged and dropped, never fatal."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Render the signal table from a file, or from built-in sample data.
    Render(RenderArgs),

    /// Validate a signals file and report every rejected record.
    Check(CheckArgs),

    /// Write validated, display-formatted records as JSON.
    Export(ExportArgs),
}

#[derive(Parser)]
pub struct RenderArgs {
    /// Signals file (.json or .csv). Sample data is used when omitted.
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Sort column: priority, confidence, price_diff or yield_diff.
    /// An unrecognized key falls back to priority.
    #[arg(long = "sort-by", value_name = "KEY", default_value = "priority")]
    pub sort_by: String,

    /// Sort direction: ASC or DESC.
    #[arg(long = "direction", value_name = "DIR", default_value = "ASC")]
    pub direction: String,
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Signals file (.json or .csv).
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,
}

#[derive(Parser)]
pub struct ExportArgs {
    /// Signals file (.json or .csv).
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Destination JSON file.
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: PathBuf,
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
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn render_defaults_to_priority_ascending() {
        let cli = Cli::parse_from(["hyg-signals", "render"]);
        let Command::Render(args) = cli.command else {
            panic!("expected render command");
        };
        assert_eq!(args.sort_by, "priority");
        assert_eq!(args.direction, "ASC");
        assert!(args.input.is_none());
    }
}
