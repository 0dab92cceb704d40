//! Command-line argument definitions for coordmap
//!
//! This module defines the CLI interface using the clap derive API.

use crate::config::parse_center;
use crate::models::Center;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the coordinate map tool
///
/// Parses free-form longitude/latitude text into point records, reports
/// lines that could not be parsed, and computes a default map-view center.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "coordmap",
    version,
    about = "Parse free-form coordinate text into map points",
    long_about = "Reads lines of 'longitude, latitude[, label]' text (commas or semicolons), \
                  turns every well-formed line into a point record and reports the lines that \
                  could not be parsed. Blank lines are ignored. Points without a label are \
                  numbered in input order."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Parse coordinate text and report points and skipped lines
    Parse(ParseArgs),
    /// Print the default map-view center for the parsed points
    Center(CenterArgs),
}

// Where the coordinate text comes from
#[derive(Debug, Clone, Default, Parser)]
pub struct InputArgs {
    /// Input file with one coordinate per line
    ///
    /// Use '-' to read standard input. Without an input file or --text,
    /// piped standard input is read, otherwise a built-in sample is used.
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Coordinate text given inline (use \n-separated lines via your shell)
    #[arg(
        short = 't',
        long = "text",
        value_name = "TEXT",
        conflicts_with = "input"
    )]
    pub text: Option<String>,
}

// Options shared by every command
#[derive(Debug, Clone, Default, Parser)]
pub struct CommonArgs {
    /// Path to configuration file
    ///
    /// JSON configuration file. If not specified, looks for
    /// ~/.config/coordmap/config.json
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (JSON format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Prefix for labels of points without an explicit label
    #[arg(long = "label-prefix", value_name = "PREFIX")]
    pub label_prefix: Option<String>,

    /// Map-view center used when no point parses, as "lon, lat"
    #[arg(
        long = "fallback-center",
        value_name = "LON,LAT",
        value_parser = parse_center_arg,
        allow_hyphen_values = true
    )]
    pub fallback_center: Option<Center>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress log output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the parse command
#[derive(Debug, Clone, Parser)]
pub struct ParseArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub common: CommonArgs,

    /// Output format for the report
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for results"
    )]
    pub output_format: OutputFormat,

    /// Write the report to a file instead of stdout
    #[arg(short = 'o', long = "output-file", value_name = "FILE")]
    pub output_file: Option<PathBuf>,

    /// Fail with a non-zero exit status if any line was skipped
    #[arg(long = "strict")]
    pub strict: bool,
}

/// Arguments for the center command
#[derive(Debug, Clone, Parser)]
pub struct CenterArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub common: CommonArgs,

    /// Output format for the center
    #[arg(long = "output-format", value_enum, default_value = "human")]
    pub output_format: OutputFormat,

    /// Write the center to a file instead of stdout
    #[arg(short = 'o', long = "output-file", value_name = "FILE")]
    pub output_file: Option<PathBuf>,
}

/// Output format options for machine-readable results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
    /// CSV format for data analysis
    Csv,
}

impl CommonArgs {
    /// Get the log level implied by -v/-q
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}

fn parse_center_arg(value: &str) -> std::result::Result<Center, String> {
    parse_center(value).map_err(|e| e.to_string())
}
