//! Command implementations for the coordmap CLI
//!
//! Each command is implemented in its own module:
//! - `parse`: parse coordinate text and report points and skipped lines
//! - `center`: compute the default map-view center

pub mod center;
pub mod parse;
pub mod shared;

pub use shared::ParseReport;

use crate::Result;
use crate::cli::args::{Args, Commands};
use crate::coordinate_parser::ParseStats;

/// Dispatch to the subcommand selected on the command line
///
/// Returns `Ok(None)` when no subcommand was given.
pub fn run(args: Args) -> Result<Option<ParseStats>> {
    match args.command {
        Some(Commands::Parse(parse_args)) => parse::run_parse(parse_args).map(Some),
        Some(Commands::Center(center_args)) => center::run_center(center_args).map(Some),
        None => Ok(None),
    }
}
