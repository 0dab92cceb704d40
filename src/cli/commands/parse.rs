//! Parse command implementation
//!
//! Reads coordinate text, parses it and writes a report of the parsed points,
//! the skipped lines and the default map-view center.

use super::shared::{
    ParseReport, load_configuration, log_skipped_lines, render_csv, render_human, render_json,
    setup_logging, write_output,
};
use crate::cli::args::{OutputFormat, ParseArgs};
use crate::cli::input::{InputSource, read_input};
use crate::coordinate_parser::{CoordinateParser, ParseStats};
use crate::{Error, Result};
use tracing::{debug, info};

/// Parse command runner
pub fn run_parse(args: ParseArgs) -> Result<ParseStats> {
    setup_logging(&args.common)?;
    debug!("Parse arguments: {:?}", args);

    let config = load_configuration(&args.common)?;
    let text = read_input(&InputSource::from_args(&args.input))?;

    let parser = CoordinateParser::from_config(&config.parser);
    let outcome = parser.parse(&text);
    log_skipped_lines(&outcome.skipped);

    info!(
        "Parsed {} points, skipped {} lines",
        outcome.stats.points_parsed, outcome.stats.lines_skipped
    );

    let stats = outcome.stats.clone();
    let report = ParseReport::new(outcome, config.view.fallback_center);

    // No terminal colors in report files
    if args.output_file.is_some() {
        colored::control::set_override(false);
    }

    let rendered = match args.output_format {
        OutputFormat::Human => render_human(&report)?,
        OutputFormat::Json => render_json(&report)? + "\n",
        OutputFormat::Csv => render_csv(&report.points)?,
    };
    write_output(&rendered, args.output_file.as_deref())?;

    // Strict mode fails only after the full report has been written
    if args.strict && !stats.is_clean() {
        return Err(Error::malformed_input(stats.lines_skipped));
    }

    Ok(stats)
}
