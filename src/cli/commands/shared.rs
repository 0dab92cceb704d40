//! Shared components for CLI commands
//!
//! Logging setup, configuration loading, and report rendering used by
//! both the parse and center commands.

use crate::cli::args::CommonArgs;
use crate::config::Config;
use crate::coordinate_parser::{ParseOutcome, ParseStats};
use crate::models::{Center, Point, SkippedLine};
use crate::{Error, Result};
use colored::*;
use serde::Serialize;
use std::fmt::Write as _;
use std::path::Path;
use tracing::{debug, info, warn};

/// Everything a presentation layer needs from one parse
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParseReport {
    pub points: Vec<Point>,
    pub skipped: Vec<SkippedLine>,
    pub stats: ParseStats,

    /// Default map-view center
    pub center: Center,

    /// True when no point parsed and the configured fallback was used
    pub center_is_fallback: bool,
}

impl ParseReport {
    /// Build a report, applying the fallback center if nothing parsed
    pub fn new(outcome: ParseOutcome, fallback_center: Center) -> Self {
        let (center, center_is_fallback) = match outcome.center() {
            Some(center) => (center, false),
            None => (fallback_center, true),
        };

        Self {
            points: outcome.points,
            skipped: outcome.skipped,
            stats: outcome.stats,
            center,
            center_is_fallback,
        }
    }
}

/// Set up structured logging based on CLI arguments
pub fn setup_logging(args: &CommonArgs) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("coordmap={}", log_level)));

    let result = if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    // A subscriber may already be installed when commands run more than once per process
    if let Err(e) = result {
        debug!("Keeping existing logging subscriber: {}", e);
        return Ok(());
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Load configuration (file -> env) and apply CLI overrides
pub fn load_configuration(args: &CommonArgs) -> Result<Config> {
    let mut config = Config::load_layered(args.config_file.as_deref())?;

    if let Some(prefix) = &args.label_prefix {
        config.parser.label_prefix = prefix.clone();
    }
    if let Some(center) = args.fallback_center {
        config.view.fallback_center = center;
    }

    config.validate()?;
    debug!("Loaded configuration: {:?}", config);
    Ok(config)
}

/// Surface every skipped line as a warning
pub fn log_skipped_lines(skipped: &[SkippedLine]) {
    for line in skipped {
        warn!("Malformed line skipped: {}", line);
    }
}

/// Render a report as human-readable text
pub fn render_human(report: &ParseReport) -> Result<String> {
    let mut out = String::new();
    write_human(&mut out, report)
        .map_err(|_| Error::data_validation("Failed to format human-readable report"))?;
    Ok(out)
}

fn write_human(out: &mut String, report: &ParseReport) -> std::fmt::Result {
    let stats = &report.stats;

    // Summary line
    writeln!(
        out,
        "{} {} of {} lines ({:.1}%)",
        "Parsed".bold(),
        stats.points_parsed,
        stats.non_blank_lines(),
        stats.success_rate()
    )?;

    // One row per point, in input order
    for (i, point) in report.points.iter().enumerate() {
        writeln!(
            out,
            "  {:>3}. {:<20} lon {:>12.6}  lat {:>11.6}",
            i + 1,
            point.label(),
            point.longitude(),
            point.latitude()
        )?;
    }

    // Warnings for malformed lines, matching the text the user typed
    if !report.skipped.is_empty() {
        writeln!(out, "\n{}", "Skipped lines:".yellow().bold())?;
        for line in &report.skipped {
            writeln!(
                out,
                "  {} line {}: {} ({})",
                "!".yellow(),
                line.line_number,
                line.text,
                line.reason
            )?;
        }
    }

    writeln!(out, "\n{} {}", "Center:".cyan(), describe_center(report))
}

/// Render a report as pretty-printed JSON
pub fn render_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| Error::json("Failed to serialize report", e))
}

/// Render points as CSV with a header row
pub fn render_csv(points: &[Point]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer
        .write_record(["longitude", "latitude", "label"])
        .map_err(|e| Error::csv("Failed to write CSV header", e))?;

    for point in points {
        // Labels are free text; the writer quotes them as needed
        writer
            .write_record([
                point.longitude().to_string(),
                point.latitude().to_string(),
                point.label().to_string(),
            ])
            .map_err(|e| Error::csv("Failed to write CSV row", e))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| Error::io("Failed to flush CSV output", e.into_error()))?;

    String::from_utf8(bytes)
        .map_err(|e| Error::data_validation(format!("CSV output is not valid UTF-8: {}", e)))
}

/// Center with a note on where it came from
pub fn describe_center(report: &ParseReport) -> String {
    if report.center_is_fallback {
        format!("{} (fallback, no points parsed)", report.center)
    } else {
        format!(
            "{} (mean of {} point{})",
            report.center,
            report.points.len(),
            if report.points.len() == 1 { "" } else { "s" }
        )
    }
}

/// Write rendered output to a file, or to stdout when no file is given
pub fn write_output(content: &str, output_file: Option<&Path>) -> Result<()> {
    match output_file {
        Some(path) => {
            std::fs::write(path, content).map_err(|e| {
                Error::io(format!("Failed to write output file {}", path.display()), e)
            })?;
            info!("Report written to {}", path.display());
        }
        None => print!("{}", content),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinate_parser::parse_coordinates;
    use tempfile::TempDir;

    #[test]
    fn test_report_uses_mean_center() {
        let report = ParseReport::new(parse_coordinates("1,2\n3,4"), Center::new(0.0, 0.0));
        assert_eq!(report.center, Center::new(2.0, 3.0));
        assert!(!report.center_is_fallback);
    }

    #[test]
    fn test_report_uses_fallback_center() {
        let report = ParseReport::new(parse_coordinates("oops"), Center::new(9.0, 8.0));
        assert_eq!(report.center, Center::new(9.0, 8.0));
        assert!(report.center_is_fallback);
        assert_eq!(report.skipped.len(), 1);
    }

    #[test]
    fn test_render_csv() {
        let outcome = parse_coordinates("112.5, -7.25, Titik A\n1, 2");
        let output = render_csv(&outcome.points).unwrap();
        assert_eq!(
            output,
            "longitude,latitude,label\n112.5,-7.25,Titik A\n1,2,Point 2\n"
        );
    }

    #[test]
    fn test_render_csv_quotes_labels() {
        let outcome = parse_coordinates("1, 2, say \"hi\"");
        let output = render_csv(&outcome.points).unwrap();

        assert_eq!(output, "longitude,latitude,label\n1,2,\"say \"\"hi\"\"\"\n");

        // Reading it back yields the label verbatim
        let mut reader = csv::Reader::from_reader(output.as_bytes());
        let record = reader.records().next().unwrap().unwrap();
        assert_eq!(&record[2], "say \"hi\"");
    }

    #[test]
    fn test_render_human_lists_skipped_lines() {
        colored::control::set_override(false);
        let report = ParseReport::new(
            parse_coordinates("1,2\nabc, def"),
            Center::new(0.0, 0.0),
        );
        let text = render_human(&report).unwrap();

        assert!(text.contains("Parsed 1 of 2 lines (50.0%)"));
        assert!(text.contains("line 2: abc, def"));
        assert!(text.contains("mean of 1 point)"));
    }

    #[test]
    fn test_render_json_report() {
        let report = ParseReport::new(parse_coordinates("1,2,A\nx"), Center::new(0.0, 0.0));
        let json: serde_json::Value =
            serde_json::from_str(&render_json(&report).unwrap()).unwrap();

        assert_eq!(json["points"][0]["label"], "A");
        assert_eq!(json["skipped"][0]["line_number"], 2);
        assert_eq!(json["skipped"][0]["reason"]["kind"], "too_few_fields");
        assert_eq!(json["center_is_fallback"], false);
    }

    #[test]
    fn test_setup_logging_twice() {
        let args = CommonArgs::default();
        assert!(setup_logging(&args).is_ok());
        assert!(setup_logging(&args).is_ok());
    }

    #[test]
    fn test_write_output_to_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("report.csv");

        write_output("longitude,latitude,label\n", Some(&path)).unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "longitude,latitude,label\n"
        );
    }
}
