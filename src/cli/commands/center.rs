//! Center command implementation
//!
//! Prints the default map-view center: the mean position of the parsed
//! points, or the configured fallback when nothing parsed.

use super::shared::{
    ParseReport, describe_center, load_configuration, log_skipped_lines, render_json,
    setup_logging, write_output,
};
use crate::Result;
use crate::cli::args::{CenterArgs, OutputFormat};
use crate::cli::input::{InputSource, read_input};
use crate::coordinate_parser::{CoordinateParser, ParseStats};
use crate::models::Center;
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Serialize)]
struct CenterSummary {
    center: Center,
    center_is_fallback: bool,
    points: usize,
}

/// Center command runner
pub fn run_center(args: CenterArgs) -> Result<ParseStats> {
    setup_logging(&args.common)?;
    debug!("Center arguments: {:?}", args);

    let config = load_configuration(&args.common)?;
    let text = read_input(&InputSource::from_args(&args.input))?;

    let outcome = CoordinateParser::from_config(&config.parser).parse(&text);
    log_skipped_lines(&outcome.skipped);

    let stats = outcome.stats.clone();
    let report = ParseReport::new(outcome, config.view.fallback_center);

    let rendered = match args.output_format {
        OutputFormat::Human => format!("{}\n", describe_center(&report)),
        OutputFormat::Json => {
            let summary = CenterSummary {
                center: report.center,
                center_is_fallback: report.center_is_fallback,
                points: report.points.len(),
            };
            render_json(&summary)? + "\n"
        }
        OutputFormat::Csv => format!(
            "longitude,latitude\n{},{}\n",
            report.center.longitude, report.center.latitude
        ),
    };
    write_output(&rendered, args.output_file.as_deref())?;

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::{Args, Commands};
    use clap::Parser;
    use tempfile::TempDir;

    /// Run the center command on `text` and return the written output
    fn center_output(text: &str, format: &str, extra: &[&str]) -> String {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.json");
        std::fs::write(&config_path, "{}").unwrap();
        let output_path = dir.path().join("center.out");

        let mut argv = vec![
            "coordmap",
            "center",
            "--config",
            config_path.to_str().unwrap(),
            "--text",
            text,
            "--output-format",
            format,
            "-o",
            output_path.to_str().unwrap(),
        ];
        argv.extend_from_slice(extra);

        let args = match Args::try_parse_from(argv).unwrap().command {
            Some(Commands::Center(args)) => args,
            other => panic!("expected center command, got {:?}", other),
        };
        run_center(args).unwrap();

        std::fs::read_to_string(&output_path).unwrap()
    }

    #[test]
    fn test_center_falls_back_when_nothing_parses() {
        let output = center_output(
            "abc, def\n1.0",
            "json",
            &["--fallback-center", "106.8, -6.2"],
        );
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(json["center_is_fallback"], true);
        assert_eq!(json["points"], 0);
        assert_eq!(json["center"]["longitude"], 106.8);
        assert_eq!(json["center"]["latitude"], -6.2);
    }

    #[test]
    fn test_center_mean_of_points() {
        let output = center_output("110, -6\n114, -8", "json", &[]);
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(json["center_is_fallback"], false);
        assert_eq!(json["points"], 2);
        assert_eq!(json["center"]["longitude"], 112.0);
        assert_eq!(json["center"]["latitude"], -7.0);
    }

    #[test]
    fn test_center_csv_output() {
        let output = center_output("110, -6\n114, -8", "csv", &[]);
        assert_eq!(output, "longitude,latitude\n112,-7\n");
    }
}
