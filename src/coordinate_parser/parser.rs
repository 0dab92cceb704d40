//! Coordinate text parser
//!
//! Walks the input line by line, keeping every successfully parsed point in
//! input order and a diagnostic for every malformed line. Parsing is total:
//! one bad line never stops the rest from being processed.

use tracing::debug;

use super::line::parse_line;
use super::stats::{ParseOutcome, ParseStats};
use crate::config::ParserConfig;
use crate::constants::DEFAULT_LABEL_PREFIX;
use crate::models::{Point, SkippedLine};

/// Parser for multi-line coordinate text
///
/// Holds no state between calls, so one instance can be shared freely
/// across threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoordinateParser {
    label_prefix: String,
}

impl Default for CoordinateParser {
    fn default() -> Self {
        Self::new()
    }
}

impl CoordinateParser {
    /// Create a parser with the default label prefix
    pub fn new() -> Self {
        Self {
            label_prefix: DEFAULT_LABEL_PREFIX.to_string(),
        }
    }

    /// Create a parser from configuration
    pub fn from_config(config: &ParserConfig) -> Self {
        Self::new().with_label_prefix(config.label_prefix.clone())
    }

    /// Use a custom prefix for synthesized labels
    pub fn with_label_prefix(mut self, label_prefix: impl Into<String>) -> Self {
        self.label_prefix = label_prefix.into();
        self
    }

    pub fn label_prefix(&self) -> &str {
        &self.label_prefix
    }

    /// Parse a raw block of text into points and skipped-line diagnostics
    pub fn parse(&self, text: &str) -> ParseOutcome {
        let mut points: Vec<Point> = Vec::new();
        let mut skipped: Vec<SkippedLine> = Vec::new();
        let mut stats = ParseStats::new();

        // Lines end at '\n'; a final trailing newline does not start another line
        for (index, raw_line) in text.lines().enumerate() {
            stats.total_lines += 1;

            let line = raw_line.trim();
            if line.is_empty() {
                stats.blank_lines += 1;
                continue;
            }

            match parse_line(line) {
                Ok(fields) => {
                    let label = fields
                        .label
                        .unwrap_or_else(|| self.default_label(points.len() + 1));
                    points.push(Point::from_finite(fields.longitude, fields.latitude, label));
                }
                Err(reason) => {
                    debug!("Skipping line {} '{}': {}", index + 1, line, reason);
                    skipped.push(SkippedLine {
                        line_number: index + 1,
                        text: line.to_string(),
                        reason,
                    });
                }
            }
        }

        stats.points_parsed = points.len();
        stats.lines_skipped = skipped.len();

        debug!(
            "Parsed {} points from {} lines ({} blank, {} skipped)",
            stats.points_parsed, stats.total_lines, stats.blank_lines, stats.lines_skipped
        );

        ParseOutcome {
            points,
            skipped,
            stats,
        }
    }

    /// Label for the `ordinal`-th parsed point that has no explicit label
    fn default_label(&self, ordinal: usize) -> String {
        format!("{} {}", self.label_prefix, ordinal)
    }
}

/// Parse coordinate text with default options
pub fn parse_coordinates(text: &str) -> ParseOutcome {
    CoordinateParser::new().parse(text)
}
