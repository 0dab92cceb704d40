//! Test helpers for coordinate parser testing

use crate::coordinate_parser::ParseOutcome;

mod stats_tests;

/// Collect points as plain (longitude, latitude, label) tuples
pub fn point_tuples(outcome: &ParseOutcome) -> Vec<(f64, f64, String)> {
    outcome
        .points
        .iter()
        .map(|p| (p.longitude(), p.latitude(), p.label().to_string()))
        .collect()
}

/// Collect skipped lines as plain (line_number, text) tuples
pub fn skipped_tuples(outcome: &ParseOutcome) -> Vec<(usize, String)> {
    outcome
        .skipped
        .iter()
        .map(|s| (s.line_number, s.text.clone()))
        .collect()
}
