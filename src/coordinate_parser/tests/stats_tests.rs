//! Tests for parse statistics and derived outcome values

use crate::coordinate_parser::{ParseStats, parse_coordinates};
use crate::models::Center;

#[test]
fn test_parse_stats_calculation() {
    let stats = ParseStats {
        total_lines: 12,
        blank_lines: 2,
        points_parsed: 9,
        lines_skipped: 1,
    };

    assert_eq!(stats.non_blank_lines(), 10);
    assert_eq!(stats.success_rate(), 90.0);
    assert!(!stats.is_clean());
}

#[test]
fn test_parse_stats_empty() {
    let stats = ParseStats::new();

    assert_eq!(stats.non_blank_lines(), 0);
    assert_eq!(stats.success_rate(), 0.0);
    assert!(stats.is_clean());
}

#[test]
fn test_stats_from_parse() {
    let outcome = parse_coordinates("1,2\n\n  \nbad\n3,4\n");

    assert_eq!(
        outcome.stats,
        ParseStats {
            total_lines: 5,
            blank_lines: 2,
            points_parsed: 2,
            lines_skipped: 1,
        }
    );
    assert!(outcome.has_warnings());
}

#[test]
fn test_outcome_center() {
    let outcome = parse_coordinates("110, -6\n114, -8\n112, -7");

    assert_eq!(outcome.center(), Some(Center::new(112.0, -7.0)));
    assert_eq!(
        outcome.center_or(Center::new(0.0, 0.0)),
        Center::new(112.0, -7.0)
    );
}

#[test]
fn test_outcome_center_fallback() {
    let outcome = parse_coordinates("nothing useful here");

    assert!(outcome.is_empty());
    assert_eq!(outcome.center(), None);
    assert_eq!(
        outcome.center_or(Center::new(106.8, -6.2)),
        Center::new(106.8, -6.2)
    );
}
