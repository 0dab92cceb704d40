//! Parse outcome and statistics for coordinate text
//!
//! The outcome is recomputed from scratch on every parse; nothing here is
//! updated incrementally.

use serde::Serialize;

use crate::models::{Center, Point, SkippedLine};

/// Parsed points with the diagnostics for lines that failed
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParseOutcome {
    /// Successfully parsed points, in input order
    pub points: Vec<Point>,

    /// Malformed lines, in input order
    pub skipped: Vec<SkippedLine>,

    pub stats: ParseStats,
}

impl ParseOutcome {
    /// Mean position of all points, or `None` when nothing parsed
    pub fn center(&self) -> Option<Center> {
        Center::mean_of(&self.points)
    }

    /// Mean position of all points, or `fallback` when nothing parsed
    pub fn center_or(&self, fallback: Center) -> Center {
        self.center().unwrap_or(fallback)
    }

    /// True if any line was skipped
    pub fn has_warnings(&self) -> bool {
        !self.skipped.is_empty()
    }

    /// True if no point was parsed
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Line counts for a single parse
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParseStats {
    /// Number of lines in the input
    pub total_lines: usize,

    /// Lines that were empty after trimming
    pub blank_lines: usize,

    pub points_parsed: usize,

    pub lines_skipped: usize,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines that contained anything besides whitespace
    pub fn non_blank_lines(&self) -> usize {
        self.total_lines - self.blank_lines
    }

    /// Percentage of non-blank lines that parsed into points
    pub fn success_rate(&self) -> f64 {
        let non_blank = self.non_blank_lines();
        if non_blank == 0 {
            0.0
        } else {
            (self.points_parsed as f64 / non_blank as f64) * 100.0
        }
    }

    /// True if no line was skipped
    pub fn is_clean(&self) -> bool {
        self.lines_skipped == 0
    }
}
