//! Data models for coordinate parsing
//!
//! This module contains the point records produced by the coordinate parser,
//! the diagnostics recorded for lines that could not be parsed, and the
//! map-view center derived from a set of points.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Point Record
// =============================================================================

/// A parsed (longitude, latitude, label) triple derived from one input line
///
/// Points are immutable once constructed and always carry two finite
/// coordinates. No range enforcement is applied: values outside
/// [-180, 180] / [-90, 90] are kept as entered.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Point {
    longitude: f64,
    latitude: f64,
    label: String,
}

impl Point {
    /// Create a new point, rejecting non-finite coordinates
    pub fn new(longitude: f64, latitude: f64, label: impl Into<String>) -> Result<Self> {
        if !longitude.is_finite() {
            return Err(Error::data_validation(format!(
                "Longitude must be finite, got {}",
                longitude
            )));
        }
        if !latitude.is_finite() {
            return Err(Error::data_validation(format!(
                "Latitude must be finite, got {}",
                latitude
            )));
        }

        Ok(Self {
            longitude,
            latitude,
            label: label.into(),
        })
    }

    /// Build a point from coordinates the caller has already checked
    pub(crate) fn from_finite(longitude: f64, latitude: f64, label: String) -> Self {
        debug_assert!(longitude.is_finite() && latitude.is_finite());
        Self {
            longitude,
            latitude,
            label,
        }
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (lon {}, lat {})",
            self.label, self.longitude, self.latitude
        )
    }
}

// =============================================================================
// Diagnostics
// =============================================================================

/// Coordinate axis, used to say which field of a line was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Longitude,
    Latitude,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Longitude => write!(f, "longitude"),
            Axis::Latitude => write!(f, "latitude"),
        }
    }
}

/// Why a line was classified as malformed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MalformedReason {
    /// Fewer than two non-empty fields after splitting
    TooFewFields { found: usize },

    /// Field is not a number
    InvalidNumber { axis: Axis, value: String },

    /// Field is a number but NaN or infinite
    NonFinite { axis: Axis, value: String },
}

impl fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedReason::TooFewFields { found } => {
                write!(f, "expected at least 2 fields, found {}", found)
            }
            MalformedReason::InvalidNumber { axis, value } => {
                write!(f, "{} '{}' is not a number", axis, value)
            }
            MalformedReason::NonFinite { axis, value } => {
                write!(f, "{} '{}' is not finite", axis, value)
            }
        }
    }
}

/// Diagnostic for an input line that failed to parse
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedLine {
    /// 1-based position of the line in the raw input
    pub line_number: usize,

    /// The line as entered, with surrounding whitespace trimmed
    pub text: String,

    pub reason: MalformedReason,
}

impl fmt::Display for SkippedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "line {}: {} ({})",
            self.line_number, self.text, self.reason
        )
    }
}

// =============================================================================
// Map-view Center
// =============================================================================

/// Default map-view center, in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Center {
    pub longitude: f64,
    pub latitude: f64,
}

impl Center {
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }

    /// Arithmetic mean of longitude and latitude, or `None` for no points
    pub fn mean_of(points: &[Point]) -> Option<Self> {
        if points.is_empty() {
            return None;
        }

        // Running mean: stays finite for finite inputs near f64::MAX
        let (longitude, latitude) =
            points
                .iter()
                .enumerate()
                .fold((0.0, 0.0), |(lon, lat), (i, p)| {
                    let n = (i + 1) as f64;
                    (
                        lon + (p.longitude() - lon) / n,
                        lat + (p.latitude() - lat) / n,
                    )
                });

        Some(Self::new(longitude, latitude))
    }

    pub fn is_finite(&self) -> bool {
        self.longitude.is_finite() && self.latitude.is_finite()
    }
}

impl Default for Center {
    fn default() -> Self {
        let (longitude, latitude) = crate::constants::FALLBACK_CENTER;
        Self::new(longitude, latitude)
    }
}

impl fmt::Display for Center {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.longitude, self.latitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_rejects_non_finite() {
        assert!(Point::new(f64::NAN, 0.0, "a").is_err());
        assert!(Point::new(0.0, f64::INFINITY, "a").is_err());
        assert!(Point::new(f64::NEG_INFINITY, 0.0, "a").is_err());
    }

    #[test]
    fn test_point_keeps_out_of_range_values() {
        let point = Point::new(500.0, -120.0, "far away").unwrap();
        assert_eq!(point.longitude(), 500.0);
        assert_eq!(point.latitude(), -120.0);
        assert_eq!(point.label(), "far away");
    }

    #[test]
    fn test_center_mean() {
        let points = vec![
            Point::new(112.0, -7.0, "a").unwrap(),
            Point::new(114.0, -9.0, "b").unwrap(),
        ];
        let center = Center::mean_of(&points).unwrap();
        assert_eq!(center, Center::new(113.0, -8.0));
    }

    #[test]
    fn test_center_mean_near_f64_max() {
        let points = vec![
            Point::new(1e308, 1e308, "a").unwrap(),
            Point::new(1e308, 1e308, "b").unwrap(),
            Point::new(f64::MAX, f64::MAX, "c").unwrap(),
        ];
        let center = Center::mean_of(&points).unwrap();

        assert!(center.is_finite());
        assert!(center.longitude > 1e308);
        assert!(center.latitude > 1e308);
    }

    #[test]
    fn test_center_of_nothing() {
        assert!(Center::mean_of(&[]).is_none());
        assert_eq!(Center::default(), Center::new(112.7368, -7.2575));
    }

    #[test]
    fn test_skipped_line_display() {
        let skipped = SkippedLine {
            line_number: 2,
            text: "abc, def".to_string(),
            reason: MalformedReason::InvalidNumber {
                axis: Axis::Longitude,
                value: "abc".to_string(),
            },
        };
        assert_eq!(
            skipped.to_string(),
            "line 2: abc, def (longitude 'abc' is not a number)"
        );
    }

    #[test]
    fn test_point_serializes_flat() {
        let point = Point::new(1.5, -2.5, "A").unwrap();
        let json = serde_json::to_value(&point).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"longitude": 1.5, "latitude": -2.5, "label": "A"})
        );
    }
}
