//! Single-line parsing for coordinate text
//!
//! A line holds a longitude, a latitude and an optional label separated by
//! commas or semicolons. Empty fields are ignored so trailing separators are
//! tolerated.

use crate::constants::{ALT_FIELD_SEPARATOR, FIELD_SEPARATOR, MIN_FIELDS};
use crate::models::{Axis, MalformedReason};

/// Fields extracted from a well-formed coordinate line
#[derive(Debug, Clone, PartialEq)]
pub struct LineFields {
    pub longitude: f64,
    pub latitude: f64,

    /// Third field, if the line has one
    pub label: Option<String>,
}

/// Split a line into its trimmed, non-empty fields
///
/// Semicolons are treated exactly like commas.
pub fn split_fields(line: &str) -> Vec<&str> {
    line.split([FIELD_SEPARATOR, ALT_FIELD_SEPARATOR])
        .map(str::trim)
        .filter(|field| !field.is_empty())
        .collect()
}

/// Parse one non-blank line into coordinates and an optional label
///
/// Fields beyond the third are ignored.
pub fn parse_line(line: &str) -> Result<LineFields, MalformedReason> {
    let fields = split_fields(line);

    if fields.len() < MIN_FIELDS {
        return Err(MalformedReason::TooFewFields {
            found: fields.len(),
        });
    }

    let longitude = parse_coordinate(fields[0], Axis::Longitude)?;
    let latitude = parse_coordinate(fields[1], Axis::Latitude)?;
    let label = fields.get(2).map(|label| label.to_string());

    Ok(LineFields {
        longitude,
        latitude,
        label,
    })
}

/// Parse a single field as a finite coordinate value
pub fn parse_coordinate(field: &str, axis: Axis) -> Result<f64, MalformedReason> {
    let value = field
        .parse::<f64>()
        .map_err(|_| MalformedReason::InvalidNumber {
            axis,
            value: field.to_string(),
        })?;

    if !value.is_finite() {
        return Err(MalformedReason::NonFinite {
            axis,
            value: field.to_string(),
        });
    }

    Ok(value)
}
