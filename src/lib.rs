//! coordmap Library
//!
//! Turns free-form coordinate text, as typed into a map tool's text box,
//! into validated point records ready for display on a map.
//!
//! This library provides tools for:
//! - Parsing `longitude, latitude[, label]` lines separated by commas or semicolons
//! - Reporting every malformed line with its position and the reason it was skipped
//! - Computing a default map-view center from the parsed points
//! - Layered configuration and a small CLI around the parser

pub mod config;
pub mod constants;
pub mod coordinate_parser;
pub mod error;
pub mod models;

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
    pub mod input;
}

// Re-export commonly used types
pub use config::Config;
pub use coordinate_parser::{CoordinateParser, ParseOutcome, ParseStats, parse_coordinates};
pub use error::{Error, Result};
pub use models::{Axis, Center, MalformedReason, Point, SkippedLine};
