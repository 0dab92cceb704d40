//! Coordinate parser for free-form longitude/latitude text
//!
//! Converts a raw multi-line block of text into an ordered list of validated
//! point records, recording a diagnostic for every line that could not be
//! parsed instead of failing.
//!
//! ## Architecture
//!
//! - [`parser`] - Line iteration, default labels and outcome assembly
//! - [`line`] - Field splitting and coordinate parsing for a single line
//! - [`stats`] - Parse outcome and statistics
//!
//! ## Usage
//!
//! ```rust
//! use coordmap::coordinate_parser::parse_coordinates;
//!
//! let outcome = parse_coordinates("112.7368, -7.2575, Titik A\nabc, def");
//!
//! assert_eq!(outcome.points.len(), 1);
//! assert_eq!(outcome.points[0].label(), "Titik A");
//! assert_eq!(outcome.skipped[0].line_number, 2);
//! ```

pub mod line;
pub mod parser;
pub mod stats;

#[cfg(test)]
pub mod tests;

pub use line::{LineFields, parse_line, split_fields};
pub use parser::{CoordinateParser, parse_coordinates};
pub use stats::{ParseOutcome, ParseStats};
