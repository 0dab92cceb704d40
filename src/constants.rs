//! Application constants for coordmap
//!
//! Default values, separators and environment variable names used
//! throughout the parser, configuration and CLI.

// =============================================================================
// Parsing
// =============================================================================

/// Field separator after normalization
pub const FIELD_SEPARATOR: char = ',';

/// Alternative separator, rewritten to [`FIELD_SEPARATOR`] before splitting
pub const ALT_FIELD_SEPARATOR: char = ';';

/// Minimum number of non-empty fields for a coordinate line
pub const MIN_FIELDS: usize = 2;

/// Prefix of the synthesized label for points without an explicit one
pub const DEFAULT_LABEL_PREFIX: &str = "Point";

// =============================================================================
// Map view
// =============================================================================

/// Fallback map-view center (longitude, latitude) when no point parsed
pub const FALLBACK_CENTER: (f64, f64) = (112.7368, -7.2575);

/// Built-in sample used when no input is supplied
pub const SAMPLE_INPUT: &str = "112.7368, -7.2575
112.7680, -7.2650
112.7200, -7.2900
112.7500, -7.2500";

// =============================================================================
// Configuration
// =============================================================================

/// Directory name under the platform config dir
pub const CONFIG_DIR_NAME: &str = "coordmap";

/// Config file name
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Environment variable overriding the default label prefix
pub const ENV_LABEL_PREFIX: &str = "COORDMAP_LABEL_PREFIX";

/// Environment variable overriding the fallback center ("lon, lat")
pub const ENV_FALLBACK_CENTER: &str = "COORDMAP_FALLBACK_CENTER";
