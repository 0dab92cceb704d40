//! Input resolution for CLI commands
//!
//! Decides where the coordinate text comes from and reads it.

use crate::cli::args::InputArgs;
use crate::constants::SAMPLE_INPUT;
use crate::{Error, Result};
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};
use tracing::info;

/// Source of the coordinate text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Text passed with --text
    Inline(String),
    /// A file on disk
    File(PathBuf),
    /// Standard input
    Stdin,
    /// The built-in sample
    Sample,
}

impl InputSource {
    /// Resolve the source from CLI arguments
    pub fn from_args(args: &InputArgs) -> Self {
        Self::resolve(args, io::stdin().is_terminal())
    }

    /// Resolve the source, given whether stdin is an interactive terminal
    pub fn resolve(args: &InputArgs, stdin_is_terminal: bool) -> Self {
        if let Some(text) = &args.text {
            return Self::Inline(text.clone());
        }

        match &args.input {
            Some(path) if path == Path::new("-") => Self::Stdin,
            Some(path) => Self::File(path.clone()),
            None if !stdin_is_terminal => Self::Stdin,
            None => Self::Sample,
        }
    }

    /// Short description for log messages
    pub fn describe(&self) -> String {
        match self {
            Self::Inline(_) => "inline text".to_string(),
            Self::File(path) => path.display().to_string(),
            Self::Stdin => "standard input".to_string(),
            Self::Sample => "built-in sample".to_string(),
        }
    }
}

/// Read the full coordinate text from a source
pub fn read_input(source: &InputSource) -> Result<String> {
    info!("Reading coordinates from {}", source.describe());

    match source {
        InputSource::Inline(text) => Ok(text.clone()),
        InputSource::File(path) => {
            if !path.exists() {
                return Err(Error::configuration(format!(
                    "Input file does not exist: {}",
                    path.display()
                )));
            }
            std::fs::read_to_string(path).map_err(|e| {
                Error::io(format!("Failed to read input file {}", path.display()), e)
            })
        }
        InputSource::Stdin => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .map_err(|e| Error::io("Failed to read standard input", e))?;
            Ok(text)
        }
        InputSource::Sample => Ok(SAMPLE_INPUT.to_string()),
    }
}
