//! Run configuration.

use std::path::{Path, PathBuf};

use crate::domain::Destination;
use crate::files::output_file_name;

/// Default input file, relative to the working directory.
pub const DEFAULT_INPUT: &str = "numbers.txt";

/// Where to read numbers from and where to write the generated lines.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Path to the input file, one number per line.
    pub input: PathBuf,
    /// Directory the output file is written into.
    pub output_dir: PathBuf,
    /// Destination substituted into every line.
    pub destination: Destination,
}

impl RunConfig {
    /// Create a config for the given destination with default paths.
    pub fn for_destination(destination: Destination) -> Self {
        Self {
            destination,
            ..Self::default()
        }
    }

    /// Set a custom input file.
    pub fn with_input(mut self, input: impl Into<PathBuf>) -> Self {
        self.input = input.into();
        self
    }

    /// Set a custom output directory.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Full path of the output file: `<output_dir>/output_<destination>.txt`.
    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(output_file_name(&self.destination))
    }

    /// Get the input file path.
    pub fn input(&self) -> &Path {
        &self.input
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output_dir: PathBuf::from("."),
            destination: Destination::default(),
        }
    }
}
