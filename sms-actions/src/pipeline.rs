//! End-to-end generation run.
//!
//! The whole input is read and validated in memory before the output file
//! is touched, so a failed read never leaves a partial output behind.

use std::fmt;
use std::path::PathBuf;

use tracing::{debug, warn};

use crate::config::RunConfig;
use crate::domain::Destination;
use crate::error::GenerateError;
use crate::files::{read_numbers, write_output};
use crate::format::format_actions;
use crate::validate::filter_valid_numbers;

/// What a successful run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of action lines written.
    pub accepted: usize,
    /// Number of input tokens that were skipped.
    pub rejected: usize,
    /// Path the action lines were written to.
    pub output: PathBuf,
    /// Destination used for every line.
    pub destination: Destination,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Done! Processed {} numbers.", self.accepted)?;
        if self.rejected > 0 {
            writeln!(f, "Skipped {} invalid numbers.", self.rejected)?;
        }
        writeln!(f, "Results saved in {}", self.output.display())?;
        write!(f, "Destination used: {}", self.destination)
    }
}

/// Read, validate, format and write.
pub fn run(config: &RunConfig) -> Result<RunSummary, GenerateError> {
    let destination = &config.destination;
    if destination.breaks_template() {
        warn!(
            destination = destination.as_str(),
            "destination contains a double quote; generated lines will not parse"
        );
    }

    let raw = read_numbers(config.input())?;
    let filtered = filter_valid_numbers(&raw);
    debug!(
        accepted = filtered.valid.len(),
        rejected = filtered.rejected,
        "validated numbers"
    );

    let lines = format_actions(&filtered.valid, destination);
    let output = config.output_path();
    write_output(&output, &lines)?;

    Ok(RunSummary {
        accepted: lines.len(),
        rejected: filtered.rejected,
        output,
        destination: destination.clone(),
    })
}
