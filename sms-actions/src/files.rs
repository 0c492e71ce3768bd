//! Reading numbers from disk and writing generated lines back.

use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;

use crate::domain::{ActionLine, Destination};
use crate::error::GenerateError;

/// Characters that end a line in the input file.
///
/// Besides `\n` this covers lone `\r` (classic Mac endings), the vertical tab
/// and form feed, the ASCII record separators and the Unicode line breaks.
const LINE_BREAKS: [char; 10] = [
    '\n', '\r', '\x0b', '\x0c', '\x1c', '\x1d', '\x1e', '\u{85}', '\u{2028}', '\u{2029}',
];

/// Read raw numbers from a text file, one per line.
///
/// Surrounding whitespace is trimmed from each line and blank lines are
/// dropped, so the validator never sees an empty token from a file.
pub fn read_numbers(path: &Path) -> Result<Vec<String>, GenerateError> {
    let contents = std::fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => GenerateError::MissingInputFile {
            path: path.to_path_buf(),
        },
        _ => GenerateError::Read {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let numbers: Vec<String> = contents
        .split(&LINE_BREAKS[..])
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    debug!(path = %path.display(), count = numbers.len(), "read numbers");
    Ok(numbers)
}

/// Write action lines to a file, replacing any existing contents.
///
/// Lines are joined with `\n` and no trailing newline is added. Creates
/// parent directories if they don't exist.
pub fn write_output(path: &Path, lines: &[ActionLine]) -> Result<(), GenerateError> {
    let write_err = |source| GenerateError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }

    let text = lines
        .iter()
        .map(ActionLine::as_str)
        .collect::<Vec<_>>()
        .join("\n");

    std::fs::write(path, text).map_err(write_err)?;

    debug!(path = %path.display(), count = lines.len(), "wrote action lines");
    Ok(())
}

/// Name of the output file for a destination: `output_<destination>.txt`.
///
/// Characters that would escape the output directory or are invalid in file
/// names are replaced with `_`. The action lines themselves keep the
/// destination unchanged.
pub fn output_file_name(destination: &Destination) -> String {
    format!("output_{}.txt", sanitize_filename(destination.as_str()))
}

fn sanitize_filename(input: &str) -> String {
    input
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' | '\0' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect()
}
