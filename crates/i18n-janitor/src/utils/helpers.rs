//! Small filesystem helpers shared across commands.

use crate::error::CliError;
use fs_err as fs;
use std::path::Path;

/// Read a key list written by a previous run: one key per line, surrounding
/// whitespace stripped, blank lines skipped.
pub fn read_key_list(path: &Path) -> Result<Vec<String>, CliError> {
    let content = fs::read_to_string(path).map_err(|source| CliError::KeyList {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect())
}

/// Write a report file, one line per entry, overwriting any previous run.
pub fn write_report_lines<S: AsRef<str>>(path: &Path, lines: &[S]) -> Result<(), CliError> {
    let mut out = String::new();
    for line in lines {
        out.push_str(line.as_ref());
        out.push('\n');
    }
    fs::write(path, out)?;
    Ok(())
}
