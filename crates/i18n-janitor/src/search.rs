//! One-shot external text search for a single translation key.
//!
//! Each lookup spawns one search process and waits for it, so a run over the
//! whole source locale costs one process per key. The exit status is mapped
//! to a tagged outcome: "no matches" is a result, any other failure is an
//! error. Conflating the two would let a missing or broken search tool mark
//! every key as unused.

use crate::error::CliError;
use std::path::{Path, PathBuf};
use std::process::Command;

/// File extensions the UI sources live in.
pub const UI_EXTENSIONS: &[&str] = &["js", "jsx", "ts", "tsx", "html"];

/// What a single key lookup found.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SearchOutcome {
    Found,
    NoMatches,
}

/// An rg-compatible search over the codebase, configured once and run per key.
#[derive(Clone, Debug)]
pub struct KeySearch {
    tool: String,
    root: PathBuf,
    exclude_glob: Option<String>,
}

impl KeySearch {
    /// Configure a search rooted at `root`, skipping the locale-file
    /// directory so keys don't match their own definitions.
    pub fn new(tool: impl Into<String>, root: impl Into<PathBuf>, strings_dir: &Path) -> Self {
        let exclude_glob = strings_dir
            .file_name()
            .and_then(|name| name.to_str())
            .map(|name| format!("!**/{name}/**"));

        Self {
            tool: tool.into(),
            root: root.into(),
            exclude_glob,
        }
    }

    /// The fixed-string patterns that count as a reference to `key`:
    /// the key wrapped in double quotes, single quotes, or curly braces.
    ///
    /// Keys assembled at runtime (concatenation, dynamic lookup) match none
    /// of these and are reported as unused; the list is meant for operator
    /// review, not blind deletion.
    fn patterns(key: &str) -> [String; 3] {
        [
            format!("\"{key}\""),
            format!("'{key}'"),
            format!("{{{key}}}"),
        ]
    }

    /// Search for one key, spawning the tool and waiting for it.
    pub fn run(&self, key: &str) -> Result<SearchOutcome, CliError> {
        let mut cmd = Command::new(&self.tool);
        cmd.arg("--quiet").arg("--fixed-strings");
        for pattern in Self::patterns(key) {
            cmd.arg("-e").arg(pattern);
        }
        for ext in UI_EXTENSIONS {
            cmd.arg("--glob").arg(format!("*.{ext}"));
        }
        if let Some(exclude) = &self.exclude_glob {
            cmd.arg("--glob").arg(exclude);
        }
        cmd.arg(&self.root);

        let output = cmd.output().map_err(|source| CliError::SearchSpawn {
            tool: self.tool.clone(),
            source,
        })?;

        // rg exit codes: 0 = matches, 1 = no matches, anything else = error.
        match output.status.code() {
            Some(0) => Ok(SearchOutcome::Found),
            Some(1) => Ok(SearchOutcome::NoMatches),
            _ => Err(CliError::SearchFailed {
                key: key.to_string(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            }),
        }
    }
}
