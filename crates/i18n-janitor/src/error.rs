//! CLI error types using miette diagnostics.

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
pub enum CliError {
    #[error(transparent)]
    #[diagnostic(code(janitor::store))]
    Store(#[from] locale_store::StoreError),

    #[error("failed to read key list {path}")]
    #[diagnostic(
        code(janitor::key_list),
        help("run `i18n-janitor unused` first to produce the key list")
    )]
    KeyList {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("search tool '{tool}' could not be spawned")]
    #[diagnostic(
        code(janitor::search::spawn),
        help("install ripgrep or point --search-tool at an rg-compatible binary")
    )]
    SearchSpawn {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    #[error("search for key '{key}' failed ({status})")]
    #[diagnostic(
        code(janitor::search::failed),
        help("search tool stderr:\n{stderr}")
    )]
    SearchFailed {
        key: String,
        status: String,
        stderr: String,
    },

    #[error("aborted: operator declined the confirmation prompt")]
    #[diagnostic(code(janitor::prune::aborted))]
    Aborted,

    #[error("IO error: {0}")]
    #[diagnostic(code(janitor::io))]
    Io(#[from] std::io::Error),
}
