//! Unused-key detector.
//!
//! For every key in the source locale, runs one external text search over
//! the UI sources and reports keys no search hit accounts for. The search
//! only recognizes a key wrapped in quotes or braces, so keys built at
//! runtime show up as unused; the resulting `unused.txt` is a review list,
//! and feeding it to `remove` unreviewed is the operator's call.

use crate::commands::StoreArgs;
use crate::error::CliError;
use crate::search::{KeySearch, SearchOutcome};
use crate::utils::{helpers, ui};
use clap::Parser;
use std::path::PathBuf;

/// Arguments for the unused command.
#[derive(Debug, Parser)]
pub struct UnusedArgs {
    #[command(flatten)]
    pub store: StoreArgs,

    /// Root of the codebase to search for key references.
    #[arg(long, default_value = "..")]
    pub root: PathBuf,

    /// rg-compatible search tool to invoke, one process per key.
    #[arg(long, default_value = "rg")]
    pub search_tool: String,

    /// Where to write the unused-key list.
    #[arg(long, default_value = "unused.txt")]
    pub report: PathBuf,
}

/// Run the unused command.
pub fn run_unused(args: UnusedArgs) -> Result<(), CliError> {
    let store = args.store.open()?;
    let source = store.load_source()?;

    ui::print_unused_header();

    let search = KeySearch::new(args.search_tool.as_str(), &args.root, &args.store.strings_dir);

    let pb = ui::create_progress_bar(source.entries.len() as u64, "Searching keys...");
    let mut unused: Vec<String> = Vec::new();

    for key in source.entries.keys() {
        pb.set_message(format!("Searching {key}"));

        match search.run(key)? {
            SearchOutcome::Found => pb.suspend(|| ui::print_key_used(key)),
            SearchOutcome::NoMatches => {
                pb.suspend(|| ui::print_key_unused(key));
                unused.push(key.clone());
            },
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    helpers::write_report_lines(&args.report, &unused)?;
    ui::print_unused_summary(&unused, &args.report);

    Ok(())
}
