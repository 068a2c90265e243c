//! Orphaned-translation pruner.
//!
//! Clips every non-source locale file to the source locale's key set. This
//! is the one destructive batch operation in the tool, so it lists the files
//! it is about to rewrite and waits for operator confirmation first. The
//! source locale itself is never touched.

use crate::commands::StoreArgs;
use crate::error::CliError;
use crate::utils::{helpers, ui};
use clap::Parser;
use indexmap::{IndexMap, IndexSet};
use locale_store::LocaleFile;
use std::collections::HashSet;
use std::path::PathBuf;

/// Arguments for the prune command.
#[derive(Debug, Parser)]
pub struct PruneArgs {
    #[command(flatten)]
    pub store: StoreArgs,

    /// Where to write the dropped-key report.
    #[arg(long, default_value = "missing.txt")]
    pub report: PathBuf,

    /// Skip the interactive confirmation prompt.
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Show what would be dropped without rewriting anything.
    #[arg(long)]
    pub dry_run: bool,
}

/// Run the prune command.
pub fn run_prune(args: PruneArgs) -> Result<(), CliError> {
    let store = args.store.open()?;
    let source = store.load_source()?;
    let source_keys: HashSet<&str> = source.entries.keys().map(String::as_str).collect();

    ui::print_prune_header();

    let targets = store.other_locale_paths()?;
    ui::print_prune_targets(&targets);

    if !args.dry_run && !args.yes && !ui::confirm("Rewrite these locale files?")? {
        return Err(CliError::Aborted);
    }

    // Each dropped key is reported once, in first-seen order, no matter how
    // many locale files carried it.
    let mut missing: IndexSet<String> = IndexSet::new();

    for path in &targets {
        let mut locale = LocaleFile::load(path)?;
        let before = locale.render()?;

        let dropped = prune_entries(&mut locale.entries, &source_keys);
        missing.extend(dropped.iter().cloned());

        if args.dry_run {
            if !dropped.is_empty() {
                ui::print_diff(&before, &locale.render()?);
            }
            ui::print_would_drop(dropped.len(), &locale.name);
        } else {
            locale.save()?;
            ui::print_dropped(dropped.len(), &locale.name);
        }
    }

    let missing: Vec<String> = missing.into_iter().collect();

    if args.dry_run {
        ui::print_missing_dry_run_summary(&missing);
    } else {
        helpers::write_report_lines(&args.report, &missing)?;
        ui::print_missing_summary(&missing, &args.report);
    }

    Ok(())
}

/// Drop entries whose key is not in the source key set, returning the
/// dropped keys in file order. Kept entries stay in their original order
/// with their values untouched.
fn prune_entries(entries: &mut IndexMap<String, String>, source_keys: &HashSet<&str>) -> Vec<String> {
    let mut dropped = Vec::new();
    entries.retain(|key, _| {
        if source_keys.contains(key.as_str()) {
            true
        } else {
            dropped.push(key.clone());
            false
        }
    });
    dropped
}
