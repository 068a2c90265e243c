//! Key remover.
//!
//! Reads a key list (normally `unused.txt` from the unused command) and
//! removes each listed key from every locale file in the store, the source
//! locale included. Keys already absent are no-ops, so re-running with the
//! same list is safe.

use crate::commands::StoreArgs;
use crate::error::CliError;
use crate::utils::{helpers, ui};
use clap::Parser;
use indexmap::IndexMap;
use locale_store::LocaleFile;
use std::path::PathBuf;

/// Arguments for the remove command.
#[derive(Debug, Parser)]
pub struct RemoveArgs {
    #[command(flatten)]
    pub store: StoreArgs,

    /// Key list to remove, one key per line.
    #[arg(long, default_value = "unused.txt")]
    pub keys: PathBuf,

    /// Show per-file diffs without rewriting anything.
    #[arg(long)]
    pub dry_run: bool,
}

/// Run the remove command.
pub fn run_remove(args: RemoveArgs) -> Result<(), CliError> {
    let store = args.store.open()?;
    let keys = helpers::read_key_list(&args.keys)?;

    ui::print_remove_header();

    for path in store.locale_paths()? {
        let mut locale = LocaleFile::load(&path)?;
        let before = locale.render()?;

        let removed = remove_keys(&mut locale.entries, &keys);

        if args.dry_run {
            if removed > 0 {
                ui::print_diff(&before, &locale.render()?);
            }
            ui::print_would_remove(removed, &locale.name);
        } else {
            locale.save()?;
            ui::print_removed(removed, &locale.name);
        }
    }

    ui::print_done();
    Ok(())
}

/// Remove each listed key if present, returning how many were dropped.
fn remove_keys(entries: &mut IndexMap<String, String>, keys: &[String]) -> usize {
    let mut removed = 0;
    for key in keys {
        if entries.shift_remove(key).is_some() {
            removed += 1;
        }
    }
    removed
}
