//! Duplicate-value finder.
//!
//! Reads only the source locale and reports every value held by more than
//! one key. Duplicated values are findings for a translator to review, not
//! errors; no locale file is mutated.

use crate::commands::StoreArgs;
use crate::error::CliError;
use crate::utils::{helpers, ui};
use clap::Parser;
use indexmap::IndexMap;
use std::path::PathBuf;

/// Arguments for the duplicates command.
#[derive(Debug, Parser)]
pub struct DuplicatesArgs {
    #[command(flatten)]
    pub store: StoreArgs,

    /// Where to write the duplicate-value report.
    #[arg(long, default_value = "duplicates.txt")]
    pub report: PathBuf,
}

/// Run the duplicates command.
pub fn run_duplicates(args: DuplicatesArgs) -> Result<(), CliError> {
    let store = args.store.open()?;
    let source = store.load_source()?;

    ui::print_duplicates_header();

    let groups = group_by_value(&source.entries);

    let mut lines = Vec::with_capacity(groups.len());
    for (value, keys) in &groups {
        // Report lines are `<value as JSON string>: <keys as JSON array>`.
        let value_json = serde_json::Value::from(value.as_str()).to_string();
        let keys_json = serde_json::Value::from(keys.clone()).to_string();
        ui::print_duplicate_group(&value_json, &keys_json);
        lines.push(format!("{value_json}: {keys_json}"));
    }

    helpers::write_report_lines(&args.report, &lines)?;
    ui::print_duplicates_summary(groups.len(), &args.report);

    Ok(())
}

/// Map each value to the keys holding it, in encounter order, keeping only
/// values shared by at least two keys.
fn group_by_value(entries: &IndexMap<String, String>) -> IndexMap<String, Vec<String>> {
    let mut by_value: IndexMap<String, Vec<String>> = IndexMap::new();
    for (key, value) in entries {
        by_value.entry(value.clone()).or_default().push(key.clone());
    }
    by_value.retain(|_, keys| keys.len() > 1);
    by_value
}
