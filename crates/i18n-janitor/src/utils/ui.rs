// CLI output formatting with consistent styling using indicatif and colored.
// Plain println!/eprintln! keeps ANSI passthrough predictable.

use colored::Colorize as _;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, BufRead as _, Write as _};
use std::path::{Path, PathBuf};
use std::time::Duration;

const PB_TICK: Duration = Duration::from_millis(100);

pub fn create_progress_bar(len: u64, msg: &str) -> ProgressBar {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} {msg} [{bar:40.cyan/blue}] {pos}/{len}")
            .unwrap()
            .progress_chars("#>-"),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(PB_TICK);
    pb
}

/// Ask the operator for a yes/no answer on stdin. Anything other than
/// `y`/`yes` counts as no.
pub fn confirm(prompt: &str) -> io::Result<bool> {
    print!("{} [y/N] ", prompt);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    let answer = line.trim().to_ascii_lowercase();
    Ok(answer == "y" || answer == "yes")
}

pub fn print_diff(old: &str, new: &str) {
    use similar::{ChangeTag, TextDiff};

    let diff = TextDiff::from_lines(old, new);

    for (idx, group) in diff.grouped_ops(3).iter().enumerate() {
        if idx > 0 {
            println!("{}", "  ...".dimmed());
        }
        for op in group {
            for change in diff.iter_changes(op) {
                let sign = match change.tag() {
                    ChangeTag::Delete => "-",
                    ChangeTag::Insert => "+",
                    ChangeTag::Equal => " ",
                };
                let line = format!("{} {}", sign, change);
                match change.tag() {
                    ChangeTag::Delete => print!("{}", line.red()),
                    ChangeTag::Insert => print!("{}", line.green()),
                    ChangeTag::Equal => print!("{}", line.dimmed()),
                }
            }
        }
    }
}

// Duplicate-value finder

pub fn print_duplicates_header() {
    println!("{}", "Duplicate Value Finder".dimmed());
}

pub fn print_duplicate_group(value: &str, keys: &str) {
    println!("{} {}", value.cyan(), keys.dimmed());
}

pub fn print_duplicates_summary(groups: usize, report: &Path) {
    println!(
        "{} {} duplicated value(s), report written to {}",
        "Done:".green(),
        groups,
        report.display()
    );
}

// Unused-key detector

pub fn print_unused_header() {
    println!("{}", "Unused Key Detector".dimmed());
}

pub fn print_key_used(key: &str) {
    println!("DONE: {key}");
}

pub fn print_key_unused(key: &str) {
    println!("UNUSED: {key}");
}

pub fn print_unused_summary(unused: &[String], report: &Path) {
    for key in unused {
        println!("  {} {}", "->".dimmed(), key);
    }
    println!(
        "{} {} unused key(s), list written to {}",
        "Done:".green(),
        unused.len(),
        report.display()
    );
}

// Key remover

pub fn print_remove_header() {
    println!("{}", "Key Remover".dimmed());
}

pub fn print_removed(count: usize, locale: &str) {
    println!("{} {} key(s) from {}", "Removed".green(), count, locale.cyan());
}

pub fn print_would_remove(count: usize, locale: &str) {
    println!(
        "{} {} key(s) from {}",
        "Would remove".yellow(),
        count,
        locale.cyan()
    );
}

pub fn print_done() {
    println!("DONE");
}

// Orphaned-translation pruner

pub fn print_prune_header() {
    println!("{}", "Orphaned Translation Pruner".dimmed());
}

pub fn print_prune_targets(targets: &[PathBuf]) {
    println!("{}", "About to rewrite:".dimmed());
    for path in targets {
        println!("  {} {}", "->".dimmed(), path.display());
    }
}

pub fn print_dropped(count: usize, locale: &str) {
    println!("{} {} key(s) from {}", "Dropped".green(), count, locale.cyan());
}

pub fn print_would_drop(count: usize, locale: &str) {
    println!(
        "{} {} key(s) from {}",
        "Would drop".yellow(),
        count,
        locale.cyan()
    );
}

pub fn print_missing_summary(missing: &[String], report: &Path) {
    for key in missing {
        println!("  {} {}", "->".dimmed(), key);
    }
    println!(
        "{} {} orphaned key(s), list written to {}",
        "Done:".green(),
        missing.len(),
        report.display()
    );
}

pub fn print_missing_dry_run_summary(missing: &[String]) {
    for key in missing {
        println!("  {} {}", "->".dimmed(), key);
    }
    println!(
        "{} {} orphaned key(s), nothing written",
        "Dry run:".yellow(),
        missing.len()
    );
}
