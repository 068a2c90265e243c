use crate::error::CliError;
use clap::Args;
use locale_store::LocaleStore;
use std::path::PathBuf;

/// Arguments locating the locale store, shared by every subcommand.
///
/// The defaults match the layout the tool grew up with: it is run from a
/// `scripts` directory next to `src/strings`, with `en-us.json` as the
/// source locale.
#[derive(Args, Clone, Debug)]
pub struct StoreArgs {
    /// Directory holding the per-locale JSON files.
    #[arg(long, default_value = "../src/strings")]
    pub strings_dir: PathBuf,

    /// Filename of the source locale within the strings directory.
    #[arg(long, default_value = "en-us.json")]
    pub source_locale: String,
}

impl StoreArgs {
    pub fn open(&self) -> Result<LocaleStore, CliError> {
        Ok(LocaleStore::open(&self.strings_dir, self.source_locale.as_str())?)
    }
}
