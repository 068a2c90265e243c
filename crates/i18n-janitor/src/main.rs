use clap::{Parser, Subcommand};
use i18n_janitor::commands::{
    DuplicatesArgs, PruneArgs, RemoveArgs, UnusedArgs, run_duplicates, run_prune, run_remove,
    run_unused,
};
use miette::Result as MietteResult;

#[derive(Parser)]
#[command(name = "i18n-janitor")]
#[command(about = "Maintenance tools for a directory of per-locale JSON string files")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Report values shared by more than one key in the source locale
    Duplicates(DuplicatesArgs),

    /// Find source-locale keys never referenced from the UI sources
    Unused(UnusedArgs),

    /// Remove listed keys from every locale file
    Remove(RemoveArgs),

    /// Drop translations whose keys no longer exist in the source locale
    Prune(PruneArgs),
}

fn main() -> MietteResult<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .color(true)
                .build(),
        )
    }))
    .ok();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Duplicates(args) => run_duplicates(args),
        Commands::Unused(args) => run_unused(args),
        Commands::Remove(args) => run_remove(args),
        Commands::Prune(args) => run_prune(args),
    };

    result.map_err(miette::Report::new)
}
