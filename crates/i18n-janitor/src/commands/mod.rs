//! CLI command implementations.

mod common;
mod duplicates;
mod prune;
mod remove;
mod unused;

pub use common::StoreArgs;
pub use duplicates::{DuplicatesArgs, run_duplicates};
pub use prune::{PruneArgs, run_prune};
pub use remove::{RemoveArgs, run_remove};
pub use unused::{UnusedArgs, run_unused};
