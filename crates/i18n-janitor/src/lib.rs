//! Library surface for the `i18n-janitor` binary.

pub mod commands;
pub mod error;
pub mod search;
pub mod utils;
