//! Shared locale-store helper for per-locale JSON string files.
//!
//! A locale store is a directory of flat `key -> string` JSON files, one per
//! locale, with one file designated the source locale. Every tool that
//! rewrites such a file must round-trip it faithfully: insertion order kept,
//! the indent width the file already uses (2 or 4 spaces) re-detected rather
//! than configured, non-ASCII characters written raw, and a trailing newline.
//! This crate owns that convention so the command-line tools don't each grow
//! their own slightly different copy of it.

mod error;
mod indent;
mod store;

pub use error::StoreError;
pub use indent::IndentWidth;
pub use store::{LocaleFile, LocaleStore};
