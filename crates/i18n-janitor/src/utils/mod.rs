pub mod helpers;
pub mod ui;
