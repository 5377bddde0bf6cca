//! Terminal front end: text rendering and, behind the `cli` feature, the clap CLI.

#[cfg(feature = "cli")]
pub mod cli;
pub mod render;
