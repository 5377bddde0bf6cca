//! Interactive terminal dashboard for the core migration.

pub mod app;
mod panels;
mod runner;
pub mod worker;

#[cfg(test)]
mod test_support;

pub use app::{App, AppContext, View};
pub use runner::start;
