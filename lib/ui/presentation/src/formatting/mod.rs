//! Shared formatting helpers used by the dashboard and CLI.

mod logs;
mod mapping;
mod numbers;
mod status;

pub use logs::{format_timestamp, level_label, level_tone, log_line};
pub use mapping::{MappingRow, mapping_rows};
pub use numbers::{format_percent, format_thousands};
pub use status::{component_title, status_icon, status_label, status_tone};

/// Semantic colour class; front ends map it onto their own palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Good,
    Caution,
    Bad,
    Accent,
    Muted,
}
