//! Start-up plumbing shared by the `api-service`, `cli` and `tui` binaries.

pub mod logging;
pub mod settings;
