//! CLI command implementations

pub mod host;
pub mod list;
pub mod version;
