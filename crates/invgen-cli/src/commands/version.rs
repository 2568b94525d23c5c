//! Version command implementation
//!
//! Prints the fixed inventory script name and version.

use anyhow::Result;
use std::process::ExitCode;

/// Name reported by `--version`.
pub const INVENTORY_SCRIPT_NAME: &str = "invgen";

/// Returns the version line, e.g. `invgen v0.1.0`.
pub fn version_string() -> String {
    format!("{} v{}", INVENTORY_SCRIPT_NAME, env!("CARGO_PKG_VERSION"))
}

/// Run the version command.
pub fn run() -> Result<ExitCode> {
    println!("{}", version_string());
    Ok(ExitCode::SUCCESS)
}
