//! Host command implementation
//!
//! Ansible calls `--host <name>` for per-host variables only when `--list`
//! output lacks a `_meta` section. Ours always has one, so this answers with
//! an empty object whatever the host.

use anyhow::Result;
use serde_json::{Map, Value};
use std::process::ExitCode;
use tracing::debug;

/// Renders the variables of `host`. Always `{}`.
pub fn render(host: &str) -> Result<String> {
    debug!("host vars requested for {}", host);
    Ok(serde_json::to_string(&Value::Object(Map::new()))?)
}

/// Run the host command.
pub fn run(host: &str) -> Result<ExitCode> {
    println!("{}", render(host)?);
    Ok(ExitCode::SUCCESS)
}
