//! List command implementation
//!
//! Discovers inventory sources, merges them and prints the full inventory as
//! JSON for Ansible.

use anyhow::{Context, Result};
use invgen_core::{build_from_configs, Inventory};
use std::process::ExitCode;
use tracing::{debug, info};

use crate::discovery::{discover, InventorySource};
use crate::input::load_configs;

/// Builds the inventory of a source without printing it.
pub fn collect(source: &InventorySource) -> Result<Inventory> {
    debug!("listing all hosts");
    let files = discover(source).context("Failed to discover inventory files")?;
    info!("{} inventory file(s) found", files.len());

    let configs = load_configs(&files).context("Failed to load inventory files")?;
    let inventory = build_from_configs(configs).context("Failed to build inventory")?;
    debug!("inventory found: {:?}", inventory);
    Ok(inventory)
}

/// Serializes an inventory as compact or pretty JSON.
pub fn render(inventory: &Inventory, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(inventory)?
    } else {
        serde_json::to_string(inventory)?
    };
    Ok(json)
}

/// Run the list command
///
/// # Arguments
/// * `source` - Where to look for inventory files
/// * `pretty` - Whether to pretty-print the JSON
///
/// # Returns
/// Exit code: 0 on success
pub fn run(source: &InventorySource, pretty: bool) -> Result<ExitCode> {
    let inventory = collect(source)?;
    println!("{}", render(&inventory, pretty)?);
    Ok(ExitCode::SUCCESS)
}
