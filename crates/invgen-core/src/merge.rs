//! Merging of several parsed inventory sources.
//!
//! The first source is the accumulator. Every top-level key of each later
//! source is appended to the accumulator's sequence for that key, so `hosts`
//! lists are concatenated in discovery order. Order matters: it decides which
//! declaration's variables win and the order hosts are appended to groups.

use serde_json::Value;
use tracing::debug;

use crate::config::RawConfig;
use crate::error::MergeError;

/// Merges configurations in the order given.
///
/// Returns `None` for an empty input; a single configuration is returned as is.
pub fn merge_configs(configs: Vec<RawConfig>) -> Result<Option<RawConfig>, MergeError> {
    let mut configs = configs.into_iter();
    let Some(mut merged) = configs.next() else {
        return Ok(None);
    };

    debug!("merging files if needed");
    for (offset, config) in configs.enumerate() {
        merge_into(&mut merged, config, offset + 1)?;
    }
    Ok(Some(merged))
}

fn merge_into(
    merged: &mut RawConfig,
    config: RawConfig,
    source_index: usize,
) -> Result<(), MergeError> {
    if let Some(hosts) = config.hosts {
        debug!("appending {} host entries from source #{}", hosts.len(), source_index);
        merged.hosts.get_or_insert_with(Vec::new).extend(hosts);
    }

    for (key, value) in config.extra {
        let Value::Array(items) = value else {
            return Err(MergeError::NotASequence { key, source_index });
        };
        let slot = merged
            .extra
            .entry(key.clone())
            .or_insert_with(|| Value::Array(Vec::new()));
        match slot {
            Value::Array(existing) => existing.extend(items),
            _ => {
                return Err(MergeError::NotASequence {
                    key,
                    source_index: 0,
                })
            }
        }
    }
    Ok(())
}
