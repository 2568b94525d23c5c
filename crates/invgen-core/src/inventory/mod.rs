//! Inventory types and the builder that folds expanded hosts into groups.
//!
//! The serialized form is what Ansible expects from `--list`:
//!
//! ```json
//! {
//!   "all": {"hosts": [], "vars": {}, "children": ["web"]},
//!   "web": {"hosts": ["web1", "web2"], "vars": {}, "children": []},
//!   "_meta": {"hostvars": {"web1": {}, "web2": {}}}
//! }
//! ```


use indexmap::IndexMap;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use tracing::debug;

use crate::config::{HostDeclaration, RawConfig, VarMap};
use crate::error::{InventoryError, InvgenError};
use crate::merge::merge_configs;
use crate::pattern::resolve_host;

/// Name of the implicit group every declared group hangs off.
pub const ALL_GROUP: &str = "all";

/// Reserved top-level key holding the host variable table.
pub const META_KEY: &str = "_meta";

/// Child listed under `all` when there is nothing to list.
pub const UNGROUPED_GROUP: &str = "ungrouped";

/// One inventory group.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Group {
    /// Member host names in insertion order. Duplicates are kept.
    pub hosts: Vec<String>,
    /// Group variables. No source feeds these yet, so they stay empty.
    pub vars: VarMap,
    /// Child group names.
    pub children: Vec<String>,
}

/// The `_meta` header.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MetaHeader {
    /// Variables of every known host, keyed by concrete host name.
    pub hostvars: IndexMap<String, VarMap>,
}

/// A finished inventory.
#[derive(Debug, Clone, PartialEq)]
pub enum Inventory {
    /// Nothing was declared. Serializes to the fixed placeholder
    /// `{"_meta":{"hostvars":{}},"all":{"children":["ungrouped"]}}`.
    Ungrouped,
    /// Hosts were folded into groups.
    Grouped {
        /// Groups in creation order; `all` comes first.
        groups: IndexMap<String, Group>,
        /// The host variable table.
        meta: MetaHeader,
    },
}

impl Inventory {
    /// The placeholder inventory used when no host is declared anywhere.
    pub fn ungrouped() -> Self {
        Inventory::Ungrouped
    }

    /// Returns true for the placeholder inventory.
    pub fn is_ungrouped(&self) -> bool {
        matches!(self, Inventory::Ungrouped)
    }

    /// Looks up a group by name.
    pub fn group(&self, name: &str) -> Option<&Group> {
        match self {
            Inventory::Ungrouped => None,
            Inventory::Grouped { groups, .. } => groups.get(name),
        }
    }

    /// Group names in creation order.
    pub fn group_names(&self) -> Vec<&str> {
        match self {
            Inventory::Ungrouped => Vec::new(),
            Inventory::Grouped { groups, .. } => groups.keys().map(String::as_str).collect(),
        }
    }

    /// Looks up the merged variables of a host.
    pub fn hostvars(&self, host: &str) -> Option<&VarMap> {
        match self {
            Inventory::Ungrouped => None,
            Inventory::Grouped { meta, .. } => meta.hostvars.get(host),
        }
    }

    /// Number of distinct concrete hosts.
    pub fn host_count(&self) -> usize {
        match self {
            Inventory::Ungrouped => 0,
            Inventory::Grouped { meta, .. } => meta.hostvars.len(),
        }
    }
}

#[derive(Serialize)]
struct UngroupedAll {
    children: [&'static str; 1],
}

impl Serialize for Inventory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Inventory::Ungrouped => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry(META_KEY, &MetaHeader::default())?;
                map.serialize_entry(
                    ALL_GROUP,
                    &UngroupedAll {
                        children: [UNGROUPED_GROUP],
                    },
                )?;
                map.end()
            }
            Inventory::Grouped { groups, meta } => {
                let mut map = serializer.serialize_map(Some(groups.len() + 1))?;
                for (name, group) in groups {
                    map.serialize_entry(name, group)?;
                }
                map.serialize_entry(META_KEY, meta)?;
                map.end()
            }
        }
    }
}

/// Accumulates expanded host records into groups and the meta header.
#[derive(Debug, Clone, Default)]
pub struct InventoryBuilder {
    groups: IndexMap<String, Group>,
    meta: MetaHeader,
}

impl InventoryBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one concrete (pattern-free) host record into the inventory.
    pub fn add_host(&mut self, record: &HostDeclaration) -> Result<(), InventoryError> {
        self.update_meta(record);
        self.update_groups(record)
    }

    fn update_meta(&mut self, record: &HostDeclaration) {
        let vars = self.meta.hostvars.entry(record.host.clone()).or_default();
        if let Some(hostvars) = &record.hostvars {
            for (key, value) in hostvars {
                vars.insert(key.clone(), value.clone());
            }
        }
    }

    fn update_groups(&mut self, record: &HostDeclaration) -> Result<(), InventoryError> {
        self.groups.entry(ALL_GROUP.to_string()).or_default();

        // A host without groups only lands in `_meta`, not even in `all.hosts`.
        let Some(group_names) = &record.groups else {
            return Ok(());
        };

        for name in group_names {
            if name == META_KEY {
                return Err(InventoryError::ReservedGroup {
                    host: record.host.clone(),
                    group: name.clone(),
                });
            }
            if !self.groups.contains_key(name) {
                self.groups.insert(name.clone(), Group::default());
                if let Some(all) = self.groups.get_mut(ALL_GROUP) {
                    if !all.children.contains(name) {
                        all.children.push(name.clone());
                    }
                }
            }
            if let Some(group) = self.groups.get_mut(name) {
                group.hosts.push(record.host.clone());
            }
        }
        Ok(())
    }

    /// Expands a declaration and folds every resulting record.
    pub fn add_declaration(&mut self, declaration: &HostDeclaration) -> Result<(), InventoryError> {
        debug!("processing host entry {:?}", declaration);
        let records = resolve_host(declaration)?;
        debug!(
            "host(s) generated from this host entry: {:?}",
            records.iter().map(|r| r.host.as_str()).collect::<Vec<_>>()
        );
        for record in &records {
            self.add_host(record)?;
        }
        Ok(())
    }

    /// Attaches the meta header and returns the inventory.
    pub fn finish(self) -> Inventory {
        Inventory::Grouped {
            groups: self.groups,
            meta: self.meta,
        }
    }
}

/// Builds the inventory of one (already merged) configuration.
///
/// A configuration with an empty `hosts` list yields [`Inventory::Ungrouped`].
pub fn build_inventory(config: &RawConfig) -> Result<Inventory, InventoryError> {
    debug!("building full inventory from loaded YAML(s)");
    let hosts = config.hosts.as_ref().ok_or(InventoryError::MissingHosts)?;
    if hosts.is_empty() {
        debug!("no host declared, returning ungrouped inventory");
        return Ok(Inventory::ungrouped());
    }

    let mut builder = InventoryBuilder::new();
    for declaration in hosts {
        builder.add_declaration(declaration)?;
    }
    Ok(builder.finish())
}

/// Merges parsed sources in order and builds their inventory.
///
/// Zero sources yield [`Inventory::Ungrouped`].
pub fn build_from_configs(configs: Vec<RawConfig>) -> Result<Inventory, InvgenError> {
    match merge_configs(configs)? {
        None => {
            debug!("no inventory source, returning ungrouped inventory");
            Ok(Inventory::ungrouped())
        }
        Some(merged) => Ok(build_inventory(&merged)?),
    }
}
