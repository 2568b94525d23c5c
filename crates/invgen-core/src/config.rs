//! Host declarations and raw configuration documents.
//!
//! These types mirror what a YAML inventory source contains after
//! deserialization. Only `hosts` is interpreted; every other top-level key is
//! carried through untouched so that merging can concatenate it.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Ordered mapping of variable name to arbitrary value.
pub type VarMap = serde_json::Map<String, Value>;

/// A single entry of the `hosts` list.
///
/// `host` may contain bracketed patterns (`web[1-3]`); once expanded the same
/// type is used for the concrete records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostDeclaration {
    /// Host name, possibly containing pattern occurrences.
    pub host: String,

    /// Groups the host belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub groups: Option<Vec<String>>,

    /// Variables attached to the host.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hostvars: Option<VarMap>,
}

impl HostDeclaration {
    /// Creates a declaration with no groups and no variables.
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            groups: None,
            hostvars: None,
        }
    }

    /// Adds a group membership.
    pub fn group(mut self, group: impl Into<String>) -> Self {
        self.groups.get_or_insert_with(Vec::new).push(group.into());
        self
    }

    /// Sets a host variable.
    pub fn var(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.hostvars
            .get_or_insert_with(VarMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Returns a copy of this declaration under a different host name.
    pub fn with_host(&self, host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            groups: self.groups.clone(),
            hostvars: self.hostvars.clone(),
        }
    }
}

/// One parsed inventory source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawConfig {
    /// Host declarations, in file order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hosts: Option<Vec<HostDeclaration>>,

    /// All other top-level keys.
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl RawConfig {
    /// Creates a configuration holding only the given hosts.
    pub fn with_hosts(hosts: Vec<HostDeclaration>) -> Self {
        Self {
            hosts: Some(hosts),
            extra: IndexMap::new(),
        }
    }

    /// Number of host declarations (before expansion).
    pub fn host_count(&self) -> usize {
        self.hosts.as_ref().map_or(0, Vec::len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_builder_collects_groups_and_vars() {
        let decl = HostDeclaration::new("db1")
            .group("db")
            .group("prod")
            .var("port", 5432)
            .var("role", "primary");

        assert_eq!(decl.groups, Some(vec!["db".to_string(), "prod".to_string()]));
        let vars = decl.hostvars.unwrap();
        assert_eq!(vars["port"], json!(5432));
        assert_eq!(vars["role"], json!("primary"));
    }

    #[test]
    fn test_with_host_keeps_other_fields() {
        let decl = HostDeclaration::new("web[1-2]").group("web").var("env", "prod");
        let concrete = decl.with_host("web1");
        assert_eq!(concrete.host, "web1");
        assert_eq!(concrete.groups, decl.groups);
        assert_eq!(concrete.hostvars, decl.hostvars);
    }

    #[test]
    fn test_deserialize_yaml_with_optional_fields() {
        let yaml = r#"
---
#### YAML inventory file
hosts:
  - host: web1
    groups: [web]
    hostvars:
      env: prod
      ports: [80, 443]
  - host: bare
"#;
        let config: RawConfig = serde_yaml::from_str(yaml).unwrap();
        let hosts = config.hosts.unwrap();
        assert_eq!(hosts.len(), 2);
        assert_eq!(hosts[0].groups, Some(vec!["web".to_string()]));
        assert_eq!(hosts[0].hostvars.as_ref().unwrap()["ports"], json!([80, 443]));
        assert_eq!(hosts[1], HostDeclaration::new("bare"));
    }

    #[test]
    fn test_deserialize_keeps_extra_keys_in_order() {
        let yaml = "zones: [a]\nhosts: []\nracks: [r1, r2]\n";
        let config: RawConfig = serde_yaml::from_str(yaml).unwrap();
        let keys: Vec<&str> = config.extra.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["zones", "racks"]);
        assert_eq!(config.host_count(), 0);
    }

    #[test]
    fn test_missing_hosts_deserializes_as_none() {
        let config: RawConfig = serde_yaml::from_str("other: [1]\n").unwrap();
        assert!(config.hosts.is_none());
    }

    #[test]
    fn test_hostvars_preserve_declaration_order() {
        let yaml = "host: h\nhostvars:\n  zeta: 1\n  alpha: 2\n  mid: 3\n";
        let decl: HostDeclaration = serde_yaml::from_str(yaml).unwrap();
        let keys: Vec<&str> = decl
            .hostvars
            .as_ref()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }
}
