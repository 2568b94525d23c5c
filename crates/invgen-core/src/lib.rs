//! invgen Inventory Core Library
//!
//! This crate turns declarative YAML host lists into an Ansible dynamic
//! inventory. It owns the two parts with real logic: expansion of bracketed
//! numeric host patterns and assembly of the grouped inventory structure.
//!
//! # Overview
//!
//! A source file declares hosts like this:
//!
//! ```yaml
//! ---
//! #### YAML inventory file
//! hosts:
//!   - host: web[1-3].example.com
//!     groups: [web]
//!     hostvars:
//!       http_port: 8080
//! ```
//!
//! - **Pattern expansion**: `web[1-3].example.com` becomes `web1.example.com`,
//!   `web2.example.com` and `web3.example.com`. Items may be single values or
//!   ranges (`[1,3-4]`), and several occurrences in one name form a cross product.
//! - **Merge**: several sources are concatenated key by key, in discovery order.
//! - **Assembly**: expanded hosts are folded into groups, the implicit `all`
//!   group and the `_meta.hostvars` table.
//!
//! # Example
//!
//! ```
//! use invgen_core::{build_inventory, HostDeclaration, RawConfig};
//!
//! let config = RawConfig::with_hosts(vec![
//!     HostDeclaration::new("web[1-2]").group("web"),
//! ]);
//!
//! let inventory = build_inventory(&config).unwrap();
//! let group = inventory.group("web").unwrap();
//! assert_eq!(group.hosts, vec!["web1", "web2"]);
//! ```
//!
//! # Modules
//!
//! - [`config`]: Host declarations and raw configuration documents
//! - [`error`]: Error types for expansion, merge and assembly
//! - [`inventory`]: Inventory types and the builder that folds hosts into groups
//! - [`merge`]: Merging of several raw configurations
//! - [`pattern`]: Bracketed range pattern detection and expansion

pub mod config;
pub mod error;
pub mod inventory;
pub mod merge;
pub mod pattern;

// Re-export commonly used types at the crate root
pub use config::{HostDeclaration, RawConfig, VarMap};
pub use error::{InventoryError, InvgenError, MergeError, PatternError};
pub use inventory::{
    build_from_configs, build_inventory, Group, Inventory, InventoryBuilder, MetaHeader,
    ALL_GROUP, META_KEY, UNGROUPED_GROUP,
};
pub use merge::merge_configs;
pub use pattern::{expand_pattern, expand_range, find_pattern, resolve_host, PatternOccurrence};
