//! Error types for host expansion, source merging and inventory assembly.

use thiserror::Error;

/// Errors raised while expanding a bracketed host pattern.
///
/// Malformed bracket content never reaches this point: it simply isn't
/// recognised as a pattern. What remains are bounds that match the grammar
/// but cannot be represented.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    /// A bound is not a valid unsigned 64-bit integer.
    #[error("invalid bound '{bound}' in pattern item '{item}' of host '{host}'")]
    InvalidBound {
        /// Host name containing the pattern.
        host: String,
        /// The pattern item (e.g. `1-3`).
        item: String,
        /// The offending bound text.
        bound: String,
    },
}

/// Errors raised while folding hosts into an inventory.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InventoryError {
    /// The merged configuration has no `hosts` list.
    #[error("configuration has no 'hosts' list")]
    MissingHosts,

    /// A host declared membership of a reserved group name.
    #[error("host '{host}' declares reserved group name '{group}'")]
    ReservedGroup {
        /// The declaring host.
        host: String,
        /// The reserved group name.
        group: String,
    },

    /// Pattern expansion failed.
    #[error(transparent)]
    Pattern(#[from] PatternError),
}

/// Errors raised while merging several raw configurations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MergeError {
    /// A top-level key holds something other than a sequence, so it cannot be
    /// extended.
    #[error("top-level key '{key}' of source #{source_index} is not a sequence and cannot be merged")]
    NotASequence {
        /// The top-level key.
        key: String,
        /// Zero-based index of the source holding the bad value.
        source_index: usize,
    },
}

/// Top-level error type for inventory generation.
#[derive(Debug, Error)]
pub enum InvgenError {
    /// Merging sources failed.
    #[error("merge error: {0}")]
    Merge(#[from] MergeError),

    /// Building the inventory failed.
    #[error("inventory error: {0}")]
    Inventory(#[from] InventoryError),
}
