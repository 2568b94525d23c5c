//! invgen End-to-End Test Infrastructure
//!
//! This crate drives the `invgen` binary the way Ansible does and checks the
//! JSON it prints:
//!
//! - **Listing**: directory scans, explicit files, merge order
//! - **Flags**: `--host`, `--version`, verbosity and error reporting
//! - **Expansion properties**: proptest checks of range and pattern expansion
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p invgen-tests
//! ```

pub mod fixtures;
pub mod harness;
