//! invgen CLI library
//!
//! Source discovery, YAML loading, logging setup and the command
//! implementations behind the `invgen` binary.

pub mod commands;
pub mod discovery;
pub mod input;
pub mod logging;
