//! Loading of YAML inventory sources.
//!
//! Each discovered file is read and deserialized into a [`RawConfig`]. Errors
//! carry the offending path so a broken file among many is easy to find.

use invgen_core::RawConfig;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Errors that can occur while loading a source.
#[derive(Debug)]
pub enum InputError {
    /// File could not be read.
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// YAML parsing failed.
    YamlParse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputError::FileRead { path, source } => {
                write!(f, "failed to read file '{}': {}", path.display(), source)
            }
            InputError::YamlParse { path, source } => {
                write!(f, "YAML parse error in '{}': {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InputError::FileRead { source, .. } => Some(source),
            InputError::YamlParse { source, .. } => Some(source),
        }
    }
}

/// Parses YAML text into a raw configuration.
pub fn parse_config(content: &str, path: &Path) -> Result<RawConfig, InputError> {
    serde_yaml::from_str(content).map_err(|e| InputError::YamlParse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Loads one inventory file.
///
/// # Example
/// ```no_run
/// use std::path::Path;
/// use invgen_cli::input::load_config;
///
/// let config = load_config(Path::new("inventory.yml")).unwrap();
/// println!("{} host entries", config.host_count());
/// ```
pub fn load_config(path: &Path) -> Result<RawConfig, InputError> {
    debug!("loading file: {}", path.display());
    let content = std::fs::read_to_string(path).map_err(|e| InputError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_config(&content, path)
}

/// Loads every file in order.
pub fn load_configs(paths: &[PathBuf]) -> Result<Vec<RawConfig>, InputError> {
    paths.iter().map(|path| load_config(path)).collect()
}
