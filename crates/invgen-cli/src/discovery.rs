//! Discovery of inventory source files.
//!
//! Either a single file is named explicitly (flag or `ANSIBLE_YAML_INVENTORY`),
//! or a directory tree is scanned for YAML files starting with the inventory
//! header:
//!
//! ```yaml
//! ---
//! #### YAML inventory file
//! ```

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;
use tracing::debug;
use walkdir::WalkDir;

/// Environment variable naming the single inventory file to read.
pub const INVENTORY_FILE_ENV_VAR: &str = "ANSIBLE_YAML_INVENTORY";

/// Marker a file must start with to be picked up by a directory scan.
pub const INVENTORY_FILE_HEADER: &str = "---\n#### YAML inventory file";

/// Number of bytes compared against [`INVENTORY_FILE_HEADER`].
pub const INVENTORY_FILE_HEADER_SIZE: usize = INVENTORY_FILE_HEADER.len();

/// File names eligible for a directory scan.
const INVENTORY_FILE_PATTERN: &str = r"\.ya?ml$";

static INVENTORY_FILE_REGEX: OnceLock<Regex> = OnceLock::new();

fn inventory_file_regex() -> &'static Regex {
    INVENTORY_FILE_REGEX
        .get_or_init(|| Regex::new(INVENTORY_FILE_PATTERN).expect("invalid regex pattern"))
}

/// Errors raised while locating sources.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// The scan root is not a directory.
    #[error("inventory directory '{}' does not exist or is not a directory", .0.display())]
    NotADirectory(PathBuf),

    /// The running executable's location could not be determined.
    #[error("cannot locate the running executable: {0}")]
    CurrentExe(#[source] std::io::Error),

    /// A candidate file could not be read for its header.
    #[error("failed to read header of '{}': {source}", .path.display())]
    HeaderRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Where inventory sources come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InventorySource {
    /// Exactly this file, header not checked.
    File(PathBuf),
    /// Every header-bearing YAML file below this directory.
    Directory(PathBuf),
}

impl InventorySource {
    /// Picks the source from the command-line options.
    ///
    /// An explicit file wins over a directory; without either, the directory
    /// holding the running executable is scanned.
    pub fn from_options(
        file: Option<&Path>,
        dir: Option<&Path>,
    ) -> Result<Self, DiscoveryError> {
        if let Some(file) = file {
            debug!("inventory file given: {}", file.display());
            return Ok(InventorySource::File(file.to_path_buf()));
        }
        match dir {
            Some(dir) => Ok(InventorySource::Directory(dir.to_path_buf())),
            None => default_inventory_dir().map(InventorySource::Directory),
        }
    }
}

/// The directory holding the running executable.
pub fn default_inventory_dir() -> Result<PathBuf, DiscoveryError> {
    let exe = std::env::current_exe().map_err(DiscoveryError::CurrentExe)?;
    let exe = exe.canonicalize().unwrap_or(exe);
    Ok(exe
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(".")))
}

/// Lists the inventory files of a source, in merge order.
pub fn discover(source: &InventorySource) -> Result<Vec<PathBuf>, DiscoveryError> {
    match source {
        InventorySource::File(path) => Ok(vec![path.clone()]),
        InventorySource::Directory(root) => scan_directory(root),
    }
}

/// Recursively collects header-bearing YAML files below `root`.
///
/// Entries are visited sorted by file name, so the result is stable across
/// runs and platforms.
pub fn scan_directory(root: &Path) -> Result<Vec<PathBuf>, DiscoveryError> {
    if !root.is_dir() {
        return Err(DiscoveryError::NotADirectory(root.to_path_buf()));
    }
    debug!("looking for inventory files in {}", root.display());

    let mut inventory_files = Vec::new();
    for entry in WalkDir::new(root)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter()
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                debug!("skipping unreadable entry: {}", e);
                continue;
            }
        };
        if !entry.file_type().is_file() || !is_inventory_file_name(entry.path()) {
            continue;
        }
        let path = entry.path();
        if has_inventory_header(path)? {
            inventory_files.push(path.to_path_buf());
        } else {
            debug!("ignoring {} (no inventory header)", path.display());
        }
    }

    debug!("inventory files found: {:?}", inventory_files);
    Ok(inventory_files)
}

/// Returns true for `.yml` / `.yaml` file names.
pub fn is_inventory_file_name(path: &Path) -> bool {
    path.file_name()
        .map(|name| inventory_file_regex().is_match(&name.to_string_lossy()))
        .unwrap_or(false)
}

/// Returns true if the file starts with [`INVENTORY_FILE_HEADER`].
pub fn has_inventory_header(path: &Path) -> Result<bool, DiscoveryError> {
    let header_error = |source: std::io::Error| DiscoveryError::HeaderRead {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(header_error)?;
    let mut head = Vec::with_capacity(INVENTORY_FILE_HEADER_SIZE);
    file.take(INVENTORY_FILE_HEADER_SIZE as u64)
        .read_to_end(&mut head)
        .map_err(header_error)?;
    Ok(head == INVENTORY_FILE_HEADER.as_bytes())
}
