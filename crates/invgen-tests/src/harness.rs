//! Test harness utilities for running the invgen CLI.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::sync::OnceLock;
use tempfile::TempDir;

use invgen_cli::discovery::{INVENTORY_FILE_ENV_VAR, INVENTORY_FILE_HEADER};

/// Result of running the invgen CLI.
#[derive(Debug)]
pub struct CliResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    /// Create a CliResult from a Command Output.
    pub fn from_output(output: Output) -> Self {
        Self {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    /// Assert that the command succeeded.
    pub fn assert_success(&self) {
        assert!(
            self.success,
            "Command failed with exit code {}.\nstdout: {}\nstderr: {}",
            self.exit_code, self.stdout, self.stderr
        );
    }

    /// Assert that the command failed.
    pub fn assert_failure(&self) {
        assert!(
            !self.success,
            "Expected command to fail, but it succeeded.\nstdout: {}",
            self.stdout
        );
    }

    /// Parse stdout as JSON.
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(self.stdout.trim()).unwrap_or_else(|e| {
            panic!("stdout is not JSON ({}):\n{}", e, self.stdout);
        })
    }
}

/// A test harness owning a scratch inventory directory.
pub struct TestHarness {
    /// Directory holding the inventory files of the test.
    pub work_dir: TempDir,
}

impl TestHarness {
    /// Create a new test harness.
    pub fn new() -> Self {
        Self {
            work_dir: TempDir::new().expect("Failed to create work dir"),
        }
    }

    /// Get the working directory path.
    pub fn path(&self) -> &Path {
        self.work_dir.path()
    }

    /// Write a file (header included) that a directory scan will pick up.
    pub fn write_inventory(&self, rel_path: &str, body: &str) -> PathBuf {
        self.write_file(rel_path, &format!("{}\n{}", INVENTORY_FILE_HEADER, body))
    }

    /// Write an arbitrary file below the work directory.
    pub fn write_file(&self, rel_path: &str, content: &str) -> PathBuf {
        let path = self.path().join(rel_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create fixture directory");
        }
        fs::write(&path, content).expect("Failed to write fixture");
        path
    }

    /// Run the invgen CLI with the given arguments.
    ///
    /// `ANSIBLE_YAML_INVENTORY` is cleared so that the caller's environment
    /// cannot redirect discovery.
    pub fn run_cli(&self, args: &[&str]) -> CliResult {
        self.run_cli_with_env(args, None)
    }

    /// Run the invgen CLI with `ANSIBLE_YAML_INVENTORY` set to `inventory_file`.
    pub fn run_cli_with_env(&self, args: &[&str], inventory_file: Option<&Path>) -> CliResult {
        let manifest_path = invgen_manifest_path();

        let mut command = Command::new("cargo");
        command
            .args(["run", "--quiet", "--manifest-path"])
            .arg(&manifest_path)
            .args(["-p", "invgen-cli", "--bin", "invgen", "--"])
            .args(args)
            .current_dir(self.path())
            .env_remove(INVENTORY_FILE_ENV_VAR)
            .env_remove("RUST_LOG");
        if let Some(file) = inventory_file {
            command.env(INVENTORY_FILE_ENV_VAR, file);
        }

        match command.output() {
            Ok(out) => CliResult::from_output(out),
            Err(e) => CliResult {
                success: false,
                exit_code: -1,
                stdout: String::new(),
                stderr: format!("Failed to run CLI: {}", e),
            },
        }
    }

    /// Run `--list` against the work directory.
    pub fn list(&self) -> CliResult {
        let dir = self.path().to_str().expect("non UTF-8 temp dir");
        self.run_cli(&["--list", "--inventory-dir", dir])
    }
}

fn invgen_manifest_path() -> PathBuf {
    static PATH: OnceLock<PathBuf> = OnceLock::new();
    PATH.get_or_init(|| {
        let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        let manifest_path = manifest_dir.join("..").join("..").join("Cargo.toml");
        manifest_path.canonicalize().unwrap_or(manifest_path)
    })
    .clone()
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}
