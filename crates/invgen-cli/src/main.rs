//! invgen CLI - Ansible dynamic inventory from YAML host declarations
//!
//! Ansible runs this binary with `--list` (full inventory) or `--host <name>`
//! (per-host variables). Output is JSON on stdout; logs go to stderr.

use clap::{ArgGroup, Parser};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

// Use modules from the library crate
use invgen_cli::discovery::InventorySource;
use invgen_cli::{commands, logging};

const EPILOG: &str = "\
By default the inventory walks the directory containing this executable and
all its subdirectories looking for inventory files. A file whose name ends in
.yml or .yaml and whose first 28 bytes are

    ---
    #### YAML inventory file

is considered an inventory file. Files are merged in file name order.

If the environment variable ANSIBLE_YAML_INVENTORY is set (or --inventory-file
is given), that file is the only one read.";

/// YAML Ansible inventory script loader
#[derive(Parser)]
#[command(name = "invgen")]
#[command(author, about, long_about = None, after_help = EPILOG)]
#[command(disable_version_flag = true)]
#[command(group(
    ArgGroup::new("action")
        .required(true)
        .multiple(true)
        .args(["list", "host", "version"])
))]
struct Cli {
    /// Display all loaded inventory
    #[arg(long)]
    list: bool,

    /// Display vars for specified host
    #[arg(long, value_name = "HOST")]
    host: Option<String>,

    /// Enable verbose mode
    #[arg(short, long)]
    verbose: bool,

    /// Display inventory script version and exit
    #[arg(short = 'V', long)]
    version: bool,

    /// Read only this inventory file instead of scanning for inventory files
    #[arg(long, value_name = "FILE", env = "ANSIBLE_YAML_INVENTORY")]
    inventory_file: Option<PathBuf>,

    /// Directory to scan for inventory files (default: the executable's directory)
    #[arg(long, value_name = "DIR")]
    inventory_dir: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

fn run_list(cli: &Cli) -> anyhow::Result<ExitCode> {
    let source =
        InventorySource::from_options(cli.inventory_file.as_deref(), cli.inventory_dir.as_deref())?;
    commands::list::run(&source, cli.pretty)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = if cli.version {
        debug!("version flag found");
        commands::version::run()
    } else if cli.list {
        debug!("list flag found");
        run_list(&cli)
    } else if let Some(host) = cli.host.as_deref() {
        debug!("host flag found");
        commands::host::run(host)
    } else {
        Ok(ExitCode::SUCCESS)
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_list() {
        let cli = Cli::try_parse_from(["invgen", "--list"]).unwrap();
        assert!(cli.list);
        assert!(!cli.verbose);
        assert!(cli.host.is_none());
    }

    #[test]
    fn test_cli_parses_host() {
        let cli = Cli::try_parse_from(["invgen", "--host", "web1"]).unwrap();
        assert_eq!(cli.host.as_deref(), Some("web1"));
        assert!(!cli.list);
    }

    #[test]
    fn test_cli_parses_short_flags() {
        let cli = Cli::try_parse_from(["invgen", "-V", "-v"]).unwrap();
        assert!(cli.version);
        assert!(cli.verbose);
    }

    #[test]
    fn test_cli_requires_an_action() {
        assert!(Cli::try_parse_from(["invgen"]).is_err());
        assert!(Cli::try_parse_from(["invgen", "--verbose"]).is_err());
    }

    #[test]
    fn test_cli_accepts_several_actions() {
        let cli = Cli::try_parse_from(["invgen", "--list", "--version"]).unwrap();
        assert!(cli.list && cli.version);
    }

    #[test]
    fn test_cli_parses_inventory_dir() {
        let cli =
            Cli::try_parse_from(["invgen", "--list", "--inventory-dir", "/srv/inv", "--pretty"])
                .unwrap();
        assert_eq!(cli.inventory_dir, Some(PathBuf::from("/srv/inv")));
        assert!(cli.pretty);
    }

    #[test]
    fn test_cli_parses_inventory_file_flag() {
        let cli = Cli::try_parse_from(["invgen", "--list", "--inventory-file", "hosts.yml"])
            .unwrap();
        assert_eq!(cli.inventory_file, Some(PathBuf::from("hosts.yml")));
    }
}
