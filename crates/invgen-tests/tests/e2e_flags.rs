//! End-to-end tests for the non-list flags of the invgen CLI.

use invgen_tests::fixtures;
use invgen_tests::harness::TestHarness;

#[test]
fn host_flag_prints_empty_object() {
    let harness = TestHarness::new();
    harness.write_inventory("web.yml", fixtures::WEB_TIER);

    let result = harness.run_cli(&["--host", "web1.example.com"]);
    result.assert_success();
    assert_eq!(result.stdout.trim(), "{}");
}

#[test]
fn version_flag_prints_name_and_version() {
    let harness = TestHarness::new();
    let result = harness.run_cli(&["--version"]);
    result.assert_success();
    assert!(
        result.stdout.trim().starts_with("invgen v"),
        "{}",
        result.stdout
    );
}

#[test]
fn version_wins_over_list() {
    let harness = TestHarness::new();
    let result = harness.run_cli(&["-V", "--list"]);
    result.assert_success();
    assert!(result.stdout.trim().starts_with("invgen v"));
}

#[test]
fn verbose_logs_to_stderr_only() {
    let harness = TestHarness::new();
    harness.write_inventory("racks.yml", fixtures::RACKS);
    let dir = harness.path().to_str().unwrap().to_string();

    let quiet = harness.run_cli(&["--list", "--inventory-dir", &dir]);
    let verbose = harness.run_cli(&["--list", "--inventory-dir", &dir, "-v"]);
    quiet.assert_success();
    verbose.assert_success();

    assert_eq!(quiet.json(), verbose.json());
    assert!(verbose.stderr.contains("list flag found"), "{}", verbose.stderr);
}

#[test]
fn no_action_is_a_usage_error() {
    let harness = TestHarness::new();
    let result = harness.run_cli(&["--verbose"]);
    result.assert_failure();
}

#[test]
fn missing_inventory_dir_fails() {
    let harness = TestHarness::new();
    let missing = harness.path().join("missing");
    let result = harness.run_cli(&["--list", "--inventory-dir", missing.to_str().unwrap()]);
    result.assert_failure();
    assert!(result.stderr.contains("not a directory"), "{}", result.stderr);
}
