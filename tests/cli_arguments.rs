//! Argument and config-file failures: nothing past argument handling runs.

mod common;

use common::*;

#[test]
fn missing_config_file_flag_is_a_usage_error() {
    let env = TestEnv::new();
    let backup = env.write_backup();

    let result = env.run_raw(&["--backup-file", backup.to_str().unwrap()]);

    assert_eq!(result.exit_code, 2, "{}", result.combined_output());
    assert!(result.stderr.contains("--config-file"), "{}", result.stderr);
    assert!(env.workspaces().is_empty());
}

#[test]
fn missing_backup_file_flag_is_a_usage_error() {
    let env = TestEnv::new();
    let config = env.write_config(&valid_config(""));

    let result = env.run_raw(&["--config-file", config.to_str().unwrap()]);

    assert_eq!(result.exit_code, 2, "{}", result.combined_output());
    assert!(result.stderr.contains("--backup-file"), "{}", result.stderr);
}

#[test]
fn nonexistent_config_file_fails() {
    let env = TestEnv::new();
    let backup = env.write_backup();

    let result = env.run(&[
        "--backup-file",
        backup.to_str().unwrap(),
        "--config-file",
        "missing.json",
    ]);

    assert_eq!(result.exit_code, 1);
    assert!(
        result.stderr.contains("config file not found: missing.json"),
        "{}",
        result.stderr
    );
    assert!(env.workspaces().is_empty());
}

#[test]
fn directory_as_config_file_fails() {
    let env = TestEnv::new();
    let backup = env.write_backup();
    let root = env.workspace_root();

    let result = env.run(&[
        "--backup-file",
        backup.to_str().unwrap(),
        "--config-file",
        root.to_str().unwrap(),
    ]);

    assert_eq!(result.exit_code, 1);
    assert!(
        result.stderr.contains("is not a valid file"),
        "{}",
        result.stderr
    );
}

#[test]
fn malformed_config_fails_before_validation() {
    let env = TestEnv::new();
    let backup = env.write_backup();
    let config = env.write_config("{ \"host\": ");

    let result = env.run(&[
        "--backup-file",
        backup.to_str().unwrap(),
        "--config-file",
        config.to_str().unwrap(),
    ]);

    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("invalid JSON"), "{}", result.stderr);
    // No deployment summary: the config never parsed
    assert!(!result.stdout.contains("Deploy given the arguments"));
}

#[test]
fn json_mode_reports_argument_errors_as_an_event() {
    let env = TestEnv::new();
    let backup = env.write_backup();

    let result = env.run(&[
        "--backup-file",
        backup.to_str().unwrap(),
        "--config-file",
        "missing.json",
        "--json",
    ]);

    assert_eq!(result.exit_code, 1);
    let events = result.events();
    assert_eq!(events.len(), 1, "{}", result.stdout);
    assert_eq!(events[0]["event"], "error");
    assert_eq!(events[0]["command"], "rollback");
}

#[test]
fn help_mentions_both_inputs() {
    let env = TestEnv::new();
    let result = env.run_raw(&["--help"]);

    assert!(result.is_success());
    assert!(result.stdout.contains("--backup-file"));
    assert!(result.stdout.contains("--config-file"));
}
