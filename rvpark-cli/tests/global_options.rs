//! Integration tests for global options and environment handling.

mod common;

use common::{days_from_today, TestEnv};
use predicates::prelude::*;

#[test]
fn test_data_dir_from_environment() {
    let env = TestEnv::new();

    env.command_bare()
        .env("RVPARK_DATA_DIR", &env.data_dir)
        .args(["add-customer", "John", "Doe"])
        .assert()
        .success();

    assert!(env.data_dir.join("park.db").exists());
}

#[test]
fn test_flag_overrides_environment_data_dir() {
    let env = TestEnv::new();
    let other = env.path().join("elsewhere");

    env.command()
        .env("RVPARK_DATA_DIR", &other)
        .args(["add-customer", "John", "Doe"])
        .assert()
        .success();

    assert!(env.data_dir.join("park.db").exists());
    assert!(!other.exists());
}

#[test]
fn test_database_file_from_config() {
    let env = TestEnv::new();
    std::fs::create_dir_all(&env.data_dir).unwrap();
    std::fs::write(
        env.data_dir.join("config.yaml"),
        "database_file: records.db\nerror_log: logs/errors.log\n",
    )
    .unwrap();

    env.command()
        .args(["add-customer", "", "Doe"])
        .assert()
        .code(1);

    assert!(env.data_dir.join("records.db").exists());
    assert!(!env.data_dir.join("park.db").exists());
    let log = std::fs::read_to_string(env.data_dir.join("logs/errors.log")).unwrap();
    assert!(log.contains("Failed to create customer: First name is required"));
}

#[test]
fn test_reject_overlaps_from_environment() {
    let env = TestEnv::new();
    let customer_id = env.add_customer("John", "Doe").to_string();
    let site_id = env.add_site("A1", "40").to_string();
    let (check_in, check_out) = (days_from_today(4), days_from_today(6));
    env.run(&["reserve", &customer_id, &site_id, &check_in, &check_out]);

    env.command()
        .env("RVPARK_REJECT_OVERLAPS", "true")
        .args(["reserve", &customer_id, &site_id, &check_in, &check_out])
        .assert()
        .code(3);
}

#[test]
fn test_invalid_config_is_a_configuration_error() {
    let env = TestEnv::new();
    std::fs::create_dir_all(&env.data_dir).unwrap();
    std::fs::write(env.data_dir.join("config.yaml"), "busy_timeout_ms: 0\n").unwrap();

    env.command()
        .arg("list-sites")
        .assert()
        .code(7)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_verbose_reports_data_dir() {
    let env = TestEnv::new();

    env.command()
        .args(["--verbose", "list-sites"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Using data directory"));
}

#[test]
fn test_verbose_and_quiet_conflict() {
    let env = TestEnv::new();

    env.command()
        .args(["--verbose", "--quiet", "list-sites"])
        .assert()
        .failure();
}
