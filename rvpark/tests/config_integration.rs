//! Integration tests for the layered configuration.
//!
//! Tests that modify environment variables are marked with `#[serial]` so
//! they never race each other.

use std::env;
use std::fs;
use std::path::PathBuf;

use serial_test::serial;
use tempfile::TempDir;

use rvpark::config::{BookingConfig, Config, ConfigBuilder, ConfigLoader, CONFIG_FILE_NAME};
use rvpark::{CrmService, ErrorKind};

/// RAII guard for setting and restoring environment variables.
struct EnvGuard {
    key: &'static str,
    old_value: Option<String>,
}

impl EnvGuard {
    fn set(key: &'static str, value: &str) -> Self {
        let old_value = env::var(key).ok();
        env::set_var(key, value);
        Self { key, old_value }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match &self.old_value {
            Some(value) => env::set_var(self.key, value),
            None => env::remove_var(self.key),
        }
    }
}

fn write_config(dir: &TempDir, content: &str) {
    fs::write(dir.path().join(CONFIG_FILE_NAME), content).unwrap();
}

#[test]
#[serial]
fn test_defaults_without_file() {
    let dir = TempDir::new().unwrap();

    let config = ConfigBuilder::new()
        .with_data_dir(dir.path())
        .skip_env()
        .build()
        .unwrap();

    assert_eq!(config.database_path(dir.path()), dir.path().join("park.db"));
    assert_eq!(
        config.error_log_path(dir.path()),
        dir.path().join("crm_errors.log")
    );
    assert_eq!(config.busy_timeout().as_millis(), 5000);
    assert!(!config.reject_overlaps());
}

#[test]
#[serial]
fn test_file_values_are_loaded() {
    let dir = TempDir::new().unwrap();
    write_config(
        &dir,
        "database_file: records.db\nbusy_timeout_ms: 250\nbooking:\n  reject_overlaps: true\n",
    );

    let config = ConfigBuilder::new()
        .with_data_dir(dir.path())
        .skip_env()
        .build()
        .unwrap();

    assert_eq!(config.database_path(dir.path()), dir.path().join("records.db"));
    assert_eq!(config.busy_timeout().as_millis(), 250);
    assert!(config.reject_overlaps());
}

#[test]
#[serial]
fn test_env_overrides_file_and_flags_override_env() {
    let dir = TempDir::new().unwrap();
    write_config(&dir, "database_file: file.db\nbooking:\n  reject_overlaps: false\n");
    let _db = EnvGuard::set("RVPARK_DATABASE_FILE", "env.db");
    let _overlaps = EnvGuard::set("RVPARK_REJECT_OVERLAPS", "true");

    let from_env = ConfigBuilder::new()
        .with_data_dir(dir.path())
        .build()
        .unwrap();
    assert_eq!(from_env.database_file, Some(PathBuf::from("env.db")));
    assert!(from_env.reject_overlaps());

    let from_flags = ConfigBuilder::new()
        .with_data_dir(dir.path())
        .with_config(Config {
            booking: Some(BookingConfig {
                reject_overlaps: Some(false),
            }),
            ..Default::default()
        })
        .build()
        .unwrap();
    assert_eq!(from_flags.database_file, Some(PathBuf::from("env.db")));
    assert!(!from_flags.reject_overlaps());
}

#[test]
#[serial]
fn test_bad_env_value_rejected() {
    let dir = TempDir::new().unwrap();
    let _guard = EnvGuard::set("RVPARK_BUSY_TIMEOUT_MS", "later");

    let err = ConfigBuilder::new()
        .with_data_dir(dir.path())
        .build()
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Validation);
}

#[test]
fn test_unknown_keys_rejected() {
    let dir = TempDir::new().unwrap();
    write_config(&dir, "database_file: park.db\nport: 8080\n");

    let err = ConfigLoader::load_file(&ConfigLoader::config_path(dir.path())).unwrap_err();
    assert!(err.to_string().contains("port"));
}

#[test]
#[serial]
fn test_service_honours_configured_overlap_policy() {
    let dir = TempDir::new().unwrap();
    write_config(&dir, "booking:\n  reject_overlaps: true\n");
    let config = ConfigBuilder::new()
        .with_data_dir(dir.path())
        .skip_env()
        .build()
        .unwrap();

    let service = CrmService::from_config(&config, dir.path()).unwrap();
    let customer_id = service
        .create_customer(&rvpark::model::NewCustomer::new("John", "Doe"))
        .into_success()
        .unwrap()
        .customer_id;
    let site_id = service
        .add_site(&rvpark::model::NewSite::new("A1", "Full Hookup", 40.0))
        .into_success()
        .unwrap()
        .site_id;

    assert!(service
        .create_reservation(customer_id, site_id, "2099-06-01", "2099-06-05")
        .is_success());
    let second = service.create_reservation(customer_id, site_id, "2099-06-02", "2099-06-03");
    assert_eq!(second.error_kind(), Some(ErrorKind::Constraint));
}
