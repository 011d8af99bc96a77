//! Unit tests for layered configuration resolution
//!
//! Covers priority order (CLI → ENV → TOML → default), TOML loading,
//! and construction-time validation of the resolved config.
//!
//! Note: Uses serial_test crate to prevent ENV variable race conditions.
//! Tests that manipulate DLP_ID, INPUT_DIR, OUTPUT_DIR, USER_EMAIL or
//! VALIDATION_POLICY are marked with #[serial].

use poc_common::config::{
    ConfigOverrides, ConfigResolver, LoggingConfig, TomlConfig, DEFAULT_INPUT_DIR,
    DEFAULT_OUTPUT_DIR,
};
use poc_common::{Error, ValidationPolicy};
use serial_test::serial;
use std::env;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn clear_env() {
    for name in ["DLP_ID", "INPUT_DIR", "OUTPUT_DIR", "USER_EMAIL", "VALIDATION_POLICY"] {
        env::remove_var(name);
    }
}

fn toml_with_dlp(dlp_id: u64) -> TomlConfig {
    TomlConfig {
        dlp_id: Some(dlp_id),
        input_dir: Some(PathBuf::from("/toml/input")),
        output_dir: Some(PathBuf::from("/toml/output")),
        user_email: None,
        policy: None,
        logging: LoggingConfig::default(),
    }
}

#[test]
#[serial]
fn test_cli_overrides_env_and_toml() {
    clear_env();
    env::set_var("DLP_ID", "2");
    env::set_var("INPUT_DIR", "/env/input");

    let cli = ConfigOverrides {
        dlp_id: Some(1),
        input_dir: Some(PathBuf::from("/cli/input")),
        ..Default::default()
    };

    let config = ConfigResolver::new().resolve(&cli, &toml_with_dlp(3)).unwrap();
    assert_eq!(config.dlp_id(), 1);
    assert_eq!(config.input_dir(), Path::new("/cli/input"));
    // Not on the CLI or in ENV, so TOML wins
    assert_eq!(config.output_dir(), Path::new("/toml/output"));

    clear_env();
}

#[test]
#[serial]
fn test_env_overrides_toml() {
    clear_env();
    env::set_var("DLP_ID", "2");
    env::set_var("OUTPUT_DIR", "/env/output");
    env::set_var("VALIDATION_POLICY", "extension");
    env::set_var("USER_EMAIL", "env@example.com");

    let config = ConfigResolver::new()
        .resolve(&ConfigOverrides::default(), &toml_with_dlp(3))
        .unwrap();
    assert_eq!(config.dlp_id(), 2);
    assert_eq!(config.output_dir(), Path::new("/env/output"));
    assert_eq!(config.policy(), ValidationPolicy::Extension);
    assert_eq!(config.user_email(), Some("env@example.com"));

    clear_env();
}

#[test]
#[serial]
fn test_defaults_when_only_dlp_id_known() {
    clear_env();

    let toml = TomlConfig {
        dlp_id: Some(1234),
        ..Default::default()
    };
    let config = ConfigResolver::new()
        .resolve(&ConfigOverrides::default(), &toml)
        .unwrap();

    assert_eq!(config.input_dir(), Path::new(DEFAULT_INPUT_DIR));
    assert_eq!(config.output_dir(), Path::new(DEFAULT_OUTPUT_DIR));
    assert_eq!(config.policy(), ValidationPolicy::Content);
}

#[test]
#[serial]
fn test_missing_dlp_id_is_config_error() {
    clear_env();

    let result = ConfigResolver::new().resolve(&ConfigOverrides::default(), &TomlConfig::default());
    match result {
        Err(Error::Config(msg)) => assert!(msg.contains("dlp_id")),
        other => panic!("expected config error, got {:?}", other),
    }
}

#[test]
#[serial]
fn test_invalid_env_dlp_id_is_config_error() {
    clear_env();
    env::set_var("DLP_ID", "not-a-number");

    let result = ConfigResolver::new().resolve(&ConfigOverrides::default(), &toml_with_dlp(3));
    assert!(matches!(result, Err(Error::Config(_))));

    clear_env();
}

#[test]
#[serial]
fn test_extension_policy_without_email_rejected() {
    clear_env();

    let cli = ConfigOverrides {
        dlp_id: Some(7),
        policy: Some(ValidationPolicy::Extension),
        ..Default::default()
    };
    let result = ConfigResolver::new().resolve(&cli, &TomlConfig::default());
    assert!(matches!(result, Err(Error::Config(_))));
}

#[test]
fn test_load_toml_from_explicit_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
dlp_id = 1234
input_dir = "/data/in"
policy = "extension"
user_email = "someone@example.com"

[logging]
level = "debug"
"#,
    )
    .unwrap();

    let toml = ConfigResolver::with_config_file(&path).load_toml().unwrap();
    assert_eq!(toml.dlp_id, Some(1234));
    assert_eq!(toml.input_dir, Some(PathBuf::from("/data/in")));
    assert_eq!(toml.output_dir, None);
    assert_eq!(toml.policy, Some(ValidationPolicy::Extension));
    assert_eq!(toml.logging.level, "debug");
}

#[test]
fn test_logging_section_is_optional() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    std::fs::write(&path, "dlp_id = 5\n").unwrap();

    let toml = TomlConfig::load(&path).unwrap();
    assert_eq!(toml.logging.level, "info");
}

#[test]
fn test_missing_explicit_config_file_is_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("absent.toml");

    let result = ConfigResolver::with_config_file(&path).load_toml();
    assert!(matches!(result, Err(Error::Config(_))));
}

#[test]
fn test_malformed_toml_is_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    std::fs::write(&path, "dlp_id = [unterminated").unwrap();

    assert!(TomlConfig::load(&path).is_err());
}
