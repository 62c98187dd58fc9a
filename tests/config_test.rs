//! Tests for TOML configuration loading.

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use phee::{DATA_KEY_ENV, DATA_URL_ENV, PheeConfig};

#[test]
fn test_defaults() {
    let config = PheeConfig::default();
    assert_eq!(config.data_url(), &None);
    assert_eq!(config.players_table(), "players");
    assert_eq!(config.log_file(), &PathBuf::from("phee.log"));
    assert_eq!(config.images_dir(), "/images/");
    assert!(config.roster_file().is_none());
}

#[test]
fn test_from_file_fills_missing_fields() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("phee.toml");
    fs::write(
        &path,
        r#"data_url = "https://roster.example.test"
players_table = "nfl_players"
"#,
    )
    .expect("Failed to write TOML");

    let config = PheeConfig::from_file(&path).expect("Load failed");
    assert_eq!(config.data_url().as_deref(), Some("https://roster.example.test"));
    assert_eq!(config.players_table(), "nfl_players");
    assert_eq!(config.images_dir(), "/images/");
}

#[test]
fn test_from_file_invalid_toml_fails() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("phee.toml");
    fs::write(&path, "this is not valid toml !!!@@@").expect("Failed to write TOML");

    let err = PheeConfig::from_file(&path).expect_err("Invalid TOML should fail");
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_load_or_default_missing_file() {
    let config = PheeConfig::load_or_default("/this/path/does/not/exist/phee.toml")
        .expect("Missing file should fall back to defaults");
    assert_eq!(config, PheeConfig::default());
}

#[test]
fn test_overrides() {
    let config = PheeConfig::default()
        .with_data_url("https://x.test")
        .with_roster_file(PathBuf::from("players.json"));
    assert_eq!(config.data_url().as_deref(), Some("https://x.test"));
    assert_eq!(config.roster_file(), &Some(PathBuf::from("players.json")));
}

// The environment is process-global, so every variable this binary touches
// is exercised in this one test.
#[test]
fn test_environment_overrides() {
    // SAFETY: no other test in this binary reads or writes these variables.
    unsafe {
        std::env::set_var(DATA_URL_ENV, "https://env.example.test");
        std::env::set_var(DATA_KEY_ENV, "env-key");
    }
    let config = PheeConfig::default()
        .with_data_url("https://file.example.test")
        .with_env();
    assert_eq!(config.data_url().as_deref(), Some("https://env.example.test"));
    assert_eq!(config.data_key().expect("Key is set"), "env-key");

    // SAFETY: as above.
    unsafe {
        std::env::remove_var(DATA_URL_ENV);
        std::env::remove_var(DATA_KEY_ENV);
    }
    let config = PheeConfig::default()
        .with_data_url("https://file.example.test")
        .with_env();
    assert_eq!(config.data_url().as_deref(), Some("https://file.example.test"));
    let err = config.data_key().expect_err("Key is unset");
    assert!(err.message.contains(DATA_KEY_ENV));
}
