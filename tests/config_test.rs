//! Tests for loading the loop configuration.

use std::io::Write;
use std::time::Duration;

use strictly_loop::{GameMode, LoopConfig};
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes()).expect("Failed to write config");
    file
}

#[test]
fn test_defaults() {
    let config = LoopConfig::default();
    assert_eq!(*config.automatic_cadence_ms(), 500);
    assert_eq!(*config.human_cadence_ms(), 300);
    assert!(*config.show_indexed_board());
    assert_eq!(*config.seed(), None);
}

#[test]
fn test_load_full_file() {
    let file = write_config(
        r#"
automatic_cadence_ms = 250
human_cadence_ms = 100
show_indexed_board = false
seed = 42
"#,
    );

    let config = LoopConfig::from_file(file.path()).expect("Failed to load config");
    assert_eq!(*config.automatic_cadence_ms(), 250);
    assert_eq!(*config.human_cadence_ms(), 100);
    assert!(!*config.show_indexed_board());
    assert_eq!(*config.seed(), Some(42));
}

#[test]
fn test_missing_keys_use_defaults() {
    let file = write_config("human_cadence_ms = 50\n");

    let config = LoopConfig::from_file(file.path()).expect("Failed to load config");
    assert_eq!(*config.automatic_cadence_ms(), 500);
    assert_eq!(*config.human_cadence_ms(), 50);
    assert!(*config.show_indexed_board());
}

#[test]
fn test_invalid_toml_is_an_error() {
    let file = write_config("automatic_cadence_ms = \"soon\"\n");

    let err = LoopConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("absent.toml");

    let config = LoopConfig::load_or_default(&path).expect("defaults");
    assert_eq!(config, LoopConfig::default());
    assert!(LoopConfig::from_file(&path).is_err());
}

#[test]
fn test_cadence_per_mode() {
    let config = LoopConfig::new(40, 15, true);
    assert_eq!(config.cadence_for(GameMode::AutoVsAuto), Duration::from_millis(40));
    assert_eq!(config.cadence_for(GameMode::HumanVsAuto), Duration::from_millis(15));

    let instant = config.without_delay();
    assert_eq!(instant.cadence_for(GameMode::AutoVsAuto), Duration::ZERO);
    assert_eq!(instant.cadence_for(GameMode::HumanVsAuto), Duration::ZERO);
}
