//! Integration tests for configuration loading.

use std::fs;
use tempfile::tempdir;
use titlescan::config::{load_config, load_config_or_default, Config, OutputFormat};

#[test]
fn empty_file_gives_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("titlescan.toml");
    fs::write(&path, "").unwrap();

    let config = load_config(&path).unwrap();
    assert_eq!(config, Config::default());
    assert!(config.parser.angle_detection);
    assert!(!config.parser.skip_preamble);
    assert_eq!(config.output.format, OutputFormat::Text);
    assert!(config.output.pretty);
    assert!(config.output.tracks);
}

#[test]
fn partial_sections_keep_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("titlescan.toml");
    fs::write(
        &path,
        r#"
[parser]
skip_preamble = true

[output]
format = "json"
pretty = false

[check]
ignore = ["zero_frame_rate"]
"#,
    )
    .unwrap();

    let config = load_config(&path).unwrap();
    assert!(config.parser.skip_preamble);
    assert!(config.parser.angle_detection);
    assert_eq!(config.output.format, OutputFormat::Json);
    assert!(!config.output.pretty);
    assert!(config.output.tracks);
    assert!(!config.check.reports("zero_frame_rate"));
    assert!(config.check.reports("zero_duration"));
}

#[test]
fn unknown_issue_kind_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("titlescan.toml");
    fs::write(&path, "[check]\nignore = [\"zero_fps\"]\n").unwrap();

    let err = load_config(&path).unwrap_err();
    assert!(err.to_string().contains("Unknown issue kind 'zero_fps'"));
}

#[test]
fn unknown_output_format_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("titlescan.toml");
    fs::write(&path, "[output]\nformat = \"yaml\"\n").unwrap();

    let err = load_config(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config file"));
}

#[test]
fn missing_file_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("absent.toml");

    let err = load_config(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to read config file"));
}

#[test]
fn custom_path_wins_over_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("custom.toml");
    fs::write(&path, "[parser]\nangle_detection = false\n").unwrap();

    let config = load_config_or_default(Some(&path)).unwrap();
    assert!(!config.parser.angle_detection);
}

#[test]
fn config_round_trips_through_toml() {
    let mut config = Config::default();
    config.parser.skip_preamble = true;
    config.check.ignore.push("duplicate_title_number".to_string());

    let text = toml::to_string_pretty(&config).unwrap();
    let back: Config = toml::from_str(&text).unwrap();
    assert_eq!(back, config);
}
