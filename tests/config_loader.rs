//! Configuration loading and validation tests.

use std::fs;

use lightbox::config::Config;
use tempfile::TempDir;

fn write_config(content: &str) -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("config.toml");
    fs::write(&path, content).expect("Failed to write config");
    (dir, path)
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("nope.toml")).unwrap();

    assert_eq!(config.api.base_url, "http://localhost:8080/api");
    assert_eq!(config.defaults.page_size, 20);
}

#[test]
fn partial_file_keeps_field_defaults() {
    let (_dir, path) = write_config(
        r#"
[api]
base_url = "https://gallery.example.com/api"
"#,
    );

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.api.base_url, "https://gallery.example.com/api");
    assert_eq!(config.api.timeout_seconds, 30);
    assert_eq!(config.api.connect_timeout_seconds, 5);
    assert_eq!(config.defaults.page_size, 20);
}

#[test]
fn full_file_overrides_everything() {
    let (_dir, path) = write_config(
        r#"
[api]
base_url = "http://10.0.0.5:9000/api"
timeout_seconds = 10
connect_timeout_seconds = 1

[defaults]
page_size = 50
"#,
    );

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.api.timeout_seconds, 10);
    assert_eq!(config.defaults.page_size, 50);
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let (_dir, path) = write_config("[api\nbase_url=");
    let err = Config::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("parse"));
}

#[test]
fn non_http_scheme_fails_validation() {
    let (_dir, path) = write_config(
        r#"
[api]
base_url = "ftp://gallery.example.com/api"
"#,
    );

    let err = Config::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("http"));
}

#[test]
fn zero_request_timeout_fails_validation() {
    let (_dir, path) = write_config(
        r#"
[api]
timeout_seconds = 0
"#,
    );

    let err = Config::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("Request timeout"));
}

#[test]
fn zero_connect_timeout_fails_validation() {
    let (_dir, path) = write_config(
        r#"
[api]
connect_timeout_seconds = 0
"#,
    );

    let err = Config::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("Connect timeout"));
}

#[test]
fn zero_page_size_fails_validation() {
    let (_dir, path) = write_config(
        r#"
[defaults]
page_size = 0
"#,
    );

    let err = Config::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("Page size"));
}
