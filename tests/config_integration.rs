use kora_chat::config::{AppConfig, LogFormat};
use serial_test::serial;
use std::env;
use std::fs;

// Helper to clear environment variables that might interfere with tests
fn clear_env_vars() {
    unsafe {
        env::remove_var("KORA_SERVER__PORT");
        env::remove_var("KORA_UI__TITLE");
        env::remove_var("CONFIG_FILE");
        env::remove_var("PORT");
        env::remove_var("HOST");
        env::remove_var("LOG_FORMAT");
    }
}

fn load() -> AppConfig {
    AppConfig::load_from_args(["kora-chat"]).expect("Failed to load config")
}

#[test]
#[serial]
fn test_default_config() {
    clear_env_vars();

    let config = load();
    assert_eq!(config.server.port, 3000);
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.logging.format, LogFormat::Compact);
    assert_eq!(config.ui.title, "Kora 2.0");
    assert_eq!(config.ui.poll_interval_ms, 1000);
}

#[test]
#[serial]
fn test_env_override() {
    clear_env_vars();
    unsafe {
        env::set_var("KORA_SERVER__PORT", "9090");
        env::set_var("KORA_UI__TITLE", "Research Chat");
    }

    let config = load();
    assert_eq!(config.server.port, 9090);
    assert_eq!(config.ui.title, "Research Chat");

    clear_env_vars();
}

#[test]
#[serial]
fn test_cli_env_beats_prefixed_env() {
    clear_env_vars();
    unsafe {
        env::set_var("KORA_SERVER__PORT", "9090");
        env::set_var("PORT", "9191");
    }

    let config = load();
    assert_eq!(config.server.port, 9191);

    clear_env_vars();
}

#[test]
#[serial]
fn test_file_load() {
    clear_env_vars();

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let file_path = dir.path().join("kora.yaml");
    fs::write(
        &file_path,
        r#"
server:
  port: 7070
logging:
  format: json
"#,
    )
    .expect("Failed to write temp config");

    let config = AppConfig::load_from_args([
        "kora-chat",
        "--config",
        file_path.to_str().expect("utf-8 path"),
    ])
    .expect("Failed to load config from file");

    assert_eq!(config.server.port, 7070);
    assert_eq!(config.logging.format, LogFormat::Json);
    // Keys missing from the file keep their defaults.
    assert_eq!(config.server.host, "127.0.0.1");
}

#[test]
#[serial]
fn test_missing_explicit_file_fails() {
    clear_env_vars();

    let result = AppConfig::load_from_args(["kora-chat", "--config", "does-not-exist.yaml"]);
    assert!(result.is_err());
}

#[test]
#[serial]
fn test_cwd_config_fallback() {
    clear_env_vars();

    let cwd_path = "config.yaml";
    fs::write(
        cwd_path,
        r#"
server:
  port: 6060
"#,
    )
    .expect("Failed to write ./config.yaml");

    let result = std::panic::catch_unwind(|| {
        assert_eq!(load().server.port, 6060);
    });

    fs::remove_file(cwd_path).unwrap();

    if let Err(e) = result {
        std::panic::resume_unwind(e);
    }
}
