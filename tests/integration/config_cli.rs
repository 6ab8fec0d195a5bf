//! Integration tests for configuration loading through the binary

use cxl::config::{CxlConfig, HelpConfig};
use std::fs;
use tempfile::TempDir;

use crate::integration::{cxl_command, run_cxl, sysfs_root};

fn write_config(temp: &TempDir, name: &str, config: &CxlConfig) -> std::path::PathBuf {
    let path = temp.path().join(name);
    fs::write(&path, toml::to_string_pretty(config).unwrap()).unwrap();
    path
}

#[test]
fn test_explicit_config_file_is_applied() {
    let temp = TempDir::new().unwrap();
    let config = CxlConfig {
        help: HelpConfig {
            man_viewer: temp.path().join("configured-man").display().to_string(),
            ..HelpConfig::default()
        },
        ..CxlConfig::default()
    };
    let path = write_config(&temp, "cxl.toml", &config);

    let mut command = cxl_command(&temp);
    command.arg("--config").arg(&path).args(["help", "list"]);
    let output = run_cxl(command);

    assert_eq!(output.status, 1);
    assert!(output.stderr.contains("No man viewer handled the request"));
}

#[test]
fn test_config_from_environment_variable() {
    let temp = TempDir::new().unwrap();
    let mut config = CxlConfig::default();
    config.logging.level = "debug".to_string();
    let path = write_config(&temp, "env.toml", &config);

    let mut command = cxl_command(&temp);
    command.env("CXL_CONFIG", &path).arg("version");
    let output = run_cxl(command);

    assert_eq!(output.status, 0);
    assert!(output.stderr.contains("Dispatching"), "stderr: {}", output.stderr);
}

#[test]
fn test_global_config_file_is_read() {
    let temp = TempDir::new().unwrap();
    let global_dir = temp.path().join("config").join("cxl");
    fs::create_dir_all(&global_dir).unwrap();
    fs::write(global_dir.join("config.toml"), "[logging]\nlevel = \"debug\"\n").unwrap();

    let mut command = cxl_command(&temp);
    command.arg("version");
    let output = run_cxl(command);

    assert_eq!(output.status, 0);
    assert!(output.stderr.contains("Dispatching"), "stderr: {}", output.stderr);
}

#[test]
fn test_environment_overrides_config_file() {
    let temp = TempDir::new().unwrap();
    let bus = sysfs_root(&temp);
    fs::create_dir_all(&bus).unwrap();

    let mut config = CxlConfig::default();
    config.context.sysfs_root = temp.path().join("not-a-dir");
    fs::write(&config.context.sysfs_root, "").unwrap();
    let path = write_config(&temp, "cxl.toml", &config);

    let mut command = cxl_command(&temp);
    command.arg("--config").arg(&path).arg("version");
    let output = run_cxl(command);

    assert_eq!(output.status, 0, "stderr: {}", output.stderr);
}

#[test]
fn test_missing_config_file_fails_before_dispatch() {
    let temp = TempDir::new().unwrap();
    let mut command = cxl_command(&temp);
    command
        .arg("--config")
        .arg(temp.path().join("absent.toml"))
        .arg("version");
    let output = run_cxl(command);

    assert_eq!(output.status, 1);
    assert!(output.stdout.is_empty());
    assert!(output.stderr.contains("Config file not found"));
}

#[test]
fn test_invalid_config_value_fails_before_dispatch() {
    let temp = TempDir::new().unwrap();
    let mut config = CxlConfig::default();
    config.logging.output = "syslog".to_string();
    let path = write_config(&temp, "bad.toml", &config);

    let mut command = cxl_command(&temp);
    command.arg("--config").arg(&path).arg("version");
    let output = run_cxl(command);

    assert_eq!(output.status, 1);
    assert!(output.stdout.is_empty());
    assert!(output.stderr.contains("Invalid log output"));
}

#[test]
fn test_invalid_cli_log_values_fail_before_dispatch() {
    let temp = TempDir::new().unwrap();
    for (flag, value, message) in [
        ("--log-level", "bogus", "Invalid log level"),
        ("--log-format", "xml", "Invalid log format"),
    ] {
        let mut command = cxl_command(&temp);
        command.args([flag, value, "version"]);
        let output = run_cxl(command);

        assert_eq!(output.status, 1, "{} {}", flag, value);
        assert!(output.stdout.is_empty());
        assert!(output.stderr.contains(message), "stderr: {}", output.stderr);
    }
}

#[test]
fn test_config_sources_logged_once_logging_is_up() {
    let temp = TempDir::new().unwrap();
    let path = write_config(&temp, "cxl.toml", &CxlConfig::default());

    let mut command = cxl_command(&temp);
    command.arg("--config").arg(&path).args(["--verbose", "version"]);
    let output = run_cxl(command);

    assert_eq!(output.status, 0);
    assert!(output.stderr.contains("Configuration loaded"), "stderr: {}", output.stderr);
    assert!(output.stderr.contains("cxl.toml"), "stderr: {}", output.stderr);
}
