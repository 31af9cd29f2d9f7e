//! End-to-end tests for `layoutlab config` commands.

use std::fs;

mod fixtures;
use fixtures::*;

// ============================================================================
// Show Command Tests
// ============================================================================

#[test]
fn test_config_show_default_json() {
    let env = TestEnv::new();
    let output = env.run(&["config", "show", "--json"]);
    assert_exit(&output, 0);

    let config = stdout_json(&output);
    let config_dir = env.config_dir().to_string_lossy().to_string();
    assert_eq!(config["config_dir"], config_dir.as_str());
    assert_eq!(config["paths"]["data_dir"], config_dir.as_str());
    assert!(config["paths"]["preview_file"]
        .as_str()
        .expect("preview file path")
        .ends_with("preview.html"));
    assert_eq!(config["ui"]["theme"], "auto");
    assert_eq!(config["ui"]["show_help_on_startup"], true);
    assert_eq!(config["preview"]["trusted_content"], true);
    assert_eq!(config["preview"]["port"], 3737);
}

#[test]
fn test_config_show_human_readable() {
    let env = TestEnv::new();
    let output = env.run(&["config", "show"]);
    assert_exit(&output, 0);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Layout Lab Configuration"));
    assert!(stdout.contains("Theme Mode: auto"));
    assert!(stdout.contains("Server Port:     3737"));
}

// ============================================================================
// Set Command Tests
// ============================================================================

#[test]
fn test_config_set_persists_values() {
    let env = TestEnv::new();
    let output = env.run(&[
        "config",
        "set",
        "--theme",
        "dark",
        "--port",
        "8080",
        "--trusted",
        "false",
    ]);
    assert_exit(&output, 0);
    assert!(env.config_dir().join("config.toml").exists());

    let config = stdout_json(&env.run(&["config", "show", "--json"]));
    assert_eq!(config["ui"]["theme"], "dark");
    assert_eq!(config["preview"]["port"], 8080);
    assert_eq!(config["preview"]["trusted_content"], false);
}

#[test]
fn test_config_set_data_dir_moves_custom_layouts() {
    let env = TestEnv::new();
    let data_dir = env.config_dir().join("layouts");
    let data_dir_arg = data_dir.to_str().expect("utf-8 path");

    let output = env.run(&["config", "set", "--data-dir", data_dir_arg]);
    assert_exit(&output, 0);
    assert!(data_dir.is_dir());

    let output = env.run_with_stdin(&["custom", "set", "flex", "--html", "-"], "<nav>N</nav>");
    assert_exit(&output, 0);

    let stored = fs::read_to_string(data_dir.join("customLayouts.json")).expect("layouts file");
    assert!(stored.contains("<nav>N</nav>"));
    assert!(!env.custom_layouts_file().exists());
}

#[test]
fn test_config_set_requires_an_option() {
    let env = TestEnv::new();
    let output = env.run(&["config", "set"]);
    assert_exit(&output, 1);
    assert!(String::from_utf8_lossy(&output.stderr).contains("At least one"));
}

#[test]
fn test_config_set_invalid_theme() {
    let env = TestEnv::new();
    let output = env.run(&["config", "set", "--theme", "sepia"]);
    assert_exit(&output, 1);
    assert!(!env.config_dir().join("config.toml").exists());
}

#[test]
fn test_config_set_port_zero_rejected() {
    let env = TestEnv::new();
    let output = env.run(&["config", "set", "--port", "0"]);
    assert_exit(&output, 1);
}

#[test]
fn test_config_malformed_file_is_validation_error() {
    let env = TestEnv::new();
    fs::write(env.config_dir().join("config.toml"), "[ui\ntheme_mode = ").expect("write config");

    let output = env.run(&["config", "show"]);
    assert_exit(&output, 1);
}
