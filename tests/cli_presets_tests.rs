//! End-to-end tests for `layoutlab presets`, `designs` and `properties`.

mod fixtures;
use fixtures::*;

// ============================================================================
// Presets
// ============================================================================

#[test]
fn test_presets_list_all_families() {
    let env = TestEnv::new();
    let output = env.run(&["presets", "list"]);
    assert_exit(&output, 0);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Flex Layouts"));
    assert!(stdout.contains("Grid Layouts"));
    assert!(stdout.contains("Media Layouts"));
    assert!(stdout.contains("Holy Grail"));
    assert!(stdout.contains("Responsive Navbar"));
}

#[test]
fn test_presets_list_family_json() {
    let env = TestEnv::new();
    let output = env.run(&["presets", "list", "--family", "grid", "--json"]);
    assert_exit(&output, 0);

    let presets = stdout_json(&output);
    let presets = presets.as_array().expect("array of presets");
    assert_eq!(presets.len(), 6);
    assert!(presets.iter().all(|p| p["family"] == "grid"));
    assert_eq!(presets[0]["name"], "Grid Gallery");
}

#[test]
fn test_presets_show_card_layout() {
    let env = TestEnv::new();
    let output = env.run(&["presets", "show", "flex", "Card Layout", "--json"]);
    assert_exit(&output, 0);

    let preset = stdout_json(&output);
    let html = preset["html"].as_str().expect("html string");
    assert!(html.starts_with("<div class=\"card-layout\">"));
    assert_eq!(html.matches("class=\"card\"").count(), 4);
    assert!(preset["css"].as_str().expect("css string").contains("flex-wrap"));
}

#[test]
fn test_presets_show_unknown_name_is_validation_error() {
    let env = TestEnv::new();
    let output = env.run(&["presets", "show", "flex", "Nonexistent"]);
    assert_exit(&output, 1);
    assert!(String::from_utf8_lossy(&output.stderr).contains("Nonexistent"));
}

#[test]
fn test_presets_unknown_family_is_validation_error() {
    let env = TestEnv::new();
    let output = env.run(&["presets", "list", "--family", "table"]);
    assert_exit(&output, 1);
    assert!(String::from_utf8_lossy(&output.stderr).contains("table"));
}

// ============================================================================
// Designs
// ============================================================================

#[test]
fn test_designs_list_json() {
    let env = TestEnv::new();
    let output = env.run(&["designs", "list", "--json"]);
    assert_exit(&output, 0);

    let designs = stdout_json(&output);
    let names: Vec<&str> = designs
        .as_array()
        .expect("array of designs")
        .iter()
        .filter_map(|d| d["name"].as_str())
        .collect();
    assert_eq!(names.len(), 8);
    assert_eq!(names[0], "Modern Login");
    assert!(names.contains(&"Glassmorphism"));
}

#[test]
fn test_designs_show() {
    let env = TestEnv::new();
    let output = env.run(&["designs", "show", "Neon Buttons"]);
    assert_exit(&output, 0);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Neon Buttons"));
    assert!(stdout.contains("HTML:"));
    assert!(stdout.contains("CSS:"));
}

#[test]
fn test_designs_show_unknown() {
    let env = TestEnv::new();
    let output = env.run(&["designs", "show", "Brutalism"]);
    assert_exit(&output, 1);
}

// ============================================================================
// Properties
// ============================================================================

#[test]
fn test_properties_flex_json_marks_examples() {
    let env = TestEnv::new();
    let output = env.run(&["properties", "flex", "--json"]);
    assert_exit(&output, 0);

    let entries = stdout_json(&output);
    let entries = entries.as_array().expect("array of properties");
    assert_eq!(entries.len(), 8);
    assert_eq!(entries[0]["name"], "Card Layout");
    assert_eq!(entries[0]["has_example"], true);

    let basis = entries
        .iter()
        .find(|e| e["name"] == "flex-basis")
        .expect("flex-basis listed");
    assert_eq!(basis["has_example"], false);
}

#[test]
fn test_properties_media_human_readable() {
    let env = TestEnv::new();
    let output = env.run(&["properties", "media"]);
    assert_exit(&output, 0);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Media Query Properties"));
    assert!(stdout.contains("aspect-ratio"));
}
