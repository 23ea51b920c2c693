use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

fn datacat_binary() -> PathBuf {
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    path.pop(); // remove deps/
    path.push("datacat");
    path
}

fn setup_test_env() -> (TempDir, PathBuf) {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().to_path_buf();

    let config_dir = root.join("config");
    fs::create_dir_all(&config_dir).unwrap();

    let config_content = r#"[server]
bind = "127.0.0.1:7831"
"#;
    let config_path = config_dir.join("datacat.toml");
    fs::write(&config_path, config_content).unwrap();

    (tmp, config_path)
}

fn run_datacat(config_path: &Path, args: &[&str]) -> (String, String, bool) {
    let binary = datacat_binary();
    let output = Command::new(&binary)
        .arg("--config")
        .arg(config_path.to_str().unwrap())
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("Failed to run datacat binary at {:?}: {}", binary, e));

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();
    (stdout, stderr, success)
}

#[test]
fn test_list_shows_builtin_catalog() {
    let (_tmp, config_path) = setup_test_env();

    let (stdout, stderr, success) = run_datacat(&config_path, &["list"]);
    assert!(success, "list failed: stdout={}, stderr={}", stdout, stderr);
    assert!(stdout.contains("Customer 360"));
    assert!(stdout.contains("Balance Sheet"));
    assert!(stdout.contains("Clickstream Events"));
}

#[test]
fn test_search_matches_by_name() {
    let (_tmp, config_path) = setup_test_env();

    let (stdout, _, success) = run_datacat(&config_path, &["search", "balance"]);
    assert!(success);
    assert!(stdout.contains("Balance Sheet"));
    assert!(!stdout.contains("Clickstream Events"));
}

#[test]
fn test_search_no_results() {
    let (_tmp, config_path) = setup_test_env();

    let (stdout, _, success) = run_datacat(&config_path, &["search", "zzz_nonexistent_keyword"]);
    assert!(success);
    assert!(stdout.contains("No results."));
}

#[test]
fn test_search_json_parses() {
    let (_tmp, config_path) = setup_test_env();

    let (stdout, _, success) = run_datacat(&config_path, &["search", "regulatory", "--json"]);
    assert!(success);
    let results: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let names: Vec<&str> = results
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Balance Sheet", "Derivatives and Collaterals"]);
}

#[test]
fn test_suggest_caps_at_three() {
    let (_tmp, config_path) = setup_test_env();

    let (stdout, _, success) = run_datacat(
        &config_path,
        &["suggest", "financial pricing sensitive", "--json"],
    );
    assert!(success);
    let suggestions: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(suggestions.as_array().unwrap().len(), 3);
}

#[test]
fn test_suggest_pricing_is_dynamic() {
    let (_tmp, config_path) = setup_test_env();

    let (stdout, _, success) = run_datacat(&config_path, &["suggest", "pricing", "--json"]);
    assert!(success);
    let suggestions: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    for suggestion in suggestions.as_array().unwrap() {
        assert_eq!(suggestion["type"], "pricing");
        assert!(!suggestion["columns"].as_array().unwrap().is_empty());
    }
}

#[test]
fn test_get_renders_detail_sections() {
    let (_tmp, config_path) = setup_test_env();

    let (stdout, _, success) = run_datacat(&config_path, &["get", "1"]);
    assert!(success);
    assert!(stdout.contains("--- Product ---"));
    assert!(stdout.contains("Customer 360"));
    assert!(stdout.contains("--- Schema"));
    assert!(stdout.contains("customer_id"));
    assert!(stdout.contains("--- Lineage ---"));
    assert!(stdout.contains("--- Failed Jobs ---"));
}

#[test]
fn test_get_unknown_id_fails() {
    let (_tmp, config_path) = setup_test_env();

    let (_, stderr, success) = run_datacat(&config_path, &["get", "999"]);
    assert!(!success);
    assert!(stderr.contains("not found"));
}

#[test]
fn test_export_round_trips_through_catalog_path() {
    let (tmp, config_path) = setup_test_env();

    let export_path = tmp.path().join("products.json");
    let (stdout, stderr, success) = run_datacat(
        &config_path,
        &["export", "--output", export_path.to_str().unwrap()],
    );
    assert!(
        success,
        "export failed: stdout={}, stderr={}",
        stdout, stderr
    );

    let exported: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&export_path).unwrap()).unwrap();
    assert_eq!(exported.as_array().unwrap().len(), 8);

    // Point a new config at the exported file and make sure the catalog
    // loads from it.
    let config_content = format!(
        "[catalog]\npath = \"{}\"\n",
        export_path.to_str().unwrap().replace('\\', "\\\\")
    );
    let file_config = tmp.path().join("config").join("file-backed.toml");
    fs::write(&file_config, config_content).unwrap();

    let (stdout, _, success) = run_datacat(&file_config, &["list"]);
    assert!(success);
    assert!(stdout.contains("Customer 360"));
}

#[test]
fn test_file_backed_catalog() {
    let (tmp, _) = setup_test_env();

    let products = r#"[{
        "id": 42,
        "name": "Tiny Table",
        "description": "A single-entry catalog",
        "owner": "Nobody",
        "domain": "Testing",
        "updateFrequency": "Never",
        "sensitivity": "Low",
        "quality": 10,
        "columns": [
            {"name": "k", "type": "string", "sensitivity": "low", "description": "key"}
        ]
    }]"#;
    let products_path = tmp.path().join("tiny.json");
    fs::write(&products_path, products).unwrap();

    let config_content = format!(
        "[catalog]\npath = \"{}\"\n",
        products_path.to_str().unwrap().replace('\\', "\\\\")
    );
    let config_path = tmp.path().join("config").join("tiny.toml");
    fs::write(&config_path, config_content).unwrap();

    let (stdout, _, success) = run_datacat(&config_path, &["list"]);
    assert!(success);
    assert!(stdout.contains("Tiny Table"));
    assert!(!stdout.contains("Customer 360"));

    let (stdout, _, success) = run_datacat(&config_path, &["get", "42"]);
    assert!(success);
    assert!(stdout.contains("Tiny Table"));
}
