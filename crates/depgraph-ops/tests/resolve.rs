use std::fs;

use depgraph_core::config::Config;
use depgraph_core::mode::RepoMode;
use depgraph_ops::render::DotRenderer;
use depgraph_ops::{prompt, resolve, source};
use tempfile::TempDir;

fn fixture_config(tmp: &TempDir, json: &str, root: &str, depth: u32) -> Config {
    let path = tmp.path().join("fixture.json");
    fs::write(&path, json).unwrap();
    Config {
        package_name: root.to_string(),
        repo_source: path.display().to_string(),
        repo_mode: RepoMode::TestFile,
        package_version: "latest".to_string(),
        max_depth: depth,
        filter_substring: String::new(),
    }
}

#[test]
fn test_resolve_from_fixture_file() {
    let tmp = TempDir::new().unwrap();
    let config = fixture_config(&tmp, r#"{"A": ["B", "C"], "B": [], "C": ["B"]}"#, "A", 2);
    let mut renderer = DotRenderer::new();
    let result = resolve(&config, &mut renderer).unwrap();
    assert_eq!(result.graph.to_string(), "A -> B, C\nC -> B\n");
    assert_eq!(renderer.node_names(), vec!["A", "B", "C"]);
    assert_eq!(renderer.edge_count(), 3);
}

#[test]
fn test_missing_fixture_degrades_root() {
    let tmp = TempDir::new().unwrap();
    let mut config = fixture_config(&tmp, "{}", "A", 2);
    config.repo_source = tmp.path().join("gone.json").display().to_string();
    let result = resolve(&config, &mut ()).unwrap();
    assert!(result.graph.is_empty());
    assert_eq!(result.failures.len(), 1);
    assert_eq!(result.failures[0].package, "A");
}

#[test]
fn test_unsupported_mode_is_fatal() {
    let tmp = TempDir::new().unwrap();
    let mut config = fixture_config(&tmp, "{}", "A", 2);
    config.repo_mode = RepoMode::Real;
    let err = resolve(&config, &mut ()).unwrap_err();
    assert!(err.to_string().starts_with("Unsupported mode"), "got: {err}");
    assert!(source::open(&config).is_err());
}

#[test]
fn test_prompt_rejects_registry_mode() {
    let config = Config {
        package_name: "express".to_string(),
        repo_source: "https://registry.npmjs.org".to_string(),
        repo_mode: RepoMode::Real,
        package_version: "latest".to_string(),
        max_depth: 2,
        filter_substring: String::new(),
    };
    let err = prompt::confirm_fixture(config).unwrap_err();
    assert!(err.to_string().contains("fixture mode"), "got: {err}");
}

#[test]
fn test_dot_file_written() {
    let tmp = TempDir::new().unwrap();
    let config = fixture_config(&tmp, r#"{"app": ["lib"]}"#, "app", 3);
    let mut renderer = DotRenderer::new();
    resolve(&config, &mut renderer).unwrap();
    let out = tmp.path().join("graph.dot");
    renderer.write(&out).unwrap();
    let dot = fs::read_to_string(&out).unwrap();
    assert!(dot.contains("label = \"app\""));
    assert!(dot.contains("->"));
}
