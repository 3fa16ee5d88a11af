use std::fs;

use ngforge::constants::MANIFEST_SCRIPTS;
use ngforge::error::Error;
use ngforge::manifest::{add_asset, assets_glob, read_json, set_scripts, write_json};
use serde_json::{json, Value};
use tempfile::TempDir;

fn keys(value: &Value) -> Vec<&str> {
    value
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect()
}

fn src_assets() -> Value {
    assets_glob("src/assets", "assets")
}

/// Applies `add_asset` to `config` and checks that nothing changed.
fn assert_asset_no_op(config: Value) {
    let mut edited = config.clone();
    assert!(!add_asset(&mut edited, "demo-app", src_assets()));
    assert_eq!(edited, config);
}

#[test]
fn test_set_scripts_replaces_section_and_keeps_other_fields() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("package.json");
    let original = json!({
        "name": "demo-app",
        "version": "0.0.0",
        "scripts": { "ng": "ng", "start": "ng serve" },
        "dependencies": { "@angular/core": "^19.0.0" }
    });
    fs::write(&path, original.to_string()).unwrap();

    let mut manifest: Value = read_json(&path).unwrap();
    assert!(set_scripts(&mut manifest, &MANIFEST_SCRIPTS));
    write_json(&path, &manifest).unwrap();

    let written: Value = read_json(&path).unwrap();
    assert_eq!(
        keys(&written["scripts"]),
        vec!["start", "build", "watch", "test", "lint", "format"]
    );
    assert_eq!(written["name"], "demo-app");
    assert_eq!(written["dependencies"]["@angular/core"], "^19.0.0");
}

#[test]
fn test_written_json_keeps_key_order_and_trailing_newline() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("package.json");
    let original = r#"{"name":"demo","scripts":{"ng":"ng"},"version":"1.0.0","private":true}"#;
    fs::write(&path, original).unwrap();

    let mut manifest: Value = read_json(&path).unwrap();
    set_scripts(&mut manifest, &MANIFEST_SCRIPTS);
    write_json(&path, &manifest).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.ends_with("}\n"));
    let written: Value = serde_json::from_str(&content).unwrap();
    assert_eq!(
        keys(&written),
        vec!["name", "scripts", "version", "private"]
    );
}

#[test]
fn test_add_asset_appends_glob() {
    let mut config = json!({
        "version": 1,
        "projects": { "demo-app": { "architect": { "build": {
            "options": {
                "outputPath": "dist/demo-app",
                "assets": [{ "glob": "**/*", "input": "public" }]
            },
            "configurations": { "production": {} }
        }}}}
    });

    assert!(add_asset(&mut config, "demo-app", src_assets()));

    let build = &config["projects"]["demo-app"]["architect"]["build"];
    assert_eq!(keys(build), vec!["options", "configurations"]);
    let options = &build["options"];
    assert_eq!(keys(options), vec!["outputPath", "assets"]);
    assert_eq!(
        options["assets"],
        json!([
            { "glob": "**/*", "input": "public" },
            { "glob": "**/*", "input": "src/assets", "output": "assets" }
        ])
    );
}

#[test]
fn test_add_asset_is_idempotent() {
    let mut config = json!({
        "projects": { "demo-app": { "architect": { "build": { "options": {} }}}}
    });

    assert!(add_asset(&mut config, "demo-app", src_assets()));
    assert!(!add_asset(&mut config, "demo-app", src_assets()));

    let options = &config["projects"]["demo-app"]["architect"]["build"]["options"];
    assert_eq!(options["assets"].as_array().unwrap().len(), 1);
}

#[test]
fn test_add_asset_without_build_options_is_a_no_op() {
    assert_asset_no_op(json!({
        "projects": { "demo-app": { "architect": { "serve": { "builder": "x" } } } }
    }));
    assert_asset_no_op(json!({ "version": 1 }));
    assert_asset_no_op(json!({ "projects": { "other": {} } }));
}

#[test]
fn test_add_asset_with_mistyped_levels_is_a_no_op() {
    assert_asset_no_op(json!({ "projects": [] }));
    assert_asset_no_op(json!({
        "projects": { "demo-app": { "architect": { "build": "oops" } } }
    }));
    assert_asset_no_op(json!({
        "projects": { "demo-app": { "architect": { "build": {
            "options": { "assets": "src/assets" }
        }}}}
    }));
}

#[test]
fn test_mistyped_workspace_still_parses() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("angular.json");
    let raw = r#"{"projects":{"demo-app":{"architect":{"build":"oops"}}}}"#;
    fs::write(&path, raw).unwrap();

    let mut config: Value = read_json(&path).unwrap();
    assert!(!add_asset(&mut config, "demo-app", src_assets()));
}

#[test]
fn test_malformed_json_is_config_parse_failure() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("angular.json");
    fs::write(&path, "{ not json").unwrap();

    let result: Result<Value, Error> = read_json(&path);
    assert!(matches!(result, Err(Error::ConfigParseFailure { .. })));

    let missing: Result<Value, Error> = read_json(temp_dir.path().join("package.json"));
    assert!(matches!(missing, Err(Error::ConfigParseFailure { .. })));
}
