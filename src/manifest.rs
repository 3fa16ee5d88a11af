//! Edits to the JSON files generated by the Angular CLI.
//! Documents are edited in place as ordered [`Value`]s, so untouched keys and
//! the position of edited keys survive the round trip. A document whose shape
//! differs from what an edit expects is left unchanged.
use std::fmt;
use std::fs;
use std::path::Path;

use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Map, Value};

use crate::error::{Error, Result};
use crate::template::write_file;

fn parse_error(path: &Path, reason: impl fmt::Display) -> Error {
    Error::ConfigParseFailure {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
}

/// Reads and deserializes a JSON file.
///
/// # Errors
/// * `Error::ConfigParseFailure` if the file is unreadable or not valid JSON
pub fn read_json<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<T> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| parse_error(path, e))?;
    serde_json::from_str(&content).map_err(|e| parse_error(path, e))
}

/// Serializes `value` as two-space indented JSON with a trailing newline.
pub fn write_json<T: Serialize, P: AsRef<Path>>(path: P, value: &T) -> Result<()> {
    let path = path.as_ref();
    let mut content = serde_json::to_string_pretty(value).map_err(|e| parse_error(path, e))?;
    content.push('\n');
    write_file(path, &content)
}

/// Replaces the `scripts` section of a `package.json` document.
///
/// An existing section keeps its position among the other keys.
///
/// # Returns
/// * `false` if the document is not a JSON object
pub fn set_scripts(manifest: &mut Value, scripts: &[(&str, &str)]) -> bool {
    let Some(fields) = manifest.as_object_mut() else {
        warn!("package.json is not an object, leaving scripts unchanged");
        return false;
    };

    let section: Map<String, Value> = scripts
        .iter()
        .map(|(name, command)| (name.to_string(), Value::from(*command)))
        .collect();
    fields.insert("scripts".to_string(), Value::Object(section));
    true
}

/// Asset entry copying everything under `input` to `output`.
pub fn assets_glob(input: &str, output: &str) -> Value {
    json!({ "glob": "**/*", "input": input, "output": output })
}

/// JSON pointer to the build options of `project` in `angular.json`.
fn build_options_pointer(project: &str) -> String {
    let escaped = project.replace('~', "~0").replace('/', "~1");
    format!("/projects/{escaped}/architect/build/options")
}

/// Adds `entry` to the build assets of `project`.
///
/// # Returns
/// * `true` if the configuration changed; `false` when the build options are
///   missing, any level on the way has an unexpected type, or the entry is
///   already present
pub fn add_asset(config: &mut Value, project: &str, entry: Value) -> bool {
    let pointer = build_options_pointer(project);
    let Some(options) = config.pointer_mut(&pointer).and_then(Value::as_object_mut) else {
        warn!("No build options for project '{project}', leaving assets unchanged");
        return false;
    };

    let assets = options.entry("assets").or_insert(json!([]));
    let Some(assets) = assets.as_array_mut() else {
        warn!("Build assets of '{project}' are not a list, leaving them unchanged");
        return false;
    };

    if assets.contains(&entry) {
        debug!("Asset entry already present for '{project}'");
        return false;
    }
    assets.push(entry);
    true
}
