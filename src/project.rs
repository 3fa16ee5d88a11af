//! The project being generated: its name, root directory and the variables
//! every template is rendered with.
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use crate::constants::NODE_VERSION;
use crate::error::{Error, Result};
use crate::renderer::Variables;

static PROJECT_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z][.0-9a-zA-Z]*(-[.0-9a-zA-Z]*)*$")
        .expect("project name pattern is valid")
});

/// Checks `name` against the Angular CLI's project name rule.
pub fn validate_name(name: &str) -> Result<()> {
    if PROJECT_NAME.is_match(name) {
        Ok(())
    } else {
        Err(Error::InvalidProjectName {
            name: name.to_string(),
        })
    }
}

/// Human-readable brand name: `my-cool-app` becomes `My Cool App`.
///
/// Only hyphens separate words. Every other character, including dots and
/// inner capitals, is kept as written.
pub fn brand_name(name: &str) -> String {
    name.split('-').map(capitalize).collect::<Vec<_>>().join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Variables available to every template.
pub fn project_variables(name: &str) -> Variables {
    let mut variables = Variables::new();
    variables.insert("projectName".to_string(), name.to_string());
    variables.insert("brandName".to_string(), brand_name(name));
    variables.insert("nodeVersion".to_string(), NODE_VERSION.to_string());
    variables
}

#[derive(Debug, Clone)]
pub struct Project {
    pub name: String,
    /// Directory the project is created in.
    pub parent: PathBuf,
    /// `parent/name`; the only directory rollback ever touches.
    pub root: PathBuf,
    pub variables: Variables,
}

impl Project {
    /// Validates `name` and resolves the project root under `parent`.
    pub fn new<S: Into<String>, P: Into<PathBuf>>(name: S, parent: P) -> Result<Self> {
        let name = name.into();
        validate_name(&name)?;
        let parent = parent.into();
        let root = parent.join(&name);
        let variables = project_variables(&name);
        Ok(Self {
            name,
            parent,
            root,
            variables,
        })
    }

    /// Resolves a path relative to the project root.
    pub fn path<P: AsRef<Path>>(&self, rel: P) -> PathBuf {
        self.root.join(rel)
    }

    /// Fails if the project root is already taken.
    pub fn ensure_absent(&self) -> Result<()> {
        if self.root.exists() {
            return Err(Error::ProjectExists {
                path: self.root.clone(),
            });
        }
        Ok(())
    }
}
