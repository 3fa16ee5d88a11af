//! Template loading for ngforge.
//! Templates are plain text files under a template root directory and are
//! addressed by their path relative to that root.
use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{Error, Result};

/// Trait for loading template text from a template source.
pub trait TemplateLoader {
    /// Loads the template identified by `name`.
    ///
    /// # Errors
    /// * `Error::TemplateNotFound` if the template cannot be read
    fn load(&self, name: &str) -> Result<String>;
}

/// Loader for templates from the local filesystem.
#[derive(Debug, Clone)]
pub struct LocalLoader<P: AsRef<Path>> {
    root: P,
}

impl<P: AsRef<Path>> LocalLoader<P> {
    /// Creates a new LocalLoader rooted at `root`.
    pub fn new(root: P) -> Self {
        Self { root }
    }

    /// Resolves a template name to its path on disk.
    pub fn resolve(&self, name: &str) -> PathBuf {
        self.root.as_ref().join(name)
    }
}

impl<P: AsRef<Path>> TemplateLoader for LocalLoader<P> {
    fn load(&self, name: &str) -> Result<String> {
        let path = self.resolve(name);
        debug!("Loading template '{}'", path.display());
        fs::read_to_string(&path).map_err(|source| Error::TemplateNotFound { path, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_local_loader_reads_nested_template() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("docker")).unwrap();
        fs::write(temp_dir.path().join("docker/Dockerfile"), "FROM node").unwrap();

        let loader = LocalLoader::new(temp_dir.path());
        assert_eq!(loader.load("docker/Dockerfile").unwrap(), "FROM node");
    }

    #[test]
    fn test_local_loader_missing_template() {
        let temp_dir = TempDir::new().unwrap();
        let loader = LocalLoader::new(temp_dir.path());

        match loader.load("missing.txt") {
            Err(Error::TemplateNotFound { path, .. }) => {
                assert_eq!(path, temp_dir.path().join("missing.txt"))
            }
            other => panic!("Expected TemplateNotFound, got {other:?}"),
        }
    }
}
