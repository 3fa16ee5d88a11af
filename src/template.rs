//! Renders templates into generated files.
//! Combines a [`TemplateLoader`] with a [`TemplateRenderer`] and owns the
//! write side: parent directories are created and existing files are
//! overwritten without merging.
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{Error, Result};
use crate::loader::TemplateLoader;
use crate::renderer::{TemplateRenderer, Variables};

/// Writes `content` to `path`, creating any missing parent directories.
///
/// # Errors
/// * `Error::WriteFailure` if a directory or the file cannot be written
pub fn write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| write_failure(parent, source))?;
    }
    fs::write(path, content).map_err(|source| write_failure(path, source))
}

pub(crate) fn write_failure(path: &Path, source: io::Error) -> Error {
    Error::WriteFailure {
        path: path.to_path_buf(),
        source,
    }
}

/// Template loader and renderer pair used by the pipeline steps.
pub struct Templates {
    loader: Box<dyn TemplateLoader>,
    renderer: Box<dyn TemplateRenderer>,
}

impl Templates {
    pub fn new(loader: Box<dyn TemplateLoader>, renderer: Box<dyn TemplateRenderer>) -> Self {
        Self { loader, renderer }
    }

    /// Loads and renders a template to a string.
    pub fn render(&self, name: &str, variables: &Variables) -> Result<String> {
        let template = self.loader.load(name)?;
        self.renderer.render(&template, variables)
    }

    /// Renders a template and writes it to `target`.
    ///
    /// # Returns
    /// * `Result<PathBuf>` - The written path
    pub fn render_to<P: AsRef<Path>>(
        &self,
        name: &str,
        target: P,
        variables: &Variables,
    ) -> Result<PathBuf> {
        let target = target.as_ref();
        let content = self.render(name, variables)?;
        debug!("Writing '{}' from template '{}'", target.display(), name);
        write_file(target, &content)?;
        Ok(target.to_path_buf())
    }
}
