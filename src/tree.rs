//! Project tree materialization.
//! Creates the modular source layout and seeds every directory with a marker
//! file so version control keeps it.
use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::constants::{
    DECLARATIONS_DIR, DECLARATIONS_FILE, DECLARATIONS_STUB, FOLDER_STRUCTURE, MARKER_FILE,
};
use crate::error::Result;
use crate::template::{write_failure, write_file};

/// Ordered set of relative directories plus the one that receives a
/// declaration stub instead of an empty marker.
#[derive(Debug, Clone)]
pub struct FolderSpec {
    pub folders: Vec<PathBuf>,
    pub declarations: Option<PathBuf>,
}

impl FolderSpec {
    pub fn new<I, P>(folders: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            folders: folders.into_iter().map(Into::into).collect(),
            declarations: None,
        }
    }

    pub fn with_declarations<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.declarations = Some(dir.into());
        self
    }

    /// Marker file path and content for a folder.
    fn marker_for(&self, folder: &Path) -> (PathBuf, &'static str) {
        if self.declarations.as_deref() == Some(folder) {
            (folder.join(DECLARATIONS_FILE), DECLARATIONS_STUB)
        } else {
            (folder.join(MARKER_FILE), "")
        }
    }
}

impl Default for FolderSpec {
    fn default() -> Self {
        FolderSpec::new(FOLDER_STRUCTURE).with_declarations(DECLARATIONS_DIR)
    }
}

/// Creates every folder of `spec` under `root` and seeds its marker file.
///
/// Existing directories and markers are left untouched, so building the
/// same tree twice is a no-op.
///
/// # Returns
/// * `Result<Vec<PathBuf>>` - Marker files written by this call
pub fn build_tree<P: AsRef<Path>>(root: P, spec: &FolderSpec) -> Result<Vec<PathBuf>> {
    let root = root.as_ref();
    let mut written = Vec::new();

    for folder in &spec.folders {
        let dir = root.join(folder);
        fs::create_dir_all(&dir).map_err(|source| write_failure(&dir, source))?;

        let (marker, content) = spec.marker_for(folder);
        let marker = root.join(marker);
        if marker.exists() {
            debug!("Marker '{}' already present", marker.display());
            continue;
        }
        write_file(&marker, content)?;
        written.push(marker);
    }

    Ok(written)
}
