//! Failure recovery.
//! When the pipeline aborts, the half-generated project directory is removed.
//! Nothing outside the project root is rolled back.
use std::fs;
use std::io;
use std::path::Path;

use log::{debug, error, warn};

use crate::error::{Error, Result};
use crate::output;
use crate::pipeline::{Context, Pipeline};

/// Result of removing the project directory after a failure.
#[derive(Debug)]
pub enum Cleanup {
    Removed,
    /// The directory was never created.
    NotPresent,
    Failed(Error),
}

/// Recursively removes `root`, tolerating its absence.
///
/// # Returns
/// * `Ok(true)` if the directory was removed, `Ok(false)` if it did not exist
pub fn remove_project_dir<P: AsRef<Path>>(root: P) -> Result<bool> {
    let root = root.as_ref();
    match fs::remove_dir_all(root) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(source) => Err(Error::DirectoryRemovalFailure {
            path: root.to_path_buf(),
            source,
        }),
    }
}

/// User-facing message for a failed project creation.
pub fn failure_message(project: &str, err: &Error) -> String {
    format!("Failed to create project '{project}': {err}")
}

/// Reports `err` and removes the project directory.
pub fn recover(project: &str, root: &Path, err: &Error) -> Cleanup {
    let message = failure_message(project, err);
    error!("{message}");
    output::failure(&message);

    match remove_project_dir(root) {
        Ok(true) => {
            let notice = format!("Removed incomplete project directory '{}'.", root.display());
            output::warning(&notice);
            Cleanup::Removed
        }
        Ok(false) => Cleanup::NotPresent,
        Err(cleanup_err) => {
            error!("{cleanup_err}");
            output::failure(&format!(
                "Cleanup failed, remove '{}' manually: {cleanup_err}",
                root.display()
            ));
            Cleanup::Failed(cleanup_err)
        }
    }
}

/// Runs `pipeline` and rolls the project directory back on failure.
///
/// The returned error is already reported; callers only need to turn it into
/// an exit status.
pub fn run_guarded(pipeline: &Pipeline<'_>, ctx: &mut Context<'_>) -> Result<()> {
    let Err(err) = pipeline.run(ctx) else {
        return Ok(());
    };

    let project = ctx.project.name.clone();
    let root = ctx.root();
    match recover(&project, root, &err) {
        Cleanup::Removed => debug!("Rolled back '{}'", root.display()),
        Cleanup::NotPresent => debug!("'{}' was never created", root.display()),
        Cleanup::Failed(_) => warn!("'{}' is left on disk", root.display()),
    }
    Err(Error::Aborted {
        project,
        source: Box::new(err),
    })
}
