//! The `create` command.
use std::path::Path;

use log::info;

use crate::error::Result;
use crate::output;
use crate::pipeline::{Context, Pipeline};
use crate::project::Project;
use crate::prompt::Prompter;
use crate::recovery::run_guarded;
use crate::runner::CommandRunner;
use crate::template::Templates;

/// Creates project `name` under `parent` by running `pipeline`.
///
/// Name validation and the existing-directory check happen before any step
/// runs, so a rollback can only ever remove a directory this run created.
///
/// # Errors
/// * `Error::InvalidProjectName` / `Error::ProjectExists` before anything is written
/// * `Error::Aborted` after a failed step has been reported and rolled back
pub fn create_project<P: AsRef<Path>>(
    name: &str,
    parent: P,
    pipeline: &Pipeline<'_>,
    templates: &Templates,
    runner: &dyn CommandRunner,
    prompt: &dyn Prompter,
) -> Result<Project> {
    let project = Project::new(name, parent.as_ref())?;
    project.ensure_absent()?;

    info!(
        "Creating '{}' in '{}'",
        project.name,
        project.parent.display()
    );
    let mut ctx = Context::new(project, templates, runner, prompt);
    run_guarded(pipeline, &mut ctx)?;

    output::success(&format!(
        "Project '{}' created in '{}'.",
        ctx.project.name,
        ctx.root().display()
    ));
    println!("\nNext steps:\n  cd {}\n  npm start", ctx.project.name);
    Ok(ctx.project)
}
