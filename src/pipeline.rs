//! Step orchestration.
//! A [`Pipeline`] runs its steps strictly in order against one [`Context`]
//! and stops at the first failure of a required step.
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::error::{Error, Result};
use crate::output;
use crate::project::Project;
use crate::prompt::Prompter;
use crate::runner::{CommandRunner, Invocation};
use crate::template::Templates;

/// Everything a step needs: the project plus the collaborators it may use.
pub struct Context<'a> {
    pub project: Project,
    pub templates: &'a Templates,
    pub runner: &'a dyn CommandRunner,
    pub prompt: &'a dyn Prompter,
}

impl<'a> Context<'a> {
    pub fn new(
        project: Project,
        templates: &'a Templates,
        runner: &'a dyn CommandRunner,
        prompt: &'a dyn Prompter,
    ) -> Self {
        Self {
            project,
            templates,
            runner,
            prompt,
        }
    }

    pub fn root(&self) -> &Path {
        &self.project.root
    }

    /// Renders `template` to `target`, relative to the project root.
    pub fn render<P: AsRef<Path>>(&self, template: &str, target: P) -> Result<PathBuf> {
        let target = self.project.path(target);
        let variables = &self.project.variables;
        self.templates.render_to(template, target, variables)
    }

    /// Renders a list of `(template, target)` pairs in order.
    pub fn render_all(&self, pairs: &[(&str, &str)]) -> Result<()> {
        for (template, target) in pairs {
            self.render(template, target)?;
        }
        Ok(())
    }

    /// Runs an external command.
    pub fn run(&self, invocation: &Invocation) -> Result<()> {
        self.runner.run(invocation)
    }
}

/// One named unit of the project-creation sequence.
pub trait Step {
    fn name(&self) -> &str;

    /// Whether a failure aborts the pipeline. Optional steps only warn.
    fn required(&self) -> bool {
        true
    }

    fn run(&self, ctx: &mut Context<'_>) -> Result<()>;
}

/// Step backed by a closure.
pub struct FnStep<F> {
    name: String,
    required: bool,
    action: F,
}

impl<F> FnStep<F>
where
    F: Fn(&mut Context<'_>) -> Result<()>,
{
    pub fn new<S: Into<String>>(name: S, action: F) -> Self {
        Self {
            name: name.into(),
            required: true,
            action,
        }
    }

    pub fn optional<S: Into<String>>(name: S, action: F) -> Self {
        Self {
            name: name.into(),
            required: false,
            action,
        }
    }
}

impl<F> Step for FnStep<F>
where
    F: Fn(&mut Context<'_>) -> Result<()>,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn required(&self) -> bool {
        self.required
    }

    fn run(&self, ctx: &mut Context<'_>) -> Result<()> {
        (self.action)(ctx)
    }
}

#[derive(Default)]
pub struct Pipeline<'s> {
    steps: Vec<Box<dyn Step + 's>>,
}

impl<'s> Pipeline<'s> {
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    pub fn step<S: Step + 's>(mut self, step: S) -> Self {
        self.steps.push(Box::new(step));
        self
    }

    pub fn names(&self) -> Vec<&str> {
        self.steps.iter().map(|s| s.name()).collect()
    }

    /// Runs every step in order.
    ///
    /// # Errors
    /// * `Error::StepFailure` wrapping the first failure of a required step;
    ///   no later step runs
    pub fn run(&self, ctx: &mut Context<'_>) -> Result<()> {
        let total = self.steps.len();
        for (index, step) in self.steps.iter().enumerate() {
            let name = step.name();
            info!("[{}/{}] {}", index + 1, total, name);
            output::step(name);

            match step.run(ctx) {
                Ok(()) => debug!("Step '{name}' finished"),
                Err(err) if !step.required() => {
                    warn!("Optional step '{name}' failed: {err}");
                    output::warning(&format!("{name} skipped: {err}"));
                }
                Err(err) => {
                    return Err(Error::StepFailure {
                        step: name.to_string(),
                        source: Box::new(err),
                    });
                }
            }
        }
        Ok(())
    }
}
