//! User input and interaction handling.
//! The pipeline asks exactly two questions; answers only steer control flow.
//! Neither question has a default, so each one blocks until answered.
use std::fmt;

use dialoguer::{Confirm, Select};

use crate::error::{Error, Result};

/// Continuous-integration provider offered during project creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CiProvider {
    GitHub,
    GitLab,
}

impl CiProvider {
    pub const ALL: [CiProvider; 2] = [CiProvider::GitHub, CiProvider::GitLab];
}

impl fmt::Display for CiProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CiProvider::GitHub => write!(f, "GitHub Actions"),
            CiProvider::GitLab => write!(f, "GitLab CI"),
        }
    }
}

/// Trait for interactive prompts.
pub trait Prompter {
    /// Asks a yes/no question.
    fn confirm(&self, prompt: &str) -> Result<bool>;

    /// Asks the user to pick one of `items`, returning its index.
    fn select(&self, prompt: &str, items: &[String]) -> Result<usize>;
}

/// Terminal prompter backed by dialoguer.
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for DialoguerPrompter {
    fn confirm(&self, prompt: &str) -> Result<bool> {
        Confirm::new()
            .with_prompt(prompt)
            .interact()
            .map_err(|e| Error::PromptFailure(e.to_string()))
    }

    fn select(&self, prompt: &str, items: &[String]) -> Result<usize> {
        Select::new()
            .with_prompt(prompt)
            .items(items)
            .interact()
            .map_err(|e| Error::PromptFailure(e.to_string()))
    }
}

/// Asks whether the optional UI styling library should be installed.
pub fn ask_ui_library(prompt: &dyn Prompter) -> Result<bool> {
    prompt.confirm("Install PrimeNG (UI components, icons and PrimeFlex)?")
}

/// Asks which CI provider to configure.
pub fn ask_ci_provider(prompt: &dyn Prompter) -> Result<CiProvider> {
    let items: Vec<String> = CiProvider::ALL.iter().map(ToString::to_string).collect();
    let index = prompt.select("Which CI provider do you use?", &items)?;
    CiProvider::ALL
        .get(index)
        .copied()
        .ok_or_else(|| Error::PromptFailure(format!("no CI provider at index {index}")))
}
