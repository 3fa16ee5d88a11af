//! Error handling for the ngforge application.
//! Defines the error taxonomy shared by the renderer, the tree builder,
//! the pipeline steps and the failure recovery.

use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Custom error types for ngforge operations.
#[derive(Error, Debug)]
pub enum Error {
    /// A delegated tool (Angular CLI, npm, npx) exited unsuccessfully.
    #[error("Command `{command}` failed with {status}.")]
    ExternalProcessFailure { command: String, status: ExitStatus },

    /// A delegated tool could not be started at all.
    #[error("Command `{command}` could not be started: {source}.")]
    SpawnFailure { command: String, source: io::Error },

    /// The source template could not be read.
    #[error("Template '{}' not found: {source}.", path.display())]
    TemplateNotFound { path: PathBuf, source: io::Error },

    /// Rendered output could not be written.
    #[error("Failed to write '{}': {source}.", path.display())]
    WriteFailure { path: PathBuf, source: io::Error },

    /// A generated JSON configuration file is unreadable or malformed.
    #[error("Failed to parse '{}': {reason}.", path.display())]
    ConfigParseFailure { path: PathBuf, reason: String },

    /// The project directory could not be removed during rollback.
    #[error("Failed to remove '{}': {source}.", path.display())]
    DirectoryRemovalFailure { path: PathBuf, source: io::Error },

    /// A pipeline step failed. Carries the step name for reporting.
    #[error("Step '{step}' failed: {source}")]
    StepFailure { step: String, source: Box<Error> },

    /// The pipeline was aborted and rolled back. The cause has already been reported.
    #[error("Project '{project}' was not created.")]
    Aborted { project: String, source: Box<Error> },

    /// Strict substitution met a placeholder with no value.
    #[error("Template variable '{name}' is not defined.")]
    MissingVariable { name: String },

    #[error("Directory '{}' already exists.", path.display())]
    ProjectExists { path: PathBuf },

    #[error("Invalid project name '{name}': must start with a letter and contain only letters, digits, dots and dashes.")]
    InvalidProjectName { name: String },

    #[error("Required tool '{tool}' was not found in PATH.")]
    ToolNotFound { tool: String },

    /// Represents failures of the interactive prompt backend
    #[error("Prompt error: {0}.")]
    PromptFailure(String),

    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),
}

impl Error {
    /// Returns the innermost error, unwrapping any step annotations.
    pub fn root_cause(&self) -> &Error {
        match self {
            Error::StepFailure { source, .. } | Error::Aborted { source, .. } => {
                source.root_cause()
            }
            other => other,
        }
    }
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) -> ! {
    eprintln!("{err}");
    std::process::exit(1);
}
