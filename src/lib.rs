//! ngforge generates pre-configured Angular projects.
//! It delegates to the Angular CLI and npm, renders its own templates into the
//! new project and removes the project directory again if any step fails.

/// Command-line interface module for the ngforge application
pub mod cli;

/// Runtime settings resolved from the environment
pub mod config;

/// Pinned versions, package lists and the folder layout
pub mod constants;

/// The `create` command
pub mod create;

/// Error types and handling for the ngforge application
pub mod error;

/// Template loading from the template root
pub mod loader;

/// Typed views over package.json and angular.json
pub mod manifest;

/// Colored status output
pub mod output;

/// Step abstraction and the orchestrator loop
pub mod pipeline;

/// Project name, root and template variables
pub mod project;

/// User input and interaction handling
pub mod prompt;

/// Rollback of the project directory after a failure
pub mod recovery;

/// `{{placeholder}}` substitution
pub mod renderer;

/// External process execution
pub mod runner;

/// The concrete project-creation steps
pub mod steps;

/// Rendering templates into generated files
pub mod template;

/// Folder layout materialization
pub mod tree;
