//! External process execution.
//! Every delegated tool runs with inherited standard streams in an explicit
//! working directory; a non-zero exit is a failure.
use std::fmt;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use log::debug;

use crate::error::{Error, Result};

/// A single external command to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
}

impl Invocation {
    pub fn new<S, I, A, P>(program: S, args: I, cwd: P) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = A>,
        A: Into<String>,
        P: Into<PathBuf>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            cwd: cwd.into(),
        }
    }

    /// `npm install [--save-dev] <packages>` in `cwd`.
    pub fn npm_install<P: Into<PathBuf>>(packages: &[&str], dev: bool, cwd: P) -> Self {
        let mut args = vec!["install".to_string()];
        if dev {
            args.push("--save-dev".to_string());
        }
        args.extend(packages.iter().map(|p| p.to_string()));
        Self::new("npm", args, cwd)
    }

    /// `npx ng <args>` in `cwd`, using the project's local Angular CLI.
    pub fn ng<I, A, P>(args: I, cwd: P) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<String>,
        P: Into<PathBuf>,
    {
        let mut all = vec!["ng".to_string()];
        all.extend(args.into_iter().map(Into::into));
        Self::new("npx", all, cwd)
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Trait for running external processes.
pub trait CommandRunner {
    /// Runs `invocation` to completion.
    ///
    /// # Errors
    /// * `Error::SpawnFailure` if the program cannot be started
    /// * `Error::ExternalProcessFailure` if it exits unsuccessfully
    fn run(&self, invocation: &Invocation) -> Result<()>;
}

/// Runs commands as real child processes.
#[derive(Debug, Default)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, invocation: &Invocation) -> Result<()> {
        debug!("Running `{}` in '{}'", invocation, invocation.cwd.display());

        // Resolves `npm.cmd`/`npx.cmd` shims on Windows.
        let program = match which::which(&invocation.program) {
            Ok(path) => path,
            Err(_) => PathBuf::from(&invocation.program),
        };

        let status = Command::new(program)
            .args(&invocation.args)
            .current_dir(&invocation.cwd)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| Error::SpawnFailure {
                command: invocation.to_string(),
                source,
            })?;

        if !status.success() {
            return Err(Error::ExternalProcessFailure {
                command: invocation.to_string(),
                status,
            });
        }
        Ok(())
    }
}

/// Ensures every tool in `tools` resolves on `PATH`.
pub fn check_tools(tools: &[&str]) -> Result<()> {
    for tool in tools {
        let path = which::which(tool).map_err(|_| Error::ToolNotFound {
            tool: tool.to_string(),
        })?;
        debug!("Found '{}' at '{}'", tool, path.display());
    }
    Ok(())
}
