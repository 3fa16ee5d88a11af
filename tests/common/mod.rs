#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitStatus;

use ngforge::error::{Error, Result};
use ngforge::loader::LocalLoader;
use ngforge::prompt::Prompter;
use ngforge::renderer::{PlaceholderRenderer, Substitution};
use ngforge::runner::{CommandRunner, Invocation};
use ngforge::template::Templates;
use serde_json::json;
use walkdir::WalkDir;

pub const GLOBAL_STYLES: &str = "/* Global styles */\n";

pub fn bundled_template_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("templates")
}

pub fn templates_from<P: AsRef<Path>>(root: P) -> Templates {
    Templates::new(
        Box::new(LocalLoader::new(root.as_ref().to_path_buf())),
        Box::new(PlaceholderRenderer::new(Substitution::Lenient)),
    )
}

pub fn bundled_templates() -> Templates {
    templates_from(bundled_template_root())
}

/// Copies the bundled templates so a test can remove some of them.
pub fn copy_templates<P: AsRef<Path>>(dest: P) {
    let src = bundled_template_root();
    for entry in WalkDir::new(&src) {
        let entry = entry.unwrap();
        let rel = entry.path().strip_prefix(&src).unwrap();
        let target = dest.as_ref().join(rel);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).unwrap();
        } else {
            fs::copy(entry.path(), &target).unwrap();
        }
    }
}

#[cfg(unix)]
fn failed_status() -> ExitStatus {
    use std::os::unix::process::ExitStatusExt;
    ExitStatus::from_raw(1 << 8)
}

#[cfg(windows)]
fn failed_status() -> ExitStatus {
    use std::os::windows::process::ExitStatusExt;
    ExitStatus::from_raw(1)
}

/// Writes the subset of an `ng new` workspace the steps touch.
pub fn fake_angular_workspace(root: &Path, name: &str) -> io::Result<()> {
    fs::create_dir_all(root.join("src/app"))?;
    fs::create_dir_all(root.join("public"))?;

    let package = json!({
        "name": name,
        "version": "0.0.0",
        "scripts": {
            "ng": "ng",
            "start": "ng serve",
            "build": "ng build",
            "watch": "ng build --watch --configuration development",
            "test": "ng test"
        },
        "private": true,
        "dependencies": { "@angular/core": "^19.0.0" }
    });
    let package = serde_json::to_string_pretty(&package)?;
    fs::write(root.join("package.json"), package)?;

    let workspace = json!({
        "$schema": "./node_modules/@angular/cli/lib/config/schema.json",
        "version": 1,
        "newProjectRoot": "projects",
        "projects": {
            name: {
                "projectType": "application",
                "root": "",
                "sourceRoot": "src",
                "prefix": "app",
                "architect": {
                    "build": {
                        "builder": "@angular-devkit/build-angular:application",
                        "options": {
                            "outputPath": format!("dist/{name}"),
                            "index": "src/index.html",
                            "assets": [{ "glob": "**/*", "input": "public" }],
                            "styles": ["src/styles.scss"]
                        },
                        "configurations": {
                            "production": { "outputHashing": "all" }
                        }
                    },
                    "serve": { "builder": "@angular-devkit/build-angular:dev-server" }
                }
            }
        }
    });
    let workspace = serde_json::to_string_pretty(&workspace)?;
    fs::write(root.join("angular.json"), workspace)?;

    let sources = [
        ("src/styles.scss", GLOBAL_STYLES),
        ("src/main.ts", "bootstrapApplication(AppComponent);\n"),
        ("src/app/app.config.ts", "export const appConfig = {};\n"),
        ("src/app/app.routes.ts", "export const routes = [];\n"),
        ("src/app/app.component.ts", "export class AppComponent {}\n"),
        ("src/app/app.component.html", "<router-outlet />\n"),
    ];
    for (path, content) in sources {
        fs::write(root.join(path), content)?;
    }
    Ok(())
}

/// Records invocations instead of spawning processes. `ng new` is simulated
/// by writing a minimal workspace.
#[derive(Default)]
pub struct FakeRunner {
    pub invocations: RefCell<Vec<Invocation>>,
    /// Fails any invocation whose command line contains this text.
    pub fail_on: Option<String>,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on<S: Into<String>>(pattern: S) -> Self {
        Self {
            fail_on: Some(pattern.into()),
            ..Self::default()
        }
    }

    pub fn commands(&self) -> Vec<String> {
        let invocations = self.invocations.borrow();
        invocations.iter().map(ToString::to_string).collect()
    }

    pub fn ran(&self, pattern: &str) -> bool {
        self.commands().iter().any(|c| c.contains(pattern))
    }
}

impl CommandRunner for FakeRunner {
    fn run(&self, invocation: &Invocation) -> Result<()> {
        self.invocations.borrow_mut().push(invocation.clone());
        let command = invocation.to_string();

        if let Some(pattern) = &self.fail_on {
            if command.contains(pattern.as_str()) {
                return Err(Error::ExternalProcessFailure {
                    command,
                    status: failed_status(),
                });
            }
        }

        if let Some(pos) = invocation.args.iter().position(|a| a == "new") {
            let name = &invocation.args[pos + 1];
            fake_angular_workspace(&invocation.cwd.join(name), name)?;
        }
        Ok(())
    }
}

/// Answers prompts from fixed values and counts the questions asked.
pub struct ScriptedPrompter {
    pub ui_library: bool,
    pub ci_index: usize,
    pub asked: Cell<usize>,
}

impl ScriptedPrompter {
    pub fn new(ui_library: bool, ci_index: usize) -> Self {
        Self {
            ui_library,
            ci_index,
            asked: Cell::new(0),
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn confirm(&self, _prompt: &str) -> Result<bool> {
        self.asked.set(self.asked.get() + 1);
        Ok(self.ui_library)
    }

    fn select(&self, _prompt: &str, items: &[String]) -> Result<usize> {
        self.asked.set(self.asked.get() + 1);
        assert!(self.ci_index < items.len());
        Ok(self.ci_index)
    }
}

/// Asserts that every directory under `root` has at least one entry.
pub fn assert_no_empty_dirs<P: AsRef<Path>>(root: P) {
    for entry in WalkDir::new(root.as_ref()) {
        let entry = entry.unwrap();
        if entry.file_type().is_dir() {
            let mut children = fs::read_dir(entry.path()).unwrap();
            assert!(
                children.next().is_some(),
                "'{}' is empty",
                entry.path().display()
            );
        }
    }
}
