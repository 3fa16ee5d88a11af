use std::fs;
use std::io;

use log::info;

use crate::constants::{STYLES_FILE, UI_LIBRARY_PACKAGES};
use crate::error::Result;
use crate::pipeline::{Context, Step};
use crate::prompt::ask_ui_library;
use crate::runner::Invocation;
use crate::template::{write_failure, write_file};

const STYLE_IMPORTS_TEMPLATE: &str = "ui/primeng.scss";

/// Optionally installs PrimeNG and imports its styles globally.
pub struct UiLibrary;

impl Step for UiLibrary {
    fn name(&self) -> &str {
        "Setting up UI library"
    }

    fn run(&self, ctx: &mut Context<'_>) -> Result<()> {
        let install = ask_ui_library(ctx.prompt)?;
        if !install {
            info!("UI library declined");
            return Ok(());
        }

        let packages = Invocation::npm_install(&UI_LIBRARY_PACKAGES, false, ctx.root());
        ctx.run(&packages)?;

        let variables = &ctx.project.variables;
        let imports = ctx.templates.render(STYLE_IMPORTS_TEMPLATE, variables)?;
        let styles_path = ctx.project.path(STYLES_FILE);
        let existing = match fs::read_to_string(&styles_path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => String::new(),
            Err(source) => return Err(write_failure(&styles_path, source)),
        };
        write_file(&styles_path, &format!("{imports}{existing}"))
    }
}
