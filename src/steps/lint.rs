//! ESLint and Prettier tooling.
use crate::constants::{ESLINT_SCHEMATICS, FORMAT_PACKAGES};
use crate::error::Result;
use crate::pipeline::{Context, Step};
use crate::runner::Invocation;

const LINT_FILES: [(&str, &str); 5] = [
    ("lint/eslint.config.js", "eslint.config.js"),
    ("lint/prettierrc.json", ".prettierrc.json"),
    ("lint/prettierignore", ".prettierignore"),
    ("lint/vscode-settings.json", ".vscode/settings.json"),
    ("lint/vscode-extensions.json", ".vscode/extensions.json"),
];

pub struct LintFormat;

impl Step for LintFormat {
    fn name(&self) -> &str {
        "Setting up ESLint and Prettier"
    }

    fn run(&self, ctx: &mut Context<'_>) -> Result<()> {
        let schematics = ["add", ESLINT_SCHEMATICS, "--skip-confirmation"];
        ctx.run(&Invocation::ng(schematics, ctx.root()))?;
        let packages = Invocation::npm_install(&FORMAT_PACKAGES, true, ctx.root());
        ctx.run(&packages)?;
        ctx.render_all(&LINT_FILES)
    }
}

/// Formats the generated sources once. Failure leaves the project usable.
pub struct FormatSources;

impl Step for FormatSources {
    fn name(&self) -> &str {
        "Formatting generated sources"
    }

    fn required(&self) -> bool {
        false
    }

    fn run(&self, ctx: &mut Context<'_>) -> Result<()> {
        let format = Invocation::new("npx", ["prettier", "--write", "."], ctx.root());
        ctx.run(&format)
    }
}
