use crate::error::Result;
use crate::pipeline::{Context, Step};
use crate::runner::Invocation;

const DOTENV_FILES: [(&str, &str); 2] = [
    ("env/env", ".env"),
    ("env/env.example", ".env.example"),
];

/// Overwrites what `ng generate environments` produced.
const ENVIRONMENT_FILES: [(&str, &str); 2] = [
    ("env/environment.ts", "src/environments/environment.ts"),
    (
        "env/environment.development.ts",
        "src/environments/environment.development.ts",
    ),
];

pub struct Environments;

impl Step for Environments {
    fn name(&self) -> &str {
        "Configuring environments"
    }

    fn run(&self, ctx: &mut Context<'_>) -> Result<()> {
        ctx.render_all(&DOTENV_FILES)?;
        ctx.run(&Invocation::ng(["generate", "environments"], ctx.root()))?;
        ctx.render_all(&ENVIRONMENT_FILES)
    }
}
