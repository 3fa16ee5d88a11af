//! Base project scaffolding and the edits to the generated JSON configuration.
use log::info;
use serde_json::Value;

use crate::constants::{ANGULAR_CLI_VERSION, ASSETS_INPUT, ASSETS_OUTPUT, MANIFEST_SCRIPTS};
use crate::error::Result;
use crate::manifest::{add_asset, assets_glob, read_json, set_scripts, write_json};
use crate::pipeline::{Context, Step};
use crate::runner::Invocation;

/// Runs `ng new` through npx with a pinned CLI version.
pub struct Scaffold;

impl Scaffold {
    pub fn invocation(ctx: &Context<'_>) -> Invocation {
        Invocation::new(
            "npx",
            [
                "--yes".to_string(),
                format!("@angular/cli@{ANGULAR_CLI_VERSION}"),
                "new".to_string(),
                ctx.project.name.clone(),
                "--style=scss".to_string(),
                "--routing".to_string(),
                "--ssr=false".to_string(),
                "--skip-tests=false".to_string(),
            ],
            &ctx.project.parent,
        )
    }
}

impl Step for Scaffold {
    fn name(&self) -> &str {
        "Scaffolding Angular project"
    }

    fn run(&self, ctx: &mut Context<'_>) -> Result<()> {
        ctx.run(&Self::invocation(ctx))
    }
}

/// Rewrites the `scripts` section of `package.json`.
pub struct ManifestScripts;

impl Step for ManifestScripts {
    fn name(&self) -> &str {
        "Configuring npm scripts"
    }

    fn run(&self, ctx: &mut Context<'_>) -> Result<()> {
        let path = ctx.project.path("package.json");
        let mut manifest: Value = read_json(&path)?;
        if set_scripts(&mut manifest, &MANIFEST_SCRIPTS) {
            write_json(&path, &manifest)?;
        }
        Ok(())
    }
}

/// Adds the `src/assets` glob to the build assets in `angular.json`.
pub struct AssetsGlob;

impl Step for AssetsGlob {
    fn name(&self) -> &str {
        "Registering assets folder"
    }

    fn run(&self, ctx: &mut Context<'_>) -> Result<()> {
        let path = ctx.project.path("angular.json");
        let mut config: Value = read_json(&path)?;
        let entry = assets_glob(ASSETS_INPUT, ASSETS_OUTPUT);
        if add_asset(&mut config, &ctx.project.name, entry) {
            write_json(&path, &config)?;
        } else {
            info!("angular.json left unchanged");
        }
        Ok(())
    }
}
