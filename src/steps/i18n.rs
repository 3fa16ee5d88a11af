//! Internationalization with ngx-translate.
use crate::constants::I18N_PACKAGES;
use crate::error::Result;
use crate::pipeline::{Context, Step};
use crate::runner::Invocation;

const LOADER_FILE: (&str, &str) = (
    "i18n/translate-loader.ts",
    "src/app/core/i18n/translate-loader.ts",
);

/// Default locale resource; carries the brand name.
const LOCALE_FILE: (&str, &str) = ("i18n/en.json", "src/assets/i18n/en.json");

/// Application sources rewritten to register the translation providers.
const APP_FILES: [(&str, &str); 3] = [
    ("i18n/app.config.ts", "src/app/app.config.ts"),
    ("i18n/app.component.ts", "src/app/app.component.ts"),
    ("i18n/app.component.html", "src/app/app.component.html"),
];

pub struct Internationalization;

impl Step for Internationalization {
    fn name(&self) -> &str {
        "Setting up internationalization"
    }

    fn run(&self, ctx: &mut Context<'_>) -> Result<()> {
        let packages = Invocation::npm_install(&I18N_PACKAGES, false, ctx.root());
        ctx.run(&packages)?;
        ctx.render_all(&[LOADER_FILE, LOCALE_FILE])?;
        ctx.render_all(&APP_FILES)
    }
}
