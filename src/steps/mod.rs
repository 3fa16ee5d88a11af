//! The project-creation steps, in the order they run.
pub mod ci;
pub mod docker;
pub mod environment;
pub mod i18n;
pub mod lint;
pub mod scaffold;
pub mod structure;
pub mod ui;

use crate::pipeline::Pipeline;

/// Full `create` sequence.
pub fn default_pipeline() -> Pipeline<'static> {
    Pipeline::new()
        .step(scaffold::Scaffold)
        .step(scaffold::ManifestScripts)
        .step(scaffold::AssetsGlob)
        .step(ui::UiLibrary)
        .step(ci::ContinuousIntegration)
        .step(docker::Docker)
        .step(environment::Environments)
        .step(lint::LintFormat)
        .step(ci::PullRequestTemplate)
        .step(structure::FolderStructure::default())
        .step(i18n::Internationalization)
        .step(lint::FormatSources)
}
