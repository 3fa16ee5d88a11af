//! CI/CD pipelines and the pull-request template.
use crate::error::Result;
use crate::pipeline::{Context, Step};
use crate::prompt::{ask_ci_provider, CiProvider};

static GITHUB_FILES: [(&str, &str); 2] = [
    ("ci/github/ci.yml", ".github/workflows/ci.yml"),
    ("ci/github/cd.yml", ".github/workflows/cd.yml"),
];

static GITLAB_FILES: [(&str, &str); 1] = [("ci/gitlab/gitlab-ci.yml", ".gitlab-ci.yml")];

/// Files rendered for a provider. GitLab keeps CI and deployment in one file.
pub fn provider_files(provider: CiProvider) -> &'static [(&'static str, &'static str)] {
    match provider {
        CiProvider::GitHub => &GITHUB_FILES,
        CiProvider::GitLab => &GITLAB_FILES,
    }
}

pub struct ContinuousIntegration;

impl Step for ContinuousIntegration {
    fn name(&self) -> &str {
        "Setting up CI/CD"
    }

    fn run(&self, ctx: &mut Context<'_>) -> Result<()> {
        let provider = ask_ci_provider(ctx.prompt)?;
        ctx.render_all(provider_files(provider))
    }
}

pub struct PullRequestTemplate;

impl Step for PullRequestTemplate {
    fn name(&self) -> &str {
        "Adding pull request template"
    }

    fn run(&self, ctx: &mut Context<'_>) -> Result<()> {
        ctx.render(
            "github/pull_request_template.md",
            ".github/pull_request_template.md",
        )?;
        Ok(())
    }
}
