use crate::error::Result;
use crate::pipeline::{Context, Step};

const DOCKER_FILES: [(&str, &str); 4] = [
    ("docker/Dockerfile", "Dockerfile"),
    ("docker/docker-compose.yml", "docker-compose.yml"),
    ("docker/nginx.conf", "nginx.conf"),
    ("docker/dockerignore", ".dockerignore"),
];

/// Multi-stage Docker build served by NGINX.
pub struct Docker;

impl Step for Docker {
    fn name(&self) -> &str {
        "Setting up Docker"
    }

    fn run(&self, ctx: &mut Context<'_>) -> Result<()> {
        ctx.render_all(&DOCKER_FILES)
    }
}
