//! Runtime settings for ngforge.
//! Settings come from the environment; the CLI itself only takes the project
//! name.
use std::env;
use std::path::{Path, PathBuf};

use log::debug;

use crate::constants::{STRICT_TEMPLATES_ENV, TEMPLATES_DIR, TEMPLATES_ENV};
use crate::renderer::Substitution;

#[derive(Debug, Clone)]
pub struct Settings {
    /// Directory holding the template files.
    pub template_root: PathBuf,
    pub substitution: Substitution,
}

impl Settings {
    /// Resolves settings from the process environment.
    pub fn from_env() -> Self {
        let template_root = resolve_template_root(env::var_os(TEMPLATES_ENV).map(PathBuf::from));
        let substitution = parse_substitution(env::var(STRICT_TEMPLATES_ENV).ok().as_deref());
        debug!(
            "Using templates from '{}' ({:?})",
            template_root.display(),
            substitution
        );
        Self {
            template_root,
            substitution,
        }
    }
}

/// Picks the template root: an explicit override, then a `templates`
/// directory next to the executable, then the bundled crate templates.
pub fn resolve_template_root(explicit: Option<PathBuf>) -> PathBuf {
    if let Some(path) = explicit {
        return path;
    }

    let beside_exe = env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(TEMPLATES_DIR)));
    if let Some(dir) = beside_exe.filter(|dir| dir.is_dir()) {
        return dir;
    }

    Path::new(env!("CARGO_MANIFEST_DIR")).join(TEMPLATES_DIR)
}

/// `1`, `true`, `yes` and `on` select strict substitution.
pub fn parse_substitution(value: Option<&str>) -> Substitution {
    match value.map(|v| v.trim().to_ascii_lowercase()) {
        Some(v) if matches!(v.as_str(), "1" | "true" | "yes" | "on") => Substitution::Strict,
        _ => Substitution::Lenient,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_substitution() {
        assert_eq!(parse_substitution(None), Substitution::Lenient);
        assert_eq!(parse_substitution(Some("0")), Substitution::Lenient);
        assert_eq!(parse_substitution(Some("TRUE")), Substitution::Strict);
        assert_eq!(parse_substitution(Some(" 1 ")), Substitution::Strict);
    }

    #[test]
    fn test_explicit_template_root_wins() {
        let root = resolve_template_root(Some(PathBuf::from("/opt/templates")));
        assert_eq!(root, PathBuf::from("/opt/templates"));
    }

    #[test]
    fn test_bundled_template_root_exists() {
        assert!(resolve_template_root(None).join("docker/Dockerfile").is_file());
    }
}
