//! Placeholder substitution for ngforge templates.
//! Templates use `{{identifier}}` tokens; anything else, including CI
//! expressions such as `${{ secrets.TOKEN }}`, passes through untouched.
use std::sync::LazyLock;

use indexmap::IndexMap;
use log::debug;
use regex::{Captures, Regex};

use crate::error::{Error, Result};

/// Flat variable mapping used while rendering templates.
pub type Variables = IndexMap<String, String>;

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{(\w+)\}\}").expect("placeholder pattern is valid"));

/// How placeholders without a value are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Substitution {
    /// Unknown placeholders render as the empty string.
    #[default]
    Lenient,
    /// Unknown placeholders fail with [`Error::MissingVariable`].
    Strict,
}

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given variables.
    ///
    /// # Arguments
    /// * `template` - Template text to render
    /// * `variables` - Values for the placeholders
    ///
    /// # Returns
    /// * `Result<String>` - Rendered text
    fn render(&self, template: &str, variables: &Variables) -> Result<String>;
}

/// Regex-based renderer for `{{identifier}}` placeholders.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderRenderer {
    substitution: Substitution,
}

impl PlaceholderRenderer {
    pub fn new(substitution: Substitution) -> Self {
        Self { substitution }
    }

    /// Returns the distinct placeholder names in order of first appearance.
    pub fn placeholders(template: &str) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for caps in PLACEHOLDER.captures_iter(template) {
            let name = &caps[1];
            if !names.iter().any(|n| n == name) {
                names.push(name.to_string());
            }
        }
        names
    }
}

impl TemplateRenderer for PlaceholderRenderer {
    fn render(&self, template: &str, variables: &Variables) -> Result<String> {
        if self.substitution == Substitution::Strict {
            if let Some(name) = Self::placeholders(template)
                .into_iter()
                .find(|name| !variables.contains_key(name))
            {
                return Err(Error::MissingVariable { name });
            }
        }

        let rendered = PLACEHOLDER.replace_all(template, |caps: &Captures| {
            match variables.get(&caps[1]) {
                Some(value) => value.clone(),
                None => {
                    debug!("No value for placeholder '{}', rendering it empty", &caps[1]);
                    String::new()
                }
            }
        });

        Ok(rendered.into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Variables {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn placeholders_are_listed_once_in_order() {
        let names = PlaceholderRenderer::placeholders("{{b}} {{a}} {{b}} {{ c }}");
        assert_eq!(names, vec!["b".to_string(), "a".to_string()]);
    }

    #[test]
    fn strict_mode_rejects_unknown_placeholder() {
        let renderer = PlaceholderRenderer::new(Substitution::Strict);
        let err = renderer
            .render("{{known}} {{unknown}}", &vars(&[("known", "x")]))
            .unwrap_err();
        assert!(matches!(err, Error::MissingVariable { name } if name == "unknown"));
    }

    #[test]
    fn strict_mode_renders_when_complete() {
        let renderer = PlaceholderRenderer::new(Substitution::Strict);
        let out = renderer
            .render("{{a}}-{{a}}", &vars(&[("a", "1")]))
            .unwrap();
        assert_eq!(out, "1-1");
    }
}
