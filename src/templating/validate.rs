//! Static checks for artifact and outer templates.
//!
//! Rendering is tolerant by design, so mistakes such as a misspelled
//! placeholder silently end up in the manifest. These checks surface them
//! without rendering anything.

use serde::Serialize;
use std::fmt;

use super::parser::Template;
use crate::constants::{ARTIFACT_PLACEHOLDERS, ARTIFACTS_PLACEHOLDER};

/// A problem found in a template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum TemplateIssue {
    /// Placeholder the artifact template cannot resolve; it is kept verbatim.
    UnknownPlaceholder {
        name: String,
    },
    /// More than one distinct conditional; only the first one is resolved.
    MultipleConditionals {
        prefixes: Vec<String>,
    },
    /// `{{ifClassifier:` without a closing `}}`; it is kept verbatim.
    UnterminatedConditional,
    /// The outer template never references the joined artifact text.
    MissingArtifactsPlaceholder,
    /// Conditionals are only resolved in the artifact template.
    ConditionalInMainTemplate,
}

impl fmt::Display for TemplateIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownPlaceholder {
                name,
            } => write!(
                f,
                "artifact template: unknown placeholder '{{{{{name}}}}}' (known: {})",
                ARTIFACT_PLACEHOLDERS.join(", ")
            ),
            Self::MultipleConditionals {
                prefixes,
            } => write!(
                f,
                "artifact template: {} distinct ifClassifier tokens; only the first ('{}') is resolved",
                prefixes.len(),
                prefixes.first().map_or("", String::as_str)
            ),
            Self::UnterminatedConditional => {
                write!(f, "artifact template: '{{{{ifClassifier:' is never closed with '}}}}'")
            }
            Self::MissingArtifactsPlaceholder => write!(
                f,
                "main template: no '{{{{{ARTIFACTS_PLACEHOLDER}}}}}' placeholder, artifacts will not appear"
            ),
            Self::ConditionalInMainTemplate => {
                write!(f, "main template: ifClassifier tokens are not resolved here")
            }
        }
    }
}

/// Check an artifact template and an outer template.
///
/// Issues are reported in a stable order: artifact template first, each
/// unknown placeholder once, in order of first appearance.
pub fn validate_templates(artifact_template: &str, main_template: &str) -> Vec<TemplateIssue> {
    let mut issues = Vec::new();

    let artifact = Template::parse(artifact_template);
    let mut seen: Vec<&str> = Vec::new();
    for name in artifact.placeholders() {
        if !ARTIFACT_PLACEHOLDERS.contains(&name) && !seen.contains(&name) {
            seen.push(name);
            issues.push(TemplateIssue::UnknownPlaceholder {
                name: name.to_string(),
            });
        }
    }

    let mut prefixes: Vec<String> = Vec::new();
    for prefix in artifact.conditionals() {
        if !prefixes.iter().any(|p| p == prefix) {
            prefixes.push(prefix.to_string());
        }
    }
    if prefixes.len() > 1 {
        issues.push(TemplateIssue::MultipleConditionals {
            prefixes,
        });
    }

    if artifact.has_unterminated_conditional() {
        issues.push(TemplateIssue::UnterminatedConditional);
    }

    let main = Template::parse(main_template);
    if !main.placeholders().any(|name| name == ARTIFACTS_PLACEHOLDER) {
        issues.push(TemplateIssue::MissingArtifactsPlaceholder);
    }
    if main.conditionals().next().is_some() || main.has_unterminated_conditional() {
        issues.push(TemplateIssue::ConditionalInMainTemplate);
    }

    for issue in &issues {
        tracing::warn!("{issue}");
    }

    issues
}
