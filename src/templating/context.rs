//! Values available to a template while it renders.

use std::collections::HashMap;

use crate::constants::ARTIFACTS_PLACEHOLDER;
use crate::core::ArtifactDescriptor;

/// Mapping from placeholder name to its resolved value, plus the classifier
/// that conditional tokens test against.
///
/// A template rendered without a classifier (`conditionals_enabled == false`)
/// leaves `{{ifClassifier:...}}` tokens in place, as the outer template does.
#[derive(Debug, Clone, Default)]
pub struct TemplateValues<'a> {
    values: HashMap<&'a str, &'a str>,
    classifier: Option<&'a str>,
}

impl<'a> TemplateValues<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Values of the per-artifact template.
    ///
    /// `{{classifier}}` resolves to the empty string for unclassified
    /// artifacts, and conditionals test the descriptor's own classifier.
    pub fn for_artifact(artifact: &'a ArtifactDescriptor) -> Self {
        let classifier = artifact.classifier_or_empty();
        Self::new()
            .with("groupId", &artifact.group_id)
            .with("artifactId", &artifact.artifact_id)
            .with("version", &artifact.version)
            .with("type", &artifact.artifact_type)
            .with("scope", &artifact.scope)
            .with("classifier", classifier)
            .with_classifier(classifier)
    }

    /// Values of the outer template: just the joined artifact text.
    pub fn for_main(joined: &'a str) -> Self {
        Self::new().with(ARTIFACTS_PLACEHOLDER, joined)
    }

    #[must_use]
    pub fn with(mut self, name: &'a str, value: &'a str) -> Self {
        self.values.insert(name, value);
        self
    }

    /// Enable conditional tokens, testing against `classifier`.
    #[must_use]
    pub fn with_classifier(mut self, classifier: &'a str) -> Self {
        self.classifier = Some(classifier);
        self
    }

    pub fn get(&self, name: &str) -> Option<&'a str> {
        self.values.get(name).copied()
    }

    pub fn conditionals_enabled(&self) -> bool {
        self.classifier.is_some()
    }

    /// Text replacing the active `{{ifClassifier:<prefix>}}` token.
    ///
    /// Empty when there is no classifier, otherwise the prefix alone: the
    /// classifier itself comes from the `{{classifier}}` placeholder that
    /// conventionally follows the token.
    pub fn resolve_conditional<'p>(&self, prefix: &'p str) -> Option<&'p str> {
        match self.classifier {
            None => None,
            Some("") => Some(""),
            Some(_) => Some(prefix),
        }
    }
}
