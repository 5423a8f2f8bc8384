//! Resolved artifact descriptors.
//!
//! An [`ArtifactDescriptor`] is one entry of the resolved dependency set: the
//! coordinates the resolver settled on for a single artifact. Descriptors are
//! immutable once built and carry a natural total order used to render
//! manifests deterministically.
//!
//! # Ordering
//!
//! Descriptors sort by group id, artifact id, version, classifier and type,
//! in that precedence. Versions compare through
//! [`VersionComparator::compare`] so that `1.10` sorts after `1.9`. Artifacts
//! without a classifier sort before classified ones. Scope only breaks ties
//! between otherwise identical descriptors, which keeps the order total.
//!
//! ```rust
//! use deptemplate_cli::core::ArtifactDescriptor;
//!
//! let mut artifacts = vec![
//!     ArtifactDescriptor::new("com.x", "lib", "1.10", "jar", "compile"),
//!     ArtifactDescriptor::new("com.x", "lib", "1.9", "jar", "compile"),
//! ];
//! artifacts.sort();
//! assert_eq!(artifacts[0].version, "1.9");
//! ```

use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

use crate::version::VersionComparator;

/// One resolved dependency artifact.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ArtifactDescriptor {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    /// Packaging type, e.g. `jar` or `pom`.
    pub artifact_type: String,
    /// Resolution scope, e.g. `compile` or `runtime`.
    pub scope: String,
    /// Secondary qualifier such as `sources` or `tests`. Never `Some("")`.
    pub classifier: Option<String>,
}

impl ArtifactDescriptor {
    /// Build an unclassified descriptor.
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
        artifact_type: impl Into<String>,
        scope: impl Into<String>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: version.into(),
            artifact_type: artifact_type.into(),
            scope: scope.into(),
            classifier: None,
        }
    }

    /// Set the classifier. An empty string clears it.
    #[must_use]
    pub fn with_classifier(mut self, classifier: impl Into<String>) -> Self {
        let classifier = classifier.into();
        self.classifier = if classifier.is_empty() {
            None
        } else {
            Some(classifier)
        };
        self
    }

    /// The classifier, or the empty string when the artifact has none.
    pub fn classifier_or_empty(&self) -> &str {
        self.classifier.as_deref().unwrap_or("")
    }
}

impl fmt::Display for ArtifactDescriptor {
    /// `groupId:artifactId:type[:classifier]:version:scope`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group_id, self.artifact_id, self.artifact_type)?;
        if let Some(classifier) = &self.classifier {
            write!(f, ":{classifier}")?;
        }
        write!(f, ":{}:{}", self.version, self.scope)
    }
}

impl Ord for ArtifactDescriptor {
    fn cmp(&self, other: &Self) -> Ordering {
        self.group_id
            .cmp(&other.group_id)
            .then_with(|| self.artifact_id.cmp(&other.artifact_id))
            .then_with(|| VersionComparator::compare(&self.version, &other.version))
            .then_with(|| self.classifier.cmp(&other.classifier))
            .then_with(|| self.artifact_type.cmp(&other.artifact_type))
            .then_with(|| self.scope.cmp(&other.scope))
    }
}

impl PartialOrd for ArtifactDescriptor {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
