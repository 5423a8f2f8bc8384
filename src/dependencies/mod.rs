//! The resolved dependency set handed over by the build pipeline.
//!
//! deptemplate never resolves dependencies itself. The resolver of the
//! surrounding build writes its result to a file, split into the project's
//! direct dependencies and the transitive ones pulled in by them:
//!
//! ```toml
//! [[direct]]
//! group-id = "com.x"
//! artifact-id = "lib"
//! version = "1.0"
//! type = "jar"
//! scope = "compile"
//!
//! [[transitive]]
//! group-id = "org.y"
//! artifact-id = "util"
//! version = "2.3.1"
//! type = "jar"
//! scope = "runtime"
//! classifier = "tests"
//! ```
//!
//! The same structure is accepted as JSON when the file ends in `.json`.
//!
//! Entries are read leniently ([`RawArtifact`], every field optional) and then
//! converted into [`ArtifactDescriptor`]s. A missing required field is fatal:
//! a manifest silently lacking an artifact is worse than a failed build.

mod io;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::core::{ArtifactDescriptor, DepTemplateError};

/// A resolved dependency entry exactly as read from the dependency file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RawArtifact {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artifact_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub artifact_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classifier: Option<String>,
}

impl RawArtifact {
    /// Whatever coordinates are present, for error messages.
    fn coordinates(&self) -> String {
        [&self.group_id, &self.artifact_id, &self.version]
            .iter()
            .map(|field| field.as_deref().unwrap_or("?"))
            .collect::<Vec<_>>()
            .join(":")
    }

    fn required(&self, value: &Option<String>, field: &str) -> Result<String, DepTemplateError> {
        value.clone().ok_or_else(|| DepTemplateError::MissingArtifactField {
            artifact: self.coordinates(),
            field: field.to_string(),
        })
    }
}

impl TryFrom<&RawArtifact> for ArtifactDescriptor {
    type Error = DepTemplateError;

    fn try_from(raw: &RawArtifact) -> Result<Self, Self::Error> {
        let descriptor = Self::new(
            raw.required(&raw.group_id, "group-id")?,
            raw.required(&raw.artifact_id, "artifact-id")?,
            raw.required(&raw.version, "version")?,
            raw.required(&raw.artifact_type, "type")?,
            raw.required(&raw.scope, "scope")?,
        );

        Ok(match &raw.classifier {
            Some(classifier) => descriptor.with_classifier(classifier.as_str()),
            None => descriptor,
        })
    }
}

impl From<&ArtifactDescriptor> for RawArtifact {
    fn from(artifact: &ArtifactDescriptor) -> Self {
        Self {
            group_id: Some(artifact.group_id.clone()),
            artifact_id: Some(artifact.artifact_id.clone()),
            version: Some(artifact.version.clone()),
            artifact_type: Some(artifact.artifact_type.clone()),
            scope: Some(artifact.scope.clone()),
            classifier: artifact.classifier.clone(),
        }
    }
}

/// Direct and transitive artifacts of one project, as resolved upstream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedDependencies {
    #[serde(default)]
    pub direct: Vec<RawArtifact>,
    #[serde(default)]
    pub transitive: Vec<RawArtifact>,
}

impl ResolvedDependencies {
    /// The unfiltered input collection.
    ///
    /// `exclude_transitive` selects the direct dependencies only; otherwise the
    /// direct dependencies are followed by the transitive ones.
    ///
    /// # Errors
    ///
    /// Returns [`DepTemplateError::MissingArtifactField`] for the first entry
    /// lacking a required field, whether or not a filter would drop it later.
    pub fn select(&self, exclude_transitive: bool) -> Result<Vec<ArtifactDescriptor>> {
        let transitive: &[RawArtifact] = if exclude_transitive {
            &[]
        } else {
            &self.transitive
        };

        let artifacts = self
            .direct
            .iter()
            .chain(transitive)
            .map(ArtifactDescriptor::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(
            "Selected {} resolved artifacts ({})",
            artifacts.len(),
            if exclude_transitive {
                "direct only"
            } else {
                "direct and transitive"
            }
        );

        Ok(artifacts)
    }
}
