//! Exclusion-based artifact filtering.
//!
//! Each dimension (group id, artifact id, classifier, type) has its own
//! [`ExclusionSet`]. Exclusion is opt-in per dimension: an empty set never
//! drops anything. Comparison is case-insensitive; sets store lower-cased
//! values and probed fields are lower-cased before lookup.
//!
//! Classifier exclusion only applies to artifacts that have a classifier. An
//! unclassified artifact is never dropped by it, whatever the set contains.
//!
//! # Examples
//!
//! ```rust
//! use deptemplate_cli::core::ArtifactDescriptor;
//! use deptemplate_cli::filter::{ArtifactFilter, ExclusionSet};
//!
//! let filter = ArtifactFilter {
//!     group_ids: ExclusionSet::from_values(["ORG.Test"]),
//!     ..ArtifactFilter::default()
//! };
//!
//! let kept = filter.filter(vec![
//!     ArtifactDescriptor::new("com.x", "lib", "1.0", "jar", "compile"),
//!     ArtifactDescriptor::new("org.test", "junit", "4.13", "jar", "test"),
//! ]);
//! assert_eq!(kept.len(), 1);
//! assert_eq!(kept[0].group_id, "com.x");
//! ```

use std::collections::HashSet;
use std::fmt;

use crate::core::ArtifactDescriptor;

/// Lower-cased values excluded along one dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet {
    values: HashSet<String>,
}

impl ExclusionSet {
    /// Build a set from plain values.
    pub fn from_values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_optional(values.into_iter().map(Some))
    }

    /// Build a set from possibly-missing values. `None` entries are skipped.
    pub fn from_optional<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: AsRef<str>,
    {
        let values =
            values.into_iter().flatten().map(|value| value.as_ref().to_lowercase()).collect();
        Self {
            values,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// `true` when the set is non-empty and holds `value` (case-insensitive).
    pub fn excludes(&self, value: &str) -> bool {
        !self.values.is_empty() && self.values.contains(&value.to_lowercase())
    }
}

/// The dimension that caused an artifact to be dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExclusionReason {
    GroupId,
    ArtifactId,
    Type,
    Classifier,
}

impl fmt::Display for ExclusionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::GroupId => "groupId",
            Self::ArtifactId => "artifactId",
            Self::Type => "type",
            Self::Classifier => "classifier",
        };
        f.write_str(name)
    }
}

/// The four exclusion sets applied to a resolved artifact collection.
#[derive(Debug, Clone, Default)]
pub struct ArtifactFilter {
    pub group_ids: ExclusionSet,
    pub artifact_ids: ExclusionSet,
    pub classifiers: ExclusionSet,
    pub types: ExclusionSet,
}

impl ArtifactFilter {
    pub fn new(
        group_ids: ExclusionSet,
        artifact_ids: ExclusionSet,
        classifiers: ExclusionSet,
        types: ExclusionSet,
    ) -> Self {
        Self {
            group_ids,
            artifact_ids,
            classifiers,
            types,
        }
    }

    /// Why `artifact` would be dropped, or `None` if it is kept.
    pub fn exclusion_reason(&self, artifact: &ArtifactDescriptor) -> Option<ExclusionReason> {
        if self.group_ids.excludes(&artifact.group_id) {
            return Some(ExclusionReason::GroupId);
        }
        if self.artifact_ids.excludes(&artifact.artifact_id) {
            return Some(ExclusionReason::ArtifactId);
        }
        if self.types.excludes(&artifact.artifact_type) {
            return Some(ExclusionReason::Type);
        }
        match &artifact.classifier {
            Some(classifier) if self.classifiers.excludes(classifier) => {
                Some(ExclusionReason::Classifier)
            }
            _ => None,
        }
    }

    /// Keep the artifacts no exclusion set matches, preserving input order.
    pub fn filter<I>(&self, artifacts: I) -> Vec<ArtifactDescriptor>
    where
        I: IntoIterator<Item = ArtifactDescriptor>,
    {
        let kept: Vec<_> = artifacts
            .into_iter()
            .filter(|artifact| match self.exclusion_reason(artifact) {
                Some(reason) => {
                    tracing::debug!("Excluding {artifact} by {reason}");
                    false
                }
                None => true,
            })
            .collect();

        tracing::info!("Artifact list size: {}", kept.len());
        kept
    }
}
