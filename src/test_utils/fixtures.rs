//! Test fixtures for artifacts and resolved dependency files.

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::ArtifactDescriptor;
use crate::dependencies::{RawArtifact, ResolvedDependencies};

/// Builder for [`ArtifactDescriptor`]s, defaulting to version `1.0`, type
/// `jar`, scope `compile` and no classifier.
#[derive(Clone, Debug)]
pub struct ArtifactBuilder {
    artifact: ArtifactDescriptor,
}

impl ArtifactBuilder {
    pub fn new(group_id: &str, artifact_id: &str) -> Self {
        Self {
            artifact: ArtifactDescriptor::new(group_id, artifact_id, "1.0", "jar", "compile"),
        }
    }

    #[must_use]
    pub fn version(mut self, version: &str) -> Self {
        self.artifact.version = version.to_string();
        self
    }

    #[must_use]
    pub fn artifact_type(mut self, artifact_type: &str) -> Self {
        self.artifact.artifact_type = artifact_type.to_string();
        self
    }

    #[must_use]
    pub fn scope(mut self, scope: &str) -> Self {
        self.artifact.scope = scope.to_string();
        self
    }

    #[must_use]
    pub fn classifier(mut self, classifier: &str) -> Self {
        self.artifact = self.artifact.with_classifier(classifier);
        self
    }

    pub fn build(self) -> ArtifactDescriptor {
        self.artifact
    }
}

/// A resolved dependency file to drop into a test directory.
#[derive(Clone, Debug)]
pub struct DependencyFixture {
    pub file_name: String,
    pub content: String,
}

impl DependencyFixture {
    /// TOML file listing `direct` and `transitive`.
    pub fn from_artifacts(direct: &[ArtifactDescriptor], transitive: &[ArtifactDescriptor]) -> Self {
        let dependencies = ResolvedDependencies {
            direct: direct.iter().map(RawArtifact::from).collect(),
            transitive: transitive.iter().map(RawArtifact::from).collect(),
        };
        Self {
            file_name: "resolved.toml".to_string(),
            content: toml::to_string(&dependencies).unwrap_or_default(),
        }
    }

    /// Two direct artifacts (one classified) and one transitive artifact.
    ///
    /// Renders with the default templates as:
    ///
    /// ```text
    /// com.x:lib-1.0.jar
    /// com.x:lib-1.0-tests.jar
    /// org.junit:junit-4.13.2.jar
    /// org.y:util-2.3.1.jar
    /// ```
    pub fn basic() -> Self {
        Self {
            file_name: "resolved.toml".to_string(),
            content: r#"
[[direct]]
group-id = "com.x"
artifact-id = "lib"
version = "1.0"
type = "jar"
scope = "compile"

[[direct]]
group-id = "com.x"
artifact-id = "lib"
version = "1.0"
type = "jar"
scope = "test"
classifier = "tests"

[[direct]]
group-id = "org.junit"
artifact-id = "junit"
version = "4.13.2"
type = "jar"
scope = "test"

[[transitive]]
group-id = "org.y"
artifact-id = "util"
version = "2.3.1"
type = "jar"
scope = "runtime"
"#
            .trim()
            .to_string(),
        }
    }

    /// The [`basic`](Self::basic) set as JSON.
    pub fn json() -> Self {
        Self {
            file_name: "resolved.json".to_string(),
            content: r#"{
  "direct": [
    {"group-id": "com.x", "artifact-id": "lib", "version": "1.0", "type": "jar", "scope": "compile"},
    {"group-id": "com.x", "artifact-id": "lib", "version": "1.0", "type": "jar", "scope": "test", "classifier": "tests"},
    {"group-id": "org.junit", "artifact-id": "junit", "version": "4.13.2", "type": "jar", "scope": "test"}
  ],
  "transitive": [
    {"group-id": "org.y", "artifact-id": "util", "version": "2.3.1", "type": "jar", "scope": "runtime"}
  ]
}"#
            .to_string(),
        }
    }

    /// A transitive entry without `scope`.
    pub fn missing_scope() -> Self {
        Self {
            file_name: "resolved.toml".to_string(),
            content: r#"
[[direct]]
group-id = "com.x"
artifact-id = "lib"
version = "1.0"
type = "jar"
scope = "compile"

[[transitive]]
group-id = "org.y"
artifact-id = "util"
version = "2.3.1"
type = "jar"
"#
            .trim()
            .to_string(),
        }
    }

    pub fn invalid_syntax() -> Self {
        Self {
            file_name: "resolved.toml".to_string(),
            content: "[[direct]\ngroup-id = \"com.x\"\n".to_string(),
        }
    }

    /// Write the fixture into `dir` and return its path.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(&self.file_name);
        fs::write(&path, &self.content)?;
        Ok(path)
    }
}
