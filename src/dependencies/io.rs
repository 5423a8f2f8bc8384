//! Loading resolved dependency files.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use super::ResolvedDependencies;
use crate::core::DepTemplateError;

impl ResolvedDependencies {
    /// Load a resolved dependency file.
    ///
    /// Files ending in `.json` are parsed as JSON, everything else as TOML.
    /// An empty file yields an empty dependency set.
    ///
    /// # Errors
    ///
    /// - [`DepTemplateError::DependencyFileNotFound`] if `path` does not exist
    /// - [`DepTemplateError::DependencyFileParseError`] on malformed content
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(DepTemplateError::DependencyFileNotFound {
                path: path.display().to_string(),
            }
            .into());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Cannot read dependency file: {}", path.display()))?;

        if content.trim().is_empty() {
            tracing::debug!("Dependency file {} is empty", path.display());
            return Ok(Self::default());
        }

        let is_json = path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let parsed: Result<Self, String> = if is_json {
            serde_json::from_str(&content).map_err(|e| e.to_string())
        } else {
            toml::from_str(&content).map_err(|e| e.to_string())
        };

        let dependencies = parsed.map_err(|reason| DepTemplateError::DependencyFileParseError {
            file: path.display().to_string(),
            reason,
        })?;

        tracing::debug!(
            "Loaded {} direct and {} transitive artifacts from {}",
            dependencies.direct.len(),
            dependencies.transitive.len(),
            path.display()
        );

        Ok(dependencies)
    }
}
