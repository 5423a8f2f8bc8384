//! Configuration for manifest generation.
//!
//! Settings come from two layers, later layers winning:
//!
//! 1. `deptemplate.toml` in the working directory, or the file passed with
//!    `--config`
//! 2. command-line flags
//!
//! ```toml
//! artifact-template-file = "templates/artifact.tpl"
//! main-template-file = "templates/main.tpl"
//! exclude-transitive = false
//! exclude-group-ids = ["org.junit", "org.hamcrest"]
//! exclude-classifiers = ["tests"]
//! output-file = "target/classes/dependencies.txt"
//! output-property = "project.dependency.list"
//! charset = "UTF-8"
//! separator = ","
//! line-break = true
//! ```
//!
//! Relative template and output paths in the file resolve against the
//! directory holding the file. Exclusion entries may themselves be comma
//! separated lists; blank entries are ignored.

pub mod charset;
mod parser;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub use charset::Charset;
pub use parser::parse_config;

use crate::constants::{CONFIG_FILE_NAME, DEFAULT_ARTIFACT_TEMPLATE, DEFAULT_MAIN_TEMPLATE, LINE_BREAK};
use crate::filter::{ArtifactFilter, ExclusionSet};
use crate::utils::read_text_file;

/// Options of one generation run. Every field is optional so layers can be
/// merged; accessors apply the defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct GenerateConfig {
    pub main_template_file: Option<PathBuf>,
    pub artifact_template_file: Option<PathBuf>,
    pub exclude_transitive: Option<bool>,
    pub exclude_group_ids: Vec<String>,
    pub exclude_artifact_ids: Vec<String>,
    pub exclude_classifiers: Vec<String>,
    pub exclude_types: Vec<String>,
    pub output_file: Option<PathBuf>,
    pub output_property: Option<String>,
    pub charset: Option<String>,
    pub separator: Option<String>,
    pub line_break: Option<bool>,
}

impl GenerateConfig {
    /// Load configuration.
    ///
    /// With `explicit` set, that file must exist. Otherwise
    /// `deptemplate.toml` in `working_dir` is used when present, and the
    /// defaults when not.
    pub fn load(explicit: Option<&Path>, working_dir: &Path) -> Result<Self> {
        let path = match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(anyhow::anyhow!("Configuration file not found: {}", path.display()));
                }
                path.to_path_buf()
            }
            None => {
                let candidate = working_dir.join(CONFIG_FILE_NAME);
                if !candidate.exists() {
                    tracing::debug!("No {CONFIG_FILE_NAME} in {}, using defaults", working_dir.display());
                    return Ok(Self::default());
                }
                candidate
            }
        };

        tracing::debug!("Loading configuration from {}", path.display());
        let config: Self = parse_config(&path)
            .with_context(|| format!("Failed to load configuration: {}", path.display()))?;

        let base_dir = path.parent().unwrap_or(working_dir);
        Ok(config.resolve_paths(base_dir))
    }

    /// Make relative paths absolute against `base_dir`.
    #[must_use]
    pub fn resolve_paths(mut self, base_dir: &Path) -> Self {
        let resolve = |path: Option<PathBuf>| {
            path.map(|p| if p.is_relative() { base_dir.join(p) } else { p })
        };
        self.main_template_file = resolve(self.main_template_file.take());
        self.artifact_template_file = resolve(self.artifact_template_file.take());
        self.output_file = resolve(self.output_file.take());
        self
    }

    /// Layer `overrides` on top of `self`: set options win, exclusion lists
    /// are appended.
    #[must_use]
    pub fn merge(mut self, overrides: Self) -> Self {
        self.main_template_file = overrides.main_template_file.or(self.main_template_file);
        self.artifact_template_file =
            overrides.artifact_template_file.or(self.artifact_template_file);
        self.exclude_transitive = overrides.exclude_transitive.or(self.exclude_transitive);
        self.exclude_group_ids.extend(overrides.exclude_group_ids);
        self.exclude_artifact_ids.extend(overrides.exclude_artifact_ids);
        self.exclude_classifiers.extend(overrides.exclude_classifiers);
        self.exclude_types.extend(overrides.exclude_types);
        self.output_file = overrides.output_file.or(self.output_file);
        self.output_property = overrides.output_property.or(self.output_property);
        self.charset = overrides.charset.or(self.charset);
        self.separator = overrides.separator.or(self.separator);
        self.line_break = overrides.line_break.or(self.line_break);
        self
    }

    pub fn exclude_transitive(&self) -> bool {
        self.exclude_transitive.unwrap_or(false)
    }

    pub fn line_break(&self) -> bool {
        self.line_break.unwrap_or(true)
    }

    /// Separator placed between rendered artifacts: the configured separator
    /// (empty if unset) followed by a line break unless disabled.
    pub fn effective_separator(&self) -> String {
        let mut separator = self.separator.clone().unwrap_or_default();
        if self.line_break() {
            separator.push_str(LINE_BREAK);
        }
        separator
    }

    /// # Errors
    ///
    /// [`crate::core::DepTemplateError::UnsupportedCharset`] for unknown names.
    pub fn charset(&self) -> Result<Charset> {
        match &self.charset {
            Some(name) => Ok(name.parse()?),
            None => Ok(Charset::default()),
        }
    }

    pub fn artifact_filter(&self) -> ArtifactFilter {
        ArtifactFilter::new(
            exclusion_set(&self.exclude_group_ids),
            exclusion_set(&self.exclude_artifact_ids),
            exclusion_set(&self.exclude_classifiers),
            exclusion_set(&self.exclude_types),
        )
    }

    /// The artifact template: the override file's content, or the default.
    pub fn artifact_template(&self) -> Result<String> {
        load_template(self.artifact_template_file.as_deref(), DEFAULT_ARTIFACT_TEMPLATE, self.charset()?)
    }

    /// The outer template: the override file's content, or the default.
    pub fn main_template(&self) -> Result<String> {
        load_template(self.main_template_file.as_deref(), DEFAULT_MAIN_TEMPLATE, self.charset()?)
    }
}

fn load_template(path: Option<&Path>, default: &str, charset: Charset) -> Result<String> {
    match path {
        Some(path) => {
            tracing::debug!("Reading template {} as {charset}", path.display());
            read_text_file(path, charset)
        }
        None => Ok(default.to_string()),
    }
}

/// Split comma separated entries; blank entries are skipped.
fn exclusion_set(entries: &[String]) -> ExclusionSet {
    ExclusionSet::from_optional(entries.iter().flat_map(|entry| entry.split(',')).map(|value| {
        let value = value.trim();
        if value.is_empty() {
            None
        } else {
            Some(value)
        }
    }))
}
