//! Manifest rendering: ordering, per-artifact substitution, joining and the
//! outer template.
//!
//! ```rust
//! use deptemplate_cli::core::ArtifactDescriptor;
//! use deptemplate_cli::templating::ManifestRenderer;
//!
//! let renderer = ManifestRenderer::with_defaults(",");
//! let text = renderer.render(vec![
//!     ArtifactDescriptor::new("org.y", "util", "2.0", "jar", "runtime").with_classifier("tests"),
//!     ArtifactDescriptor::new("com.x", "lib", "1.0", "jar", "compile"),
//! ]);
//! assert_eq!(text, "com.x:lib-1.0.jar,org.y:util-2.0-tests.jar");
//! ```

use super::context::TemplateValues;
use super::parser::{Segment, Template};
use crate::constants::{DEFAULT_ARTIFACT_TEMPLATE, DEFAULT_MAIN_TEMPLATE};
use crate::core::ArtifactDescriptor;

impl Template {
    /// Substitute `values` into the template.
    ///
    /// Unknown placeholders are kept verbatim. Only conditionals matching
    /// [`Template::active_conditional`] are resolved, and only when `values`
    /// enables them; every other conditional is kept verbatim.
    pub fn render(&self, values: &TemplateValues<'_>) -> String {
        let active = self.active_conditional();
        let mut output = String::new();

        for segment in self.segments() {
            match segment {
                Segment::Literal(text) => output.push_str(text),
                Segment::Placeholder(name) => match values.get(name) {
                    Some(value) => output.push_str(value),
                    None => output.push_str(&segment.source_text()),
                },
                Segment::Conditional(prefix) => {
                    let resolved = if active == Some(prefix.as_str()) {
                        values.resolve_conditional(prefix)
                    } else {
                        None
                    };
                    match resolved {
                        Some(text) => output.push_str(text),
                        None => output.push_str(&segment.source_text()),
                    }
                }
            }
        }

        output
    }
}

/// Renders a list of artifacts into the final manifest text.
#[derive(Debug, Clone)]
pub struct ManifestRenderer {
    artifact_template: Template,
    main_template: Template,
    separator: String,
}

impl ManifestRenderer {
    pub fn new(artifact_template: &str, main_template: &str, separator: impl Into<String>) -> Self {
        Self {
            artifact_template: Template::parse(artifact_template),
            main_template: Template::parse(main_template),
            separator: separator.into(),
        }
    }

    /// Renderer using the default artifact and outer templates.
    pub fn with_defaults(separator: impl Into<String>) -> Self {
        Self::new(DEFAULT_ARTIFACT_TEMPLATE, DEFAULT_MAIN_TEMPLATE, separator)
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Render one artifact through the artifact template.
    pub fn render_artifact(&self, artifact: &ArtifactDescriptor) -> String {
        self.artifact_template.render(&TemplateValues::for_artifact(artifact))
    }

    /// Sort the artifacts, render each one and join them with the separator.
    pub fn render_artifacts(&self, mut artifacts: Vec<ArtifactDescriptor>) -> String {
        artifacts.sort();

        artifacts
            .iter()
            .map(|artifact| self.render_artifact(artifact))
            .collect::<Vec<_>>()
            .join(&self.separator)
    }

    /// The full manifest: joined artifact text substituted into the outer
    /// template.
    pub fn render(&self, artifacts: Vec<ArtifactDescriptor>) -> String {
        let count = artifacts.len();
        let joined = self.render_artifacts(artifacts);
        tracing::debug!("Rendered {count} artifacts into {} bytes", joined.len());

        self.main_template.render(&TemplateValues::for_main(&joined))
    }
}

/// Render one artifact through a template given as text.
pub fn apply_artifact_template(artifact: &ArtifactDescriptor, template: &str) -> String {
    Template::parse(template).render(&TemplateValues::for_artifact(artifact))
}

/// Render a filtered artifact list into the final manifest text.
pub fn render(
    filtered: Vec<ArtifactDescriptor>,
    artifact_template: &str,
    outer_template: &str,
    separator: &str,
) -> String {
    ManifestRenderer::new(artifact_template, outer_template, separator).render(filtered)
}
