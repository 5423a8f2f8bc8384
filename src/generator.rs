//! The generation pipeline: select, filter, render, deliver.

use anyhow::Result;

use crate::config::GenerateConfig;
use crate::dependencies::ResolvedDependencies;
use crate::output::{FileSink, ManifestSink, PropertySink, PropertyStore};
use crate::templating::ManifestRenderer;

/// Result of one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedManifest {
    /// The rendered manifest, exactly as written to every destination.
    pub text: String,
    /// Artifacts left after filtering.
    pub artifact_count: usize,
    /// Properties published by this run.
    pub properties: PropertyStore,
}

/// Run the full pipeline for `dependencies` under `config`.
///
/// Every descriptor is validated before anything is rendered, and templates
/// are loaded before anything is written, so a failing run produces no
/// output at all.
///
/// # Errors
///
/// Any typed failure from loading templates, validating descriptors or
/// writing the output file.
pub fn generate(config: &GenerateConfig, dependencies: &ResolvedDependencies) -> Result<GeneratedManifest> {
    let artifacts = dependencies.select(config.exclude_transitive())?;
    let filtered = config.artifact_filter().filter(artifacts);
    let artifact_count = filtered.len();

    let artifact_template = config.artifact_template()?;
    let main_template = config.main_template()?;
    let separator = config.effective_separator();
    tracing::debug!("Artifact separator: {separator:?}");

    let renderer = ManifestRenderer::new(&artifact_template, &main_template, separator);
    let text = renderer.render(filtered);

    let mut properties = PropertyStore::new();
    let mut sinks: Vec<Box<dyn ManifestSink + '_>> = Vec::new();
    if let Some(path) = &config.output_file {
        sinks.push(Box::new(FileSink::new(path)));
    }
    if let Some(name) = &config.output_property {
        sinks.push(Box::new(PropertySink::new(name, &mut properties)));
    }
    if sinks.is_empty() {
        tracing::debug!("No output file or property configured");
    }
    for sink in &mut sinks {
        tracing::debug!("Writing manifest to {}", sink.describe());
        sink.write(&text)?;
    }
    drop(sinks);

    Ok(GeneratedManifest {
        text,
        artifact_count,
        properties,
    })
}
