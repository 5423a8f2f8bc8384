//! `deptemplate generate`: render the manifest for a resolved dependency set.

use anyhow::{Context, Result};
use clap::Args;
use std::path::{Path, PathBuf};

use super::CliConfig;
use crate::config::GenerateConfig;
use crate::dependencies::ResolvedDependencies;
use crate::generator::generate;

#[derive(Args, Debug, Clone, Default)]
pub struct GenerateCommand {
    /// Resolved dependency file (TOML, or JSON with a .json extension)
    #[arg(long, value_name = "PATH")]
    pub dependencies: PathBuf,

    /// Outer template file; default `{{artifacts}}`
    #[arg(long, value_name = "PATH")]
    pub main_template: Option<PathBuf>,

    /// Per-artifact template file
    #[arg(long, value_name = "PATH")]
    pub artifact_template: Option<PathBuf>,

    /// Only render direct dependencies; `--exclude-transitive=false` undoes
    /// a config file setting
    #[arg(long, value_name = "BOOL", num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub exclude_transitive: Option<bool>,

    /// Group ids to leave out (comma separated, repeatable, case-insensitive)
    #[arg(long, value_name = "LIST")]
    pub exclude_group_ids: Vec<String>,

    /// Artifact ids to leave out
    #[arg(long, value_name = "LIST")]
    pub exclude_artifact_ids: Vec<String>,

    /// Classifiers to leave out
    #[arg(long, value_name = "LIST")]
    pub exclude_classifiers: Vec<String>,

    /// Types to leave out
    #[arg(long, value_name = "LIST")]
    pub exclude_types: Vec<String>,

    /// File to write the manifest to; parent directories are created
    #[arg(long, value_name = "PATH")]
    pub output_file: Option<PathBuf>,

    /// Property name to publish the manifest under
    #[arg(long, value_name = "NAME")]
    pub output_property: Option<String>,

    /// Charset of the template files [default: UTF-8]
    #[arg(long)]
    pub charset: Option<String>,

    /// Text placed between rendered artifacts, before the line break
    #[arg(long, allow_hyphen_values = true)]
    pub separator: Option<String>,

    /// Append a line break to the separator [default: true]
    #[arg(long, value_name = "BOOL", num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub line_break: Option<bool>,

    /// Same as `--line-break=false`
    #[arg(long, conflicts_with = "line_break")]
    pub no_line_break: bool,

    /// JSON file to merge published properties into
    #[arg(long, value_name = "PATH")]
    pub properties_file: Option<PathBuf>,

    /// Also write the manifest to stdout
    #[arg(long)]
    pub print: bool,
}

impl GenerateCommand {
    /// Settings given on the command line, to layer over the config file.
    pub fn overrides(&self) -> GenerateConfig {
        GenerateConfig {
            main_template_file: self.main_template.clone(),
            artifact_template_file: self.artifact_template.clone(),
            exclude_transitive: self.exclude_transitive,
            exclude_group_ids: self.exclude_group_ids.clone(),
            exclude_artifact_ids: self.exclude_artifact_ids.clone(),
            exclude_classifiers: self.exclude_classifiers.clone(),
            exclude_types: self.exclude_types.clone(),
            output_file: self.output_file.clone(),
            output_property: self.output_property.clone(),
            charset: self.charset.clone(),
            separator: self.separator.clone(),
            line_break: if self.no_line_break { Some(false) } else { self.line_break },
        }
    }

    pub async fn execute(self, config: &CliConfig) -> Result<()> {
        let working_dir = std::env::current_dir().context("Cannot determine working directory")?;
        self.execute_in(&working_dir, config.config_path.as_deref()).await
    }

    /// Run against `working_dir`, the directory searched for
    /// `deptemplate.toml` and the base of relative command-line paths.
    pub async fn execute_in(self, working_dir: &Path, config_path: Option<&Path>) -> Result<()> {
        let result = self.run(working_dir, config_path);
        if let Err(e) = &result {
            tracing::error!("Manifest generation failed: {e:#}");
        }
        result
    }

    fn run(&self, working_dir: &Path, config_path: Option<&Path>) -> Result<()> {
        let config_path = config_path.map(|p| working_dir.join(p));
        let config = GenerateConfig::load(config_path.as_deref(), working_dir)?
            .merge(self.overrides().resolve_paths(working_dir));

        let dependencies = ResolvedDependencies::load(&working_dir.join(&self.dependencies))?;
        let manifest = generate(&config, &dependencies)?;

        if !manifest.properties.is_empty() {
            match &self.properties_file {
                Some(path) => manifest.properties.write_json(&working_dir.join(path))?,
                None => print!("{}", manifest.properties),
            }
        }

        if self.print {
            println!("{}", manifest.text);
        }

        if config.output_file.is_none() && config.output_property.is_none() && !self.print {
            tracing::warn!("No --output-file or --output-property configured; nothing was written");
        }

        Ok(())
    }
}
