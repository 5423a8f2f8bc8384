//! `deptemplate validate`: check templates without rendering.
//!
//! ```text
//! ✓ Artifact template: templates/artifact.tpl
//! ✓ Main template: default
//! ⚠ Warning: artifact template: unknown placeholder '{{packaging}}' (known: groupId, ...)
//! ```

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use serde::Serialize;
use std::path::{Path, PathBuf};

use super::CliConfig;
use crate::config::GenerateConfig;
use crate::core::DepTemplateError;
use crate::templating::{TemplateIssue, validate_templates};

#[derive(Args, Debug, Clone, Default)]
pub struct ValidateCommand {
    /// Artifact template file to check instead of the configured one
    #[arg(long, value_name = "PATH")]
    pub artifact_template: Option<PathBuf>,

    /// Main template file to check instead of the configured one
    #[arg(long, value_name = "PATH")]
    pub main_template: Option<PathBuf>,

    /// Charset of the template files [default: UTF-8]
    #[arg(long)]
    pub charset: Option<String>,

    /// Treat any finding as an error
    #[arg(long)]
    pub strict: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Colored, human readable
    #[default]
    Text,
    /// One JSON object, for automation
    Json,
}

/// Validation outcome, as printed with `--format json`.
#[derive(Debug, Serialize)]
pub struct ValidationResults {
    pub valid: bool,
    pub artifact_template: String,
    pub main_template: String,
    pub issues: Vec<TemplateIssue>,
    pub warnings: Vec<String>,
}

impl ValidateCommand {
    pub async fn execute(self, config: &CliConfig) -> Result<()> {
        let working_dir = std::env::current_dir().context("Cannot determine working directory")?;
        self.execute_in(&working_dir, config.config_path.as_deref()).await
    }

    pub async fn execute_in(self, working_dir: &Path, config_path: Option<&Path>) -> Result<()> {
        let results = self.check(working_dir, config_path)?;

        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&results)?),
            OutputFormat::Text => {
                println!("{} Artifact template: {}", "✓".green(), results.artifact_template);
                println!("{} Main template: {}", "✓".green(), results.main_template);
                for warning in &results.warnings {
                    println!("{} Warning: {warning}", "⚠".yellow());
                }
                if results.warnings.is_empty() {
                    println!("{} Templates are valid", "✓".green());
                }
            }
        }

        if self.strict && !results.issues.is_empty() {
            let error = DepTemplateError::TemplateValidationFailed {
                count: results.issues.len(),
            };
            tracing::error!("{error}");
            return Err(error.into());
        }

        Ok(())
    }

    /// Load the templates and collect their issues.
    pub fn check(&self, working_dir: &Path, config_path: Option<&Path>) -> Result<ValidationResults> {
        let config_path = config_path.map(|p| working_dir.join(p));
        let overrides = GenerateConfig {
            artifact_template_file: self.artifact_template.clone(),
            main_template_file: self.main_template.clone(),
            charset: self.charset.clone(),
            ..GenerateConfig::default()
        }
        .resolve_paths(working_dir);
        let config = GenerateConfig::load(config_path.as_deref(), working_dir)?.merge(overrides);

        let artifact_template = config.artifact_template()?;
        let main_template = config.main_template()?;
        let issues = validate_templates(&artifact_template, &main_template);

        Ok(ValidationResults {
            valid: issues.is_empty(),
            artifact_template: describe(config.artifact_template_file.as_deref()),
            main_template: describe(config.main_template_file.as_deref()),
            warnings: issues.iter().map(ToString::to_string).collect(),
            issues,
        })
    }
}

fn describe(path: Option<&Path>) -> String {
    path.map_or_else(|| "default".to_string(), |p| p.display().to_string())
}
