//! Command-line interface for deptemplate.
//!
//! # Commands
//!
//! - `generate` - render the manifest for a resolved dependency file
//! - `validate` - check templates for mistakes without rendering
//!
//! # Global options
//!
//! - `--verbose` / `--quiet` - log at `debug` / `error` instead of `info`
//! - `--config <PATH>` - configuration file instead of `./deptemplate.toml`
//!
//! `RUST_LOG` takes precedence over both verbosity flags.
//!
//! ```bash
//! deptemplate generate --dependencies target/resolved.toml --output-file target/deps.txt
//! deptemplate --verbose generate --dependencies resolved.json --separator , --no-line-break --print
//! deptemplate validate --artifact-template templates/artifact.tpl --strict
//! ```

mod generate;
mod validate;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

pub use generate::GenerateCommand;
pub use validate::{OutputFormat, ValidateCommand};

/// Runtime settings derived from the global flags.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Default log filter, used when `RUST_LOG` is unset.
    pub log_level: Option<String>,

    /// Configuration file given with `--config`.
    pub config_path: Option<PathBuf>,
}

impl CliConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the global tracing subscriber, logging to stderr.
    ///
    /// Does nothing if a subscriber is already installed.
    pub fn init_logging(&self) {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(self.log_level.as_deref().unwrap_or("info"))
        });

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .try_init();
    }
}

#[derive(Parser)]
#[command(
    name = "deptemplate",
    about = "Render resolved dependency artifacts through templates",
    version,
    long_about = "deptemplate turns a resolved dependency set into a text manifest: one line per artifact rendered through an artifact template, joined and embedded into an outer template."
)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log debug details (filter decisions, template sources)
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Configuration file [default: ./deptemplate.toml when present]
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the dependency manifest
    Generate(GenerateCommand),

    /// Check artifact and main templates for mistakes
    Validate(ValidateCommand),
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        let config = self.build_config();
        self.execute_with_config(config).await
    }

    #[must_use]
    pub fn build_config(&self) -> CliConfig {
        let log_level = if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "info"
        };

        CliConfig {
            log_level: Some(log_level.to_string()),
            config_path: self.config.clone(),
        }
    }

    /// Run the selected command with `config` instead of the flags' settings.
    pub async fn execute_with_config(self, config: CliConfig) -> Result<()> {
        config.init_logging();

        match self.command {
            Commands::Generate(cmd) => cmd.execute(&config).await,
            Commands::Validate(cmd) => cmd.execute(&config).await,
        }
    }
}
