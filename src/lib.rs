//! deptemplate - dependency manifests from templates
//!
//! Takes the resolved dependency set of a build, drops excluded artifacts,
//! renders each remaining artifact through an artifact template, joins the
//! results in a deterministic order and embeds them into an outer template.
//! The text goes to a file, a published property, or both.
//!
//! # Pipeline
//!
//! 1. [`dependencies`] loads the resolver output (direct and transitive
//!    artifacts) and validates every descriptor
//! 2. [`filter`] removes artifacts by group id, artifact id, classifier or
//!    type, case-insensitively
//! 3. [`templating`] sorts, renders, joins and embeds
//! 4. [`output`] writes the file atomically and collects properties
//!
//! [`generator::generate`] runs all four steps under a
//! [`config::GenerateConfig`].
//!
//! # Example
//!
//! ```rust,no_run
//! use deptemplate_cli::config::GenerateConfig;
//! use deptemplate_cli::dependencies::ResolvedDependencies;
//! use deptemplate_cli::generator::generate;
//! use std::path::Path;
//!
//! # fn example() -> anyhow::Result<()> {
//! let dependencies = ResolvedDependencies::load(Path::new("target/resolved.toml"))?;
//! let config = GenerateConfig {
//!     separator: Some(",".to_string()),
//!     ..GenerateConfig::default()
//! };
//! let manifest = generate(&config, &dependencies)?;
//! println!("{}", manifest.text);
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`cli`] - `generate` and `validate` commands
//! - [`config`] - `deptemplate.toml`, option layering, charsets
//! - [`core`] - artifact descriptor and error types
//! - [`version`] - version ordering used by the artifact sort
//! - [`utils`] - atomic writes and charset-aware reads

pub mod cli;
pub mod config;
pub mod constants;
pub mod core;
pub mod dependencies;
pub mod filter;
pub mod generator;
pub mod output;
pub mod templating;
pub mod utils;
pub mod version;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
