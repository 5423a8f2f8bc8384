//! Generic TOML configuration parsing.
//!
//! ```rust,no_run
//! use deptemplate_cli::config::parse_config;
//! use serde::Deserialize;
//! use std::path::Path;
//!
//! #[derive(Deserialize)]
//! struct MyConfig {
//!     separator: String,
//! }
//!
//! # fn example() -> anyhow::Result<()> {
//! let config: MyConfig = parse_config(Path::new("deptemplate.toml"))?;
//! println!("separator: {:?}", config.separator);
//! # Ok(())
//! # }
//! ```

use anyhow::{Context, Result};
use std::path::Path;

use crate::core::DepTemplateError;

/// Parse a TOML configuration file into `T`.
///
/// # Errors
///
/// Fails if the file cannot be read, or with
/// [`DepTemplateError::ConfigParseError`] if its content is not valid TOML
/// for `T` (unknown keys included, when `T` denies them).
pub fn parse_config<T>(path: &Path) -> Result<T>
where
    T: serde::de::DeserializeOwned,
{
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: T = toml::from_str(&content).map_err(|e| DepTemplateError::ConfigParseError {
        file: path.display().to_string(),
        reason: e.to_string(),
    })?;

    Ok(config)
}
