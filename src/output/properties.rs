//! Published properties.
//!
//! Properties are collected in a [`PropertyStore`] returned to the caller
//! instead of being set on some shared state. The CLI persists the store to
//! a JSON file, merging with properties already there:
//!
//! ```json
//! {
//!   "project.dependency.list": "com.x:lib-1.0.jar\norg.y:util-2.1.jar"
//! }
//! ```

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use crate::core::DepTemplateError;
use crate::utils::atomic_write;

/// Name to value map of published properties.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyStore {
    values: BTreeMap<String, String>,
}

impl PropertyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `name` to `value`, replacing any previous value.
    pub fn publish(&mut self, name: &str, value: &str) {
        tracing::info!("Published property: {name}");
        self.values.insert(name.to_string(), value.to_string());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Merge into the JSON object stored at `path`, creating it if needed.
    /// Entries of this store win over existing ones with the same name.
    ///
    /// # Errors
    ///
    /// Fails if an existing file is not a JSON object of strings, or with
    /// [`DepTemplateError::OutputWriteError`] if the file cannot be written.
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let mut merged: BTreeMap<String, String> = if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read properties file: {}", path.display()))?;
            if content.trim().is_empty() {
                BTreeMap::new()
            } else {
                serde_json::from_str(&content).with_context(|| {
                    format!("Properties file is not a JSON object of strings: {}", path.display())
                })?
            }
        } else {
            BTreeMap::new()
        };

        merged.extend(self.values.clone());

        let mut json = serde_json::to_string_pretty(&merged)?;
        json.push('\n');
        atomic_write(path, json.as_bytes()).map_err(|e| DepTemplateError::OutputWriteError {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        tracing::debug!("Wrote {} properties to {}", merged.len(), path.display());
        Ok(())
    }
}

/// One `name=value` line per property, escaped as in a `.properties` file
/// so multi-line values stay on their own line.
impl fmt::Display for PropertyStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, value) in &self.values {
            writeln!(f, "{}={}", escape(name, true), escape(value, false))?;
        }
        Ok(())
    }
}

fn escape(text: &str, key: bool) -> String {
    let mut escaped = String::with_capacity(text.len());
    for (i, c) in text.chars().enumerate() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            '=' | ':' | '#' | '!' if key => {
                escaped.push('\\');
                escaped.push(c);
            }
            ' ' if key || i == 0 => escaped.push_str("\\ "),
            _ => escaped.push(c),
        }
    }
    escaped
}
