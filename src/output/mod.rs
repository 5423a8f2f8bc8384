//! Delivery of the rendered manifest.
//!
//! A run can write the text to a file, publish it under a property name, or
//! both. Neither is required; a run with no destination still renders.

mod properties;

pub use properties::PropertyStore;

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::core::DepTemplateError;
use crate::utils::atomic_write;

/// Destination for rendered manifest text.
pub trait ManifestSink {
    /// Human readable name of the destination, used in log lines.
    fn describe(&self) -> String;

    /// Write `text` verbatim.
    fn write(&mut self, text: &str) -> Result<()>;
}

/// Writes the manifest to a file, creating parent directories.
///
/// The write is atomic: a failure leaves any previous file untouched.
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ManifestSink for FileSink {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn write(&mut self, text: &str) -> Result<()> {
        atomic_write(&self.path, text.as_bytes()).map_err(|e| {
            let reason = e.chain().map(ToString::to_string).collect::<Vec<_>>().join(": ");
            DepTemplateError::OutputWriteError {
                path: self.path.display().to_string(),
                reason,
            }
        })?;
        tracing::info!("Generated file: {}", self.path.display());
        Ok(())
    }
}

/// Publishes the manifest as a named property.
pub struct PropertySink<'a> {
    name: String,
    store: &'a mut PropertyStore,
}

impl<'a> PropertySink<'a> {
    pub fn new(name: impl Into<String>, store: &'a mut PropertyStore) -> Self {
        Self {
            name: name.into(),
            store,
        }
    }
}

impl ManifestSink for PropertySink<'_> {
    fn describe(&self) -> String {
        format!("property {}", self.name)
    }

    fn write(&mut self, text: &str) -> Result<()> {
        self.store.publish(&self.name, text);
        Ok(())
    }
}
