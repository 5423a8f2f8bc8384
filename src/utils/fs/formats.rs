//! Reading text files in a configured charset.

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::config::Charset;
use crate::core::DepTemplateError;

/// Read `path` and decode it with `charset`.
///
/// # Errors
///
/// [`DepTemplateError::TemplateReadError`] if the file cannot be read and
/// [`DepTemplateError::InvalidEncoding`] if it does not decode.
pub fn read_text_file(path: &Path, charset: Charset) -> Result<String> {
    let display = path.display().to_string();
    let bytes = fs::read(path).map_err(|e| DepTemplateError::TemplateReadError {
        path: display.clone(),
        reason: e.to_string(),
    })?;

    Ok(charset.decode(&bytes, &display)?)
}
