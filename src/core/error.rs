//! Error handling for deptemplate
//!
//! Two layers, the same way the rest of the crate reports failures:
//! - [`DepTemplateError`] - strongly-typed failures raised by the library
//! - [`ErrorContext`] - a user-facing wrapper adding details and a suggestion
//!
//! Library code returns `anyhow::Result` with a [`DepTemplateError`] at the
//! root of the chain. The binary converts whatever reaches `main` with
//! [`user_friendly_error`] and prints it in color.
//!
//! # Examples
//!
//! ```rust,no_run
//! use deptemplate_cli::core::{DepTemplateError, ErrorContext, user_friendly_error};
//!
//! let error = DepTemplateError::UnsupportedCharset {
//!     charset: "EBCDIC".to_string(),
//! };
//! let ctx = user_friendly_error(anyhow::Error::from(error));
//! ctx.display();
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// Every failure deptemplate can report.
///
/// Malformed template tokens and unknown placeholders are deliberately absent:
/// the renderer leaves them in the output verbatim instead of failing.
#[derive(Error, Debug, Clone)]
pub enum DepTemplateError {
    /// A resolved dependency entry lacks a field every artifact must carry.
    #[error("Resolved artifact {artifact} is missing required field '{field}'")]
    MissingArtifactField {
        /// Best-effort coordinates of the offending entry, for diagnostics.
        artifact: String,
        /// Field name as written in the dependency file (e.g. `scope`).
        field: String,
    },

    #[error("Dependency file not found: {path}")]
    DependencyFileNotFound {
        path: String,
    },

    #[error("Invalid dependency file syntax in {file}")]
    DependencyFileParseError {
        file: String,
        reason: String,
    },

    #[error("Invalid configuration file syntax in {file}")]
    ConfigParseError {
        file: String,
        reason: String,
    },

    /// A template override could not be read from disk.
    #[error("Failed to read template file: {path}")]
    TemplateReadError {
        path: String,
        reason: String,
    },

    #[error("Unsupported charset: {charset}")]
    UnsupportedCharset {
        charset: String,
    },

    /// Template bytes are not valid in the configured charset.
    #[error("Template file {path} is not valid {charset}")]
    InvalidEncoding {
        path: String,
        charset: String,
    },

    #[error("Failed to write output: {path}")]
    OutputWriteError {
        path: String,
        reason: String,
    },

    /// `validate --strict` found template issues.
    #[error("Template validation failed with {count} issue(s)")]
    TemplateValidationFailed {
        count: usize,
    },

    #[error("{message}")]
    Other {
        message: String,
    },
}

/// User-facing view of an error: the error itself plus optional details and
/// a suggestion on how to fix it.
#[derive(Debug)]
pub struct ErrorContext {
    pub error: DepTemplateError,
    pub suggestion: Option<String>,
    pub details: Option<String>,
}

impl ErrorContext {
    #[must_use]
    pub const fn new(error: DepTemplateError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    #[must_use]
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Print the error to stderr with colors.
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

/// Attach the standard suggestion and details to a typed error.
fn create_error_context(error: DepTemplateError) -> ErrorContext {
    match &error {
        DepTemplateError::MissingArtifactField {
            field,
            ..
        } => {
            let details = format!(
                "Every resolved artifact needs group-id, artifact-id, version, type and scope; '{field}' was absent"
            );
            ErrorContext::new(error)
                .with_suggestion("Regenerate the dependency file with the resolver, or add the missing field")
                .with_details(details)
        }
        DepTemplateError::DependencyFileNotFound {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Pass the resolver output with --dependencies <PATH>"),
        DepTemplateError::DependencyFileParseError {
            reason,
            ..
        } => {
            let details = reason.clone();
            ErrorContext::new(error)
                .with_suggestion("Check that the file lists [[direct]] and [[transitive]] entries with kebab-case keys")
                .with_details(details)
        }
        DepTemplateError::ConfigParseError {
            reason,
            ..
        } => {
            let details = reason.clone();
            ErrorContext::new(error)
                .with_suggestion("Check the TOML syntax and option names in deptemplate.toml")
                .with_details(details)
        }
        DepTemplateError::TemplateReadError {
            reason,
            ..
        } => {
            let details = reason.clone();
            ErrorContext::new(error)
                .with_suggestion("Check that the template path exists and is readable")
                .with_details(details)
        }
        DepTemplateError::UnsupportedCharset {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Use one of UTF-8, US-ASCII or ISO-8859-1"),
        DepTemplateError::InvalidEncoding {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Re-save the template in the configured charset or change --charset"),
        DepTemplateError::OutputWriteError {
            reason,
            ..
        } => {
            let details = reason.clone();
            ErrorContext::new(error)
                .with_suggestion("Check permissions on the output directory")
                .with_details(details)
        }
        DepTemplateError::TemplateValidationFailed {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Fix the reported template issues or drop --strict"),
        DepTemplateError::Other {
            ..
        } => ErrorContext::new(error),
    }
}

/// Convert any error reaching the binary into an [`ErrorContext`].
///
/// Typed errors anywhere in the `anyhow` chain get their dedicated
/// suggestion. Anything else keeps its full context chain as the message.
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    for cause in error.chain() {
        if let Some(typed) = cause.downcast_ref::<DepTemplateError>() {
            let mut ctx = create_error_context(typed.clone());
            // Keep the outermost context message when it adds information.
            let outer = error.to_string();
            if outer != typed.to_string() && ctx.details.is_none() {
                ctx.details = Some(outer);
            }
            return ctx;
        }
    }

    if let Some(io_error) = error.downcast_ref::<std::io::Error>() {
        if io_error.kind() == std::io::ErrorKind::PermissionDenied {
            return ErrorContext::new(DepTemplateError::Other {
                message: io_error.to_string(),
            })
            .with_suggestion("Check file ownership and permissions");
        }
    }

    let message = error.chain().map(ToString::to_string).collect::<Vec<_>>().join(": ");
    ErrorContext::new(DepTemplateError::Other {
        message,
    })
}
