//! Core types for deptemplate
//!
//! - [`error`] - [`DepTemplateError`], [`ErrorContext`] and [`user_friendly_error`]
//! - [`artifact`] - [`ArtifactDescriptor`], the resolved artifact and its natural order
//!
//! # Examples
//!
//! ```rust
//! use deptemplate_cli::core::{ArtifactDescriptor, DepTemplateError};
//! use anyhow::Result;
//!
//! fn require_scope(scope: Option<&str>) -> Result<ArtifactDescriptor> {
//!     let scope = scope.ok_or_else(|| DepTemplateError::MissingArtifactField {
//!         artifact: "com.x:lib".to_string(),
//!         field: "scope".to_string(),
//!     })?;
//!     Ok(ArtifactDescriptor::new("com.x", "lib", "1.0", "jar", scope))
//! }
//!
//! assert!(require_scope(None).is_err());
//! ```

pub mod artifact;
pub mod error;

pub use artifact::ArtifactDescriptor;
pub use error::{DepTemplateError, ErrorContext, user_friendly_error};
