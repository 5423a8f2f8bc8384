//! Template substitution engine for dependency manifests.
//!
//! Two templates take part in every run:
//!
//! - the **artifact template**, rendered once per artifact, default
//!   `{{groupId}}:{{artifactId}}-{{version}}{{ifClassifier:-}}{{classifier}}.{{type}}`
//! - the **main template**, rendered once, default `{{artifacts}}`
//!
//! # Artifact placeholders
//!
//! | Token | Value |
//! |---|---|
//! | `{{groupId}}` | group id |
//! | `{{artifactId}}` | artifact id |
//! | `{{version}}` | resolved version |
//! | `{{type}}` | packaging type |
//! | `{{scope}}` | resolution scope |
//! | `{{classifier}}` | classifier, empty when absent |
//! | `{{ifClassifier:P}}` | `P` when the artifact has a classifier, empty otherwise |
//!
//! There are no loops, expressions or other conditionals. Substitution is
//! literal and single-pass: values are never rescanned for tokens, unknown
//! placeholders and malformed tokens are copied through unchanged. Only the
//! first distinct `{{ifClassifier:...}}` token of a template is resolved
//! (every copy of it); see [`validate`] for catching such surprises early.
//!
//! # Modules
//!
//! - [`parser`] - [`Template`], the tokenizer
//! - [`context`] - [`TemplateValues`], name to value mapping
//! - [`renderer`] - [`ManifestRenderer`], sort, render, join, embed
//! - [`validate`] - [`validate_templates`], static template checks

pub mod context;
pub mod parser;
pub mod renderer;
pub mod validate;

pub use context::TemplateValues;
pub use parser::{Segment, Template};
pub use renderer::{ManifestRenderer, apply_artifact_template, render};
pub use validate::{TemplateIssue, validate_templates};
