//! Constants shared across the deptemplate codebase.
//!
//! Template defaults, placeholder names and file names live here so that the
//! renderer, the validator and the command layer agree on them.

/// Default per-artifact template.
///
/// Renders `com.x:lib-1.0.jar`, or `com.x:lib-1.0-tests.jar` when the
/// artifact carries the `tests` classifier.
pub const DEFAULT_ARTIFACT_TEMPLATE: &str =
    "{{groupId}}:{{artifactId}}-{{version}}{{ifClassifier:-}}{{classifier}}.{{type}}";

/// Placeholder in the outer template that receives the joined artifact text.
pub const ARTIFACTS_PLACEHOLDER: &str = "artifacts";

/// Default outer template: nothing but the joined artifact text.
pub const DEFAULT_MAIN_TEMPLATE: &str = "{{artifacts}}";

/// Opening delimiter of every template token.
pub const TOKEN_OPEN: &str = "{{";

/// Closing delimiter of every template token.
pub const TOKEN_CLOSE: &str = "}}";

/// Name prefix of the conditional classifier token (`{{ifClassifier:-}}`).
pub const IF_CLASSIFIER_PREFIX: &str = "ifClassifier:";

/// Placeholder names understood by the per-artifact template.
pub const ARTIFACT_PLACEHOLDERS: &[&str] =
    &["groupId", "artifactId", "version", "type", "scope", "classifier"];

/// Configuration file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "deptemplate.toml";

/// Line break appended to the separator when `line-break` is enabled.
pub const LINE_BREAK: &str = "\n";
