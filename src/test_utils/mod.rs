//! Test utilities for deptemplate
//!
//! Available to unit tests and, through the `test-utils` feature, to the
//! integration suites:
//!
//! - [`init_test_logging`] - one-time tracing setup routed to the test writer
//! - [`ArtifactBuilder`] - descriptors with sensible defaults
//! - [`DependencyFixture`] - ready-made resolved dependency files
//!
//! # Example
//!
//! ```rust,no_run
//! use deptemplate_cli::test_utils::{ArtifactBuilder, DependencyFixture};
//!
//! # fn example(dir: &std::path::Path) -> anyhow::Result<()> {
//! let lib = ArtifactBuilder::new("com.x", "lib").version("1.0").classifier("tests").build();
//! let path = DependencyFixture::from_artifacts(&[lib], &[]).write_to(dir)?;
//! # Ok(())
//! # }
//! ```

pub mod fixtures;

pub use fixtures::{ArtifactBuilder, DependencyFixture};

use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Only the first call has an effect. Uses `level` when given, otherwise
/// `RUST_LOG`; with neither, tests run without logging.
///
/// ```bash
/// RUST_LOG=debug cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .with_thread_ids(false)
            .try_init();
    });
}
