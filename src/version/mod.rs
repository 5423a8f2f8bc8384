//! Version handling for resolved artifacts.
//!
//! Only comparison is needed here: versions arrive already resolved, and the
//! manifest just has to list them in a conventional, deterministic order.
//! See [`comparison`] for the exact rules.

pub mod comparison;

pub use comparison::VersionComparator;
