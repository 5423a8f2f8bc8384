//! Supporting utilities.

pub mod fs;

pub use fs::{atomic_write, ensure_dir, read_text_file};
