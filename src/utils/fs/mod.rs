//! File system helpers.

pub mod atomic;
pub mod dirs;
pub mod formats;

pub use atomic::atomic_write;
pub use dirs::{ensure_dir, ensure_parent_dir};
pub use formats::read_text_file;
