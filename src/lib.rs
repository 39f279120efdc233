//! mtdu: total size of files and directories, scanned in parallel
//!
//! Each input path gets its own atomic accumulator. All of them share one
//! worker pool: a directory task adds its regular files directly and submits a
//! new task for every subdirectory. Symlinks are never followed, and an entry
//! that cannot be read contributes nothing instead of failing the run.

pub mod bytes;
pub mod cli;
pub mod config;
pub mod error;
pub mod file_system;
pub mod logging;
pub mod output;
pub mod scan;
pub mod scheduler;
pub mod stats;
pub mod utils;
