//! Structured logging for the store.
//!
//! All modules log through `tracing` macros: a debug span per dispatch and per
//! reducer run, debug events for applied transitions, and warnings for rejected
//! actions. This module installs the subscriber that collects them.
//!
//! # Configuration
//!
//! The level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` in [`Config`](crate::Config)
//! 3. Default: `"info"`
//!
//! Output goes to `trace_file` if set (rotated at 10MB, 3 backups kept),
//! otherwise to stderr.
//!
//! # Modules
//!
//! - `init`: Subscriber setup
//! - `file_writer`: Rotating file writer

mod file_writer;
mod init;

pub use file_writer::FileWriter;
pub use init::init_tracing;
