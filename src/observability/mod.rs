//! Structured logging to a rotating file.
//!
//! The console owns stdout, so log output goes to
//! `<data dir>/horarios-admin.log`:
//!
//! ```text
//! tracing macros → EnvFilter → fmt layer → FileWriter (10 MB, 3 backups)
//! ```
//!
//! # Configuration
//!
//! The level is taken from, in order:
//! 1. `RUST_LOG`
//! 2. `trace_level` in the configuration
//! 3. `"info"`
//!
//! # Usage
//!
//! ```rust,no_run
//! use horarios_admin::observability::init_tracing;
//! use horarios_admin::Config;
//!
//! init_tracing(&Config::default());
//! tracing::debug!("console started");
//! ```

mod file_writer;
mod init;

pub use file_writer::{FileWriter, MAX_BACKUP_FILES, MAX_FILE_SIZE_BYTES};
pub use init::{filter_directive, init_tracing, LOG_FILE_NAME};
