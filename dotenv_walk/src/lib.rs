//! Find the nearest `.env` file and load it into the process environment.
//!
//! [`load_env`] walks upward from a starting directory, or from the current
//! working directory, until it finds a `.env` file. The walk stops early at a
//! directory containing `Cargo.toml`. Each `KEY=VALUE` line of the file found
//! is then written to the process environment, overwriting existing values.
//!
//! ```rust,no_run
//! fn main() {
//!     if let Err(err) = dotenv_walk::load_env(None) {
//!         eprintln!("continuing without .env: {err}");
//!     }
//! }
//! ```
//!
//! Use [`EnvFileLocator`] to change the file name or the boundary marker, and
//! [`EnvFileLocator::load_into`] with any [`EnvSink`] to capture entries
//! without touching the environment.
//!
//! Loading mutates process-wide state without synchronisation. Call it early,
//! before other threads read or write environment variables.

mod error;
mod locate;
pub mod parse;
mod sink;

use std::path::Path;

pub use error::{EnvFileError, EnvResult};
pub use locate::{
    DEFAULT_BOUNDARY_MARKER, DEFAULT_FILE_NAME, EnvFileLocator, EnvFileLocatorBuilder, LoadReport,
};
pub use parse::ApplySummary;
pub use sink::{EnvSink, ProcessEnv};

/// Locates the nearest `.env` file at or above `start` and applies it to the
/// process environment.
///
/// `None` starts the search in the current working directory.
///
/// # Errors
///
/// Returns [`EnvFileError::NotFound`] when no file is found before a
/// `Cargo.toml` directory or the filesystem root, and
/// [`EnvFileError::Open`] or [`EnvFileError::Read`] when the file cannot be
/// read. Entries applied before a read failure remain set.
pub fn load_env(start: Option<&Path>) -> EnvResult<LoadReport> {
    EnvFileLocator::default().load(start)
}
