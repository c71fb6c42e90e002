//! Primary error enum for environment file discovery and loading.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias for results produced by this crate.
pub type EnvResult<T> = Result<T, EnvFileError>;

/// Errors that can occur while locating or loading an environment file.
///
/// Malformed lines never produce an error; they are skipped while parsing.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EnvFileError {
    /// The target file was not found before the upward walk stopped.
    #[error("failed to find {file_name} file in: [{}]", join_paths(.visited))]
    NotFound {
        /// Name of the file that was searched for.
        file_name: String,
        /// Every directory that was checked, in walk order.
        visited: Vec<PathBuf>,
    },

    /// No starting directory was supplied and the working directory could not
    /// be resolved.
    #[error("failed to resolve the current directory: {source}")]
    CurrentDir {
        /// Error reported by the operating system.
        #[source]
        source: io::Error,
    },

    /// The located file could not be opened.
    #[error("failed to open '{}': {source}", .path.display())]
    Open {
        /// Path that could not be opened.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// Reading failed part way through the file.
    ///
    /// Entries from earlier lines have already been applied.
    #[error("failed to read '{}' at line {line}: {source}", .path.display())]
    Read {
        /// Path being read.
        path: PathBuf,
        /// One-based number of the line that could not be read.
        line: usize,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
}

impl EnvFileError {
    /// Returns `true` when the walk finished without finding the target file.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Directories checked by the walk, for [`EnvFileError::NotFound`] errors.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dotenv_walk::EnvFileLocator;
    ///
    /// let dir = tempfile::tempdir()?;
    /// std::fs::write(dir.path().join("Cargo.toml"), "")?;
    /// let err = EnvFileLocator::default()
    ///     .locate_from(dir.path())
    ///     .expect_err("no .env next to the manifest");
    /// assert_eq!(err.visited(), Some(&[dir.path().to_path_buf()][..]));
    /// # Ok::<(), std::io::Error>(())
    /// ```
    #[must_use]
    pub const fn visited(&self) -> Option<&[PathBuf]> {
        match self {
            Self::NotFound { visited, .. } => Some(visited.as_slice()),
            _ => None,
        }
    }
}

fn join_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|path| path.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
