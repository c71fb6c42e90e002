//! Upward search for an environment file.
//!
//! [`EnvFileLocator`] starts in a directory and climbs through its ancestors
//! until it finds the target file. The walk gives up after checking a
//! directory that holds the boundary marker, or after checking the
//! filesystem root. Within one directory the target is always checked first,
//! so a directory containing both files still succeeds.

use std::path::{Path, PathBuf};

use crate::error::{EnvResult, current_dir_error, not_found};
use crate::parse::{self, ApplySummary};
use crate::{EnvSink, ProcessEnv};

mod builder;

pub use builder::EnvFileLocatorBuilder;

/// File searched for when no other name is configured.
pub const DEFAULT_FILE_NAME: &str = ".env";

/// Project manifest that ends the walk when no other marker is configured.
pub const DEFAULT_BOUNDARY_MARKER: &str = "Cargo.toml";

/// Locates environment files by walking up the directory tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvFileLocator {
    file_name: String,
    boundary_marker: String,
}

/// Outcome of a successful load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadReport {
    /// File that was applied.
    pub path: PathBuf,
    /// Counts gathered while applying the file.
    pub summary: ApplySummary,
}

impl EnvFileLocator {
    /// Creates a builder initialised with the default names.
    #[must_use]
    pub fn builder() -> EnvFileLocatorBuilder {
        EnvFileLocatorBuilder::new()
    }

    /// Name of the file searched for.
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Name of the file that ends the walk.
    #[must_use]
    pub fn boundary_marker(&self) -> &str {
        &self.boundary_marker
    }

    /// Finds the nearest target file at or above `start`.
    ///
    /// When `start` is `None` the walk begins in the current working
    /// directory.
    ///
    /// # Errors
    ///
    /// Returns [`crate::EnvFileError::CurrentDir`] if the working directory is
    /// needed but cannot be read, and [`crate::EnvFileError::NotFound`] if the
    /// walk ends without finding the file.
    pub fn locate(&self, start: Option<&Path>) -> EnvResult<PathBuf> {
        let Some(dir) = start else {
            let cwd = std::env::current_dir().map_err(current_dir_error)?;
            return self.locate_from(&cwd);
        };
        self.locate_from(dir)
    }

    /// Finds the nearest target file at or above `start`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::EnvFileError::NotFound`] listing every directory that
    /// was checked when the boundary marker or the root is reached first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dotenv_walk::EnvFileLocator;
    ///
    /// let root = tempfile::tempdir()?;
    /// let nested = root.path().join("crates/app/src");
    /// std::fs::create_dir_all(&nested)?;
    /// std::fs::write(root.path().join(".env"), "KEY=value\n")?;
    ///
    /// let found = EnvFileLocator::default().locate_from(&nested);
    /// assert_eq!(found.ok(), Some(root.path().join(".env")));
    /// # Ok::<(), std::io::Error>(())
    /// ```
    pub fn locate_from(&self, start: &Path) -> EnvResult<PathBuf> {
        let mut visited = Vec::new();
        let mut dir = start.to_path_buf();
        loop {
            visited.push(dir.clone());

            let candidate = dir.join(&self.file_name);
            tracing::debug!(path = %candidate.display(), "checking for environment file");
            if candidate.exists() {
                tracing::info!(path = %candidate.display(), "found environment file");
                return Ok(candidate);
            }

            if dir.join(&self.boundary_marker).exists() {
                tracing::debug!(
                    dir = %dir.display(),
                    marker = %self.boundary_marker,
                    "reached project boundary"
                );
                break;
            }

            let Some(parent) = parent_dir(&dir) else {
                break;
            };
            dir = parent;
        }
        Err(not_found(&self.file_name, visited))
    }

    /// Locates the target file and applies it to the process environment.
    ///
    /// # Errors
    ///
    /// Propagates failures from [`Self::locate`] and
    /// [`crate::parse::load_file`].
    pub fn load(&self, start: Option<&Path>) -> EnvResult<LoadReport> {
        self.load_into(start, ProcessEnv)
    }

    /// Locates the target file and applies it to `sink`.
    ///
    /// # Errors
    ///
    /// Propagates failures from [`Self::locate`] and
    /// [`crate::parse::load_file`].
    pub fn load_into<S: EnvSink>(&self, start: Option<&Path>, sink: S) -> EnvResult<LoadReport> {
        let path = self.locate(start)?;
        let summary = parse::load_file(&path, sink)?;
        Ok(LoadReport { path, summary })
    }
}

impl Default for EnvFileLocator {
    fn default() -> Self {
        EnvFileLocatorBuilder::new().build()
    }
}

/// Parent of `dir`, or `None` once the walk cannot climb any further.
///
/// A single relative component climbs to `.`, whose own parent is itself.
fn parent_dir(dir: &Path) -> Option<PathBuf> {
    let parent = match dir.parent() {
        Some(parent) if parent.as_os_str().is_empty() => Path::new("."),
        Some(parent) => parent,
        None => return None,
    };
    (parent != dir).then(|| parent.to_path_buf())
}
