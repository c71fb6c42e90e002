//! Builder for [`EnvFileLocator`].
//!
//! The defaults search for `.env` and stop at directories holding a
//! `Cargo.toml`. Both names can be replaced, for example to stop at a
//! `go.mod` or a `package.json` instead.

use super::{DEFAULT_BOUNDARY_MARKER, DEFAULT_FILE_NAME, EnvFileLocator};

/// Builder for [`EnvFileLocator`].
///
/// # Examples
///
/// ```rust
/// use dotenv_walk::EnvFileLocator;
///
/// let locator = EnvFileLocator::builder()
///     .file_name(".env.local")
///     .boundary_marker("package.json")
///     .build();
/// assert_eq!(locator.file_name(), ".env.local");
/// assert_eq!(locator.boundary_marker(), "package.json");
/// ```
#[derive(Debug, Clone)]
pub struct EnvFileLocatorBuilder {
    file_name: String,
    boundary_marker: String,
}

impl EnvFileLocatorBuilder {
    /// Creates a builder with the default file name and boundary marker.
    #[must_use]
    pub fn new() -> Self {
        Self {
            file_name: String::from(DEFAULT_FILE_NAME),
            boundary_marker: String::from(DEFAULT_BOUNDARY_MARKER),
        }
    }

    /// Overrides the name of the file searched for in each directory.
    #[must_use]
    pub fn file_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = name.into();
        self
    }

    /// Overrides the file whose presence marks the top of a project.
    ///
    /// The walk stops with an error after checking a directory that contains
    /// this file but not the target.
    #[must_use]
    pub fn boundary_marker(mut self, name: impl Into<String>) -> Self {
        self.boundary_marker = name.into();
        self
    }

    /// Builds the configured [`EnvFileLocator`].
    #[must_use]
    pub fn build(self) -> EnvFileLocator {
        EnvFileLocator {
            file_name: self.file_name,
            boundary_marker: self.boundary_marker,
        }
    }
}

impl Default for EnvFileLocatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}
