//! Shared fixtures for integration tests.
//!
//! Builds the on-disk layout used throughout the suite:
//!
//! ```text
//! <tmp>/project/go.mod
//! <tmp>/project/.env
//! <tmp>/project/subdir/nested/
//! <tmp>/outside/
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use rstest::fixture;
use tempfile::TempDir;

/// Temporary project tree; removed when dropped.
pub struct ProjectTree {
    root: TempDir,
}

impl ProjectTree {
    /// Directory holding `go.mod` and `.env`.
    #[must_use]
    pub fn project(&self) -> PathBuf {
        self.root.path().join("project")
    }

    /// Directory two levels below the project root.
    #[must_use]
    pub fn nested(&self) -> PathBuf {
        self.project().join("subdir").join("nested")
    }

    /// Sibling of the project with no environment file above it.
    #[must_use]
    pub fn outside(&self) -> PathBuf {
        self.root.path().join("outside")
    }

    /// Replaces the contents of the project's `.env`.
    pub fn write_env(&self, contents: &str) -> Result<PathBuf> {
        let path = self.project().join(".env");
        std::fs::write(&path, contents).context("write project .env")?;
        Ok(path)
    }
}

/// Creates a [`ProjectTree`] whose `.env` sets `TEST_KEY` and `ANOTHER_KEY`.
#[fixture]
pub fn project_tree() -> Result<ProjectTree> {
    let root = TempDir::new().context("create temporary root")?;
    let tree = ProjectTree { root };
    std::fs::create_dir_all(tree.nested()).context("create nested directories")?;
    std::fs::create_dir_all(tree.outside()).context("create outside directory")?;
    std::fs::write(tree.project().join("go.mod"), "module test\n").context("write go.mod")?;
    tree.write_env("TEST_KEY=test_value\nANOTHER_KEY=another_value\n")?;
    Ok(tree)
}
