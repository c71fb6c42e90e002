//! Guard for changing the working directory in tests.
//!
//! Loading without an explicit start directory searches from the working
//! directory, which is shared by every test in the process. [`set_dir`] takes
//! a global mutex, switches directory, and switches back when the returned
//! guard is dropped.
//!
//! # Examples
//!
//! ```no_run
//! use test_helpers::cwd;
//!
//! # fn run() -> anyhow::Result<()> {
//! let guard = cwd::set_dir("/srv/app/src")?;
//! // Relative lookups now start in `/srv/app/src`.
//! guard.restore()?;
//! # Ok(())
//! # }
//! ```

use anyhow::{Context, Result, anyhow};
use camino::Utf8PathBuf;
use parking_lot::{Mutex, MutexGuard};
use std::path::Path;
use std::sync::LazyLock;

static CWD_MUTEX: LazyLock<Mutex<()>> = LazyLock::new(Mutex::default);

/// Restores the previous working directory when dropped.
#[must_use = "dropping restores the prior working directory"]
pub struct CwdGuard {
    original: Utf8PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl CwdGuard {
    /// Directory that will be restored.
    #[must_use]
    pub const fn original(&self) -> &Utf8PathBuf {
        &self.original
    }

    /// Switches back to the original directory, reporting failures.
    ///
    /// # Errors
    ///
    /// Returns an error if the original directory can no longer be entered.
    pub fn restore(&self) -> Result<()> {
        std::env::set_current_dir(&self.original)
            .with_context(|| format!("restore working directory {}", self.original))
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        // Failures surface through `restore` for callers that need them.
        let _ignored = std::env::set_current_dir(&self.original);
    }
}

/// Changes the working directory to `path` until the guard is dropped.
///
/// The previous directory is read and checked for UTF-8 before anything
/// changes, so a failure leaves the process where it was.
///
/// # Errors
///
/// Returns an error if the current directory cannot be read or is not UTF-8,
/// or if `path` cannot be entered.
pub fn set_dir(path: impl AsRef<Path>) -> Result<CwdGuard> {
    let lock = CWD_MUTEX.lock();
    let previous = std::env::current_dir().context("read working directory")?;
    let original = Utf8PathBuf::from_path_buf(previous)
        .map_err(|raw| anyhow!("working directory is not UTF-8: {}", raw.display()))?;
    let target = path.as_ref();
    std::env::set_current_dir(target)
        .with_context(|| format!("enter working directory {}", target.display()))?;
    Ok(CwdGuard {
        original,
        _lock: lock,
    })
}
