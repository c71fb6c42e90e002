//! Guards for mutating environment variables in tests.
//!
//! All mutations and restorations go through one global re-entrant mutex.
//! A guard records the value a key held before it was touched and puts it
//! back (or removes the key) when dropped. Guards for the same key restore in
//! LIFO order.
//!
//! Hold an [`EnvVarLock`] or an [`EnvScope`] when a test needs the
//! environment to stay untouched by other tests across several steps, for
//! example while code under test writes variables of its own.
//!
//! # Examples
//!
//! ```
//! use test_helpers::env;
//!
//! let _scope = env::scope_with(|lock| vec![lock.remove_var("DATABASE_URL")]);
//! // `DATABASE_URL` is unset until `_scope` is dropped.
//! ```

use parking_lot::{ReentrantMutex, ReentrantMutexGuard};
use std::env;
use std::ffi::{OsStr, OsString};
use std::fmt;
use std::sync::LazyLock;

static ENV_MUTEX: LazyLock<ReentrantMutex<()>> = LazyLock::new(ReentrantMutex::default);

type LockGuard = ReentrantMutexGuard<'static, ()>;

/// RAII guard restoring an environment variable to its prior value on drop.
#[must_use = "dropping restores the prior value"]
pub struct EnvVarGuard {
    key: String,
    original: Option<OsString>,
}

impl EnvVarGuard {
    fn capture(key: String, _held: &LockGuard) -> Self {
        let original = env::var_os(&key);
        Self { key, original }
    }
}

impl fmt::Debug for EnvVarGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvVarGuard")
            .field("key", &self.key)
            .field("had_original", &self.original.is_some())
            .finish_non_exhaustive()
    }
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        let _held = ENV_MUTEX.lock();
        match self.original.take() {
            // SAFETY: `ENV_MUTEX` is held for the write.
            Some(value) => unsafe { env::set_var(&self.key, value) },
            // SAFETY: `ENV_MUTEX` is held for the removal.
            None => unsafe { env::remove_var(&self.key) },
        }
    }
}

/// Holds the global environment lock until dropped.
#[must_use = "dropping releases the environment lock"]
pub struct EnvVarLock {
    held: LockGuard,
}

impl EnvVarLock {
    /// Sets `key` to `value` and returns a guard restoring the prior value.
    pub fn set_var<K, V>(&self, key: K, value: V) -> EnvVarGuard
    where
        K: Into<String>,
        V: AsRef<OsStr>,
    {
        let guard = EnvVarGuard::capture(key.into(), &self.held);
        // SAFETY: `ENV_MUTEX` is held through `self.held`.
        unsafe { env::set_var(&guard.key, value) };
        guard
    }

    /// Removes `key` and returns a guard restoring the prior value.
    pub fn remove_var<K>(&self, key: K) -> EnvVarGuard
    where
        K: Into<String>,
    {
        let guard = EnvVarGuard::capture(key.into(), &self.held);
        // SAFETY: `ENV_MUTEX` is held through `self.held`.
        unsafe { env::remove_var(&guard.key) };
        guard
    }
}

/// Keeps the environment lock and a set of guards alive together.
///
/// Guards are restored before the lock is released.
#[must_use = "dropping releases the environment lock and restores guards"]
pub struct EnvScope {
    guards: Vec<EnvVarGuard>,
    _lock: EnvVarLock,
}

impl EnvScope {
    /// Runs `builder` under the lock and keeps the guards it returns.
    pub fn new_with<F>(builder: F) -> Self
    where
        F: FnOnce(&EnvVarLock) -> Vec<EnvVarGuard>,
    {
        let lock = lock();
        let guards = builder(&lock);
        Self {
            guards,
            _lock: lock,
        }
    }

    /// Adds a guard created while the scope is alive.
    pub fn push(&mut self, guard: EnvVarGuard) {
        self.guards.push(guard);
    }
}

impl Drop for EnvScope {
    fn drop(&mut self) {
        while let Some(guard) = self.guards.pop() {
            drop(guard);
        }
    }
}

/// Acquires the global environment lock.
///
/// # Examples
///
/// ```
/// use test_helpers::env;
///
/// let lock = env::lock();
/// let _guard = lock.set_var("LOG_LEVEL", "debug");
/// assert_eq!(std::env::var("LOG_LEVEL").ok().as_deref(), Some("debug"));
/// ```
pub fn lock() -> EnvVarLock {
    EnvVarLock {
        held: ENV_MUTEX.lock(),
    }
}

/// Sets an environment variable and returns a guard restoring its prior value.
///
/// The lock is held only while setting and while restoring.
pub fn set_var<K, V>(key: K, value: V) -> EnvVarGuard
where
    K: Into<String>,
    V: AsRef<OsStr>,
{
    lock().set_var(key, value)
}

/// Removes an environment variable and returns a guard restoring its prior
/// value.
///
/// The lock is held only while removing and while restoring.
pub fn remove_var<K>(key: K) -> EnvVarGuard
where
    K: Into<String>,
{
    lock().remove_var(key)
}

/// Creates an [`EnvScope`] from guards produced under the lock.
pub fn scope_with<F>(builder: F) -> EnvScope
where
    F: FnOnce(&EnvVarLock) -> Vec<EnvVarGuard>,
{
    EnvScope::new_with(builder)
}

#[cfg(test)]
mod tests;
