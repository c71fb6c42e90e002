//! Destinations for parsed environment entries.
//!
//! Every assignment made while loading a file goes through [`EnvSink::set`].
//! [`ProcessEnv`] writes to the real process environment; the map
//! implementations capture entries so a file can be inspected without side
//! effects.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// Receives key/value pairs in file order.
///
/// Implementations must overwrite any existing value for `key`; they are never
/// asked to remove one.
pub trait EnvSink {
    /// Stores `value` under `key`.
    fn set(&mut self, key: &str, value: &str);
}

/// Sink that writes into the environment of the current process.
///
/// Writes are not synchronised. Callers that may load files from several
/// threads, or that read the environment concurrently, must serialise those
/// accesses themselves.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSink for ProcessEnv {
    fn set(&mut self, key: &str, value: &str) {
        // SAFETY: loading is single-threaded and callers serialise any other
        // environment access for its duration. The parser never produces an
        // empty key, a key containing `=`, or text containing NUL.
        unsafe { std::env::set_var(key, value) };
    }
}

impl<H: BuildHasher> EnvSink for HashMap<String, String, H> {
    fn set(&mut self, key: &str, value: &str) {
        self.insert(key.to_owned(), value.to_owned());
    }
}

impl EnvSink for BTreeMap<String, String> {
    fn set(&mut self, key: &str, value: &str) {
        self.insert(key.to_owned(), value.to_owned());
    }
}

impl<S: EnvSink + ?Sized> EnvSink for &mut S {
    fn set(&mut self, key: &str, value: &str) {
        (**self).set(key, value);
    }
}
