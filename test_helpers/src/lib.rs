//! Test helpers shared across the workspace.
//!
//! Loading an environment file mutates two pieces of process-global state: the
//! environment itself and, when no start directory is given, the working
//! directory it is resolved from. [`env`] and [`cwd`] provide RAII guards that
//! serialise and restore both.

pub mod cwd;
pub mod env;
