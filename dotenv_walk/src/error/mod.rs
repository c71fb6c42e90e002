//! Error types produced while locating and loading environment files.

mod constructors;
mod types;

pub use types::{EnvFileError, EnvResult};

pub(crate) use constructors::{current_dir_error, not_found, open_error, read_error};

#[cfg(test)]
mod tests;
