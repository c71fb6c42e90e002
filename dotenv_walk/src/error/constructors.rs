//! Error constructors shared by the locator and the parser.

use std::io;
use std::path::{Path, PathBuf};

use super::EnvFileError;

pub(crate) fn not_found(file_name: &str, visited: Vec<PathBuf>) -> EnvFileError {
    EnvFileError::NotFound {
        file_name: file_name.to_owned(),
        visited,
    }
}

pub(crate) const fn current_dir_error(source: io::Error) -> EnvFileError {
    EnvFileError::CurrentDir { source }
}

pub(crate) fn open_error(path: &Path, source: io::Error) -> EnvFileError {
    EnvFileError::Open {
        path: path.to_path_buf(),
        source,
    }
}

pub(crate) fn read_error(path: &Path, line: usize, source: io::Error) -> EnvFileError {
    EnvFileError::Read {
        path: path.to_path_buf(),
        line,
        source,
    }
}
