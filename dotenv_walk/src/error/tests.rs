//! Unit tests for error rendering and classification.

use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Result, ensure};
use rstest::rstest;

use super::{EnvFileError, current_dir_error, not_found, open_error, read_error};

#[rstest]
fn not_found_lists_visited_directories_in_order() -> Result<()> {
    let visited = vec![
        PathBuf::from("/work/project/sub"),
        PathBuf::from("/work/project"),
    ];
    let err = not_found(".env", visited.clone());
    let message = err.to_string();
    ensure!(
        message == "failed to find .env file in: [/work/project/sub, /work/project]",
        "unexpected message: {message}"
    );
    ensure!(err.is_not_found(), "expected a not-found classification");
    ensure!(
        err.visited() == Some(visited.as_slice()),
        "expected the visited list to round-trip"
    );
    Ok(())
}

#[rstest]
#[case(open_error(Path::new("/tmp/.env"), io::Error::from(io::ErrorKind::PermissionDenied)), "failed to open '/tmp/.env'")]
#[case(read_error(Path::new("/tmp/.env"), 3, io::Error::from(io::ErrorKind::InvalidData)), "failed to read '/tmp/.env' at line 3")]
#[case(current_dir_error(io::Error::from(io::ErrorKind::NotFound)), "failed to resolve the current directory")]
fn io_failures_name_their_context(#[case] err: EnvFileError, #[case] prefix: &str) -> Result<()> {
    let message = err.to_string();
    ensure!(
        message.starts_with(prefix),
        "expected {message:?} to start with {prefix:?}"
    );
    ensure!(!err.is_not_found(), "io failures are not not-found errors");
    ensure!(err.visited().is_none(), "only not-found errors carry a walk");
    ensure!(
        std::error::Error::source(&err).is_some(),
        "expected the io error to be exposed as the source"
    );
    Ok(())
}
