//! Line-oriented parsing of environment files.
//!
//! Files are streamed one line at a time. Blank lines and `#` comments are
//! ignored, malformed lines (including assignments that are not valid UTF-8)
//! are skipped without failing the load, and every
//! assignment is handed to an [`EnvSink`] in file order. A read failure stops
//! the stream; assignments made before it are kept.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::EnvSink;
use crate::error::{EnvResult, open_error, read_error};

mod line;

pub use line::{EnvEntry, ParsedLine, parse_bytes, parse_line};

/// Counts gathered while applying a file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApplySummary {
    /// Assignments handed to the sink, duplicates included.
    pub applied: usize,
    /// Malformed lines that were ignored.
    pub skipped: usize,
}

/// Applies every assignment read from `reader` to `sink`.
///
/// # Errors
///
/// Returns the underlying [`io::Error`] when reading fails. Lines that are not
/// valid UTF-8 are not errors: they are classified by [`parse_bytes`].
///
/// # Examples
///
/// ```rust
/// use std::collections::BTreeMap;
/// use dotenv_walk::parse::apply_reader;
///
/// let mut captured: BTreeMap<String, String> = BTreeMap::new();
/// let input = "# db\nHOST=localhost\nnot a pair\nPORT='5432'\n";
/// let summary = apply_reader(input.as_bytes(), &mut captured)?;
/// assert_eq!(summary.applied, 2);
/// assert_eq!(summary.skipped, 1);
/// assert_eq!(captured["PORT"], "5432");
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn apply_reader<R, S>(reader: R, sink: S) -> io::Result<ApplySummary>
where
    R: BufRead,
    S: EnvSink,
{
    apply_lines(reader, sink).map_err(|(_, err)| err)
}

/// Opens `path` and applies its assignments to `sink`.
///
/// The file handle is released before this function returns, on success and
/// on failure alike.
///
/// # Errors
///
/// Returns [`crate::EnvFileError::Open`] when the file cannot be opened and
/// [`crate::EnvFileError::Read`] when streaming fails part way through.
pub fn load_file<S: EnvSink>(path: &Path, sink: S) -> EnvResult<ApplySummary> {
    let file = File::open(path).map_err(|err| open_error(path, err))?;
    let summary =
        apply_lines(BufReader::new(file), sink).map_err(|(line, err)| read_error(path, line, err))?;
    tracing::debug!(
        path = %path.display(),
        applied = summary.applied,
        skipped = summary.skipped,
        "applied environment file"
    );
    Ok(summary)
}

/// Streams `reader`, returning the one-based line number alongside any read
/// failure.
fn apply_lines<R, S>(mut reader: R, mut sink: S) -> Result<ApplySummary, (usize, io::Error)>
where
    R: BufRead,
    S: EnvSink,
{
    let mut summary = ApplySummary::default();
    let mut buf = Vec::new();
    let mut number = 0;
    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .map_err(|err| (number + 1, err))?;
        if read == 0 {
            break;
        }
        number += 1;
        match parse_bytes(strip_line_ending(&buf)) {
            ParsedLine::Blank | ParsedLine::Comment => {}
            ParsedLine::Malformed => {
                tracing::debug!(line = number, "skipping malformed line");
                summary.skipped += 1;
            }
            ParsedLine::Entry(entry) => {
                tracing::trace!(line = number, key = entry.key, "setting variable");
                sink.set(entry.key, entry.value);
                summary.applied += 1;
            }
        }
    }
    Ok(summary)
}

fn strip_line_ending(raw: &[u8]) -> &[u8] {
    let line = raw.strip_suffix(b"\n").unwrap_or(raw);
    line.strip_suffix(b"\r").unwrap_or(line)
}
