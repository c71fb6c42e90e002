//! Classification of a single `KEY=VALUE` line.

const QUOTES: [char; 2] = ['"', '\''];

/// A key/value pair borrowed from one line of an environment file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvEntry<'a> {
    /// Variable name, trimmed and never empty.
    pub key: &'a str,
    /// Value with surrounding whitespace and quote characters removed.
    pub value: &'a str,
}

/// Outcome of parsing one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedLine<'a> {
    /// Empty or whitespace-only line.
    Blank,
    /// Line whose first non-whitespace character is `#`.
    Comment,
    /// Line that is neither a comment nor a usable assignment.
    Malformed,
    /// Assignment to apply.
    Entry(EnvEntry<'a>),
}

/// Parses one raw line of an environment file.
///
/// The line is split at the first `=`. Both halves are trimmed, then every
/// leading and trailing `"` or `'` is removed from the value. Quotes are not
/// matched in pairs, so `"va"lue"` yields `va"lue`.
///
/// Lines without `=`, lines with an empty key, and lines containing a NUL
/// character are [`ParsedLine::Malformed`].
///
/// # Examples
///
/// ```rust
/// use dotenv_walk::parse::{EnvEntry, ParsedLine, parse_line};
///
/// assert_eq!(
///     parse_line(r#"  GREETING = "hello world" "#),
///     ParsedLine::Entry(EnvEntry { key: "GREETING", value: "hello world" })
/// );
/// assert_eq!(parse_line("# comment"), ParsedLine::Comment);
/// assert_eq!(parse_line("=orphan"), ParsedLine::Malformed);
/// ```
#[must_use]
pub fn parse_line(raw: &str) -> ParsedLine<'_> {
    let line = raw.trim();
    if line.is_empty() {
        return ParsedLine::Blank;
    }
    if line.starts_with('#') {
        return ParsedLine::Comment;
    }
    let Some((raw_key, raw_value)) = line.split_once('=') else {
        return ParsedLine::Malformed;
    };
    let key = raw_key.trim();
    let value = raw_value.trim().trim_matches(QUOTES);
    if key.is_empty() || key.contains('\0') || value.contains('\0') {
        return ParsedLine::Malformed;
    }
    ParsedLine::Entry(EnvEntry { key, value })
}

/// Parses one raw line whose bytes may not be valid UTF-8.
///
/// Valid UTF-8 is handed to [`parse_line`]. Otherwise a line starting with
/// `#` (after leading ASCII whitespace) is still a [`ParsedLine::Comment`];
/// anything else is [`ParsedLine::Malformed`], since environment entries
/// are applied as text.
///
/// # Examples
///
/// ```rust
/// use dotenv_walk::parse::{ParsedLine, parse_bytes};
///
/// assert_eq!(parse_bytes(b"  # caf\xe9"), ParsedLine::Comment);
/// assert_eq!(parse_bytes(b"NAME=caf\xe9"), ParsedLine::Malformed);
/// ```
#[must_use]
pub fn parse_bytes(raw: &[u8]) -> ParsedLine<'_> {
    match std::str::from_utf8(raw) {
        Ok(text) => parse_line(text),
        Err(_) if raw.trim_ascii_start().starts_with(b"#") => ParsedLine::Comment,
        Err(_) => ParsedLine::Malformed,
    }
}
