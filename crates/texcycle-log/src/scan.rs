use crate::ScanError;
use regex::bytes::Regex;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Returns `true` if any line of the file at `path` matches `pattern`.
///
/// The pattern is compiled on every call. Callers that scan repeatedly should
/// hold a compiled [`Regex`] and use [`first_match`] instead.
///
/// # Errors
///
/// Fails if `pattern` is not a valid regular expression, if the file cannot be
/// opened, or if reading stops part-way.
pub fn contains_pattern(path: impl AsRef<Path>, pattern: &str) -> Result<bool, ScanError> {
    let regex = Regex::new(pattern)?;
    Ok(first_match(path, &regex)?.is_some())
}

/// Returns the first line of the file at `path` that matches `regex`.
///
/// The file is closed when this returns, on the early match as well as at end
/// of file.
pub fn first_match(path: impl AsRef<Path>, regex: &Regex) -> Result<Option<String>, ScanError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| ScanError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    first_match_in(BufReader::new(file), regex).map_err(|source| ScanError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Scans `reader` line by line and returns the first line matching `regex`.
///
/// Lines are split on `\n` with a trailing `\r` removed. The returned line is
/// decoded lossily.
pub fn first_match_in<R: BufRead>(mut reader: R, regex: &Regex) -> io::Result<Option<String>> {
    let mut line = Vec::new();
    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }
        let text = trim_line_ending(&line);
        if regex.is_match(text) {
            return Ok(Some(String::from_utf8_lossy(text).into_owned()));
        }
    }
}

fn trim_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
