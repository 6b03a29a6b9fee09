use crate::ScanError;
use crate::scan::first_match;
use once_cell::sync::Lazy;
use regex::bytes::Regex;
use std::path::Path;

/// Matches the engine's note that the compiled bibliography (`.bbl`) is absent.
///
/// Case-sensitive: the engine always writes `No file <name>.bbl.`.
pub const MISSING_BBL_PATTERN: &str = "No file(?-u:.)*bbl";

/// Matches any request for another pass, in any letter case.
pub const RERUN_PATTERN: &str = "(?i)rerun";

pub static MISSING_BBL: Lazy<Regex> =
    Lazy::new(|| Regex::new(MISSING_BBL_PATTERN).expect("MISSING_BBL_PATTERN is valid"));

pub static RERUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(RERUN_PATTERN).expect("RERUN_PATTERN is valid"));

/// Returns the log line reporting a missing `.bbl`, if there is one.
pub fn needs_bibliography(log: impl AsRef<Path>) -> Result<Option<String>, ScanError> {
    first_match(log, &MISSING_BBL)
}

/// Returns the first log line asking for a rerun, if there is one.
pub fn needs_rerun(log: impl AsRef<Path>) -> Result<Option<String>, ScanError> {
    first_match(log, &RERUN)
}
