use std::fmt;
use std::path::PathBuf;

const TEX_SUFFIX: &str = ".tex";

/// The name of a compilable unit, without the `.tex` suffix.
///
/// The engine is invoked with this name and writes `<name>.log` next to it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocumentName(String);

impl DocumentName {
    /// Strips a trailing `.tex` from a command-line argument. No other
    /// extension is recognized.
    pub fn from_arg(arg: &str) -> Self {
        Self(arg.strip_suffix(TEX_SUFFIX).unwrap_or(arg).to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Path of the log the engine writes for this document.
    pub fn log_path(&self) -> PathBuf {
        PathBuf::from(format!("{}.log", self.0))
    }
}

impl fmt::Display for DocumentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
