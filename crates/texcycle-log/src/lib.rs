//! # texcycle Log Scanner
//!
//! Line-oriented scanning of TeX engine log files (`*.log`).
//!
//! ## Overview
//!
//! A TeX engine tells its caller that more work is needed only through text in
//! its log. This crate answers two questions about such a log, each with a
//! separate scan:
//!
//! - **Is the compiled bibliography missing?** The engine writes
//!   `No file <name>.bbl.` when `\bibliography` has nothing to read yet.
//! - **Does the engine ask for another pass?** Warnings such as
//!   `Label(s) may have changed. Rerun to get cross-references right.`
//!
//! The two scans use differently-cased patterns (see [`signals`]) and are never
//! merged into one general log parser.
//!
//! ## Scanning
//!
//! [`scan::contains_pattern`] opens a file, compiles a pattern and stops at the
//! first matching line. Lines are read as raw bytes, so logs containing
//! non-UTF-8 bytes (common with 8-bit font encodings) scan without error.
//!
//! ```no_run
//! use texcycle_log::scan::contains_pattern;
//!
//! if contains_pattern("paper.log", "No file.*bbl")? {
//!     println!("run bibtex first");
//! }
//! # Ok::<(), texcycle_log::ScanError>(())
//! ```
//!
//! ## Signals
//!
//! ```
//! use texcycle_log::signals::{MISSING_BBL, RERUN};
//!
//! assert!(MISSING_BBL.is_match(b"No file paper.bbl."));
//! assert!(RERUN.is_match(b"Rerun to get cross-references right."));
//! assert!(RERUN.is_match(b"PLEASE RERUN LATEX"));
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Line-oriented scanning primitives.
pub mod scan;
/// The two log signals that drive the compile loop.
pub mod signals;


pub use scan::{contains_pattern, first_match, first_match_in};
pub use signals::{needs_bibliography, needs_rerun};

/// Errors raised while scanning a log.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The log file could not be opened (usually: the engine never wrote it).
    #[error("cannot open log file {}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Reading failed part-way through the file.
    #[error("cannot read log file {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid log pattern")]
    Pattern(#[from] regex::Error),
}
