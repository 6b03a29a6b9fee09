use crate::compiler::Toolchain;
use crate::document::DocumentName;
use log::debug;
use std::fmt;
use std::io::{self, Write};
use texcycle_log::{ScanError, needs_bibliography, needs_rerun};

/// How the compile loop ended for one document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompileOutcome {
    /// The log stopped asking for a rerun after `passes` engine runs.
    Converged { passes: usize },
    /// The engine exited non-zero on pass `pass`.
    TypesetterFailed { pass: usize, status: i32 },
    /// The bibliography tool exited non-zero on pass `pass`.
    BibliographyFailed { pass: usize, status: i32 },
    /// Every allowed pass ran and the log still asks for a rerun.
    NotConverged { passes: usize },
}

impl fmt::Display for CompileOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Converged { passes } => write!(f, "converged after {} pass(es)", passes),
            Self::TypesetterFailed { pass, status } => {
                write!(f, "engine exited with status {} on pass {}", status, pass)
            }
            Self::BibliographyFailed { pass, status } => write!(
                f,
                "bibliography tool exited with status {} on pass {}",
                status, pass
            ),
            Self::NotConverged { passes } => {
                write!(f, "still asking for a rerun after {} passes", passes)
            }
        }
    }
}

/// Runs the engine on `document` until its log stops asking for a rerun, at
/// most `max_passes` times.
///
/// Each pass:
/// 1. runs the engine and gives up on a non-zero status;
/// 2. runs the bibliography tool if the log reports a missing `.bbl`, giving up
///    on a non-zero status;
/// 3. stops if the log does not ask for a rerun.
///
/// # Errors
///
/// Returns a [`ScanError`] if `<document>.log` cannot be read after an engine run.
pub fn compile_document<T: Toolchain + ?Sized>(
    toolchain: &T,
    document: &DocumentName,
    max_passes: usize,
) -> Result<CompileOutcome, ScanError> {
    let log = document.log_path();

    for pass in 1..=max_passes {
        debug!("{}: pass {} of {}", document, pass, max_passes);

        let status = toolchain.run_typesetter(document);
        if status != 0 {
            return Ok(CompileOutcome::TypesetterFailed { pass, status });
        }

        if let Some(line) = needs_bibliography(&log)? {
            debug!("{}: {}", document, line.trim());
            let status = toolchain.run_bibliography_tool(document);
            if status != 0 {
                return Ok(CompileOutcome::BibliographyFailed { pass, status });
            }
        }

        match needs_rerun(&log)? {
            Some(line) => debug!("{}: {}", document, line.trim()),
            None => return Ok(CompileOutcome::Converged { passes: pass }),
        }
    }

    Ok(CompileOutcome::NotConverged { passes: max_passes })
}

/// Writes the two-line notice for a document that never converged.
pub fn report_non_convergence<W: Write + ?Sized>(
    out: &mut W,
    engine: &str,
    passes: usize,
    document: &DocumentName,
) -> io::Result<()> {
    writeln!(
        out,
        "I run {} {} times for {}. Something is wrong.",
        engine, passes, document
    )?;
    writeln!(
        out,
        "Please take a look at {} and see why it says \"rerun\".",
        document.log_path().display()
    )
}
