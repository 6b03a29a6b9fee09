//! # texcycle Build
//!
//! Drives a TeX engine and a bibliography tool until a document's log stops
//! asking for another pass.
//!
//! ## Modules
//!
//! - [`document`] - Document names derived from command-line arguments
//! - [`compiler`] - The [`Toolchain`] seam and the process-spawning implementation
//! - [`cycle`] - The bounded compile loop for a single document
//!
//! ## Example
//!
//! ```no_run
//! use texcycle_build::{BuildConfig, ExternalToolchain, run_documents};
//!
//! let config = BuildConfig::default();
//! let toolchain = ExternalToolchain::new(&config);
//! let summary = run_documents(&config, &toolchain, ["paper.tex"], &mut std::io::stdout())?;
//! println!("{} converged", summary.converged);
//! # Ok::<(), anyhow::Error>(())
//! ```

use anyhow::{Context, Result};
use log::info;
use std::io::Write;

pub mod compiler;
pub mod cycle;
pub mod document;

pub use compiler::{ExternalToolchain, Toolchain};
pub use cycle::{CompileOutcome, compile_document, report_non_convergence};
pub use document::DocumentName;

/// Number of passes after which a document still asking for a rerun is given up on.
pub const DEFAULT_MAX_PASSES: usize = 10;

/// Which programs to run and how many passes to allow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    /// The typesetting compiler, e.g. "pdflatex".
    pub typesetter: String,
    /// The bibliography processor, e.g. "bibtex".
    pub bibliography_tool: String,
    pub max_passes: usize,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            typesetter: "pdflatex".to_string(),
            bibliography_tool: "bibtex".to_string(),
            max_passes: DEFAULT_MAX_PASSES,
        }
    }
}

/// Tally of outcomes over one invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub converged: usize,
    /// Documents abandoned because an external tool exited non-zero.
    pub failed: usize,
    pub not_converged: usize,
}

impl RunSummary {
    fn record(&mut self, outcome: &CompileOutcome) {
        match outcome {
            CompileOutcome::Converged { .. } => self.converged += 1,
            CompileOutcome::TypesetterFailed { .. } | CompileOutcome::BibliographyFailed { .. } => {
                self.failed += 1
            }
            CompileOutcome::NotConverged { .. } => self.not_converged += 1,
        }
    }

    pub fn documents(&self) -> usize {
        self.converged + self.failed + self.not_converged
    }
}

/// Compiles every argument in order.
///
/// A failing external tool only ends its own document. A log that cannot be
/// read ends the whole run with an error.
pub fn run_documents<T, I, S, W>(
    config: &BuildConfig,
    toolchain: &T,
    args: I,
    out: &mut W,
) -> Result<RunSummary>
where
    T: Toolchain + ?Sized,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    W: Write,
{
    let mut summary = RunSummary::default();

    for arg in args {
        let document = DocumentName::from_arg(arg.as_ref());
        let outcome = compile_document(toolchain, &document, config.max_passes)
            .with_context(|| format!("failed to compile {}", document))?;
        info!("{}: {}", document, outcome);

        if let CompileOutcome::NotConverged { passes } = outcome {
            report_non_convergence(out, &config.typesetter, passes, &document)
                .context("failed to write diagnostic")?;
        }
        summary.record(&outcome);
    }

    Ok(summary)
}
