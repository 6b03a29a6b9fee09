use crate::BuildConfig;
use crate::document::DocumentName;
use log::debug;
use std::process::Command;

/// Status reported when a program could not be started at all, matching what a
/// shell reports for a missing command.
pub const UNRUNNABLE_STATUS: i32 = 127;

/// Status reported when a program was terminated by a signal and has no exit code.
pub const SIGNALLED_STATUS: i32 = -1;

/// The two external programs the compile loop drives.
///
/// Both calls block until the program exits and return its exit status; zero
/// means success. This allows the loop to be driven by a scripted toolchain in
/// tests.
pub trait Toolchain {
    /// Runs the typesetting compiler on `document`.
    fn run_typesetter(&self, document: &DocumentName) -> i32;

    /// Runs the bibliography processor on `document`.
    fn run_bibliography_tool(&self, document: &DocumentName) -> i32;
}

/// A [`Toolchain`] that spawns real programs as `<program> <document>`.
///
/// Standard streams are inherited so the engine's own output reaches the user.
#[derive(Debug, Clone)]
pub struct ExternalToolchain {
    typesetter: String,
    bibliography_tool: String,
}

impl ExternalToolchain {
    pub fn new(config: &BuildConfig) -> Self {
        Self {
            typesetter: config.typesetter.clone(),
            bibliography_tool: config.bibliography_tool.clone(),
        }
    }
}

impl Toolchain for ExternalToolchain {
    fn run_typesetter(&self, document: &DocumentName) -> i32 {
        spawn_and_wait(&self.typesetter, document)
    }

    fn run_bibliography_tool(&self, document: &DocumentName) -> i32 {
        spawn_and_wait(&self.bibliography_tool, document)
    }
}

fn spawn_and_wait(program: &str, document: &DocumentName) -> i32 {
    debug!("running {} {}", program, document);
    match Command::new(program).arg(document.as_str()).status() {
        Ok(status) => status.code().unwrap_or(SIGNALLED_STATUS),
        Err(e) => {
            debug!("failed to run {}: {}", program, e);
            UNRUNNABLE_STATUS
        }
    }
}
