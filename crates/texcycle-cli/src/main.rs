use clap::Parser;
use log::{LevelFilter, info};
use std::ffi::OsString;
use texcycle_build::{BuildConfig, ExternalToolchain, run_documents};

/// Re-run pdflatex and bibtex until the log stops asking for a rerun.
///
/// Takes no options: every argument, including ones starting with `-`, is a
/// document name.
#[derive(Parser)]
#[command(name = "texcycle")]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// Documents to compile; a trailing `.tex` is stripped
    #[arg(value_name = "DOCUMENT", allow_hyphen_values = true)]
    documents: Vec<String>,
}

impl Cli {
    /// Parses `args` (program name first), treating every later argument as a
    /// document.
    fn from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut args = args.into_iter().map(Into::<OsString>::into);
        let program = args.next().unwrap_or_else(|| OsString::from("texcycle"));
        let escaped = std::iter::once(program)
            .chain(std::iter::once(OsString::from("--")))
            .chain(args);
        Self::try_parse_from(escaped)
    }
}

fn init_logging() {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Warn)
        .parse_default_env()
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::from_args(std::env::args_os()).unwrap_or_else(|e| e.exit());
    init_logging();

    let config = BuildConfig::default();
    let toolchain = ExternalToolchain::new(&config);
    let summary = run_documents(&config, &toolchain, &cli.documents, &mut std::io::stdout())?;

    info!(
        "{} document(s): {} converged, {} failed, {} did not converge",
        summary.documents(),
        summary.converged,
        summary.failed,
        summary.not_converged
    );
    Ok(())
}
