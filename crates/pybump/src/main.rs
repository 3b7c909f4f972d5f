mod error;
mod logging;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use pybump_operations::BumpInput;
use pybump_operations::operations::bump_project;

use crate::error::{CliError, Result};

#[derive(Parser)]
#[command(name = "pybump")]
#[command(version)]
#[command(about = "Set the version in pyproject.toml and setup.cfg", long_about = None)]
struct Cli {
    /// New version, e.g. 1.2.3 or v1.2.3-rc.1 (the suffix is dropped)
    #[arg(id = "new_version", value_name = "VERSION")]
    version: String,

    /// Project root containing pyproject.toml and/or setup.cfg (default: current directory)
    #[arg(long = "path", short = 'C')]
    path: Option<PathBuf>,

    /// Show which files would change without writing anything
    #[arg(long)]
    dry_run: bool,

    /// Log every step to stderr
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_error(&e);
            e.exit_code()
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let root = resolve_root(cli.path)?;
    let input = BumpInput {
        dry_run: cli.dry_run,
    };

    let outcome = bump_project(&root, &cli.version, &input)?;

    print!("{}", output::format_outcome(&outcome, &root, input.dry_run));
    eprintln!("{}", output::summary_line(&outcome, input.dry_run));
    Ok(())
}

fn resolve_root(path: Option<PathBuf>) -> Result<PathBuf> {
    match path {
        Some(p) => Ok(p),
        None => std::env::current_dir().map_err(CliError::CurrentDir),
    }
}

fn print_error(error: &CliError) {
    eprintln!("error: {error}");

    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        eprintln!("caused by: {cause}");
        source = std::error::Error::source(cause);
    }

    if let Some(hint) = error.hint() {
        eprintln!("hint: {hint}");
    }
}
