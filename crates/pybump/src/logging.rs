use tracing_subscriber::EnvFilter;

const VERBOSE_FILTER: &str = "pybump=debug,pybump_operations=debug";
const DEFAULT_FILTER: &str = "warn";

/// Installs the process-wide subscriber. Called once, before any work.
///
/// `--verbose` wins over `RUST_LOG`; otherwise `RUST_LOG` is honored and
/// only warnings are shown by default.
pub(crate) fn init(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
