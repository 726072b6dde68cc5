// Entrypoint for the CLI application.
// - Parses flags, sets up logging and resolves configuration.
// - Returns `anyhow::Result` so any fatal error prints and exits non-zero.

use gist_cli::{cli::Args, config::Config, run};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let args = Args::parse_normalized();
    init_tracing(args.verbose);

    let config = Config::from_args(args)?;
    run(config, std::io::stdin().lock(), &mut std::io::stdout().lock())
}

/// Log to stderr so stdout carries only the report. `RUST_LOG` overrides
/// the default level.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
