use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod args;
mod cmd;
mod io;
mod output;

fn main() -> Result<()> {
    let cli = args::Cli::parse();
    output::init(cli.json);
    init_tracing(&cli.log_level);

    cmd::dispatch(cli)
}

/// Logs go to stderr so stdout stays parseable in `--json` mode.
/// `RUST_LOG` takes precedence over `--log-level`.
fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
