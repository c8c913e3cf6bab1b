//! envseed - Bootstrap secrets and env files for a self-hosted Supabase stack.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use envseed::cli::output;
use envseed::cli::{execute, Cli};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env("ENVSEED_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("envseed=debug")
        } else {
            EnvFilter::new("envseed=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .init();

    if let Err(e) = execute(&cli) {
        output::error(&e.to_string());
        if e.is_hosts_permission_denied() {
            output::hint("re-run with sudo, or pass --no-hosts");
        }
        std::process::exit(1);
    }
}
