//! Command-line interface.

pub mod generate;
pub mod output;

use std::path::PathBuf;

use clap::Parser;

use crate::core::constants::{DEFAULT_EXPIRES_IN, MAX_EXPIRES_IN};

/// envseed - Bootstrap secrets and env files for a self-hosted Supabase stack.
#[derive(Parser, Debug)]
#[command(
    name = "envseed",
    about = "Generate secrets and env files for a self-hosted Supabase stack",
    version,
    after_help = "Writes .env, frontend.env and backend.env, then maps kong to 127.0.0.1 in the hosts file."
)]
pub struct Cli {
    /// Public hostname the backend is served from (e.g., example.com)
    pub hostname: String,

    /// Directory to write the env files into
    #[arg(short, long, env = "ENVSEED_OUTPUT_DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Hosts file to append the gateway entry to
    #[arg(long, env = "ENVSEED_HOSTS_FILE")]
    pub hosts_file: Option<PathBuf>,

    /// Do not touch the hosts file
    #[arg(long)]
    pub no_hosts: bool,

    /// Lifetime of the signed role tokens, in seconds
    #[arg(
        long,
        default_value_t = DEFAULT_EXPIRES_IN,
        value_parser = clap::value_parser!(i64).range(1..=MAX_EXPIRES_IN)
    )]
    pub jwt_expiry: i64,

    /// Print a JSON summary instead of text
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Execute the command line.
pub fn execute(cli: &Cli) -> crate::error::Result<()> {
    generate::execute(cli)
}
