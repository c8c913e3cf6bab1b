//! Generate command - create secrets and write every env file.

use std::path::PathBuf;

use serde::Serialize;
use tracing::info;

use crate::cli::output;
use crate::cli::Cli;
use crate::core::bundle::{self, GenerateOptions};
use crate::core::constants::HOSTS_ENTRY;
use crate::core::hosts::HostsFile;
use crate::core::render;
use crate::core::types::Hostname;
use crate::core::writer::{self, FileOwner, HostsPolicy};
use crate::error::Result;

/// Machine-readable result of a run. Contains no secret values.
#[derive(Debug, Serialize)]
struct Summary {
    hostname: String,
    files: Vec<PathBuf>,
    hosts: Option<String>,
    keys: Vec<&'static str>,
    jwt_expiry: i64,
}

/// Generate secrets, render the env files and write them out.
pub fn execute(cli: &Cli) -> Result<()> {
    let hostname = Hostname::new(cli.hostname.as_str());
    info!("Generating secrets for {}", hostname);

    let options = GenerateOptions {
        expires_in: cli.jwt_expiry,
        ..GenerateOptions::default()
    };
    let bundle = bundle::generate_with(&options)?;
    info!("Generated {} values", bundle.keys().len());

    let artifacts = render::render_all(&bundle, &hostname, cli.jwt_expiry);

    let mut sink = cli
        .hosts_file
        .clone()
        .map(HostsFile::new)
        .unwrap_or_else(HostsFile::system);
    let policy = if cli.no_hosts {
        HostsPolicy::Skip
    } else {
        HostsPolicy::Append
    };

    let owner = FileOwner::from_sudo_env();
    let report = writer::write_outputs(&cli.output_dir, &artifacts, &mut sink, policy, owner)?;

    if cli.json {
        let summary = Summary {
            hostname: hostname.to_string(),
            files: report.files,
            hosts: report.hosts,
            keys: bundle.keys(),
            jwt_expiry: cli.jwt_expiry,
        };
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    for file in &report.files {
        output::success(&format!("wrote {}", output::path(&file.display().to_string())));
    }
    match &report.hosts {
        Some(target) => output::success(&format!("mapped kong in {}", output::path(target))),
        None => output::warn(&format!(
            "hosts file untouched; add `{}` yourself if needed",
            HOSTS_ENTRY
        )),
    }
    output::kv("hostname:", &hostname);
    output::kv("token lifetime:", format!("{}s", cli.jwt_expiry));

    Ok(())
}
