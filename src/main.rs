#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! planctl — create, remove, and inspect platform resource plans.

mod api;
mod cli;
mod commands;
mod plan;
mod types;

use std::io;
use std::time::Duration;

use anyhow::Context as _;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use api::HttpClient;
use cli::{Cli, write_error};

fn main() {
    let cli = Cli::parse();

    if cli.debug {
        init_logging();
    }

    let client = match build_client(&cli) {
        Ok(client) => client,
        Err(err) => {
            write_error(&format!("{err:#}"));
            std::process::exit(2);
        }
    };
    debug!(target_url = client.target(), "platform API client ready");

    let mut stdout = io::stdout();
    match commands::dispatch(&cli.command, &mut stdout, &client) {
        Ok(()) => {}
        Err(err) => {
            write_error(&err);
            std::process::exit(err.exit_code());
        }
    }
}

/// Install a stderr subscriber. `RUST_LOG` overrides the default filter.
fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("planctl=debug,warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn build_client(cli: &Cli) -> anyhow::Result<HttpClient> {
    HttpClient::new(
        &cli.target,
        cli.token.clone(),
        Duration::from_secs(cli.timeout),
    )
    .with_context(|| format!("cannot configure client for {}", cli.target))
}
