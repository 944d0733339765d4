//! Syphon — binary entrypoint.
//! Parses flags, sets up logging, wires Ctrl-C to the run's cancellation token.

use anyhow::Context;
use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use syphon::cli::Cli;
use syphon::config::load_config_default;
use syphon::{run_with_config, HttpFetcher};

/// Progress notices are `info` events, so they show unless RUST_LOG says otherwise.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("syphon=info,warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_target(false))
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present; SYPHON_* vars feed clap's env fallbacks.
    let _ = dotenvy::dotenv();
    init_tracing();

    let cli = Cli::parse();
    let file_cfg = load_config_default(cli.config.as_deref()).context("loading settings")?;
    let cfg = cli.into_run_config(file_cfg);

    let fetcher = HttpFetcher::new(&cfg.user_agent)?;

    let cancel = CancellationToken::new();
    let on_ctrl_c = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            on_ctrl_c.cancel();
        }
    });

    let summary = run_with_config(&cfg, &fetcher, &cancel)
        .await
        .with_context(|| format!("harvesting comments from {}", cfg.base))?;

    println!("{}", summary.closing_line(&cfg.output));
    Ok(())
}
