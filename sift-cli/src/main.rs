use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use dotenv::dotenv;
use sift_cli::{render, CliConfig};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .try_init();
}

// Usage:
//   sift 'hello tag:a,b author:"jane doe"'
//   printf 'q1\nq2\n' | sift
// Config via env: SIFT_ALLOWED, SIFT_CUT, SIFT_OUTPUT, RUST_LOG
fn main() -> Result<()> {
    dotenv().ok();
    init_tracing();

    let cfg = CliConfig::from_env().context("invalid SIFT_* configuration")?;
    let options = cfg.parser.options();
    tracing::debug!(target: "sift_cli", "options: {options:?}, output: {}", cfg.output);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if !args.is_empty() {
        writeln!(out, "{}", render(&args.join(" "), &options, cfg.output)?)?;
        return Ok(());
    }

    for line in io::stdin().lock().lines() {
        let line = line.context("failed to read query from stdin")?;
        writeln!(out, "{}", render(&line, &options, cfg.output)?)?;
    }
    Ok(())
}
