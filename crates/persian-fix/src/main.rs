//! persian-fix - Main Entry Point

mod cli;
mod config;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, LogLevelArg};
use config::AppConfig;
use persian_text::{PersianFixer, TextStats};
use std::fs;
use std::io::{self, Read, Write};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level);

    let config = AppConfig::resolve(&cli)?;
    let mut fixer = PersianFixer::with_config(config.fixer);

    let stdout = io::stdout();
    let stderr = io::stderr();
    let mut out = stdout.lock();
    let mut err = stderr.lock();

    if cli.files.is_empty() {
        let mut input = String::new();
        io::stdin()
            .read_to_string(&mut input)
            .context("Failed to read stdin")?;
        process(&mut fixer, &input, cli.stats, &mut out, &mut err)?;
    } else {
        for path in &cli.files {
            tracing::debug!("Fixing {}", path.display());
            let input = fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            process(&mut fixer, &input, cli.stats, &mut out, &mut err)
                .with_context(|| format!("Failed to fix {}", path.display()))?;
        }
    }

    out.flush()?;
    Ok(())
}

/// Initialize logging to stderr; stdout carries the fixed text only
fn init_logging(level: Option<LogLevelArg>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level.as_directive()),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Fix one input, writing the result to `out` and optional stats to `err`
fn process(
    fixer: &mut PersianFixer,
    input: &str,
    stats: bool,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<()> {
    let fixed = fixer.fix(input)?;
    out.write_all(fixed.as_bytes())?;

    if stats {
        writeln!(err, "{}", TextStats::of(input))?;
    }

    Ok(())
}
