mod args;
mod config;
mod logging;
mod output;
mod seed;

use std::io::{self, IsTerminal};

use args::Cli;
use clap::Parser;
use config::{ConfigError, PwgenConfig};
use logging::{LoggingError, init_logging};
use pwgen_generate::{GenerateOptions, GenerationEngine, GenerationError};
use seed::SeedError;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
enum CliError {
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("logging error: {0}")]
    Logging(#[from] LoggingError),
    #[error("seed error: {0}")]
    Seed(#[from] SeedError),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("invalid arguments: {0}")]
    InvalidArgs(String),
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    init_logging(cli.verbosity(), cli.log_json.as_deref())?;

    let file_config = match &cli.config {
        Some(path) => {
            debug!(path = %path.display(), "loading config");
            PwgenConfig::load(path)?
        }
        None => PwgenConfig::default(),
    };
    let settings = cli.resolve(file_config, io::stdout().is_terminal())?;

    if cli.print_config {
        print!("{}", settings.to_config().to_toml()?);
        return Ok(());
    }

    if settings.count == Some(0) {
        return Err(CliError::InvalidArgs(
            "number of passwords must be positive".to_string(),
        ));
    }

    let engine = GenerationEngine::new(
        settings.policy.clone(),
        settings.mode,
        GenerateOptions {
            max_attempts: settings.max_attempts,
        },
    )?;

    let columns = if settings.columns {
        output::column_count(output::terminal_width(), settings.policy.length)
    } else {
        1
    };
    let count = settings
        .count
        .unwrap_or_else(|| output::default_count(settings.columns.then_some(columns)));

    info!(
        mode = ?settings.mode,
        count,
        columns,
        reproducible = settings.seed.is_reproducible(),
        "starting pwgen"
    );

    let mut source = settings.seed.open()?;
    let result = engine.run(count, &mut source)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    output::write_passwords(&mut out, &result.passwords, columns)?;

    if cli.report {
        eprintln!("{}", serde_json::to_string_pretty(&result.totals)?);
    }

    Ok(())
}
