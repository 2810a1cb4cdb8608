//! cli
//!
//! Command-line interface layer.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Load configuration and build the repository registry (fail-fast)
//! - Delegate to command handlers
//!
//! # Architecture
//!
//! The CLI layer is thin. It parses arguments via clap and dispatches to
//! the [`crate::browse`] facade; no browsing logic lives here.

pub mod args;
pub mod commands;

pub use args::{Cli, Command};

use anyhow::{Context as _, Result};
use tracing_subscriber::EnvFilter;

use crate::browse::{Browser, Registry};
use crate::config::Config;

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();

    init_tracing(cli.debug);

    let config = Config::load(&cli.config)
        .with_context(|| format!("cannot load configuration from {}", cli.config.display()))?;

    // Fail-fast: a configured repository that cannot be opened aborts here.
    let registry = Registry::open(&config).context("cannot open configured repositories")?;
    let browser = Browser::new(registry);

    commands::dispatch(cli.command, browser, &config)
}

fn init_tracing(debug: bool) {
    let default = if debug { "todoview=debug,info" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
