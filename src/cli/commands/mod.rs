//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Validates command-specific arguments
//! 2. Calls the browse facade
//! 3. Formats and displays output
//!
//! `serve` is the only async command; dispatch builds a tokio runtime for
//! it and stays synchronous otherwise.

mod cat;
mod log_cmd;
mod ls;
mod serve;

pub use cat::cat;
pub use log_cmd::log;
pub use ls::ls;
pub use serve::serve;

use anyhow::Result;

use crate::browse::Browser;
use crate::config::Config;

use super::args::Command;

/// Dispatch a parsed command to its handler.
pub fn dispatch(command: Command, browser: Browser, config: &Config) -> Result<()> {
    match command {
        Command::Serve { listen } => {
            let listen = listen.unwrap_or_else(|| config.listen.clone());
            serve(browser, &listen)
        }
        Command::Ls => ls(&browser),
        Command::Cat { repo, path, at } => cat(&browser, &repo, &path, at.as_deref()),
        Command::Log { repo, path } => log(&browser, &repo, &path),
    }
}
