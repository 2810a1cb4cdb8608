//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--config <path>`: Configuration file location
//! - `--debug`: Enable debug logging

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Todoview - browse git-tracked documents and their revision history
#[derive(Parser, Debug)]
#[command(name = "todoview")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file listing the repositories to serve
    #[arg(long, global = true, default_value = "./config.json")]
    pub config: PathBuf,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP server
    Serve {
        /// Bind address, overriding the configured one
        #[arg(long)]
        listen: Option<String>,
    },

    /// List tracked files per repository
    Ls,

    /// Print one file's content
    Cat {
        /// Repository short name
        repo: String,
        /// File name at the repository's top level
        path: String,
        /// Commit id to read at instead of the tip
        #[arg(long)]
        at: Option<String>,
    },

    /// Print a file's revision history
    Log {
        /// Repository short name
        repo: String,
        /// File name at the repository's top level
        path: String,
    },
}
