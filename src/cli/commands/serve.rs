//! serve command - Run the HTTP server

use std::sync::Arc;

use anyhow::{Context as _, Result};

use crate::browse::Browser;
use crate::server;

/// Run the HTTP server until interrupted.
pub fn serve(browser: Browser, listen: &str) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new().context("cannot start async runtime")?;

    runtime.block_on(server::serve(Arc::new(browser), listen))
}
