//! ls command - List tracked files per repository

use anyhow::Result;

use crate::browse::Browser;

/// Print every repository and its tracked files at the tip.
pub fn ls(browser: &Browser) -> Result<()> {
    for listing in browser.browse_index() {
        println!("{}:", listing.name);
        for path in &listing.paths {
            println!("  {}", path);
        }
    }

    Ok(())
}
