//! server::render
//!
//! Display formatting for the HTTP layer: the HTML index view and the
//! markdown transformer. Content transformation happens only here; the
//! core always hands out raw bytes.

use pulldown_cmark::{html, Options, Parser};

use crate::browse::RepoListing;

/// Whether a file should be rendered as markdown for display.
pub fn is_markdown(path: &str) -> bool {
    let lower = path.to_ascii_lowercase();
    lower.ends_with(".md") || lower.ends_with(".markdown")
}

/// Render markdown source to an HTML fragment.
pub fn render_markdown(source: &str) -> String {
    let parser = Parser::new_ext(source, Options::empty());
    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

/// Render the index page: every repository with links to its tracked
/// files.
pub fn index_page(listings: &[RepoListing]) -> String {
    let mut out = String::from("<h1>Tracked files</h1>\n");

    for listing in listings {
        out.push_str(&format!("<h3>{}</h3>\n<ul>\n", escape(listing.name.as_str())));
        for path in &listing.paths {
            out.push_str(&format!(
                "<li><a href=\"/repo/{repo}/file/{path}\">{path}</a></li>\n",
                repo = escape(listing.name.as_str()),
                path = escape(path),
            ));
        }
        out.push_str("</ul>\n");
    }

    out
}

fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
