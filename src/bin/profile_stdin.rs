//! Reads HTML bytes from stdin and prints the content profile as JSON.
//!
//! Usage: `profile_stdin [URL] < page.html`
//!
//! Diagnostics go to stderr; set `RUST_LOG=content_profile=debug` to see the
//! pipeline stages.

use std::io::{self, Read};

use content_profile::extract_bytes;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let url = std::env::args().nth(1);

    let mut html = Vec::new();
    if let Err(err) = io::stdin().read_to_end(&mut html) {
        tracing::error!(error = %err, "failed to read stdin");
        std::process::exit(1);
    }

    let profile = extract_bytes(&html, url.as_deref());

    match serde_json::to_string_pretty(&profile) {
        Ok(json) => println!("{json}"),
        Err(err) => {
            tracing::error!(error = %err, "failed to serialize profile");
            std::process::exit(1);
        }
    }
}
