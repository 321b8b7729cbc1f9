//! CLI binary for photoview.
//!
//! A thin shim over the library crate that maps CLI flags to
//! `GalleryConfig` and runs the server.

use anyhow::{Context, Result};
use clap::Parser;
use photoview::{serve, GalleryConfig, DEFAULT_SOURCE_URL};
use std::net::{IpAddr, SocketAddr};
use tracing_subscriber::EnvFilter;

const AFTER_HELP: &str = r#"EXAMPLES:
  # Serve the default gallery on port 8080
  photoview

  # Serve a different image list
  photoview --source-url https://example.com/images.csv

  # Bind a specific address and port
  photoview --host 127.0.0.1 --port 3000

  # Larger pages, shorter upstream timeout
  photoview --page-size 12 --fetch-timeout 10

API:
  GET /api/v1/images
    paged=N                zero-based page index (default 0)
    toggle-grayscale=true  flip the ?grayscale flag on the returned page
    filter-dimensions=W,H  keep only images of this size; -1 = any

ENVIRONMENT VARIABLES:
  PHOTOVIEW_SOURCE_URL     Override the upstream image-list URL
  PHOTOVIEW_PORT           Override the listen port
  RUST_LOG                 Tracing filter (overrides -v/-q)
"#;

/// Serve paginated, filterable image lists from a remote CSV source.
#[derive(Parser, Debug)]
#[command(
    name = "photoview",
    version,
    about = "Serve paginated, filterable image lists from a remote CSV source",
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Upstream image-list URL (CRLF-separated, one URL per line).
    #[arg(long, env = "PHOTOVIEW_SOURCE_URL", default_value = DEFAULT_SOURCE_URL)]
    source_url: String,

    /// Address to listen on.
    #[arg(long, env = "PHOTOVIEW_HOST", default_value = "0.0.0.0")]
    host: IpAddr,

    /// Port to listen on.
    #[arg(short, long, env = "PHOTOVIEW_PORT", default_value_t = 8080)]
    port: u16,

    /// Image URLs per page.
    #[arg(long, env = "PHOTOVIEW_PAGE_SIZE", default_value_t = 6)]
    page_size: usize,

    /// Upstream fetch timeout in seconds.
    #[arg(long, env = "PHOTOVIEW_FETCH_TIMEOUT", default_value_t = 30)]
    fetch_timeout: u64,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, env = "PHOTOVIEW_VERBOSE")]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long, env = "PHOTOVIEW_QUIET")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    let filter = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .init();

    // ── Build config ─────────────────────────────────────────────────────
    let config = GalleryConfig::builder()
        .source_url(cli.source_url)
        .page_size(cli.page_size)
        .fetch_timeout_secs(cli.fetch_timeout)
        .build()
        .context("Invalid configuration")?;

    // ── Run server ───────────────────────────────────────────────────────
    let addr = SocketAddr::new(cli.host, cli.port);
    serve(config, addr).await.context("Server failed")?;

    Ok(())
}
