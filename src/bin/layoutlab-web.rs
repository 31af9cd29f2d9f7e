//! layoutlab preview server binary
//!
//! Serves rendered previews of the preset catalog, the design gallery and
//! the saved custom layouts to a browser.
//!
//! # Usage
//!
//! ```bash
//! # Port from the config file (default 3737)
//! layoutlab-web
//!
//! # Explicit port, with debug logging
//! layoutlab-web --port 8080 --verbose
//! ```

use std::net::SocketAddr;

use clap::Parser;
use tracing::warn;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use layoutlab::config::Config;
use layoutlab::web;

/// layoutlab preview server - rendered layouts over HTTP
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to listen on (defaults to `preview.port` from the config file)
    #[arg(short, long)]
    port: Option<u16>,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize tracing
    let filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            warn!("Using default configuration: {e:#}");
            Config::default()
        }
    };

    let port = args.port.unwrap_or(config.preview.port);
    let addr: SocketAddr = format!("{}:{}", args.host, port).parse()?;

    web::run_server(config, addr).await
}
