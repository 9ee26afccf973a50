//! wayfinder - Localized site server and catalog tooling

mod cli;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use wayfinder_core::{Locale, SiteConfig};
use wayfinder_web::ServerState;

#[derive(Parser)]
#[command(
    name = "wayfinder",
    version,
    about = "Localized site server with a locale-synchronizing navbar",
    long_about = "Serves the wayfinder Leptos frontend under locale-prefixed paths\n\
                  (/en/..., /ja/...) and redirects everything else to the default locale.\n\
                  \n\
                  Examples:\n\
                    wayfinder serve                      # Serve on 127.0.0.1:3000\n\
                    wayfinder serve --port 8080 --open   # Custom port, open browser\n\
                    wayfinder locales                    # List supported locales\n\
                    wayfinder translate navbar-about --locale ja\n\
                  \n\
                  Frontend:\n\
                    cd crates/wayfinder-web && trunk build --release\n\
                  \n\
                  Environment Variables:\n\
                    WAYFINDER_CONFIG                     # Path to wayfinder.toml\n\
                    WAYFINDER_DIST                       # Trunk output directory\n\
                    WAYFINDER_PORT                       # Server port\n\
                    RUST_LOG                             # Log filter (default: info)"
)]
struct Cli {
    #[command(subcommand)]
    mode: Mode,

    /// Path to site config (default: <config dir>/wayfinder/wayfinder.toml)
    #[arg(long, global = true, env = "WAYFINDER_CONFIG")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Mode {
    /// Run the web server
    Serve {
        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        host: IpAddr,
        /// Port for web server
        #[arg(long, default_value = "3000", env = "WAYFINDER_PORT")]
        port: u16,
        /// Trunk output directory
        #[arg(long, default_value = "crates/wayfinder-web/dist", env = "WAYFINDER_DIST")]
        dist: PathBuf,
        /// Open the site in the default browser
        #[arg(long)]
        open: bool,
    },
    /// List supported locales
    Locales {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print a message from the catalog
    Translate {
        /// Message id, e.g. navbar-about
        key: String,
        /// Locale code (en, ja)
        #[arg(long, short = 'l', default_value = "en")]
        locale: Locale,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let config_path = cli
        .config
        .or_else(|| dirs::config_dir().map(|d| d.join("wayfinder").join("wayfinder.toml")))
        .context("Could not determine config directory")?;

    match cli.mode {
        Mode::Serve {
            host,
            port,
            dist,
            open,
        } => {
            let config = SiteConfig::load(&config_path)
                .with_context(|| format!("Failed to load config from {}", config_path.display()))?;
            run_serve(config, SocketAddr::new(host, port), dist, open).await?;
        }
        Mode::Locales { json } => {
            cli::run_locales(json);
        }
        Mode::Translate { key, locale } => {
            cli::run_translate(&key, locale)?;
        }
    }

    Ok(())
}

async fn run_serve(config: SiteConfig, addr: SocketAddr, dist: PathBuf, open: bool) -> Result<()> {
    if !dist.join("index.html").exists() {
        tracing::warn!(
            dist = %dist.display(),
            "Frontend not built; run `trunk build --release` in crates/wayfinder-web"
        );
    }
    tracing::info!(
        default_locale = %config.default_locale,
        breakpoint_px = config.breakpoint_px,
        "Site config loaded"
    );

    if open {
        let url = format!("http://{}/{}", addr, config.default_locale);
        if let Err(e) = open::that(&url) {
            tracing::warn!("Failed to open browser at {}: {}", url, e);
        }
    }

    wayfinder_web::run(ServerState::new(config, dist), addr).await
}
