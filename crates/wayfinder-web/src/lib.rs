//! wayfinder-web - Localized site shell and navbar using Leptos + Axum

#![recursion_limit = "1024"]

pub mod app;
pub mod components;
pub mod i18n;
pub mod pages;
pub mod storage;
pub mod viewport;

#[cfg(feature = "ssr")]
pub mod router;

pub use app::App;
pub use i18n::{use_i18n, I18nContext, I18nProvider};

#[cfg(feature = "ssr")]
pub use router::{create_router, ServerState};

#[cfg(feature = "ssr")]
use std::net::SocketAddr;

/// Run the web server
#[cfg(feature = "ssr")]
pub async fn run(state: ServerState, addr: SocketAddr) -> anyhow::Result<()> {
    use anyhow::Context;

    let router = create_router(state);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("Web server listening on http://{}", addr);

    axum::serve(listener, router)
        .await
        .context("Web server stopped unexpectedly")?;

    Ok(())
}
