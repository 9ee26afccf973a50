//! Web router using Axum
//!
//! Serves the built SPA under locale-prefixed paths and redirects everything else
//! under the default locale. An unsupported first segment is kept (`/fr/course` goes
//! to `/en/fr/course`); once the SPA loads, the navbar settles the locale prefix
//! against the visitor's stored preference.

use axum::{
    extract::State,
    http::Uri,
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Json, Router,
};
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use wayfinder_core::{locale_segment, Locale, SiteConfig};

/// Shared state for all handlers
#[derive(Debug, Clone)]
pub struct ServerState {
    pub config: SiteConfig,
    /// Trunk output directory, built with `public_url = "/static/"`
    pub dist_dir: PathBuf,
}

impl ServerState {
    pub fn new(config: SiteConfig, dist_dir: impl Into<PathBuf>) -> Self {
        Self {
            config,
            dist_dir: dist_dir.into(),
        }
    }
}

/// Create the web router
pub fn create_router(state: ServerState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let assets = ServeDir::new(&state.dist_dir);

    Router::new()
        .route("/", get(root_handler))
        .route("/api/health", get(health_handler))
        .route("/api/locales", get(locales_handler))
        .route("/{lang}", get(localized_handler))
        .route("/{lang}/", get(localized_handler))
        .route("/{lang}/{*rest}", get(localized_handler))
        .nest_service("/static", assets)
        .layer(cors)
        .with_state(Arc::new(state))
}

async fn root_handler(State(state): State<Arc<ServerState>>) -> Redirect {
    Redirect::temporary(&format!("/{}", state.config.default_locale))
}

/// Locale-prefixed paths get the SPA; anything else is redirected under the default locale
async fn localized_handler(State(state): State<Arc<ServerState>>, uri: Uri) -> Response {
    let path = uri.path();
    if locale_segment(path).parse::<Locale>().is_ok() {
        return index_html(&state).await.into_response();
    }

    let mut target = format!(
        "/{}/{}",
        state.config.default_locale,
        path.trim_start_matches('/')
    );
    if let Some(query) = uri.query() {
        target.push('?');
        target.push_str(query);
    }
    tracing::debug!(from = %path, to = %target, "Redirecting to default locale");
    Redirect::temporary(&target).into_response()
}

async fn index_html(state: &ServerState) -> Html<String> {
    let index = state.dist_dir.join("index.html");
    match tokio::fs::read_to_string(&index).await {
        Ok(html) => Html(html),
        Err(e) => {
            tracing::warn!(path = %index.display(), error = %e, "Frontend not built, serving placeholder");
            Html(BUILD_PLACEHOLDER.to_string())
        }
    }
}

async fn health_handler(State(state): State<Arc<ServerState>>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "locales": Locale::ALL.iter().map(Locale::code).collect::<Vec<_>>(),
        "default_locale": state.config.default_locale,
    }))
}

async fn locales_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!(Locale::ALL
        .iter()
        .map(|locale| serde_json::json!({
            "code": locale.code(),
            "label": locale.label(),
        }))
        .collect::<Vec<_>>()))
}

const BUILD_PLACEHOLDER: &str = r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>wayfinder - Build Required</title>
    <style>
        body {
            font-family: system-ui, -apple-system, sans-serif;
            background: #f5f5f5;
            display: flex;
            justify-content: center;
            align-items: center;
            height: 100vh;
            margin: 0;
        }
        .setup-message {
            max-width: 600px;
            background: white;
            padding: 2rem;
            border-radius: 8px;
            box-shadow: 0 2px 8px rgba(0,0,0,0.1);
        }
        code {
            background: #f0f0f0;
            padding: 0.25rem 0.5rem;
            border-radius: 4px;
        }
    </style>
</head>
<body>
    <div class="setup-message">
        <h1>wayfinder - Build Required</h1>
        <p>The Leptos WASM frontend needs to be compiled before the site can be displayed.</p>
        <ol>
            <li>Install Trunk: <code>cargo install trunk</code></li>
            <li>Add WASM target: <code>rustup target add wasm32-unknown-unknown</code></li>
            <li>Build frontend: <code>cd crates/wayfinder-web && trunk build --release</code></li>
            <li>Restart server: <code>wayfinder serve</code></li>
        </ol>
        <p>API: <a href="/api/health">/api/health</a>, <a href="/api/locales">/api/locales</a></p>
    </div>
</body>
</html>"#;
