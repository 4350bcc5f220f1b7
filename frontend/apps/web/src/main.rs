//! Web Server Entry Point
//!
//! Serves the built client assets behind the edge redirect filter.
//! Uses `anyhow` for startup errors only.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use axum::Router;
use axum::middleware::from_fn_with_state;
use axum::routing::get;
use session::domain::SessionSignal;
use session::{EdgeState, SessionConfig, edge_redirect};
use tokio::net::TcpListener;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Settings read from the environment at startup
#[derive(Debug, Clone)]
struct WebConfig {
    bind_addr: SocketAddr,
    static_dir: PathBuf,
    session: SessionConfig,
}

impl WebConfig {
    fn from_env() -> anyhow::Result<Self> {
        let bind_addr = env::var("WEB_BIND_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:3000".to_string())
            .parse()?;
        let static_dir = env::var("WEB_STATIC_DIR").unwrap_or_else(|_| "dist".to_string());

        let mut session = SessionConfig::default();
        if let Ok(name) = env::var("SESSION_COOKIE_NAME") {
            session.session_cookie_name = name;
        }
        if env::var("EDGE_VERIFY_TOKEN_EXPIRY").is_ok_and(|v| matches!(v.as_str(), "1" | "true")) {
            session.session_signal = SessionSignal::UnexpiredToken;
        }

        Ok(Self {
            bind_addr,
            static_dir: PathBuf::from(static_dir),
            session,
        })
    }
}

/// Client shell with an `index.html` fallback for client-side routes
fn app(config: &WebConfig) -> Router {
    let index = ServeFile::new(config.static_dir.join("index.html"));
    let assets = ServeDir::new(&config.static_dir).not_found_service(index);

    Router::new()
        .route("/healthz", get(|| async { "ok" }))
        .fallback_service(assets)
        .layer(from_fn_with_state(
            EdgeState::new(&config.session),
            edge_redirect,
        ))
        .layer(TraceLayer::new_for_http())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "web=info,session=info,stay=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = WebConfig::from_env()?;
    tracing::info!(
        static_dir = %config.static_dir.display(),
        session_cookie = %config.session.session_cookie_name,
        signal = ?config.session.session_signal,
        "Configuration loaded"
    );

    let app = app(&config);

    tracing::info!("Listening on {}", config.bind_addr);
    let listener = TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
