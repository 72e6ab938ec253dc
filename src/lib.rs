pub mod config;

pub mod handlers {
    mod relay;
    pub use relay::relay_handler;
    mod ping;
    pub use ping::ping_handler;
}

pub mod models {
    pub mod error;
    pub use error::RelayError;

    pub mod message;
    pub use message::Message;

    pub mod result;
    pub use result::RelayResult;

    pub mod submission;
    pub use submission::Submission;
}

pub mod services {
    pub mod render;
    pub mod telegram;
}

use axum::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
};
use axum::http::HeaderValue;
use axum::routing::{get, Router};
use color_eyre::eyre::Result;
use crate::config::{Application, Credentials};
use handlers::{ping_handler, relay_handler};
use tokio::signal;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_error::ErrorLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};
use tracing_tree::HierarchicalLayer;

#[tracing::instrument]
#[allow(clippy::expect_used, clippy::redundant_pub_crate)]
pub async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
        info!("Ctrl-C received");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
        info!("Signal is received");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Starting graceful shutdown");
}

#[derive(Clone, Debug)]
pub struct AppState {
    pub credentials: Credentials,
    pub api_url: String,
    pub reqwest_client: reqwest::Client,
}

#[allow(clippy::missing_errors_doc)]
pub fn setup_tracing(debug: bool) -> Result<()> {
    let default_level = if debug { "debug" } else { "info" };
    let env_filter = EnvFilter::try_from_default_env()
        .map_or_else(|_| EnvFilter::new(default_level), |env_filter| env_filter);

    Registry::default()
        .with(env_filter)
        .with(
            HierarchicalLayer::new(2)
                .with_targets(true)
                .with_bracketed_fields(true),
        )
        .with(ErrorLayer::default())
        .try_init()?;

    info!("Initialized tracing and logging systems");

    Ok(())
}

#[tracing::instrument]
#[allow(clippy::missing_errors_doc)]
pub fn setup_app(settings: &Application) -> Result<Router> {
    let reqwest_client = reqwest::Client::builder().build()?;
    info!("Created reqwest client");

    let state = AppState {
        credentials: settings.credentials.clone(),
        api_url: settings.base.api_url.trim_end_matches('/').to_string(),
        reqwest_client,
    };

    Ok(Router::new()
        .route("/ping", get(ping_handler))
        .fallback(relay_handler)
        .layer(TraceLayer::new_for_http().on_failure(()))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("POST, OPTIONS"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type"),
        ))
        .with_state(state))
}
