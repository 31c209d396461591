//! Application startup and lifecycle management.

use crate::config::ContentConfig;
use crate::handlers;
use crate::middleware::metrics_middleware;
use crate::services::providers::{GeminiProvider, GenerativeProvider};
use crate::services::{TitleGenerator, Transcriber};
use axum::{
    extract::DefaultBodyLimit,
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use service_core::middleware::{
    http_trace_layer, request_id_middleware, security_headers_middleware,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::CorsLayer;

/// Room for multipart boundaries and headers on top of the file itself.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: ContentConfig,
    pub provider: Arc<dyn GenerativeProvider>,
    pub title_generator: TitleGenerator,
    pub transcriber: Transcriber,
}

impl AppState {
    pub fn new(config: ContentConfig, provider: Arc<dyn GenerativeProvider>) -> Self {
        Self {
            title_generator: TitleGenerator::new(provider.clone()),
            transcriber: Transcriber::new(provider.clone()),
            provider,
            config,
        }
    }
}

/// Build the HTTP router.
pub fn router(state: AppState) -> Router {
    let upload_limit = state.config.transcription.max_upload_bytes + MULTIPART_OVERHEAD_BYTES;

    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health_check))
        .route("/ready", get(handlers::readiness_check))
        .route("/metrics", get(handlers::metrics))
        .route("/api/v1/suggest-titles", post(handlers::suggest_titles))
        .route(
            "/api/v1/transcribe",
            post(handlers::transcribe).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .with_state(state)
        .layer(from_fn(metrics_middleware))
        .layer(http_trace_layer())
        .layer(from_fn(request_id_middleware))
        .layer(from_fn(security_headers_middleware))
        .layer(CorsLayer::permissive())
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the application with the Gemini provider.
    ///
    /// Fails before binding anything if the provider cannot be configured.
    pub async fn build(config: ContentConfig) -> Result<Self, AppError> {
        let provider = GeminiProvider::new(config.gemini_config()).map_err(|e| {
            tracing::error!("Failed to initialize Gemini provider: {}", e);
            AppError::ConfigError(anyhow::anyhow!(e))
        })?;

        tracing::info!(
            model = %config.gemini.model,
            "Initialized Gemini provider"
        );

        Self::build_with_provider(config, Arc::new(provider)).await
    }

    /// Build the application around an existing provider.
    pub async fn build_with_provider(
        config: ContentConfig,
        provider: Arc<dyn GenerativeProvider>,
    ) -> Result<Self, AppError> {
        // Port 0 = random port for testing
        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind HTTP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Content service: HTTP on port {}", port);

        Ok(Self {
            port,
            listener,
            state: AppState::new(config, provider),
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the application until a shutdown signal arrives.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        axum::serve(self.listener, router(self.state))
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
