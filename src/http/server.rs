//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with all room handlers
//! - Wire up middleware (request id, tracing, metrics, timeout, body limit)
//! - Bind server to listener
//! - Graceful shutdown driven by `lifecycle::Shutdown`

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{limit::RequestBodyLimitLayer, timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::ServiceConfig;
use crate::http::handlers::{
    delete_room_by_id, edit_room_by_id, get_room_by_id, get_rooms, health, post_rooms,
    reserve_room, upload_room_image,
};
use crate::http::middleware::track_metrics;
use crate::http::request::{make_request_span, propagate_request_id_layer, set_request_id_layer};
use crate::inventory::RoomStore;
use crate::uploads::UploadStore;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RoomStore>,
    pub uploads: Arc<UploadStore>,
}

impl AppState {
    /// Build state from configuration.
    pub fn from_config(config: &ServiceConfig) -> Self {
        let store = if config.inventory.seed {
            RoomStore::seeded()
        } else {
            RoomStore::new()
        };

        Self {
            store: Arc::new(store),
            uploads: Arc::new(UploadStore::new(&config.uploads.directory)),
        }
    }
}

/// HTTP server for the room inventory.
pub struct HttpServer {
    router: Router,
    config: ServiceConfig,
    state: AppState,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ServiceConfig) -> Self {
        let state = AppState::from_config(&config);
        Self::with_state(config, state)
    }

    /// Create a server around existing state.
    pub fn with_state(config: ServiceConfig, state: AppState) -> Self {
        let router = Self::build_router(&config, state.clone());
        Self {
            router,
            config,
            state,
        }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &ServiceConfig, state: AppState) -> Router {
        Router::new()
            .route("/health", get(health))
            .route("/rooms", get(get_rooms).post(post_rooms))
            .route(
                "/rooms/{id}",
                get(get_room_by_id)
                    .put(edit_room_by_id)
                    .delete(delete_room_by_id),
            )
            .route("/reserve/{id}", post(reserve_room))
            .route("/uploads-room", post(upload_room_image))
            .with_state(state)
            .layer(DefaultBodyLimit::disable())
            .layer(
                ServiceBuilder::new()
                    .layer(set_request_id_layer())
                    .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
                    .layer(propagate_request_id_layer())
                    .layer(middleware::from_fn(track_metrics))
                    .layer(RequestBodyLimitLayer::new(config.uploads.max_body_size))
                    .layer(TimeoutLayer::new(Duration::from_secs(
                        config.timeouts.request_secs,
                    ))),
            )
    }

    /// Router with state and middleware applied.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Shared state the handlers operate on.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Run the server, accepting connections on the given listener until a
    /// message arrives on `shutdown`.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            rooms = self.state.store.len(),
            upload_dir = ?self.state.uploads.directory(),
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal(shutdown))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }
}

/// Wait for the shutdown broadcast. A closed channel counts as shutdown.
async fn shutdown_signal(mut shutdown: broadcast::Receiver<()>) {
    let _ = shutdown.recv().await;
    tracing::info!("Shutdown signal received");
}
