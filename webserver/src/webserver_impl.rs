//! Main webserver implementation
//!
//! The WebServer owns the planner with its injected services and exposes it
//! through an axum router. Anything outside `/planer` is served from the
//! static UI directory.

use std::future::Future;
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use planner::{ExportArchive, Planner, ScheduleStore};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use tracing::info;

use crate::error::{WebServerError, WebServerResult};
use crate::state::WebServerState;
use crate::web::handlers::api;
use crate::web::ApiState;

/// Main webserver struct with dependency injection
pub struct WebServer<S, A>
where
    S: ScheduleStore,
    A: ExportArchive,
{
    state: Arc<WebServerState>,
    planner: Planner<S, A>,
}

impl<S, A> WebServer<S, A>
where
    S: ScheduleStore + 'static,
    A: ExportArchive + 'static,
{
    pub fn new(state: WebServerState, planner: Planner<S, A>) -> Self {
        Self {
            state: Arc::new(state),
            planner,
        }
    }

    /// Build the Axum router with all routes
    pub fn build_router(&self) -> Router {
        let api_state = ApiState {
            planner: self.planner.clone(),
            server: Arc::clone(&self.state),
        };

        Router::new()
            .route("/planer/generate", post(api::generate::<S, A>))
            .route("/planer/pairings", get(api::pairings::<S, A>))
            .route("/planer/player-usage", get(api::player_usage::<S, A>))
            .route("/planer/statistics", get(api::statistics::<S, A>))
            .route("/planer/pairing-history", get(api::pairing_history::<S, A>))
            .route("/planer/download", get(api::download::<S, A>))
            .route("/planer/health", get(api::health::<S, A>))
            // Browser UI
            .fallback_service(ServeDir::new(&self.state.static_dir))
            .layer(
                ServiceBuilder::new()
                    .layer(TraceLayer::new_for_http())
                    .layer(CorsLayer::permissive())
                    .into_inner(),
            )
            .with_state(api_state)
    }

    /// Serve until `shutdown` resolves
    pub async fn run<F>(&self, shutdown: F) -> WebServerResult<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let router = self.build_router();
        let bind_address = self.state.bind_address;

        let listener = tokio::net::TcpListener::bind(bind_address)
            .await
            .map_err(|e| WebServerError::ServerStartup(format!("Failed to bind to {}: {}", bind_address, e)))?;
        let local_addr = listener.local_addr()?;

        info!("🌐 Web server listening on http://{}", local_addr);
        info!("📋 Planner UI available at http://{}/", local_addr);

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| WebServerError::ServerStartup(format!("Server error: {}", e)))?;

        Ok(())
    }
}
