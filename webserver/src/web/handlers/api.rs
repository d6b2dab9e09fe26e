//! REST API handlers
//!
//! Planner endpoints under `/planer`. Read routes answer 404 until the first
//! successful generation.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::{rejection::JsonRejection, State},
    http::{header, HeaderName, StatusCode},
    response::{Json, Response},
};
use planner::{ExportArchive, Planner, Round, Schedule, ScheduleStore};
use shared::{HealthStatus, PairingFrequency, PlayerUsageReport, ScheduleConfig, ScheduleStatistics};
use tracing::info;

use crate::error::{WebServerError, WebServerResult};
use crate::state::WebServerState;

/// Path of the server-side copy of a download
pub const SERVER_FILE_HEADER: HeaderName = HeaderName::from_static("x-server-file");

/// State handed to every handler
pub struct ApiState<S, A>
where
    S: ScheduleStore,
    A: ExportArchive,
{
    pub planner: Planner<S, A>,
    pub server: Arc<WebServerState>,
}

impl<S, A> Clone for ApiState<S, A>
where
    S: ScheduleStore,
    A: ExportArchive,
{
    fn clone(&self) -> Self {
        Self {
            planner: self.planner.clone(),
            server: Arc::clone(&self.server),
        }
    }
}

/// Generate a new schedule - POST /planer/generate
pub async fn generate<S, A>(
    State(state): State<ApiState<S, A>>,
    payload: Result<Json<ScheduleConfig>, JsonRejection>,
) -> WebServerResult<Json<Schedule>>
where
    S: ScheduleStore + 'static,
    A: ExportArchive + 'static,
{
    let Json(request) = payload.map_err(|e| WebServerError::invalid_request(e.body_text()))?;
    info!(
        players = request.player_names.len(),
        rounds = request.number_of_rounds,
        "Generate requested"
    );

    let schedule = state.planner.generate(request).await?;
    Ok(Json(schedule))
}

/// Rounds of the live schedule - GET /planer/pairings
pub async fn pairings<S, A>(State(state): State<ApiState<S, A>>) -> WebServerResult<Json<Vec<Round>>>
where
    S: ScheduleStore + 'static,
    A: ExportArchive + 'static,
{
    Ok(Json(state.planner.pairings().await?))
}

/// Appearances and byes per player - GET /planer/player-usage
pub async fn player_usage<S, A>(
    State(state): State<ApiState<S, A>>,
) -> WebServerResult<Json<PlayerUsageReport>>
where
    S: ScheduleStore + 'static,
    A: ExportArchive + 'static,
{
    Ok(Json(state.planner.player_usage().await?))
}

/// Fairness metrics - GET /planer/statistics
pub async fn statistics<S, A>(
    State(state): State<ApiState<S, A>>,
) -> WebServerResult<Json<ScheduleStatistics>>
where
    S: ScheduleStore + 'static,
    A: ExportArchive + 'static,
{
    Ok(Json(state.planner.statistics().await?))
}

/// Pair frequencies, most frequent first - GET /planer/pairing-history
pub async fn pairing_history<S, A>(
    State(state): State<ApiState<S, A>>,
) -> WebServerResult<Json<Vec<PairingFrequency>>>
where
    S: ScheduleStore + 'static,
    A: ExportArchive + 'static,
{
    Ok(Json(state.planner.pairing_history().await?))
}

/// CSV attachment of the live schedule - GET /planer/download
pub async fn download<S, A>(State(state): State<ApiState<S, A>>) -> WebServerResult<Response>
where
    S: ScheduleStore + 'static,
    A: ExportArchive + 'static,
{
    let file = state.planner.export().await?;

    let mut builder = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, file.content_type)
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", file.filename),
        );
    if let Some(path) = &file.archived_path {
        builder = builder.header(SERVER_FILE_HEADER, path.display().to_string());
    }

    builder
        .body(Body::from(file.content))
        .map_err(|e| WebServerError::ResponseError(e.to_string()))
}

/// Liveness probe - GET /planer/health
pub async fn health<S, A>(State(state): State<ApiState<S, A>>) -> Json<HealthStatus>
where
    S: ScheduleStore + 'static,
    A: ExportArchive + 'static,
{
    Json(HealthStatus::ok(
        state.server.get_uptime_seconds(),
        env!("CARGO_PKG_VERSION"),
    ))
}
