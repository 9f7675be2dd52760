//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use tracing::warn;

use crate::domain::StationId;
use crate::poller::BoardSnapshot;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/board", get(board))
        .route("/api/stations/search", get(search_stations))
        .route("/api/station", post(change_station))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// The latest published board.
async fn board(State(state): State<AppState>) -> Json<BoardSnapshot> {
    Json(BoardSnapshot::clone(&state.service.snapshot()))
}

/// Search stations by name or id.
async fn search_stations(
    State(state): State<AppState>,
    Query(req): Query<StationSearchRequest>,
) -> Json<StationSearchResponse> {
    let stations = state
        .service
        .search(&req.q)
        .into_iter()
        .map(StationResult::from)
        .collect();

    Json(StationSearchResponse { stations })
}

/// Switch the board to another station.
///
/// Responds once the change is queued; the new arrivals show up on the
/// board after the next fetch completes.
async fn change_station(
    State(state): State<AppState>,
    Json(req): Json<ChangeStationRequest>,
) -> Result<(StatusCode, Json<StationResult>), AppError> {
    let id = StationId::parse(&req.id).map_err(|e| AppError::BadRequest {
        message: format!("{e}: {:?}", req.id),
    })?;

    let name = match req.name.filter(|n| !n.trim().is_empty()) {
        Some(name) => name.trim().to_string(),
        None => state
            .service
            .station(&id)
            .map(|s| s.name.clone())
            .ok_or_else(|| AppError::NotFound {
                message: format!("unknown station: {id}"),
            })?,
    };

    state.service.change_station(id.clone(), name.clone());

    Ok((
        StatusCode::ACCEPTED,
        Json(StationResult {
            id: id.to_string(),
            name,
        }),
    ))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
        };

        warn!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
