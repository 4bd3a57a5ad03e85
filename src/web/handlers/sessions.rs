//! Session handlers for the transfer-desk web API.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::session::SessionSummary;
use crate::web::error::WebError;
use crate::web::state::WebAppState;

/// Response for a single session.
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub id: Uuid,
    pub created_at: String,
    pub records: usize,
}

impl From<SessionSummary> for SessionResponse {
    fn from(summary: SessionSummary) -> Self {
        Self {
            id: summary.id,
            created_at: summary.created_at.to_rfc3339(),
            records: summary.records,
        }
    }
}

/// Response for listing sessions.
#[derive(Debug, Serialize)]
pub struct ListSessionsResponse {
    pub sessions: Vec<SessionResponse>,
}

/// List all open sessions.
pub async fn list_sessions(State(state): State<WebAppState>) -> Json<ListSessionsResponse> {
    Json(ListSessionsResponse {
        sessions: state
            .registry()
            .list()
            .into_iter()
            .map(SessionResponse::from)
            .collect(),
    })
}

/// Open a new session with an empty table.
pub async fn create_session(
    State(state): State<WebAppState>,
) -> Result<(StatusCode, Json<SessionResponse>), WebError> {
    let summary = state.registry().create()?;
    Ok((StatusCode::CREATED, Json(SessionResponse::from(summary))))
}

/// Get a single session by ID.
pub async fn get_session(
    State(state): State<WebAppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionResponse>, WebError> {
    let summary = state.registry().summary(id)?;
    Ok(Json(SessionResponse::from(summary)))
}

/// Close a session, discarding its records.
pub async fn close_session(
    State(state): State<WebAppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, WebError> {
    state.registry().close(id)?;
    Ok(StatusCode::NO_CONTENT)
}
