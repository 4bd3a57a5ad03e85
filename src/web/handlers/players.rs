//! Player table handlers: generate, display and download.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::form::PlayerForm;
use crate::record::{Download, PlayerRecord, COLUMNS};
use crate::session::Effect;
use crate::web::error::WebError;
use crate::web::state::WebAppState;

/// The table as the display surface receives it.
#[derive(Debug, Serialize)]
pub struct TableResponse {
    pub columns: [&'static str; 10],
    pub records: Vec<PlayerRecord>,
}

impl TableResponse {
    fn new(records: Vec<PlayerRecord>) -> Self {
        Self {
            columns: COLUMNS,
            records,
        }
    }
}

/// Download descriptor without the payload.
#[derive(Debug, Serialize)]
pub struct DownloadMetaResponse {
    pub label: String,
    pub mime: &'static str,
    pub filename: String,
    pub size: usize,
}

impl From<&Download> for DownloadMetaResponse {
    fn from(download: &Download) -> Self {
        Self {
            label: download.label.clone(),
            mime: download.mime,
            filename: download.filename.clone(),
            size: download.size(),
        }
    }
}

/// Carry out an action's effect as an HTTP response.
fn effect_response(effect: Effect, status: StatusCode) -> Result<Response, WebError> {
    match effect {
        Effect::ShowTable(records) => Ok((status, Json(TableResponse::new(records))).into_response()),
        Effect::Download(download) => {
            let content_type = HeaderValue::from_str(&format!("{}; charset=utf-8", download.mime))
                .map_err(|e| WebError::Internal(format!("Invalid content type: {}", e)))?;
            let disposition =
                HeaderValue::from_str(&format!("attachment; filename=\"{}\"", download.filename))
                    .map_err(|e| WebError::Internal(format!("Invalid filename: {}", e)))?;

            Ok((
                status,
                [
                    (header::CONTENT_TYPE, content_type),
                    (header::CONTENT_DISPOSITION, disposition),
                ],
                download.payload,
            )
                .into_response())
        }
    }
}

/// Show the session's table.
pub async fn list_players(
    State(state): State<WebAppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<TableResponse>, WebError> {
    let records = state.registry().records(id)?;
    Ok(Json(TableResponse::new(records)))
}

/// Validate a submitted form, append the record and return the updated table.
pub async fn generate_player(
    State(state): State<WebAppState>,
    Path(id): Path<Uuid>,
    form: Result<Json<PlayerForm>, JsonRejection>,
) -> Result<Response, WebError> {
    state.registry().summary(id)?;

    let Json(form) = form?;
    let values = form.validate().inspect_err(|e| {
        tracing::debug!(session_id = %id, error = %e, "Rejected player form");
    })?;
    let effect = state.registry().generate(id, values)?;
    effect_response(effect, StatusCode::CREATED)
}

/// Download the session's table as CSV.
pub async fn export_players(
    State(state): State<WebAppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let effect = state.registry().export(id, state.export_settings())?;
    effect_response(effect, StatusCode::OK)
}

/// Describe the download (label, type, filename, size) without sending it.
pub async fn export_meta(
    State(state): State<WebAppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DownloadMetaResponse>, WebError> {
    match state.registry().export(id, state.export_settings())? {
        Effect::Download(download) => Ok(Json(DownloadMetaResponse::from(&download))),
        Effect::ShowTable(_) => Err(WebError::Internal(
            "Export produced a table instead of a download".to_string(),
        )),
    }
}
