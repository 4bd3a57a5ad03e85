//! REST API route definitions.

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::web::handlers::{form, players, sessions};
use crate::web::state::WebAppState;

/// Build the API router with all REST endpoints.
pub fn api_routes() -> Router<WebAppState> {
    Router::new()
        .route("/form", get(form::get_form))
        // Session routes
        .route("/sessions", get(sessions::list_sessions))
        .route("/sessions", post(sessions::create_session))
        .route("/sessions/{id}", get(sessions::get_session))
        .route("/sessions/{id}", delete(sessions::close_session))
        // Player table routes
        .route("/sessions/{id}/players", get(players::list_players))
        .route("/sessions/{id}/players", post(players::generate_player))
        .route("/sessions/{id}/export", get(players::export_players))
        .route("/sessions/{id}/export/meta", get(players::export_meta))
}
